//! The pull interface on top of a [`Producer`].
//!
//! A [`Generator`] owns exactly one producer, and resumes it only when its owner asks for the next item. It holds on to at most one produced item: the one that the most recent resumption yielded and that has not been pulled out yet.
//!
//! ```
//! use pullgen::prelude::*;
//!
//! let mut squares = Generator::from_iterator((1..).map(|n: u32| n * n));
//!
//! assert_eq!(squares.has_next(), Ok(true));
//! assert_eq!(squares.next(), Ok(1));
//! assert_eq!(squares.next(), Ok(4));
//! assert_eq!(squares.peek(), Ok(Some(&9)));
//! assert_eq!(squares.next(), Ok(9));
//! ```
//!
//! Dropping a generator drops its producer along with everything the producer holds on to; the producer is not resumed again. To stop consuming a sequence early, simply drop the generator.

use core::convert::Infallible;
use core::fmt::Debug;
use core::mem;

use either::{Either, Left, Right};
use wrapper::Wrapper;

use crate::producer::{FromFn, IteratorToProducer, Producer};
use crate::GeneratorError;

/// What a generator knows about the next item of its sequence.
enum Slot<T> {
    /// Nothing was produced since the last item was pulled, the producer needs to be resumed to learn more.
    Empty,
    /// The producer yielded this item, and it has not been pulled yet.
    Ready(T),
    /// The producer emitted its final value or an error, and must not be resumed again.
    Done,
}

/// A lazily evaluated sequence that is pulled out of a [`Producer`], one item at a time.
///
/// Production is lazy: creating a generator does not run any producer logic. Each call to [`has_next`](Generator::has_next), [`peek`](Generator::peek), or [`next`](Generator::next) resumes the producer at most once, and only if no produced item is pending. A generator never buffers more than a single item.
///
/// Once the producer emits its final value, the generator stores it (see [`final_value`](Generator::final_value)) and reports the end of the sequence on all further queries. If the producer emits an error, that error is reported to the caller whose query resumed the producer, exactly once; afterwards, the generator behaves as if the sequence had ended regularly.
///
/// Generators are not [`Clone`]; every sequence has a single owner pulling from it.
pub struct Generator<P: Producer> {
    producer: P,
    slot: Slot<P::Item>,
    fin: Option<P::Final>,
}

impl<P> Debug for Generator<P>
where
    P: Producer + Debug,
    P::Item: Debug,
    P::Final: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let pending = match &self.slot {
            Slot::Ready(item) => Some(item),
            Slot::Empty | Slot::Done => None,
        };

        f.debug_struct("Generator")
            .field("producer", &self.producer)
            .field("pending", &pending)
            .field("done", &self.is_done())
            .field("fin", &self.fin)
            .finish()
    }
}

impl<P: Producer> Generator<P> {
    /// Create a generator that pulls its items out of the given producer. The producer is not resumed yet.
    pub fn new(producer: P) -> Self {
        Generator {
            producer,
            slot: Slot::Empty,
            fin: None,
        }
    }

    /// Returns whether the sequence has another item.
    ///
    /// If no item is pending, this resumes the producer exactly once. Calling this repeatedly without pulling the item in between has no further effects.
    ///
    /// Returns `Ok(false)` once the producer has emitted its final value, or after it has emitted an error. If the resumption triggered by this call makes the producer emit an error, the error is returned instead.
    pub fn has_next(&mut self) -> Result<bool, GeneratorError<P::Error>> {
        self.fill()?;
        Ok(matches!(self.slot, Slot::Ready(_)))
    }

    /// Returns a reference to the next item without pulling it, or `None` if the sequence has ended.
    ///
    /// Resumes the producer under the same conditions as [`has_next`](Generator::has_next).
    pub fn peek(&mut self) -> Result<Option<&P::Item>, GeneratorError<P::Error>> {
        self.fill()?;
        match &self.slot {
            Slot::Ready(item) => Ok(Some(item)),
            Slot::Empty | Slot::Done => Ok(None),
        }
    }

    /// Pulls the next item out of the sequence, transferring its ownership to the caller.
    ///
    /// If no item is pending, this resumes the producer exactly once. Returns [`GeneratorError::Exhausted`] if the sequence has already ended, and the producer error if the resumption triggered by this call makes the producer emit one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<P::Item, GeneratorError<P::Error>> {
        self.fill()?;
        match mem::replace(&mut self.slot, Slot::Empty) {
            Slot::Ready(item) => Ok(item),
            settled => {
                self.slot = settled;
                Err(GeneratorError::Exhausted)
            }
        }
    }

    /// Returns whether the producer has emitted its final value or an error. A generator that is done never resumes its producer again.
    ///
    /// This does not resume the producer, so it can return `false` even if the next call to [`has_next`](Generator::has_next) would return `Ok(false)`.
    pub fn is_done(&self) -> bool {
        matches!(self.slot, Slot::Done)
    }

    /// Returns the final value of the producer, if it has emitted it and it has not been taken yet.
    pub fn final_value(&self) -> Option<&P::Final> {
        self.fin.as_ref()
    }

    /// Takes the final value of the producer out of the generator, if it has emitted it and it has not been taken yet.
    pub fn take_final(&mut self) -> Option<P::Final> {
        self.fin.take()
    }

    /// Returns an iterator that pulls the remaining items out of this generator, reporting producer errors as items.
    ///
    /// The iterator ends once the sequence has ended, or right after it has yielded the error that ended the sequence.
    pub fn try_iter(&mut self) -> TryIter<'_, P> {
        TryIter(self)
    }

    /// Ensures that the slot is not empty, by resuming the producer if necessary.
    fn fill(&mut self) -> Result<(), GeneratorError<P::Error>> {
        if let Slot::Empty = self.slot {
            match self.producer.produce() {
                Ok(Left(item)) => self.slot = Slot::Ready(item),
                Ok(Right(fin)) => {
                    self.fin = Some(fin);
                    self.slot = Slot::Done;
                }
                Err(err) => {
                    self.slot = Slot::Done;
                    return Err(GeneratorError::Producer(err));
                }
            }
        }

        Ok(())
    }
}

impl<F, T, Fin, E> Generator<FromFn<F>>
where
    F: FnMut() -> Result<Either<T, Fin>, E>,
{
    /// Create a generator whose producer logic is the given closure, see [`FromFn`].
    ///
    /// ```
    /// use pullgen::prelude::*;
    ///
    /// let mut fib = (0u8, 1u8);
    /// let mut numbers = Generator::from_fn(|| {
    ///     let (a, b) = fib;
    ///     match a.checked_add(b) {
    ///         Some(c) => {
    ///             fib = (b, c);
    ///             Ok(Left(a))
    ///         }
    ///         None => Err(a),
    ///     }
    /// });
    ///
    /// let mut count = 0;
    /// while numbers.has_next() != Err(GeneratorError::Producer(144)) {
    ///     numbers.next().unwrap();
    ///     count += 1;
    /// }
    /// assert_eq!(count, 12);
    /// assert_eq!(numbers.has_next(), Ok(false));
    /// # let _: Option<&Infallible> = numbers.final_value();
    /// ```
    pub fn from_fn(fun: F) -> Self {
        Generator::new(FromFn::new(fun))
    }
}

impl<I: Iterator> Generator<IteratorToProducer<I>> {
    /// Create a generator that pulls its items out of an iterator, see [`IteratorToProducer`].
    pub fn from_iterator<II: IntoIterator<IntoIter = I>>(iter: II) -> Self {
        Generator::new(IteratorToProducer::new(iter.into_iter()))
    }
}

impl<P: Producer> AsRef<P> for Generator<P> {
    fn as_ref(&self) -> &P {
        &self.producer
    }
}

impl<P: Producer> Wrapper<P> for Generator<P> {
    /// Consumes the generator and returns its producer. Any pending item and any stored final value are dropped.
    fn into_inner(self) -> P {
        self.producer
    }
}

impl<P: Producer<Error = Infallible>> Iterator for Generator<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match Generator::next(self) {
            Ok(item) => Some(item),
            Err(GeneratorError::Exhausted) => None,
            Err(GeneratorError::Producer(never)) => match never {},
        }
    }
}

/// An iterator over the remaining items of a [`Generator`], including the producer error, if any.
///
/// Created by [`Generator::try_iter`].
pub struct TryIter<'g, P: Producer>(&'g mut Generator<P>);

impl<P: Producer> Iterator for TryIter<'_, P> {
    type Item = Result<P::Item, GeneratorError<P::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.0.has_next() {
            Ok(true) => Some(self.0.next()),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

impl<P: Producer> core::iter::FusedIterator for TryIter<'_, P> {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    use core::cell::Cell;
    use std::rc::Rc;
    use std::string::{String, ToString};
    use std::vec;
    use std::vec::Vec;

    use crate::producer::{TestProducer, TestProducerBuilder};

    fn scripted(items: &[u8], last: Result<(), &'static str>) -> TestProducer<u8, (), &'static str> {
        TestProducerBuilder::new(items.into(), last).build()
    }

    #[test]
    fn creating_runs_no_producer_logic() {
        let resumptions = Cell::new(0);
        let numbers = Generator::from_fn(|| {
            resumptions.set(resumptions.get() + 1);
            Ok::<_, Infallible>(Left::<_, ()>(resumptions.get()))
        });

        assert!(!numbers.is_done());
        assert_eq!(resumptions.get(), 0);
    }

    #[test]
    fn has_next_resumes_at_most_once() {
        let mut gen = Generator::new(scripted(&[1, 2], Ok(())));

        assert_eq!(gen.has_next(), Ok(true));
        assert_eq!(gen.has_next(), Ok(true));
        assert_eq!(gen.peek(), Ok(Some(&1)));
        assert_eq!(gen.as_ref().resumptions(), 1);

        assert_eq!(gen.next(), Ok(1));
        assert_eq!(gen.as_ref().resumptions(), 1);

        assert_eq!(gen.next(), Ok(2));
        assert_eq!(gen.as_ref().resumptions(), 2);
    }

    #[test]
    fn ends_idempotently() {
        let mut gen = Generator::new(scripted(&[7], Ok(())));

        assert_eq!(gen.next(), Ok(7));
        assert!(!gen.is_done());

        for _ in 0..3 {
            assert_eq!(gen.has_next(), Ok(false));
            assert_eq!(gen.peek(), Ok(None));
            assert_eq!(gen.next(), Err(GeneratorError::Exhausted));
            assert!(gen.is_done());
        }

        // The final value was the only thing requested after the item.
        assert_eq!(gen.as_ref().resumptions(), 2);
        assert_eq!(gen.final_value(), Some(&()));
    }

    #[test]
    fn empty_sequence() {
        let mut gen = Generator::new(scripted(&[], Ok(())));

        assert_eq!(gen.has_next(), Ok(false));
        assert_eq!(gen.next(), Err(GeneratorError::Exhausted));
    }

    #[test]
    fn next_without_has_next() {
        let mut gen = Generator::new(scripted(&[3, 4], Ok(())));

        assert_eq!(gen.next(), Ok(3));
        assert_eq!(gen.next(), Ok(4));
        assert_eq!(gen.next(), Err(GeneratorError::Exhausted));
    }

    #[test]
    fn error_is_reported_exactly_once_by_has_next() {
        let mut gen = Generator::new(scripted(&[1], Err("boom")));

        assert_eq!(gen.next(), Ok(1));
        assert_eq!(gen.has_next(), Err(GeneratorError::Producer("boom")));
        assert!(gen.is_done());

        // The producer is never resumed again, the `Invariant` wrapper of the test producer would panic otherwise.
        assert_eq!(gen.has_next(), Ok(false));
        assert_eq!(gen.next(), Err(GeneratorError::Exhausted));
        assert_eq!(gen.final_value(), None);
    }

    #[test]
    fn error_is_reported_exactly_once_by_next() {
        let mut gen = Generator::new(scripted(&[], Err("boom")));

        assert_eq!(gen.next(), Err(GeneratorError::Producer("boom")));
        assert_eq!(gen.next(), Err(GeneratorError::Exhausted));
        assert_eq!(gen.has_next(), Ok(false));
    }

    #[test]
    fn error_is_reported_by_peek() {
        let mut gen = Generator::new(scripted(&[], Err("boom")));

        assert_eq!(gen.peek(), Err(GeneratorError::Producer("boom")));
        assert_eq!(gen.peek(), Ok(None));
    }

    #[test]
    fn final_value_can_be_taken() {
        let mut gen = Generator::new(
            TestProducerBuilder::<u8, u16, Infallible>::new(Vec::new().into_boxed_slice(), Ok(404))
                .build(),
        );

        assert_eq!(gen.final_value(), None);
        assert_eq!(gen.has_next(), Ok(false));
        assert_eq!(gen.final_value(), Some(&404));
        assert_eq!(gen.take_final(), Some(404));
        assert_eq!(gen.take_final(), None);
        assert_eq!(gen.has_next(), Ok(false));
    }

    #[test]
    fn next_transfers_ownership() {
        let words = vec![String::from("tofu"), String::from("ufo")];
        let mut gen = Generator::from_iterator(words);

        let first: String = gen.next().unwrap();
        assert_eq!(first, "tofu");
        assert_eq!(gen.peek(), Ok(Some(&"ufo".to_string())));

        let second = gen.next().unwrap();
        assert_eq!(second, "ufo");
        assert_eq!(gen.next(), Err(GeneratorError::Exhausted));
    }

    #[test]
    fn dropping_discards_suspended_state() {
        let held = Rc::new(());
        let resumptions = Cell::new(0);

        {
            let captured = Rc::clone(&held);
            let counter = &resumptions;
            let mut gen = Generator::from_fn(move || {
                counter.set(counter.get() + 1);
                Ok::<_, Infallible>(Left::<_, ()>(Rc::clone(&captured)))
            });

            assert_eq!(gen.has_next(), Ok(true));
            // The closure and the pending item both hold on to `held`.
            assert_eq!(Rc::strong_count(&held), 3);
        }

        assert_eq!(Rc::strong_count(&held), 1);
        assert_eq!(resumptions.get(), 1);
    }

    #[test]
    fn borrowed_producer_keeps_its_progress() {
        let mut producer = scripted(&[1, 2, 3], Ok(()));

        {
            let mut gen = Generator::new(&mut producer);
            assert_eq!(gen.next(), Ok(1));
        }

        assert_eq!(producer.remaining(), &[2, 3]);
    }

    #[test]
    fn into_inner_returns_the_producer() {
        let mut gen = Generator::new(scripted(&[1, 2, 3], Ok(())));
        assert_eq!(gen.has_next(), Ok(true));

        // The pending item is dropped along with the generator.
        let producer = gen.into_inner();
        assert_eq!(producer.remaining(), &[2, 3]);
    }

    #[test]
    fn infallible_generators_are_iterators() {
        let gen = Generator::from_iterator([1, 2, 3]);
        assert_eq!(gen.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn try_iter_stops_after_the_error() {
        let mut gen = Generator::new(scripted(&[1, 2], Err("boom")));

        let all: Vec<_> = gen.try_iter().collect();
        assert_eq!(all, vec![Ok(1), Ok(2), Err(GeneratorError::Producer("boom"))]);

        assert_eq!(gen.try_iter().next(), None);
    }

    #[test]
    fn debug_shows_the_pending_item() {
        let mut gen = Generator::from_iterator([5]);
        assert_eq!(gen.has_next(), Ok(true));

        let debug = std::format!("{:?}", gen);
        assert!(debug.contains("pending: Some(5)"));
        assert!(debug.contains("done: false"));
    }
}
