use core::fmt::Debug;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;
#[cfg(feature = "std")]
use std::boxed::Box;

#[cfg(feature = "dev")]
use arbitrary::{size_hint, Arbitrary};
use either::Either::{self, Left, Right};
use wrapper::Wrapper;

use crate::producer::{Invariant, Producer};

invarianted_producer_outer_type!(
    /// If you need to test code that works with arbitrary producers, use this one. You can choose which items it emits, and which final or error value it emits afterwards. Beyond manual control, the `Arbitrary` implementation (available with the `dev` feature) lets you test against various producer behaviours automatically.
    ///
    /// Create new [`TestProducer`](crate::producer::TestProducer)s either via a [`TestProducerBuilder`] or via the implementation of `Arbitrary`.
    ///
    /// ```
    /// use pullgen::prelude::*;
    /// use pullgen::producer::*;
    ///
    /// let mut pro: TestProducer<u8, u16, Infallible> = TestProducerBuilder::new(vec![1, 2, 3].into(), Ok(9999)).build();
    ///
    /// assert_eq!(Ok(Left(1)), pro.produce());
    /// assert_eq!(Ok(Left(2)), pro.produce());
    /// assert_eq!(Ok(Left(3)), pro.produce());
    /// assert_eq!(Ok(Right(9999)), pro.produce());
    /// ```
    TestProducer_ TestProducer <Item, Final, Error>
);

invarianted_impl_debug!(TestProducer_<Item: Debug, Final: Debug, Error: Debug>);

invarianted_impl_producer!(TestProducer_<Item: Clone, Final, Error> Item Item;
    /// The predetermined final value.
    Final Final;
    Error Error
);

impl<Item, Final, Error> TestProducer_<Item, Final, Error> {
    /// Returns a slice of all regular items that were produced so far.
    pub fn produced(&self) -> &[Item] {
        self.0.as_ref().produced()
    }

    /// Returns a slice of all regular items that will be produced in the future.
    pub fn remaining(&self) -> &[Item] {
        self.0.as_ref().remaining()
    }

    /// Returns how often [`produce`](Producer::produce) has been called.
    pub fn resumptions(&self) -> usize {
        self.0.as_ref().resumptions
    }

    /// Returns a reference to the last value that this will emit, either a `Final` value, or an `Error` value.
    ///
    /// Returns `None` if it has been emitted already.
    pub fn peek_last(&self) -> Option<&Result<Final, Error>> {
        self.0.as_ref().last.as_ref()
    }

    /// Returns whether the last value (a `Final` value or an `Error`) was already emitted.
    pub fn did_already_emit_last(&self) -> bool {
        self.0.as_ref().last.is_none()
    }

    /// Consumes the [`TestProducer`](crate::producer::TestProducer) and obtain ownership of all values that it has or would have produced, including the last one, if it has not been emitted yet.
    pub fn into_data(self) -> (Box<[Item]>, Option<Result<Final, Error>>) {
        let inner = self.0.into_inner();
        (inner.items, inner.last)
    }
}

#[cfg(feature = "dev")]
impl<'a, Item: Arbitrary<'a>, Final: Arbitrary<'a>, Error: Arbitrary<'a>> Arbitrary<'a>
    for TestProducer_<Item, Final, Error>
{
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let items = Box::<[Item]>::arbitrary(u)?;
        let last = Result::<Final, Error>::arbitrary(u)?;

        Ok(TestProducerBuilder::new(items, last).build())
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        size_hint::and(
            Box::<[Item]>::size_hint(depth),
            Result::<Final, Error>::size_hint(depth),
        )
    }
}

/// A [builder](https://rust-unofficial.github.io/patterns/patterns/creational/builder.html) for [`TestProducer`](crate::producer::TestProducer).
///
/// ```
/// use pullgen::prelude::*;
/// use pullgen::producer::*;
///
/// let mut pro: TestProducer<u8, (), &str> = TestProducerBuilder::new(vec![1].into(), Err("oh no")).build();
///
/// assert_eq!(Ok(Left(1)), pro.produce());
/// assert_eq!(Err("oh no"), pro.produce());
/// ```
#[derive(Debug)]
pub struct TestProducerBuilder<Item, Final, Error> {
    items: Box<[Item]>,
    last: Result<Final, Error>,
}

impl<Item, Final, Error> TestProducerBuilder<Item, Final, Error> {
    /// Creates a new [`TestProducerBuilder`].
    ///
    /// The resulting producer will successfully produce the given `items` before emitting the given `last` value (either a final value or an error).
    pub fn new(items: Box<[Item]>, last: Result<Final, Error>) -> Self {
        TestProducerBuilder { items, last }
    }

    /// Consumes the builder and returns the configured [`TestProducer`](crate::producer::TestProducer).
    pub fn build(self) -> TestProducer_<Item, Final, Error> {
        TestProducer_(Invariant::new(TestProducer {
            items: self.items,
            offset: 0,
            resumptions: 0,
            last: Some(self.last),
        }))
    }
}

#[derive(Debug)]
struct TestProducer<Item, Final, Error> {
    items: Box<[Item]>,
    offset: usize,
    resumptions: usize,
    last: Option<Result<Final, Error>>,
}

impl<Item, Final, Error> TestProducer<Item, Final, Error> {
    fn produced(&self) -> &[Item] {
        &self.items[..self.offset]
    }

    fn remaining(&self) -> &[Item] {
        &self.items[self.offset..]
    }
}

impl<Item: Clone, Final, Error> Producer for TestProducer<Item, Final, Error> {
    type Item = Item;
    type Final = Final;
    type Error = Error;

    fn produce(&mut self) -> Result<Either<Self::Item, Self::Final>, Self::Error> {
        self.resumptions += 1;

        match self.items.get(self.offset) {
            Some(item) => {
                self.offset += 1;
                Ok(Left(item.clone()))
            }
            None => match self.last.take().expect(
                "Must not call produce after any function of the producer returned a final item or error.",
            ) {
                Ok(fin) => Ok(Right(fin)),
                Err(err) => Err(err),
            },
        }
    }
}
