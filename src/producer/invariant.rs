use either::Either::{self, Left, Right};
use wrapper::Wrapper;

use crate::producer::Producer;

/// Wraps a producer and panics as soon as it is resumed after the end of its sequence.
///
/// A sequence ends when [`produce`](Producer::produce) returns the final value or an error. Resuming a producer after that point is a bug in the calling code, for example in a [`Generator`](crate::Generator). The checks only exist in test builds; otherwise `Invariant` is a plain newtype that forwards every call.
///
/// Every state machine producer of this crate hides behind this wrapper, and custom producers are encouraged to do the same.
#[derive(Copy, Clone, Hash, Ord, Eq, PartialEq, PartialOrd)]
pub struct Invariant<P> {
    inner: P,
    /// Set once `inner` emitted its final value or an error.
    ended: bool,
}

impl<P: core::fmt::Debug> core::fmt::Debug for Invariant<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.inner, f)
    }
}

impl<P> Invariant<P> {
    /// Wrap a producer whose sequence has not ended yet.
    pub fn new(inner: P) -> Self {
        Invariant {
            inner,
            ended: false,
        }
    }
}

impl<P> AsRef<P> for Invariant<P> {
    fn as_ref(&self) -> &P {
        &self.inner
    }
}

impl<P> AsMut<P> for Invariant<P> {
    fn as_mut(&mut self) -> &mut P {
        &mut self.inner
    }
}

impl<P> Wrapper<P> for Invariant<P> {
    fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Producer> Producer for Invariant<P> {
    type Item = P::Item;
    type Final = P::Final;
    type Error = P::Error;

    fn produce(&mut self) -> Result<Either<Self::Item, Self::Final>, Self::Error> {
        assert!(
            !self.ended,
            "may not call `Producer` methods after the sequence has ended"
        );

        let yielded = self.inner.produce();
        self.ended = !matches!(yielded, Ok(Left(_)));
        yielded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::DecimalNumbers;

    #[test]
    fn passes_items_through() {
        let mut numbers: DecimalNumbers<u64> = DecimalNumbers::new("4 8 15");

        assert_eq!(numbers.produce(), Ok(Left(4)));
        assert_eq!(numbers.produce(), Ok(Left(8)));
        assert_eq!(numbers.produce(), Ok(Left(15)));
        assert_eq!(numbers.produce(), Ok(Right(())));
    }

    #[test]
    #[should_panic(expected = "may not call `Producer` methods after the sequence has ended")]
    fn panics_on_produce_after_final() {
        let mut numbers: DecimalNumbers<u64> = DecimalNumbers::new("ufo 42");

        assert_eq!(numbers.produce(), Ok(Left(42)));
        assert_eq!(numbers.produce(), Ok(Right(())));
        let _ = numbers.produce();
    }

    #[test]
    #[should_panic(expected = "may not call `Producer` methods after the sequence has ended")]
    fn panics_on_produce_after_error() {
        // 256 does not fit into a `u8`; the 7 must never be reached.
        let mut numbers: DecimalNumbers<u8> = DecimalNumbers::new("tofu 256 and 7");

        assert!(numbers.produce().is_err());
        let _ = numbers.produce();
    }
}
