use either::Either;
use wrapper::Wrapper;

use crate::producer::Producer;

/// Wraps a producer and forwards every call to it.
///
/// Test builds replace this with a version that panics when the producer is resumed after the end of its sequence.
#[derive(Copy, Clone, Hash, Ord, Eq, PartialEq, PartialOrd)]
pub struct Invariant<P>(P);

impl<P: core::fmt::Debug> core::fmt::Debug for Invariant<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.0, f)
    }
}

impl<P> Invariant<P> {
    /// Wrap a producer whose sequence has not ended yet.
    pub fn new(inner: P) -> Self {
        Invariant(inner)
    }
}

impl<P> AsRef<P> for Invariant<P> {
    fn as_ref(&self) -> &P {
        &self.0
    }
}

impl<P> AsMut<P> for Invariant<P> {
    fn as_mut(&mut self) -> &mut P {
        &mut self.0
    }
}

impl<P> Wrapper<P> for Invariant<P> {
    fn into_inner(self) -> P {
        self.0
    }
}

impl<P: Producer> Producer for Invariant<P> {
    type Item = P::Item;
    type Final = P::Final;
    type Error = P::Error;

    #[inline]
    fn produce(&mut self) -> Result<Either<Self::Item, Self::Final>, Self::Error> {
        self.0.produce()
    }
}
