use core::convert::Infallible;

use either::{Either, Left, Right};
use wrapper::Wrapper;

use crate::producer::Producer;

/// Treat an [`Iterator`] as a [`Producer`].
///
/// The producer emits the items of the iterator, followed by the final value `()` once the iterator returns `None`. It never emits an error.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct IteratorToProducer<I>(I);

impl<I> IteratorToProducer<I> {
    /// Wrap an [`Iterator`] as a [`Producer`].
    pub fn new(iter: I) -> Self {
        Self(iter)
    }
}

impl<I> From<I> for IteratorToProducer<I> {
    fn from(value: I) -> Self {
        Self(value)
    }
}

impl<I> Wrapper<I> for IteratorToProducer<I> {
    fn into_inner(self) -> I {
        self.0
    }
}

impl<I> AsRef<I> for IteratorToProducer<I> {
    fn as_ref(&self) -> &I {
        &self.0
    }
}

impl<I> AsMut<I> for IteratorToProducer<I> {
    fn as_mut(&mut self) -> &mut I {
        &mut self.0
    }
}

impl<I> Producer for IteratorToProducer<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type Final = ();
    type Error = Infallible;

    fn produce(&mut self) -> Result<Either<Self::Item, Self::Final>, Self::Error> {
        match self.0.next() {
            Some(item) => Ok(Left(item)),
            None => Ok(Right(())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_items_then_unit() {
        let mut p = IteratorToProducer::new([1, 2].into_iter());

        assert_eq!(p.produce(), Ok(Left(1)));
        assert_eq!(p.produce(), Ok(Left(2)));
        assert_eq!(p.produce(), Ok(Right(())));
    }

    #[test]
    fn into_inner_returns_the_partially_consumed_iterator() {
        let mut p = IteratorToProducer::from(10..14);
        assert_eq!(p.produce(), Ok(Left(10)));

        assert_eq!(p.into_inner(), 11..14);
    }
}
