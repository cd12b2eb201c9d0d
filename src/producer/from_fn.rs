use either::Either;
use wrapper::Wrapper;

use crate::producer::Producer;

/// A [`Producer`] whose producer logic is a closure: every resumption calls the closure once.
///
/// The closure reports a regular item as `Ok(Left(item))`, the end of the sequence as `Ok(Right(final))`, and an error as `Err(error)`. It carries all state it needs across resumptions in its captures. Like with any producer, it is not called again after it returned a final value or an error.
///
/// ```
/// use pullgen::prelude::*;
/// use pullgen::producer::FromFn;
///
/// let mut countdown = 3;
/// let mut p = FromFn::new(|| {
///     if countdown == 0 {
///         Ok::<_, Infallible>(Right("liftoff"))
///     } else {
///         countdown -= 1;
///         Ok(Left(countdown + 1))
///     }
/// });
///
/// assert_eq!(p.produce(), Ok(Left(3)));
/// assert_eq!(p.produce(), Ok(Left(2)));
/// assert_eq!(p.produce(), Ok(Left(1)));
/// assert_eq!(p.produce(), Ok(Right("liftoff")));
/// ```
#[derive(Clone)]
pub struct FromFn<F>(F);

impl<F> core::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F> FromFn<F> {
    /// Wrap a closure as a [`Producer`].
    pub fn new(fun: F) -> Self {
        FromFn(fun)
    }
}

impl<F> Wrapper<F> for FromFn<F> {
    fn into_inner(self) -> F {
        self.0
    }
}

impl<F, T, Fin, E> Producer for FromFn<F>
where
    F: FnMut() -> Result<Either<T, Fin>, E>,
{
    type Item = T;
    type Final = Fin;
    type Error = E;

    fn produce(&mut self) -> Result<Either<Self::Item, Self::Final>, Self::Error> {
        (self.0)()
    }
}
