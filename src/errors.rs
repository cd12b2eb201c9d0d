use core::fmt::{Display, Formatter};
#[cfg(feature = "std")]
use std::error::Error;

/// Everything that can go wrong when pulling items out of a [`Generator`](crate::Generator).
///
/// `E` is the [`Error`](crate::Producer::Error) type of the wrapped producer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GeneratorError<E> {
    /// An item was pulled after the sequence had ended, either with the final value of the producer or with an error.
    Exhausted,
    /// The producer emitted an error while being resumed. Each producer error is reported exactly once, by the call that resumed the producer.
    Producer(E),
}

impl<E> GeneratorError<E> {
    /// Returns the producer error, or `None` if this signals an exhausted sequence.
    pub fn into_producer_error(self) -> Option<E> {
        match self {
            GeneratorError::Exhausted => None,
            GeneratorError::Producer(err) => Some(err),
        }
    }

    /// Returns whether this signals an exhausted sequence.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, GeneratorError::Exhausted)
    }
}

impl<E> Display for GeneratorError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            GeneratorError::Exhausted => {
                write!(
                    f,
                    "Failed to pull an item from a generator, because its sequence has already ended",
                )
            }
            GeneratorError::Producer(_) => {
                write!(
                    f,
                    "Failed to pull an item from a generator, because its producer emitted an error",
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E> Error for GeneratorError<E>
where
    E: 'static + Error,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GeneratorError::Exhausted => None,
            GeneratorError::Producer(err) => Some(err),
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    use std::string::ToString;

    use crate::DigitsError;

    #[test]
    fn display_names_the_cause() {
        let exhausted: GeneratorError<DigitsError> = GeneratorError::Exhausted;
        assert_eq!(
            exhausted.to_string(),
            "Failed to pull an item from a generator, because its sequence has already ended"
        );

        let faulted = GeneratorError::Producer(DigitsError::Overflow { offset: 3, len: 21 });
        assert_eq!(
            faulted.to_string(),
            "Failed to pull an item from a generator, because its producer emitted an error"
        );
    }

    #[test]
    fn source_is_the_producer_error() {
        let err = DigitsError::Overflow { offset: 0, len: 20 };
        let faulted = GeneratorError::Producer(err);

        let source = faulted.source().unwrap();
        assert_eq!(source.to_string(), err.to_string());
        assert!(GeneratorError::<DigitsError>::Exhausted.source().is_none());
    }

    #[test]
    fn into_producer_error() {
        assert_eq!(GeneratorError::Producer(7u8).into_producer_error(), Some(7));
        assert_eq!(GeneratorError::<u8>::Exhausted.into_producer_error(), None);
        assert!(GeneratorError::<u8>::Exhausted.is_exhausted());
    }
}
