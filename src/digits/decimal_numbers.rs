use core::fmt::Debug;
use core::marker::PhantomData;

use either::Either::{self, Left, Right};

use crate::digits::{DigitsError, Unsigned};
use crate::producer::{Invariant, Producer};

invarianted_producer_outer_type!(
    /// Produces the decimal numbers embedded in a string, from left to right.
    ///
    /// Every maximal run of consecutive ASCII digits (`'0'` to `'9'`) yields one number of type `N`; all other characters only separate runs from each other. Signs, decimal points, and non-ASCII digits are separators like any other, and leading zeros are part of the number they precede. Once the whole input has been scanned, the producer emits the final value `()`.
    ///
    /// A digit run whose value does not fit into `N` makes the producer emit [`DigitsError::Overflow`] instead of a number.
    ///
    /// ```
    /// use pullgen::prelude::*;
    /// use pullgen::DecimalNumbers;
    ///
    /// let mut numbers: DecimalNumbers<u8> = DecimalNumbers::new("-3.50 on 007, then 300!");
    ///
    /// assert_eq!(numbers.produce(), Ok(Left(3)));
    /// assert_eq!(numbers.produce(), Ok(Left(50)));
    /// assert_eq!(numbers.produce(), Ok(Left(7)));
    /// assert_eq!(numbers.produce(), Err(DigitsError::Overflow { offset: 19, len: 3 }));
    /// assert_eq!(numbers.remaining(), b"!");
    /// ```
    DecimalNumbers_ DecimalNumbers <'a, N>
);

invarianted_impl_debug!(DecimalNumbers_<'a, N: Debug>);

impl<'a, N> DecimalNumbers_<'a, N> {
    /// Create a producer of the numbers embedded in the given string.
    pub fn new(text: &'a str) -> DecimalNumbers_<'a, N> {
        Self::from_bytes(text.as_bytes())
    }

    /// Create a producer of the numbers embedded in the given bytes. Every byte that is not an ASCII digit is a separator.
    pub fn from_bytes(bytes: &'a [u8]) -> DecimalNumbers_<'a, N> {
        // Wrap the inner state machine in the invariant type.
        let invariant = Invariant::new(DecimalNumbers {
            input: bytes,
            offset: 0,
            number_type: PhantomData,
        });

        DecimalNumbers_(invariant)
    }

    /// Return the offset into the input at which scanning will continue.
    pub fn offset(&self) -> usize {
        (self.0).as_ref().offset
    }

    /// Return the part of the input that has been scanned so far.
    pub fn scanned(&self) -> &'a [u8] {
        let inner = (self.0).as_ref();
        &inner.input[..inner.offset]
    }

    /// Return the part of the input that has not been scanned yet.
    pub fn remaining(&self) -> &'a [u8] {
        let inner = (self.0).as_ref();
        &inner.input[inner.offset..]
    }
}

invarianted_impl_producer!(DecimalNumbers_<'a, N: Unsigned> Item N;
    /// Emitted once the end of the input has been reached.
    Final ();
    Error DigitsError
);

#[derive(Debug)]
struct DecimalNumbers<'a, N> {
    input: &'a [u8],
    offset: usize,
    number_type: PhantomData<N>,
}

/// The scan states of a single resumption.
enum Scan<N> {
    Seeking,
    /// `value` is `None` once the run has overflowed; the rest of the run is still consumed.
    Consuming { start: usize, value: Option<N> },
}

impl<'a, N: Unsigned> Producer for DecimalNumbers<'a, N> {
    type Item = N;
    type Final = ();
    type Error = DigitsError;

    fn produce(&mut self) -> Result<Either<Self::Item, Self::Final>, Self::Error> {
        let mut scan = Scan::Seeking;

        loop {
            let byte = self.input.get(self.offset).copied();

            scan = match (scan, byte) {
                (Scan::Seeking, None) => return Ok(Right(())),
                (Scan::Seeking, Some(b)) if b.is_ascii_digit() => Scan::Consuming {
                    start: self.offset,
                    value: Some(N::ZERO),
                },
                (Scan::Seeking, Some(_)) => {
                    self.offset += 1;
                    Scan::Seeking
                }
                (Scan::Consuming { start, value }, Some(b)) if b.is_ascii_digit() => {
                    self.offset += 1;
                    Scan::Consuming {
                        start,
                        value: value.and_then(|v| v.checked_push_digit(b - b'0')),
                    }
                }
                (Scan::Consuming { start, value }, _) => {
                    return match value {
                        Some(number) => Ok(Left(number)),
                        None => Err(DigitsError::Overflow {
                            offset: start,
                            len: self.offset - start,
                        }),
                    };
                }
            };
        }
    }
}
