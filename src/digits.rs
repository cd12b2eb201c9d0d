//! Extraction of the decimal numbers embedded in text.
//!
//! The [`DecimalNumbers`] producer scans its input once, from left to right, and yields one number per maximal run of ASCII digits. [`extract_decimal_numbers`] and [`extract_decimal_numbers_as`] wrap it in a [`Generator`](crate::Generator) for pull-style consumption.
//!
//! ```
//! use pullgen::prelude::*;
//!
//! let mut numbers = extract_decimal_numbers("a1b22c333");
//!
//! assert_eq!(numbers.next(), Ok(1));
//! assert_eq!(numbers.next(), Ok(22));
//! assert_eq!(numbers.next(), Ok(333));
//! assert_eq!(numbers.has_next(), Ok(false));
//! ```

use crate::generator::Generator;

mod unsigned;
pub use unsigned::Unsigned;

mod decimal_numbers;
pub use decimal_numbers::DecimalNumbers_ as DecimalNumbers;

/// Everything that can go wrong when extracting decimal numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DigitsError {
    /// A run of digits denotes a number that does not fit into the requested integer type.
    #[error("the digit run of length {len} at byte offset {offset} does not fit into the number type")]
    Overflow {
        /// The byte offset of the first digit of the run.
        offset: usize,
        /// The number of digits in the run.
        len: usize,
    },
}

/// Create a lazy generator of the decimal numbers embedded in `text`, as `u64`s.
///
/// No scanning happens until the generator is first queried.
pub fn extract_decimal_numbers(text: &str) -> Generator<DecimalNumbers<'_, u64>> {
    extract_decimal_numbers_as(text)
}

/// Create a lazy generator of the decimal numbers embedded in `text`, as values of type `N`.
///
/// ```
/// use pullgen::prelude::*;
///
/// let mut small = extract_decimal_numbers_as::<u8>("7 300");
/// assert_eq!(small.next(), Ok(7));
/// assert_eq!(
///     small.next(),
///     Err(GeneratorError::Producer(DigitsError::Overflow { offset: 2, len: 3 }))
/// );
/// assert_eq!(small.next(), Err(GeneratorError::Exhausted));
/// ```
pub fn extract_decimal_numbers_as<N: Unsigned>(text: &str) -> Generator<DecimalNumbers<'_, N>> {
    Generator::new(DecimalNumbers::new(text))
}
