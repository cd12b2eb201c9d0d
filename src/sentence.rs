//! Lexical validation of sentences.
//!
//! A sentence is valid if it satisfies all of the following rules:
//!
//! 1. It is not empty.
//! 2. It does not start with a lowercase letter.
//! 3. It contains an even number of quotation marks (`"`).
//! 4. It ends with one of `.`, `?`, or `!`.
//! 5. It contains no period other than its last character.
//! 6. It contains no number below thirteen; those must be spelled out.
//!
//! The numbers are pulled one at a time out of a [`DecimalNumbers`] generator, so validation stops scanning at the first offending number. Letters are classified by their ASCII representation only.
//!
//! ```
//! use pullgen::sentence::*;
//!
//! assert!(is_sentence_valid("One lazy dog is too few, 13 is too many."));
//! assert_eq!(
//!     validate_sentence("One lazy dog is too few, 12 is too many."),
//!     Err(SentenceError::NumberBelowThirteen { value: 12 }),
//! );
//! ```

use crate::digits::{DecimalNumbers, DigitsError};
use crate::generator::Generator;
use crate::GeneratorError;

/// The smallest number that may appear in digits rather than spelled out.
pub const SMALLEST_NUMERAL: u64 = 13;

/// The rule that rejected a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SentenceError {
    /// The sentence has no characters at all.
    #[error("the sentence is empty")]
    Empty,
    /// The first character is an ASCII lowercase letter.
    #[error("the sentence starts with a lowercase letter")]
    LowercaseStart,
    /// The sentence contains `count` quotation marks, an odd number.
    #[error("the sentence contains an odd number ({count}) of quotation marks")]
    UnbalancedQuotes { count: usize },
    /// The last character is none of `.`, `?`, or `!`.
    #[error("the sentence does not end with `.`, `?`, or `!`")]
    MissingTerminator,
    /// A period at the given byte offset, which is not the last character.
    #[error("the sentence contains a period at byte offset {offset} before its end")]
    InteriorPeriod { offset: usize },
    /// A number below thirteen that appears in digits.
    #[error("the sentence contains the number {value}, which should be spelled out")]
    NumberBelowThirteen { value: u64 },
}

/// Checks the given sentence against all rules, and reports the first one that it violates.
pub fn validate_sentence(sentence: &str) -> Result<(), SentenceError> {
    let result = check_rules(sentence.as_bytes());

    if let Err(err) = &result {
        tracing::debug!(sentence, %err, "rejected sentence");
    }

    result
}

/// Returns whether the given sentence satisfies all rules, see [`validate_sentence`].
pub fn is_sentence_valid(sentence: &str) -> bool {
    validate_sentence(sentence).is_ok()
}

fn check_rules(bytes: &[u8]) -> Result<(), SentenceError> {
    let (first, last) = match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(SentenceError::Empty),
    };

    if first.is_ascii_lowercase() {
        return Err(SentenceError::LowercaseStart);
    }

    let count = bytes.iter().filter(|b| **b == b'"').count();
    if count % 2 != 0 {
        return Err(SentenceError::UnbalancedQuotes { count });
    }

    if !matches!(last, b'.' | b'?' | b'!') {
        return Err(SentenceError::MissingTerminator);
    }

    if let Some(offset) = bytes.iter().position(|b| *b == b'.') {
        if offset < bytes.len() - 1 {
            return Err(SentenceError::InteriorPeriod { offset });
        }
    }

    check_numbers(bytes)
}

fn check_numbers(bytes: &[u8]) -> Result<(), SentenceError> {
    let mut rest = bytes;

    loop {
        let mut numbers = Generator::new(DecimalNumbers::<u64>::from_bytes(rest));

        loop {
            match numbers.next() {
                Ok(value) => {
                    tracing::trace!(value, "pulled number");
                    if value < SMALLEST_NUMERAL {
                        return Err(SentenceError::NumberBelowThirteen { value });
                    }
                }
                Err(GeneratorError::Exhausted) => return Ok(()),
                Err(GeneratorError::Producer(DigitsError::Overflow { offset, len })) => {
                    // Too large for a u64, so certainly not below thirteen.
                    tracing::trace!(offset, len, "skipped overflowing number");
                    break;
                }
            }
        }

        // A generator is done after its producer emitted an error, so continue with a fresh one.
        rest = numbers.as_ref().remaining();
    }
}
