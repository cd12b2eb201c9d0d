#![no_std]
#![allow(clippy::type_complexity)]

//! Lazy, pull-based generators over suspended producers.
//!
//! A [`Producer`] is a computation that can be suspended: every call to [`produce`](Producer::produce) runs it until its next yield point, where it hands out either a regular item, its final value, or an error. A [`Generator`] wraps exactly one producer and offers the familiar pull interface on top of it: [`has_next`](Generator::has_next) asks whether another item exists, [`next`](Generator::next) moves that item out.
//!
//! ```
//! use pullgen::prelude::*;
//!
//! let mut numbers = extract_decimal_numbers("Are there 11, 12, or 13 lazy dogs?");
//!
//! let mut total = 0;
//! while numbers.has_next()? {
//!     total += numbers.next()?;
//! }
//! assert_eq!(total, 36);
//! # Result::<(), GeneratorError<DigitsError>>::Ok(())
//! ```
//!
//! ## Fundamental Design Choices
//!
//! - Producers are explicit state machines, no stackful coroutines or threads.
//! - Production is lazy; creating a generator runs no producer logic.
//! - A generator holds at most one produced item at a time, it never buffers ahead.
//! - Fatal errors, no resumption of processing after a producer emitted an error.
//! - Producers emit a dedicated final value once they are done.
//! - `nostd` by default.
//!
//! ## Module Overview
//!
//! The [`producer`] module defines the [`Producer`] trait and some general-purpose producers, the [`generator`] module defines the pull interface on top of it. The [`digits`] module provides a producer of the decimal numbers embedded in a string, and the [`sentence`] module uses it to validate sentences against a handful of lexical rules.

#[cfg(any(feature = "std", test))]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

// We re-export Either here so the macros of this crate can reliably refer to it.
#[doc(hidden)]
pub use either::Either;

#[macro_use]
mod macros;

mod errors;
pub use errors::*;

pub mod producer;
pub use producer::Producer;

pub mod generator;
pub use generator::Generator;

pub mod digits;
pub use digits::{extract_decimal_numbers, extract_decimal_numbers_as, DecimalNumbers, DigitsError};

pub mod sentence;
pub use sentence::{is_sentence_valid, validate_sentence, SentenceError};

/// A “prelude” for crates using the `pullgen` crate.
///
/// This prelude is similar to the standard library’s prelude in that you’ll almost always want to import its entire contents, but unlike the standard library’s prelude you’ll have to do so manually:
///
/// use pullgen::prelude::*;
///
/// The prelude may grow over time.
pub mod prelude {
    pub use crate::{
        extract_decimal_numbers, extract_decimal_numbers_as, producer, DigitsError, Generator,
        GeneratorError, Producer,
    };

    #[cfg(feature = "alloc")]
    pub use crate::producer::{TestProducer, TestProducerBuilder};

    pub use either::Either::{self, Left, Right};

    pub use core::convert::Infallible;
}
