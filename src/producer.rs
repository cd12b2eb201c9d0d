//! The [`Producer`] trait, and useful functionality for working with producers.
//!
//! A producer is a suspended computation. Each call to [`produce`](Producer::produce) resumes it until its next yield point, where it hands out the next item of its sequence. Once the sequence is over, the producer emits a dedicated final value instead, or an error if something went wrong. Producers never run unless they are resumed, and they do nothing in between two resumptions.
//!
//! ## Obtaining Producers
//!
//! The [FromFn] producer runs a closure on every resumption, and the [IteratorToProducer] adaptor treats any [`Iterator`] as a producer. The [`DecimalNumbers`](crate::DecimalNumbers) producer scans a string for the numbers it contains.
//!
//! ## Development Helpers
//!
//! The [Invariant] adaptor wraps any producer and makes it panic during tests when some client code violates the API contracts imposed by the producer trait. In production builds, the wrapper does nothing and compiles away without any overhead. We recommend using this wrapper as an implementation detail of all custom producers; all state machine producers in this crate use this wrapper internally.
//!
//! The [TestProducer] exists for testing code that interacts with arbitrary producers; it emits a predetermined sequence of items, followed by a predetermined final value or error. With the `dev` feature enabled, it implements `Arbitrary`, which makes it suitable for [fuzzing](https://rust-fuzz.github.io/book/introduction.html).

use either::Either;

mod from_fn;
pub use from_fn::FromFn;

mod iterator_to_producer;
pub use iterator_to_producer::IteratorToProducer;

// During testing we use a wrapper which panics on invariant transgressions.
// The no-op version of the wrapper is used for production code compilation.
#[cfg(test)]
mod invariant;
#[cfg(not(test))]
mod invariant_noop;
#[cfg(test)]
pub use invariant::Invariant;
#[cfg(not(test))]
pub use invariant_noop::Invariant;

#[cfg(feature = "alloc")]
mod test_producer;
#[cfg(feature = "alloc")]
pub use test_producer::{TestProducerBuilder, TestProducer_ as TestProducer};

/// A `Producer` produces a potentially infinite sequence, one item at a time.
///
/// The sequence consists of an arbitrary number of values of type `Self::Item`, followed by up to one value of type `Self::Final`. If you intend for the sequence to be infinite, use [`Infallible`](core::convert::Infallible) for `Self::Final`.
///
/// A producer can also signal an error of type `Self::Error` instead of producing an item.
pub trait Producer {
    /// The sequence produced by this producer *starts* with *arbitrarily many* values of this type.
    type Item;
    /// The sequence produced by this producer *ends* with *up to one* value of this type.
    type Final;
    /// The type of errors the producer can emit instead of doing its job.
    type Error;

    /// Resume the producer until it yields its next item, which is either a regular repeated item, or the final item.
    ///
    /// After this function returns the final item, or after it returns an error, no further functions of this trait may be invoked.
    ///
    /// #### Invariants
    ///
    /// Must not be called after any function of this trait returned a final item or an error.
    fn produce(&mut self) -> Result<Either<Self::Item, Self::Final>, Self::Error>;
}

impl<P: Producer + ?Sized> Producer for &mut P {
    type Item = P::Item;
    type Final = P::Final;
    type Error = P::Error;

    fn produce(&mut self) -> Result<Either<Self::Item, Self::Final>, Self::Error> {
        (**self).produce()
    }
}
