//! A family of macros for defining opaque producers around [`Invariant`](crate::producer::Invariant) wrappers.
//!
//! Each producer of this crate is implemented as a private state machine type, wrapped in an `Invariant`, wrapped in a public newtype. The public newtype is named like the state machine plus a trailing underscore, and gets re-exported under the name of the state machine.

/// Define the public newtype around an `Invariant`-wrapped state machine.
macro_rules! invarianted_producer_outer_type {
    ($(#[$doc:meta])* $outer:ident $inner:ident $(< $( $lt:tt ),+ >)?) => {
        $(#[$doc])*
        pub struct $outer $(< $( $lt ),+ >)?(crate::producer::Invariant<$inner $(< $( $lt ),+ >)?>);
    }
}

/// Implement `Debug` for an opaque invariant wrapper type.
macro_rules! invarianted_impl_debug {
    ($outer:ident $(< $( $lt:tt $( : $clt:tt $(+ $dlt:tt )* )? ),+ >)? ) => {
        impl $(< $( $lt $( : $clt $(+ $dlt )* )? ),+ >)?
            core::fmt::Debug
        for $outer
            $(< $( $lt ),+ >)?
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Debug::fmt(&self.0, f)
            }
        }
    }
}

/// Implement `Producer` for an opaque invariant wrapper type by delegating to the wrapped state machine.
macro_rules! invarianted_impl_producer {
    ($outer:ident $(< $( $lt:tt $( : $clt:tt $(+ $dlt:tt )* )? ),+ >)? Item $t_item:ty; $(#[$doc_final:meta])* Final $t_final:ty; Error $t_error:ty) => {
        impl $(< $( $lt $( : $clt $(+ $dlt )* )? ),+ >)?
            crate::producer::Producer
        for $outer
            $(< $( $lt ),+ >)?
        {
            type Item = $t_item;
            $(#[$doc_final])*
            type Final = $t_final;
            type Error = $t_error;

            fn produce(
                &mut self,
            ) -> Result<crate::Either<Self::Item, Self::Final>, Self::Error> {
                crate::producer::Producer::produce(&mut self.0)
            }
        }
    }
}
