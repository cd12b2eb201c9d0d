mod sealed {
    pub trait Sealed {}
}

/// The primitive unsigned integer types that [`DecimalNumbers`](crate::DecimalNumbers) can produce.
///
/// This trait is sealed; it is implemented for `u8`, `u16`, `u32`, `u64`, `u128`, and `usize`.
pub trait Unsigned: Copy + sealed::Sealed {
    /// The value of an empty digit run.
    const ZERO: Self;

    /// Appends a decimal digit (a value from 0 to 9) to the right of `self`, returning `None` if the result does not fit into `Self`.
    fn checked_push_digit(self, digit: u8) -> Option<Self>;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Unsigned for $t {
                const ZERO: Self = 0;

                fn checked_push_digit(self, digit: u8) -> Option<Self> {
                    self.checked_mul(10)?.checked_add(<$t>::from(digit))
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
