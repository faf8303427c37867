//! Checked arithmetic functors.
//!
//! These mirror [`Plus`](super::Plus), [`Minus`](super::Minus),
//! [`Multiplies`](super::Multiplies), [`Divides`](super::Divides) and
//! [`Modulus`](super::Modulus) for primitive integers, but return
//! `Result<T, ArithmeticError>` instead of panicking or wrapping.
//!
//! # Examples
//!
//! ```rust
//! use fnadapt::function::BinaryFunction;
//! use fnadapt::operators::{checked_plus, ArithmeticError};
//!
//! assert_eq!(checked_plus::<u8>().apply(200, 55), Ok(255));
//! assert_eq!(
//!     checked_plus::<u8>().apply(200, 56),
//!     Err(ArithmeticError::Overflow { operation: "plus" })
//! );
//! ```

use std::borrow::Borrow;

use super::ArithmeticError;
use crate::function::BinaryFunction;

/// Integer types supporting checked arithmetic.
///
/// Implemented for every primitive integer type.
pub trait CheckedArithmetic: Copy {
    /// Returns `true` if the value is zero.
    fn is_zero(self) -> bool;

    /// Checked addition; `None` on overflow.
    fn try_add(self, other: Self) -> Option<Self>;

    /// Checked subtraction; `None` on overflow.
    fn try_sub(self, other: Self) -> Option<Self>;

    /// Checked multiplication; `None` on overflow.
    fn try_mul(self, other: Self) -> Option<Self>;

    /// Checked division; `None` on zero divisor or overflow.
    fn try_div(self, other: Self) -> Option<Self>;

    /// Checked remainder; `None` on zero divisor or overflow.
    fn try_rem(self, other: Self) -> Option<Self>;
}

macro_rules! impl_checked_arithmetic {
    ($($integer:ty),* $(,)?) => {
        $(
            impl CheckedArithmetic for $integer {
                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn try_add(self, other: Self) -> Option<Self> {
                    <$integer>::checked_add(self, other)
                }

                #[inline]
                fn try_sub(self, other: Self) -> Option<Self> {
                    <$integer>::checked_sub(self, other)
                }

                #[inline]
                fn try_mul(self, other: Self) -> Option<Self> {
                    <$integer>::checked_mul(self, other)
                }

                #[inline]
                fn try_div(self, other: Self) -> Option<Self> {
                    <$integer>::checked_div(self, other)
                }

                #[inline]
                fn try_rem(self, other: Self) -> Option<Self> {
                    <$integer>::checked_rem(self, other)
                }
            }
        )*
    };
}

impl_checked_arithmetic!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

define_functor! {
    /// Binary functor computing `a + b`, reporting overflow as an error.
    CheckedPlus
}

define_functor! {
    /// Binary functor computing `a - b`, reporting overflow as an error.
    CheckedMinus
}

define_functor! {
    /// Binary functor computing `a * b`, reporting overflow as an error.
    CheckedMultiplies
}

define_functor! {
    /// Binary functor computing `a / b`.
    ///
    /// Reports a zero divisor as [`ArithmeticError::DivisionByZero`] and
    /// `MIN / -1` as [`ArithmeticError::Overflow`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::{checked_divides, ArithmeticError};
    ///
    /// assert_eq!(checked_divides::<i8>().apply(-128, 2), Ok(-64));
    /// assert_eq!(
    ///     checked_divides::<i8>().apply(-128, -1),
    ///     Err(ArithmeticError::Overflow { operation: "divides" })
    /// );
    /// ```
    CheckedDivides
}

define_functor! {
    /// Binary functor computing `a % b`.
    ///
    /// Reports a zero divisor as [`ArithmeticError::DivisionByZero`].
    CheckedModulus
}

/// Implements [`BinaryFunction`] for a checked functor.
macro_rules! checked_functor {
    ($name:ident, $method:ident, $operation:literal, divisor_checked = $divisor_checked:literal) => {
        impl<T, A, B> BinaryFunction<A, B> for $name<T>
        where
            T: CheckedArithmetic,
            A: Borrow<T>,
            B: Borrow<T>,
        {
            type Output = Result<T, ArithmeticError>;

            #[inline]
            fn apply(&self, first: A, second: B) -> Self::Output {
                let first: T = *first.borrow();
                let second: T = *second.borrow();
                if $divisor_checked && second.is_zero() {
                    return Err(ArithmeticError::DivisionByZero {
                        operation: $operation,
                    });
                }
                first
                    .$method(second)
                    .ok_or(ArithmeticError::Overflow {
                        operation: $operation,
                    })
            }
        }
    };
}

checked_functor!(CheckedPlus, try_add, "plus", divisor_checked = false);
checked_functor!(CheckedMinus, try_sub, "minus", divisor_checked = false);
checked_functor!(CheckedMultiplies, try_mul, "multiplies", divisor_checked = false);
checked_functor!(CheckedDivides, try_div, "divides", divisor_checked = true);
checked_functor!(CheckedModulus, try_rem, "modulus", divisor_checked = true);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(i32::MAX, 1)]
    #[case(i32::MIN, -1)]
    fn test_plus_overflow(#[case] first: i32, #[case] second: i32) {
        assert_eq!(
            checked_plus::<i32>().apply(first, second),
            Err(ArithmeticError::Overflow { operation: "plus" })
        );
    }

    #[test]
    fn test_in_range_results_match_operators() {
        assert_eq!(checked_plus::<i32>().apply(2, 3), Ok(5));
        assert_eq!(checked_minus::<i32>().apply(2, 3), Ok(-1));
        assert_eq!(checked_multiplies::<i32>().apply(6, 7), Ok(42));
        assert_eq!(checked_divides::<i32>().apply(7, 2), Ok(3));
        assert_eq!(checked_modulus::<i32>().apply(7, 2), Ok(1));
    }

    #[test]
    fn test_unsigned_underflow() {
        assert_eq!(
            checked_minus::<u32>().apply(0, 1),
            Err(ArithmeticError::Overflow { operation: "minus" })
        );
    }

    #[test]
    fn test_modulus_by_zero() {
        assert_eq!(
            checked_modulus::<u64>().apply(&10, &0),
            Err(ArithmeticError::DivisionByZero { operation: "modulus" })
        );
    }

    #[test]
    fn test_multiplies_overflow() {
        assert!(checked_multiplies::<i64>().apply(i64::MAX, 2).is_err());
    }
}
