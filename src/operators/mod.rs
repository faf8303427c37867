//! Operator functors.
//!
//! This module provides zero-sized callables wrapping each arithmetic,
//! logical and relational operator, so that operators can be passed to
//! algorithms and composed with the adaptors in [`crate::adaptors`].
//!
//! # Overview
//!
//! | Functor            | Constructor         | Result                     |
//! |--------------------|---------------------|----------------------------|
//! | [`Plus`]           | [`plus`]            | `a + b`                    |
//! | [`Minus`]          | [`minus`]           | `a - b`                    |
//! | [`Divides`]        | [`divides`]         | `a / b`                    |
//! | [`Modulus`]        | [`modulus`]         | `a % b`                    |
//! | [`Multiplies`]     | [`multiplies`]      | `a * b`                    |
//! | [`Negate`]         | [`negate`]          | `-a`                       |
//! | [`LogicalAnd`]     | [`logical_and`]     | `a && b`                   |
//! | [`LogicalOr`]      | [`logical_or`]      | `a \|\| b`                 |
//! | [`LogicalNot`]     | [`logical_not`]     | `!a`                       |
//! | [`EqualTo`]        | [`equal_to`]        | `a == b`                   |
//! | [`NotEqualTo`]     | [`not_equal_to`]    | `!(a == b)`                |
//! | [`Greater`]        | [`greater`]         | `b < a`                    |
//! | [`Less`]           | [`less`]            | `a < b`                    |
//! | [`GreaterEqual`]   | [`greater_equal`]   | `b < a \|\| a == b`        |
//! | [`LessEqual`]      | [`less_equal`]      | `a < b \|\| a == b`        |
//! | [`Compare`]        | [`compare`]         | `-1`, `0` or `1`           |
//!
//! The checked family ([`CheckedPlus`], [`CheckedMinus`],
//! [`CheckedMultiplies`], [`CheckedDivides`], [`CheckedModulus`]) reports
//! overflow and division by zero as [`ArithmeticError`] instead of
//! panicking.
//!
//! # Operands
//!
//! Every functor is parameterized by its element type `T` and accepts any
//! operand that implements [`Borrow<T>`](std::borrow::Borrow): owned values,
//! shared or exclusive references, and for `T = str` also `String`.
//!
//! ```rust
//! use fnadapt::function::BinaryFunction;
//! use fnadapt::operators::{equal_to, plus};
//!
//! assert_eq!(plus::<i32>().apply(2, 3), 5);
//! assert_eq!(plus::<i32>().apply(&2, &3), 5);
//!
//! let name = String::from("alice");
//! assert!(equal_to::<str>().apply(name.as_str(), "alice"));
//! assert!(equal_to::<str>().apply(name, "alice"));
//! ```
//!
//! # Partial Orders
//!
//! Relational functors only ever use `<` and `==`, so they keep their
//! documented meaning on partially ordered types:
//!
//! ```rust
//! use fnadapt::function::BinaryFunction;
//! use fnadapt::operators::{greater_equal, less};
//!
//! assert!(!less::<f64>().apply(f64::NAN, 1.0));
//! assert!(!greater_equal::<f64>().apply(f64::NAN, f64::NAN));
//! ```

/// Defines a zero-sized functor struct over an element type `T` together
/// with its snake_case constructor function.
macro_rules! define_functor {
    ($(#[$meta:meta])* $name:ident) => {
        paste::paste! {
            $(#[$meta])*
            pub struct $name<T: ?Sized>(::std::marker::PhantomData<fn(&T)>);

            impl<T: ?Sized> $name<T> {
                #[doc = concat!("Creates a new `", stringify!($name), "` functor.")]
                #[inline]
                #[must_use]
                pub const fn new() -> Self {
                    Self(::std::marker::PhantomData)
                }
            }

            impl<T: ?Sized> Default for $name<T> {
                #[inline]
                fn default() -> Self {
                    Self::new()
                }
            }

            impl<T: ?Sized> Clone for $name<T> {
                #[inline]
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T: ?Sized> Copy for $name<T> {}

            impl<T: ?Sized> ::std::fmt::Debug for $name<T> {
                fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    formatter.write_str(stringify!($name))
                }
            }

            #[doc = concat!("Returns a [`", stringify!($name), "`] functor for element type `T`.")]
            #[inline]
            #[must_use]
            pub const fn [<$name:snake>]<T: ?Sized>() -> $name<T> {
                $name::new()
            }
        }
    };
}

mod arithmetic;
mod checked;
mod comparison;
mod error;
mod logical;

pub use arithmetic::{Divides, Minus, Modulus, Multiplies, Negate, Plus};
pub use arithmetic::{divides, minus, modulus, multiplies, negate, plus};
pub use checked::{
    CheckedArithmetic, CheckedDivides, CheckedMinus, CheckedModulus, CheckedMultiplies,
    CheckedPlus,
};
pub use checked::{
    checked_divides, checked_minus, checked_modulus, checked_multiplies, checked_plus,
};
pub use comparison::{Compare, EqualTo, Greater, GreaterEqual, Less, LessEqual, NotEqualTo};
pub use comparison::{compare, equal_to, greater, greater_equal, less, less_equal, not_equal_to};
pub use error::ArithmeticError;
pub use logical::{LogicalAnd, LogicalNot, LogicalOr};
pub use logical::{logical_and, logical_not, logical_or};

static_assertions::assert_impl_all!(Plus<i32>: Copy, Send, Sync, Default, std::fmt::Debug);
static_assertions::assert_impl_all!(EqualTo<str>: Copy, Send, Sync, Default);
static_assertions::assert_impl_all!(Compare<std::rc::Rc<i32>>: Copy, Send, Sync);
static_assertions::assert_eq_size!(Less<String>, ());
