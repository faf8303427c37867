//! Function-pointer-to-functor converters.
//!
//! Closures and function items already implement
//! [`UnaryFunction`] and [`BinaryFunction`]; the wrappers here exist for the
//! cases where a nameable, copyable functor type is needed, for example as
//! a struct field.
//!
//! # Examples
//!
//! ```rust
//! use fnadapt::adaptors::{functor1, functor2, Functor1};
//! use fnadapt::function::{BinaryFunction, UnaryFunction};
//!
//! fn square(value: i64) -> i64 { value * value }
//! fn hypotenuse(first: f64, second: f64) -> f64 { first.hypot(second) }
//!
//! struct Pipeline { step: Functor1<i64, i64> }
//!
//! let pipeline = Pipeline { step: functor1(square) };
//! assert_eq!(pipeline.step.apply(12), 144);
//! assert!((functor2(hypotenuse).apply(3.0, 4.0) - 5.0).abs() < 1e-12);
//! ```

use crate::function::{BinaryFunction, UnaryFunction};

/// A unary functor wrapping a function pointer.
///
/// Created by [`functor1`]. The wrapper does not own the function; it only
/// stores the pointer, so copies share the same function.
pub struct Functor1<A, R> {
    function: fn(A) -> R,
}

impl<A, R> Functor1<A, R> {
    /// Wraps `function` into a functor.
    #[inline]
    #[must_use]
    pub const fn new(function: fn(A) -> R) -> Self {
        Self { function }
    }

    /// Returns the wrapped function pointer.
    #[inline]
    #[must_use]
    pub const fn function(&self) -> fn(A) -> R {
        self.function
    }
}

impl<A, R> UnaryFunction<A> for Functor1<A, R> {
    type Output = R;

    #[inline]
    fn apply(&self, argument: A) -> R {
        (self.function)(argument)
    }
}

impl<A, R> Clone for Functor1<A, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, R> Copy for Functor1<A, R> {}

impl<A, R> std::fmt::Debug for Functor1<A, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Functor1").finish_non_exhaustive()
    }
}

/// A binary functor wrapping a function pointer.
///
/// Created by [`functor2`].
pub struct Functor2<A, B, R> {
    function: fn(A, B) -> R,
}

impl<A, B, R> Functor2<A, B, R> {
    /// Wraps `function` into a functor.
    #[inline]
    #[must_use]
    pub const fn new(function: fn(A, B) -> R) -> Self {
        Self { function }
    }

    /// Returns the wrapped function pointer.
    #[inline]
    #[must_use]
    pub const fn function(&self) -> fn(A, B) -> R {
        self.function
    }
}

impl<A, B, R> BinaryFunction<A, B> for Functor2<A, B, R> {
    type Output = R;

    #[inline]
    fn apply(&self, first: A, second: B) -> R {
        (self.function)(first, second)
    }
}

impl<A, B, R> Clone for Functor2<A, B, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B, R> Copy for Functor2<A, B, R> {}

impl<A, B, R> std::fmt::Debug for Functor2<A, B, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("Functor2").finish_non_exhaustive()
    }
}

/// Wraps a one-argument function pointer into a [`Functor1`].
///
/// Invoking the functor forwards the argument unchanged and returns the
/// function's result.
#[inline]
#[must_use]
pub const fn functor1<A, R>(function: fn(A) -> R) -> Functor1<A, R> {
    Functor1::new(function)
}

/// Wraps a two-argument function pointer into a [`Functor2`].
#[inline]
#[must_use]
pub const fn functor2<A, B, R>(function: fn(A, B) -> R) -> Functor2<A, B, R> {
    Functor2::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn increment(value: i32) -> i32 {
        value + 1
    }

    fn describe(name: &str, count: usize) -> String {
        format!("{name}:{count}")
    }

    #[test]
    fn test_functor1_forwards_argument() {
        let wrapped = functor1(increment);
        assert_eq!(wrapped.apply(41), 42);
    }

    #[test]
    fn test_functor2_forwards_arguments() {
        let wrapped = functor2(describe);
        assert_eq!(wrapped.apply("items", 3), "items:3");
    }

    #[test]
    fn test_copies_share_function() {
        let original = functor1(increment);
        let copy = original;
        assert_eq!(original.apply(1), copy.apply(1));
        assert!(std::ptr::fn_addr_eq(original.function(), copy.function()));
    }
}
