//! Negators: adaptors inverting a predicate's result.
//!
//! # Laws
//!
//! - **Definition**: `unary_negator(f)(x) == !f(x)`
//! - **Double negation**: `unary_negator(unary_negator(f))(x) == f(x)` for
//!   boolean predicates

use std::ops::Not;

use crate::function::{BinaryFunction, UnaryFunction};

/// A unary function returning the negation of the wrapped function's result.
///
/// Created by [`unary_negator`]. The wrapped function is moved into the
/// negator; its argument and result types are taken from it.
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::unary_negator;
/// use fnadapt::function::UnaryFunction;
///
/// let is_empty = |text: &str| text.is_empty();
/// let is_not_empty = unary_negator(is_empty);
/// assert!(is_not_empty.apply("text"));
/// assert!(!is_not_empty.apply(""));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnaryNegate<F> {
    function: F,
}

impl<F> UnaryNegate<F> {
    /// Creates a new negator around `function`.
    #[inline]
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Consumes the negator and returns the wrapped function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<A, F> UnaryFunction<A> for UnaryNegate<F>
where
    F: UnaryFunction<A>,
    F::Output: Not,
{
    type Output = <F::Output as Not>::Output;

    #[inline]
    fn apply(&self, argument: A) -> Self::Output {
        !self.function.apply(argument)
    }
}

/// A binary function returning the negation of the wrapped function's result.
///
/// Created by [`binary_negator`].
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::binary_negator;
/// use fnadapt::function::BinaryFunction;
/// use fnadapt::operators::equal_to;
///
/// let differs = binary_negator(equal_to::<char>());
/// assert!(differs.apply('a', 'b'));
/// assert!(!differs.apply('a', 'a'));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BinaryNegate<F> {
    function: F,
}

impl<F> BinaryNegate<F> {
    /// Creates a new negator around `function`.
    #[inline]
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Consumes the negator and returns the wrapped function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<A, B, F> BinaryFunction<A, B> for BinaryNegate<F>
where
    F: BinaryFunction<A, B>,
    F::Output: Not,
{
    type Output = <F::Output as Not>::Output;

    #[inline]
    fn apply(&self, first: A, second: B) -> Self::Output {
        !self.function.apply(first, second)
    }
}

/// Returns a functor that negates the result of `function`.
#[inline]
#[must_use]
pub const fn unary_negator<F>(function: F) -> UnaryNegate<F> {
    UnaryNegate::new(function)
}

/// Returns a functor that negates the result of the binary `function`.
#[inline]
#[must_use]
pub const fn binary_negator<F>(function: F) -> BinaryNegate<F> {
    BinaryNegate::new(function)
}
