//! Argument binders.
//!
//! A binder fixes one argument of a binary function, producing a unary
//! function:
//!
//! ```text
//! bind_first(f, v)(x)  = f(v, x)
//! bind_second(f, v)(x) = f(x, v)
//! ```
//!
//! The bound value is stored in the binder and lent to the wrapped function
//! by reference on every call (`&V`), so it is never cloned. Operator
//! functors accept references directly; closures should take the bound
//! argument as a reference.
//!
//! [`bind_first_cloned`] and [`bind_second_cloned`] instead hand a clone of
//! the bound value to the wrapped function, for callables that take both
//! arguments by value such as [`functor2`](super::functor2).
//!
//! # Examples
//!
//! ```rust
//! use fnadapt::adaptors::{bind_first, bind_second};
//! use fnadapt::function::UnaryFunction;
//! use fnadapt::operators::{less, minus};
//!
//! let below_ten = bind_second(less::<i32>(), 10);
//! assert!(below_ten.apply(5));
//! assert!(!below_ten.apply(15));
//!
//! let hundred_minus = bind_first(minus::<i32>(), 100);
//! assert_eq!(hundred_minus.apply(1), 99);
//!
//! let has_prefix = bind_second(|text: &str, prefix: &String| text.starts_with(prefix.as_str()), "ab".to_string());
//! assert!(has_prefix.apply("abc"));
//! ```

use crate::function::{BinaryFunction, UnaryFunction};

/// A unary function with the first argument of a binary function fixed.
///
/// Created by [`bind_first`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindFirst<F, V> {
    function: F,
    value: V,
}

impl<F, V> BindFirst<F, V> {
    /// Creates a binder that passes `value` as the first argument of
    /// `function`.
    #[inline]
    #[must_use]
    pub const fn new(function: F, value: V) -> Self {
        Self { function, value }
    }

    /// Returns a reference to the bound value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the binder and returns the function and the bound value.
    #[inline]
    pub fn into_parts(self) -> (F, V) {
        (self.function, self.value)
    }
}

impl<X, F, V, R> UnaryFunction<X> for BindFirst<F, V>
where
    F: for<'v> BinaryFunction<&'v V, X, Output = R>,
{
    type Output = R;

    #[inline]
    fn apply(&self, argument: X) -> R {
        self.function.apply(&self.value, argument)
    }
}

/// A unary function with the second argument of a binary function fixed.
///
/// Created by [`bind_second`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindSecond<F, V> {
    function: F,
    value: V,
}

impl<F, V> BindSecond<F, V> {
    /// Creates a binder that passes `value` as the second argument of
    /// `function`.
    #[inline]
    #[must_use]
    pub const fn new(function: F, value: V) -> Self {
        Self { function, value }
    }

    /// Returns a reference to the bound value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the binder and returns the function and the bound value.
    #[inline]
    pub fn into_parts(self) -> (F, V) {
        (self.function, self.value)
    }
}

impl<X, F, V, R> UnaryFunction<X> for BindSecond<F, V>
where
    F: for<'v> BinaryFunction<X, &'v V, Output = R>,
{
    type Output = R;

    #[inline]
    fn apply(&self, argument: X) -> R {
        self.function.apply(argument, &self.value)
    }
}

/// A [`BindFirst`] that passes a clone of the bound value by value.
///
/// Created by [`bind_first_cloned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindFirstCloned<F, V> {
    function: F,
    value: V,
}

impl<F, V> BindFirstCloned<F, V> {
    /// Creates a binder that passes a clone of `value` as the first argument
    /// of `function`.
    #[inline]
    #[must_use]
    pub const fn new(function: F, value: V) -> Self {
        Self { function, value }
    }

    /// Returns a reference to the bound value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the binder and returns the function and the bound value.
    #[inline]
    pub fn into_parts(self) -> (F, V) {
        (self.function, self.value)
    }
}

impl<X, F, V> UnaryFunction<X> for BindFirstCloned<F, V>
where
    F: BinaryFunction<V, X>,
    V: Clone,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, argument: X) -> F::Output {
        self.function.apply(self.value.clone(), argument)
    }
}

/// A [`BindSecond`] that passes a clone of the bound value by value.
///
/// Created by [`bind_second_cloned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindSecondCloned<F, V> {
    function: F,
    value: V,
}

impl<F, V> BindSecondCloned<F, V> {
    /// Creates a binder that passes a clone of `value` as the second
    /// argument of `function`.
    #[inline]
    #[must_use]
    pub const fn new(function: F, value: V) -> Self {
        Self { function, value }
    }

    /// Returns a reference to the bound value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the binder and returns the function and the bound value.
    #[inline]
    pub fn into_parts(self) -> (F, V) {
        (self.function, self.value)
    }
}

impl<X, F, V> UnaryFunction<X> for BindSecondCloned<F, V>
where
    F: BinaryFunction<X, V>,
    V: Clone,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, argument: X) -> F::Output {
        self.function.apply(argument, self.value.clone())
    }
}

/// Converts `function` into a unary function by binding its first argument
/// to `value`.
#[inline]
#[must_use]
pub const fn bind_first<F, V>(function: F, value: V) -> BindFirst<F, V> {
    BindFirst::new(function, value)
}

/// Converts `function` into a unary function by binding its second argument
/// to `value`.
#[inline]
#[must_use]
pub const fn bind_second<F, V>(function: F, value: V) -> BindSecond<F, V> {
    BindSecond::new(function, value)
}

/// Like [`bind_first`], but `function` receives a clone of `value` on every
/// call.
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::{bind_first_cloned, functor2};
/// use fnadapt::function::UnaryFunction;
///
/// fn subtract(first: i32, second: i32) -> i32 {
///     first - second
/// }
///
/// let hundred_minus = bind_first_cloned(functor2(subtract as fn(i32, i32) -> i32), 100);
/// assert_eq!(hundred_minus.apply(1), 99);
/// ```
#[inline]
#[must_use]
pub const fn bind_first_cloned<F, V>(function: F, value: V) -> BindFirstCloned<F, V> {
    BindFirstCloned::new(function, value)
}

/// Like [`bind_second`], but `function` receives a clone of `value` on every
/// call.
#[inline]
#[must_use]
pub const fn bind_second_cloned<F, V>(function: F, value: V) -> BindSecondCloned<F, V> {
    BindSecondCloned::new(function, value)
}
