//! Callable traits shared by every functor and adaptor in the crate.
//!
//! Rust closures cannot be implemented by user types on stable, so the
//! crate describes callables through two small traits instead:
//!
//! - [`UnaryFunction`]: a callable taking one argument of type `A`
//! - [`BinaryFunction`]: a callable taking two arguments of types `A` and `B`
//!
//! The argument types are generic parameters and the result type is the
//! associated `Output`, so a single functor can accept several argument
//! shapes (owned values, references, smart pointers) while its result type
//! is always determined by those arguments.
//!
//! Every closure and function item implements these traits through blanket
//! implementations, which means adaptors accept plain closures wherever they
//! accept a functor.
//!
//! Combinator methods (`bind_first`, `negate_unary`, ...) live on
//! [`FunctionExt`](crate::adaptors::FunctionExt) because they do not mention
//! the argument types and so cannot be resolved through these traits.
//!
//! # Examples
//!
//! ```rust
//! use fnadapt::function::{BinaryFunction, UnaryFunction};
//!
//! let double = |value: i32| value * 2;
//! assert_eq!(double.apply(21), 42);
//!
//! let add = |first: i32, second: i32| first + second;
//! assert_eq!(add.apply(2, 3), 5);
//! ```
//!
//! ## Handing a functor to an algorithm
//!
//! ```rust
//! use fnadapt::function::UnaryFunction;
//! use fnadapt::adaptors::unary_negator;
//!
//! let is_even = |value: &i32| value % 2 == 0;
//! let odd: Vec<i32> = vec![1, 2, 3, 4, 5]
//!     .iter()
//!     .copied()
//!     .filter(|value| unary_negator(is_even).apply(value))
//!     .collect();
//! assert_eq!(odd, vec![1, 3, 5]);
//! ```

/// A callable value taking one argument.
///
/// # Type Parameters
///
/// - `A`: The argument type
///
/// # Examples
///
/// ```rust
/// use fnadapt::function::UnaryFunction;
/// use fnadapt::operators::negate;
///
/// assert_eq!(negate::<i32>().apply(5), -5);
/// assert_eq!(negate::<i32>().apply(&-5), 5);
/// ```
pub trait UnaryFunction<A> {
    /// The result type of the call.
    type Output;

    /// Invokes the function with `argument`.
    fn apply(&self, argument: A) -> Self::Output;

    /// Converts this function into a plain closure.
    ///
    /// Useful for APIs that take `impl Fn`, such as iterator adaptors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fnadapt::function::UnaryFunction;
    /// use fnadapt::operators::negate;
    ///
    /// let negate_all = UnaryFunction::<i32>::into_fn(negate::<i32>());
    /// let negated: Vec<i32> = vec![1, 2, 3].into_iter().map(negate_all).collect();
    /// assert_eq!(negated, vec![-1, -2, -3]);
    /// ```
    fn into_fn(self) -> impl Fn(A) -> Self::Output
    where
        Self: Sized,
    {
        move |argument| self.apply(argument)
    }
}

/// A callable value taking two arguments.
///
/// # Type Parameters
///
/// - `A`: The first argument type
/// - `B`: The second argument type
///
/// # Examples
///
/// ```rust
/// use fnadapt::function::BinaryFunction;
/// use fnadapt::operators::less;
///
/// assert!(less::<i32>().apply(1, 2));
/// assert!(!less::<i32>().apply(&2, &1));
/// ```
pub trait BinaryFunction<A, B> {
    /// The result type of the call.
    type Output;

    /// Invokes the function with `first` and `second`.
    fn apply(&self, first: A, second: B) -> Self::Output;

    /// Converts this function into a plain closure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::plus;
    ///
    /// let add = BinaryFunction::<i32, i32>::into_fn(plus::<i32>());
    /// let total = vec![1, 2, 3].into_iter().fold(0, add);
    /// assert_eq!(total, 6);
    /// ```
    fn into_fn(self) -> impl Fn(A, B) -> Self::Output
    where
        Self: Sized,
    {
        move |first, second| self.apply(first, second)
    }
}

impl<A, R, F> UnaryFunction<A> for F
where
    F: Fn(A) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, argument: A) -> R {
        self(argument)
    }
}

impl<A, B, R, F> BinaryFunction<A, B> for F
where
    F: Fn(A, B) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, first: A, second: B) -> R {
        self(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(value: i32) -> i32 {
        value * value
    }

    fn apply_twice<F: UnaryFunction<i32, Output = i32>>(function: &F, value: i32) -> i32 {
        function.apply(function.apply(value))
    }

    #[test]
    fn test_function_item_is_unary_function() {
        assert_eq!(square.apply(4), 16);
        assert_eq!(apply_twice(&square, 3), 81);
    }

    #[test]
    fn test_closure_with_reference_argument() {
        let length = |text: &str| text.len();
        assert_eq!(length.apply("hello"), 5);
    }

    #[test]
    fn test_binary_closure() {
        let concatenate = |first: &str, second: &str| format!("{first}{second}");
        assert_eq!(concatenate.apply("foo", "bar"), "foobar");
    }

    #[test]
    fn test_into_fn_round_trip() {
        let closure = UnaryFunction::<i32>::into_fn(|value: i32| value + 1);
        assert_eq!(closure(1), 2);
    }
}
