//! Arithmetic operator functors.
//!
//! Each functor clones its borrowed operands and applies the owned operator
//! impl of its element type (`T + T -> T`), so any type with a by-value
//! operator works, e.g. `Duration`. The result follows the native operator
//! exactly, including integer overflow panics in debug builds and IEEE
//! semantics for floating point values.

use std::borrow::Borrow;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use crate::function::{BinaryFunction, UnaryFunction};

/// Implements [`BinaryFunction`] for an arithmetic functor in terms of a
/// `std::ops` trait.
macro_rules! arithmetic_functor {
    ($name:ident, $operator_trait:ident, $operator:tt) => {
        impl<T, A, B> BinaryFunction<A, B> for $name<T>
        where
            A: Borrow<T>,
            B: Borrow<T>,
            T: Clone + $operator_trait<Output = T>,
        {
            type Output = T;

            #[inline]
            fn apply(&self, first: A, second: B) -> T {
                let first: T = first.borrow().clone();
                let second: T = second.borrow().clone();
                first $operator second
            }
        }
    };
}

define_functor! {
    /// Binary functor computing `a + b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::plus;
    ///
    /// assert_eq!(plus::<i32>().apply(2, 3), 5);
    /// assert_eq!(plus::<f64>().apply(0.5, 0.25), 0.75);
    /// ```
    Plus
}

define_functor! {
    /// Binary functor computing `a - b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::minus;
    ///
    /// assert_eq!(minus::<i32>().apply(2, 3), -1);
    /// ```
    Minus
}

define_functor! {
    /// Binary functor computing `a / b`.
    ///
    /// Integer division by zero panics, exactly like the `/` operator. Use
    /// [`CheckedDivides`](super::CheckedDivides) to get an error instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::divides;
    ///
    /// assert_eq!(divides::<i32>().apply(7, 2), 3);
    /// assert_eq!(divides::<f64>().apply(7.0, 2.0), 3.5);
    /// ```
    Divides
}

define_functor! {
    /// Binary functor computing `a % b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::modulus;
    ///
    /// assert_eq!(modulus::<i32>().apply(7, 3), 1);
    /// assert_eq!(modulus::<i32>().apply(-7, 3), -1);
    /// ```
    Modulus
}

define_functor! {
    /// Binary functor computing `a * b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::multiplies;
    ///
    /// assert_eq!(multiplies::<i32>().apply(6, 7), 42);
    /// ```
    Multiplies
}

define_functor! {
    /// Unary functor computing `-a`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::UnaryFunction;
    /// use fnadapt::operators::negate;
    ///
    /// assert_eq!(negate::<i32>().apply(5), -5);
    /// assert_eq!(negate::<f64>().apply(&-1.5), 1.5);
    /// ```
    Negate
}

arithmetic_functor!(Plus, Add, +);
arithmetic_functor!(Minus, Sub, -);
arithmetic_functor!(Divides, Div, /);
arithmetic_functor!(Modulus, Rem, %);
arithmetic_functor!(Multiplies, Mul, *);

impl<T, A> UnaryFunction<A> for Negate<T>
where
    A: Borrow<T>,
    T: Clone + Neg<Output = T>,
{
    type Output = T;

    #[inline]
    fn apply(&self, argument: A) -> T {
        let argument: T = argument.borrow().clone();
        -argument
    }
}
