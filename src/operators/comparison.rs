//! Relational operator functors.
//!
//! All functors here are written in terms of `<` and `==` only:
//!
//! ```text
//! greater(a, b)       = b < a
//! greater_equal(a, b) = b < a || a == b
//! less_equal(a, b)    = a < b || a == b
//! compare(a, b)       = a < b ? -1 : (a == b ? 0 : 1)
//! ```
//!
//! For totally ordered types this is the usual meaning. For partially
//! ordered types (`f64` with `NaN`) the results follow from the formulas
//! above rather than from `>=`/`<=`.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::function::BinaryFunction;

define_functor! {
    /// Binary predicate `a == b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::equal_to;
    ///
    /// assert!(equal_to::<i32>().apply(3, 3));
    /// assert!(!equal_to::<i32>().apply(3, 4));
    /// ```
    EqualTo
}

define_functor! {
    /// Binary predicate `!(a == b)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::not_equal_to;
    ///
    /// assert!(not_equal_to::<i32>().apply(3, 4));
    /// ```
    NotEqualTo
}

define_functor! {
    /// Binary predicate `b < a`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::greater;
    ///
    /// assert!(greater::<i32>().apply(4, 3));
    /// ```
    Greater
}

define_functor! {
    /// Binary predicate `a < b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::less;
    ///
    /// assert!(less::<i32>().apply(3, 4));
    /// assert!(!less::<i32>().apply(4, 4));
    /// ```
    Less
}

define_functor! {
    /// Binary predicate `b < a || a == b`.
    GreaterEqual
}

define_functor! {
    /// Binary predicate `a < b || a == b`.
    LessEqual
}

define_functor! {
    /// Three-way comparison returning `-1`, `0` or `1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::compare;
    ///
    /// assert_eq!(compare::<i32>().apply(1, 2), -1);
    /// assert_eq!(compare::<i32>().apply(2, 2), 0);
    /// assert_eq!(compare::<i32>().apply(3, 1), 1);
    /// ```
    Compare
}

/// Implements [`BinaryFunction`] for a relational functor.
macro_rules! relational_functor {
    ($name:ident, $bound:ident, |$first:ident, $second:ident| $body:expr) => {
        impl<T, A, B> BinaryFunction<A, B> for $name<T>
        where
            T: ?Sized + $bound,
            A: Borrow<T>,
            B: Borrow<T>,
        {
            type Output = bool;

            #[inline]
            fn apply(&self, first: A, second: B) -> bool {
                let $first: &T = first.borrow();
                let $second: &T = second.borrow();
                $body
            }
        }
    };
}

relational_functor!(EqualTo, PartialEq, |first, second| first == second);
relational_functor!(NotEqualTo, PartialEq, |first, second| !(first == second));
relational_functor!(Greater, PartialOrd, |first, second| second < first);
relational_functor!(Less, PartialOrd, |first, second| first < second);
relational_functor!(GreaterEqual, PartialOrd, |first, second| second < first
    || first == second);
relational_functor!(LessEqual, PartialOrd, |first, second| first < second
    || first == second);

impl<T, A, B> BinaryFunction<A, B> for Compare<T>
where
    T: ?Sized + PartialOrd,
    A: Borrow<T>,
    B: Borrow<T>,
{
    type Output = i32;

    #[inline]
    fn apply(&self, first: A, second: B) -> i32 {
        let first: &T = first.borrow();
        let second: &T = second.borrow();
        if first < second {
            -1
        } else if first == second {
            0
        } else {
            1
        }
    }
}

impl<T: ?Sized + PartialOrd> Compare<T> {
    /// Compares two operands and returns the result as an [`Ordering`].
    ///
    /// `-1` maps to [`Ordering::Less`], `0` to [`Ordering::Equal`] and
    /// everything else to [`Ordering::Greater`], which makes the functor
    /// usable with `sort_by`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fnadapt::operators::compare;
    ///
    /// let mut values = vec![3, 1, 2];
    /// values.sort_by(|first, second| compare::<i32>().ordering(first, second));
    /// assert_eq!(values, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn ordering<A: Borrow<T>, B: Borrow<T>>(&self, first: A, second: B) -> Ordering {
        match self.apply(first, second) {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }
}
