//! Logical operator functors.

use std::borrow::Borrow;
use std::ops::Not;

use crate::function::{BinaryFunction, UnaryFunction};

define_functor! {
    /// Binary functor computing `a && b`.
    ///
    /// Operands are converted with [`Into<bool>`]; both are already evaluated
    /// when the functor is called, so there is nothing to short-circuit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::logical_and;
    ///
    /// assert!(logical_and::<bool>().apply(true, true));
    /// assert!(!logical_and::<bool>().apply(true, false));
    /// ```
    LogicalAnd
}

define_functor! {
    /// Binary functor computing `a || b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::BinaryFunction;
    /// use fnadapt::operators::logical_or;
    ///
    /// assert!(logical_or::<bool>().apply(false, true));
    /// assert!(!logical_or::<bool>().apply(false, false));
    /// ```
    LogicalOr
}

define_functor! {
    /// Unary functor computing `!a`.
    ///
    /// Clones the operand and uses the [`Not`] impl of `T`, so it also works
    /// as a bitwise complement for integer types.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnadapt::function::UnaryFunction;
    /// use fnadapt::operators::logical_not;
    ///
    /// assert!(logical_not::<bool>().apply(false));
    /// assert_eq!(logical_not::<u8>().apply(0b1111_0000), 0b0000_1111);
    /// ```
    LogicalNot
}

impl<T, A, B> BinaryFunction<A, B> for LogicalAnd<T>
where
    T: Clone + Into<bool>,
    A: Borrow<T>,
    B: Borrow<T>,
{
    type Output = bool;

    #[inline]
    fn apply(&self, first: A, second: B) -> bool {
        let first: &T = first.borrow();
        let second: &T = second.borrow();
        Into::<bool>::into(first.clone()) && Into::<bool>::into(second.clone())
    }
}

impl<T, A, B> BinaryFunction<A, B> for LogicalOr<T>
where
    T: Clone + Into<bool>,
    A: Borrow<T>,
    B: Borrow<T>,
{
    type Output = bool;

    #[inline]
    fn apply(&self, first: A, second: B) -> bool {
        let first: &T = first.borrow();
        let second: &T = second.borrow();
        Into::<bool>::into(first.clone()) || Into::<bool>::into(second.clone())
    }
}

impl<T, A> UnaryFunction<A> for LogicalNot<T>
where
    A: Borrow<T>,
    T: Clone + Not<Output = T>,
{
    type Output = T;

    #[inline]
    fn apply(&self, argument: A) -> T {
        let argument: T = argument.borrow().clone();
        !argument
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false)]
    #[case(false, true)]
    #[case(true, false)]
    #[case(true, true)]
    fn test_truth_tables(#[case] first: bool, #[case] second: bool) {
        assert_eq!(logical_and::<bool>().apply(first, second), first && second);
        assert_eq!(logical_or::<bool>().apply(first, second), first || second);
        assert_eq!(logical_not::<bool>().apply(first), !first);
    }

    #[test]
    fn test_not_on_type_with_owned_operator_only() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        enum Switch {
            On,
            Off,
        }

        impl Not for Switch {
            type Output = Self;

            fn not(self) -> Self {
                match self {
                    Self::On => Self::Off,
                    Self::Off => Self::On,
                }
            }
        }

        assert_eq!(logical_not::<Switch>().apply(Switch::On), Switch::Off);
        assert_eq!(logical_not::<Switch>().apply(&Switch::Off), Switch::On);
    }

    #[test]
    fn test_reference_operands() {
        let flags = [true, false];
        assert!(!logical_and::<bool>().apply(&flags[0], &flags[1]));
        assert!(logical_or::<bool>().apply(&flags[0], &flags[1]));
    }
}
