#![cfg(feature = "adaptors")]
//! Tests for negators.
//!
//! - **Definition**: `unary_negator(f)(x) == !f(x)`, `binary_negator(f)(a, b) == !f(a, b)`
//! - **Double Negation**: negating twice restores the predicate

use fnadapt::adaptors::{FunctionExt, UnaryNegate, bind_second, binary_negator, functor1, unary_negator};
use fnadapt::function::{BinaryFunction, UnaryFunction};
use fnadapt::operators::{equal_to, greater, less, logical_not};
use proptest::prelude::*;

fn is_even(value: i64) -> bool {
    value % 2 == 0
}

#[test]
fn test_negated_function_pointer() {
    let is_odd = unary_negator(functor1(is_even));
    assert!(is_odd.apply(3));
    assert!(!is_odd.apply(4));
}

#[test]
fn test_negated_binder_partitions() {
    let values = [1, 12, 5, 20, 9];
    let at_least_ten = unary_negator(bind_second(less::<i32>(), 10));
    let (large, small): (Vec<i32>, Vec<i32>) = values.iter().partition(|value| at_least_ten.apply(**value));
    assert_eq!(large, vec![12, 20]);
    assert_eq!(small, vec![1, 5, 9]);
}

#[test]
fn test_binary_negator_as_sort_predicate() {
    let not_greater = binary_negator(greater::<u32>());
    assert!(not_greater.apply(1_u32, 2_u32));
    assert!(not_greater.apply(2_u32, 2_u32));
    assert!(!not_greater.apply(3_u32, 2_u32));
}

#[test]
fn test_negating_logical_not_restores_value() {
    let negated = unary_negator(logical_not::<bool>());
    assert!(negated.apply(true));
    assert!(!negated.apply(false));
}

#[test]
fn test_method_forms() {
    let differs = equal_to::<char>().negate_binary();
    assert!(differs.apply('a', 'b'));

    let nonzero = (|value: i32| value == 0).negate_unary();
    assert!(nonzero.apply(7));
}

#[test]
fn test_into_inner_returns_original() {
    let negated: UnaryNegate<fn(i64) -> bool> = unary_negator(is_even);
    let original = negated.into_inner();
    assert!(original(2));
}

proptest! {
    #[test]
    fn prop_unary_negator_definition(value in any::<i64>()) {
        prop_assert_eq!(unary_negator(is_even).apply(value), !is_even(value));
    }

    #[test]
    fn prop_double_negation(value in any::<i64>()) {
        prop_assert_eq!(unary_negator(unary_negator(is_even)).apply(value), is_even(value));
    }

    #[test]
    fn prop_binary_negator_definition(first in any::<i32>(), second in any::<i32>()) {
        prop_assert_eq!(
            binary_negator(less::<i32>()).apply(first, second),
            !less::<i32>().apply(first, second)
        );
    }
}
