#![cfg(feature = "operators")]
//! Tests for the checked arithmetic functors.
//!
//! A checked functor returns `Ok` exactly when the native checked operation
//! returns `Some`, and reports a zero divisor separately from overflow.

use std::error::Error;

use fnadapt::function::BinaryFunction;
use fnadapt::operators::{
    ArithmeticError, checked_divides, checked_minus, checked_modulus, checked_multiplies,
    checked_plus,
};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(i16::MAX, 1_i16, "plus")]
#[case(i16::MIN, 1_i16, "minus")]
#[case(i16::MAX, 2_i16, "multiplies")]
#[case(i16::MIN, -1_i16, "divides")]
#[case(i16::MIN, -1_i16, "modulus")]
fn test_overflow_is_reported(#[case] first: i16, #[case] second: i16, #[case] operation: &str) {
    let result = match operation {
        "plus" => checked_plus::<i16>().apply(first, second),
        "minus" => checked_minus::<i16>().apply(first, second),
        "multiplies" => checked_multiplies::<i16>().apply(first, second),
        "divides" => checked_divides::<i16>().apply(first, second),
        _ => checked_modulus::<i16>().apply(first, second),
    };
    let error = result.unwrap_err();
    assert!(matches!(error, ArithmeticError::Overflow { .. }));
    assert_eq!(error.operation(), operation);
}

#[test]
fn test_division_by_zero_is_not_overflow() {
    assert_eq!(
        checked_divides::<u64>().apply(1_u64, 0_u64),
        Err(ArithmeticError::DivisionByZero { operation: "divides" })
    );
    assert_eq!(
        checked_modulus::<u64>().apply(1_u64, 0_u64),
        Err(ArithmeticError::DivisionByZero { operation: "modulus" })
    );
}

#[test]
fn test_error_is_std_error() {
    let error: Box<dyn Error> = Box::new(checked_plus::<u8>().apply(255_u8, 1_u8).unwrap_err());
    assert_eq!(error.to_string(), "plus: arithmetic overflow");
    assert!(error.source().is_none());
}

#[test]
fn test_try_fold_stops_at_overflow() {
    let add = checked_plus::<u8>();
    let small: Result<u8, ArithmeticError> = [10_u8, 20, 30].iter().try_fold(0_u8, |total, value| add.apply(total, value));
    assert_eq!(small, Ok(60));

    let large: Result<u8, ArithmeticError> = [200_u8, 50, 10].iter().try_fold(0_u8, |total, value| add.apply(total, value));
    assert_eq!(large, Err(ArithmeticError::Overflow { operation: "plus" }));
}

proptest! {
    #[test]
    fn prop_checked_plus_matches_std(first in any::<i32>(), second in any::<i32>()) {
        prop_assert_eq!(checked_plus::<i32>().apply(first, second).ok(), first.checked_add(second));
    }

    #[test]
    fn prop_checked_multiplies_matches_std(first in any::<u16>(), second in any::<u16>()) {
        prop_assert_eq!(checked_multiplies::<u16>().apply(first, second).ok(), first.checked_mul(second));
    }

    #[test]
    fn prop_checked_divides_matches_std(first in any::<i8>(), second in any::<i8>()) {
        let result = checked_divides::<i8>().apply(first, second);
        prop_assert_eq!(result.ok(), first.checked_div(second));
        if second == 0 {
            prop_assert_eq!(result, Err(ArithmeticError::DivisionByZero { operation: "divides" }));
        }
    }
}
