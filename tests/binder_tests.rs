#![cfg(feature = "adaptors")]
//! Tests for argument binders.
//!
//! - **First**: `bind_first(f, v)(x) == f(v, x)`
//! - **Second**: `bind_second(f, v)(x) == f(x, v)`
//! - **Cloned**: the `_cloned` binders agree with the borrowing ones

use fnadapt::adaptors::{
    FunctionExt, bind_first, bind_first_cloned, bind_second, bind_second_cloned, functor2,
};
use fnadapt::function::{BinaryFunction, UnaryFunction};
use fnadapt::operators::{divides, equal_to, greater_equal, less, minus};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// Examples
// =============================================================================

#[rstest]
#[case(5, true)]
#[case(9, true)]
#[case(10, false)]
#[case(15, false)]
fn test_bind_second_less_than_ten(#[case] argument: i32, #[case] expected: bool) {
    let below_ten = bind_second(less::<i32>(), 10);
    assert_eq!(below_ten.apply(argument), expected);
}

#[test]
fn test_filter_with_bound_predicate() {
    let scores = [12, 70, 45, 90, 60];
    let passing = bind_second(greater_equal::<i32>(), 60);
    let passed: Vec<i32> = scores.iter().copied().filter(|score| passing.apply(*score)).collect();
    assert_eq!(passed, vec![70, 90, 60]);
}

#[test]
fn test_count_with_bound_predicate() {
    let words = ["red", "green", "red", "blue"];
    let is_red = bind_second(equal_to::<&str>(), "red");
    assert_eq!(words.iter().filter(|word| is_red.apply(**word)).count(), 2);
}

#[test]
fn test_bound_value_borrowed_not_cloned() {
    #[derive(Debug, PartialEq, PartialOrd)]
    struct Threshold(u64);

    let limit = bind_second(less::<Threshold>(), Threshold(10));
    assert!(limit.apply(Threshold(3)));
    assert!(!limit.apply(&Threshold(11)));
    assert_eq!(limit.value(), &Threshold(10));
}

#[test]
fn test_closure_taking_bound_reference() {
    let repeat = bind_second(|text: &str, count: &usize| text.repeat(*count), 3);
    assert_eq!(repeat.apply("ab"), "ababab");
}

#[test]
fn test_method_form_matches_free_form() {
    let free = bind_first(minus::<i32>(), 10);
    let method = minus::<i32>().bind_first(10);
    assert_eq!(free.apply(4), method.apply(4));
}

#[test]
fn test_into_fn_for_iterators() {
    let halves: Vec<i32> = vec![10, 20, 30]
        .into_iter()
        .map(UnaryFunction::<i32>::into_fn(bind_second(divides::<i32>(), 2)))
        .collect();
    assert_eq!(halves, vec![5, 10, 15]);
}

fn sub(first: i32, second: i32) -> i32 {
    first - second
}

#[test]
fn test_bind_function_pointer_functor() {
    let hundred_minus = bind_first_cloned(functor2(sub as fn(i32, i32) -> i32), 100);
    let minus_hundred = bind_second_cloned(functor2(sub as fn(i32, i32) -> i32), 100);
    assert_eq!(hundred_minus.apply(1), 99);
    assert_eq!(minus_hundred.apply(1), -99);
}

#[test]
fn test_bind_by_value_closure() {
    let tag = bind_second_cloned(|name: &str, suffix: String| format!("{name}-{suffix}"), "v2".to_string());
    let tagged: Vec<String> = ["api", "web"].into_iter().map(|name| tag.apply(name)).collect();
    assert_eq!(tagged, vec!["api-v2", "web-v2"]);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_bind_first_definition(value in -1_000i32..1_000, argument in -1_000i32..1_000) {
        let function = minus::<i32>();
        prop_assert_eq!(bind_first(function, value).apply(argument), function.apply(value, argument));
    }

    #[test]
    fn prop_bind_second_definition(value in -1_000i32..1_000, argument in -1_000i32..1_000) {
        let function = minus::<i32>();
        prop_assert_eq!(bind_second(function, value).apply(argument), function.apply(argument, value));
    }

    #[test]
    fn prop_binders_are_mirror_images(value in any::<i32>(), argument in any::<i32>()) {
        prop_assert_eq!(
            bind_first(less::<i32>(), value).apply(argument),
            bind_second(less::<i32>(), argument).apply(value)
        );
    }

    #[test]
    fn prop_cloned_binders_match_borrowing_binders(value in -1_000i32..1_000, argument in -1_000i32..1_000) {
        prop_assert_eq!(
            bind_first_cloned(minus::<i32>(), value).apply(argument),
            bind_first(minus::<i32>(), value).apply(argument)
        );
        prop_assert_eq!(
            bind_second_cloned(functor2(sub as fn(i32, i32) -> i32), value).apply(argument),
            bind_second(minus::<i32>(), value).apply(argument)
        );
    }
}
