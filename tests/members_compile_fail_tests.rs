//! Compile-fail tests for `#[derive(Members)]`.
//!
//! These tests verify that deriving `Members` on anything other than a
//! struct with named fields produces a compile-time error at the type name.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#![cfg(feature = "derive")]

#[test]
fn members_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/members_*.rs");
}
