//! Test that deriving Members on a tuple struct produces a compile error.

#![allow(dead_code)]

use fnadapt::Members;

#[derive(Members)]
struct Pair(i32, i32);

fn main() {}
