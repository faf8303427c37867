//! Test that deriving Members on an enum produces a compile error.

#![allow(dead_code)]

use fnadapt::Members;

#[derive(Members)]
enum Shape {
    Circle(f64),
    Square(f64),
}

fn main() {}
