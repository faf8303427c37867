//! Test that deriving Members on a unit struct produces a compile error.

#![allow(dead_code)]

use fnadapt::Members;

#[derive(Members)]
struct Marker;

fn main() {}
