//! Test that deriving Members on a union produces a compile error.

#![allow(dead_code)]

use fnadapt::Members;

#[derive(Members)]
union Bits {
    integer: u32,
    float: f32,
}

fn main() {}
