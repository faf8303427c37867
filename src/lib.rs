//! # fnadapt
//!
//! Function objects and function adaptors for generic algorithms.
//!
//! ## Overview
//!
//! The crate provides small, zero-cost building blocks for passing behaviour
//! to iterator adaptors, sorting routines and other generic code:
//!
//! - **Callable traits**: [`UnaryFunction`](function::UnaryFunction) and
//!   [`BinaryFunction`](function::BinaryFunction), implemented by every
//!   closure and by every type in this crate
//! - **Operator functors**: `plus`, `less`, `logical_and`, `compare`, ... as
//!   zero-sized values, plus checked integer arithmetic
//! - **Adaptors**: function-pointer wrappers, negators, binders,
//!   member-function and member-variable adaptors
//! - **Member accessors**: the [`member!`] macro and `#[derive(Members)]`
//!   for projecting struct fields
//!
//! ## Feature Flags
//!
//! - `operators`: Operator functors and checked arithmetic
//! - `adaptors`: Adaptors and member accessors (implies `operators`)
//! - `derive`: `#[derive(Members)]` (implies `adaptors`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnadapt::prelude::*;
//! use fnadapt::member;
//!
//! struct Task { priority: u8, title: String }
//!
//! let tasks = vec![
//!     Task { priority: 2, title: "write".to_string() },
//!     Task { priority: 5, title: "review".to_string() },
//!     Task { priority: 1, title: "merge".to_string() },
//! ];
//!
//! let urgent = unary_negator(mem_var_less(member!(Task, priority), 2));
//! let titles: Vec<&str> = tasks
//!     .iter()
//!     .filter(|task| urgent.apply(*task))
//!     .map(|task| task.title.as_str())
//!     .collect();
//! assert_eq!(titles, vec!["write", "review"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the callable traits and everything enabled by features.
///
/// # Usage
///
/// ```rust
/// use fnadapt::prelude::*;
/// ```
pub mod prelude {
    pub use crate::function::*;

    #[cfg(feature = "operators")]
    pub use crate::operators::*;

    #[cfg(feature = "adaptors")]
    pub use crate::adaptors::*;

    #[cfg(feature = "derive")]
    pub use crate::Members;
}

pub mod function;

#[cfg(feature = "operators")]
pub mod operators;

#[cfg(feature = "adaptors")]
pub mod adaptors;

#[cfg(feature = "derive")]
pub use fnadapt_derive::Members;
