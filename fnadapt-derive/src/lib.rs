//! Derive macros for fnadapt member accessors.
//!
//! # Available Derive Macros
//!
//! - [`Members`]: Generates a member accessor method for each struct field
//!
//! # Example
//!
//! ```rust,ignore
//! use fnadapt::adaptors::{mem_var_equal_to, MemberVariable};
//! use fnadapt::function::UnaryFunction;
//! use fnadapt::Members;
//!
//! #[derive(Members)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_member() -> impl MemberVariableMut<Point, Value = i32> + Copy
//! // - Point::y_member() -> impl MemberVariableMut<Point, Value = i32> + Copy
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*Point::x_member().get(&point), 10);
//! assert!(mem_var_equal_to(Point::y_member(), 20).apply(&point));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod members;

use proc_macro::TokenStream;

/// Derive macro generating member accessors for struct fields.
///
/// For every named field the macro adds an associated function
/// `{field_name}_member()` returning a copyable accessor usable with the
/// member-variable adaptors.
///
/// # Requirements
///
/// - The type must be a struct with named fields
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_member() -> impl MemberVariableMut<StructName, Value = T> + Copy { ... }
/// }
/// ```
///
/// # Generics
///
/// Generic structs are supported; call the method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Members)]
/// struct Wrapper<T> {
///     inner: T,
/// }
///
/// let wrapper = Wrapper { inner: 'x' };
/// assert_eq!(*Wrapper::<char>::inner_member().get(&wrapper), 'x');
/// ```
#[proc_macro_derive(Members)]
pub fn derive_members(input: TokenStream) -> TokenStream {
    members::derive_members_impl(input)
}
