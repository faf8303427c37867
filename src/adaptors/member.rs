//! Member accessors: values standing in for pointers to struct fields.
//!
//! A member accessor knows how to reach one field of a struct. It is the
//! projection used by the member-variable adaptors in
//! [`member_variable`](super::member_variable).
//!
//! - [`MemberVariable`]: shared access, `&T -> &Value`
//! - [`MemberVariableMut`]: exclusive access, `&mut T -> &mut Value`
//!
//! Accessors are usually created with the [`member!`](crate::member) macro
//! or with `#[derive(Members)]`, and can be built by hand with
//! [`FieldAccessor`] and [`FieldGetter`].
//!
//! # Examples
//!
//! ```rust
//! use fnadapt::adaptors::{MemberVariable, MemberVariableMut};
//! use fnadapt::member;
//!
//! struct Account { owner: String, balance: i64 }
//!
//! let balance = member!(Account, balance);
//! let mut account = Account { owner: "alice".to_string(), balance: 10 };
//!
//! assert_eq!(*balance.get(&account), 10);
//! *balance.get_mut(&mut account) += 5;
//! assert_eq!(account.balance, 15);
//! ```

use std::marker::PhantomData;

/// Shared access to a field of `T`.
///
/// # Laws
///
/// `get` must return a reference into `object`, and return the same field
/// on every call.
pub trait MemberVariable<T: ?Sized> {
    /// The type of the field.
    type Value: ?Sized;

    /// Returns a reference to the field inside `object`.
    fn get<'a>(&self, object: &'a T) -> &'a Self::Value;
}

/// Exclusive access to a field of `T`.
pub trait MemberVariableMut<T: ?Sized>: MemberVariable<T> {
    /// Returns a mutable reference to the field inside `object`.
    fn get_mut<'a>(&self, object: &'a mut T) -> &'a mut Self::Value;
}

/// A read/write member accessor built from two projection functions.
///
/// The `member!` macro and `#[derive(Members)]` both produce this type.
///
/// # Type Parameters
///
/// - `T`: The struct type
/// - `V`: The field type
/// - `G`: The shared projection, `Fn(&T) -> &V`
/// - `M`: The exclusive projection, `Fn(&mut T) -> &mut V`
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::{FieldAccessor, MemberVariable};
///
/// struct Point { x: i32, y: i32 }
///
/// let y = FieldAccessor::new(|point: &Point| &point.y, |point: &mut Point| &mut point.y);
/// assert_eq!(*y.get(&Point { x: 1, y: 2 }), 2);
/// ```
pub struct FieldAccessor<T, V, G, M> {
    getter: G,
    getter_mut: M,
    _marker: PhantomData<fn(&T) -> &V>,
}

impl<T, V, G, M> FieldAccessor<T, V, G, M>
where
    G: Fn(&T) -> &V,
    M: Fn(&mut T) -> &mut V,
{
    /// Creates a new accessor from a shared and an exclusive projection.
    #[must_use]
    pub const fn new(getter: G, getter_mut: M) -> Self {
        Self {
            getter,
            getter_mut,
            _marker: PhantomData,
        }
    }
}

impl<T, V, G, M> MemberVariable<T> for FieldAccessor<T, V, G, M>
where
    G: Fn(&T) -> &V,
    M: Fn(&mut T) -> &mut V,
{
    type Value = V;

    #[inline]
    fn get<'a>(&self, object: &'a T) -> &'a V {
        (self.getter)(object)
    }
}

impl<T, V, G, M> MemberVariableMut<T> for FieldAccessor<T, V, G, M>
where
    G: Fn(&T) -> &V,
    M: Fn(&mut T) -> &mut V,
{
    #[inline]
    fn get_mut<'a>(&self, object: &'a mut T) -> &'a mut V {
        (self.getter_mut)(object)
    }
}

impl<T, V, G: Clone, M: Clone> Clone for FieldAccessor<T, V, G, M> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            getter_mut: self.getter_mut.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, V, G: Copy, M: Copy> Copy for FieldAccessor<T, V, G, M> {}

impl<T, V, G, M> std::fmt::Debug for FieldAccessor<T, V, G, M> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FieldAccessor")
            .finish_non_exhaustive()
    }
}

/// A read-only member accessor built from a single projection function.
///
/// Useful for fields that should not be handed out mutably, and for
/// unsized projections such as `&String -> &str`.
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::{FieldGetter, MemberVariable};
///
/// struct Document { title: String }
///
/// let title = FieldGetter::new(|document: &Document| document.title.as_str());
/// assert_eq!(title.get(&Document { title: "Notes".to_string() }), "Notes");
/// ```
pub struct FieldGetter<T, V: ?Sized, G> {
    getter: G,
    _marker: PhantomData<fn(&T) -> &V>,
}

impl<T, V: ?Sized, G> FieldGetter<T, V, G>
where
    G: Fn(&T) -> &V,
{
    /// Creates a new read-only accessor.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<T, V: ?Sized, G> MemberVariable<T> for FieldGetter<T, V, G>
where
    G: Fn(&T) -> &V,
{
    type Value = V;

    #[inline]
    fn get<'a>(&self, object: &'a T) -> &'a V {
        (self.getter)(object)
    }
}

impl<T, V: ?Sized, G: Clone> Clone for FieldGetter<T, V, G> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, V: ?Sized, G: Copy> Copy for FieldGetter<T, V, G> {}

impl<T, V: ?Sized, G> std::fmt::Debug for FieldGetter<T, V, G> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("FieldGetter").finish_non_exhaustive()
    }
}

/// Creates a [`FieldAccessor`] for a (possibly nested) field of a struct.
///
/// # Syntax
///
/// ```text
/// member!(Type, field)
/// member!(Type, outer.inner)
/// member!(Type, 0)            // tuple struct field
/// ```
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::MemberVariable;
/// use fnadapt::member;
///
/// struct Inner { value: i32 }
/// struct Outer { inner: Inner }
/// struct Wrapper(u8, Outer);
///
/// let value = member!(Outer, inner.value);
/// assert_eq!(*value.get(&Outer { inner: Inner { value: 7 } }), 7);
///
/// let tag = member!(Wrapper, 0);
/// assert_eq!(*tag.get(&Wrapper(3, Outer { inner: Inner { value: 0 } })), 3);
/// ```
#[macro_export]
macro_rules! member {
    ($object_type:ty, $($field:tt).+) => {
        $crate::adaptors::FieldAccessor::new(
            |object: &$object_type| &object.$($field).+,
            |object: &mut $object_type| &mut object.$($field).+,
        )
    };
}
