//! Member-variable adaptors.
//!
//! A member-variable adaptor projects a field out of its argument(s) with a
//! [`MemberVariable`] accessor and hands the field to a downstream function:
//!
//! ```text
//! mem_var1(m, f)(obj)  = f(m.get(obj))
//! mem_var2(m, f)(a, b) = f(m.get(a), m.get(b))
//! ```
//!
//! The `_mut` variants project through [`MemberVariableMut`] and hand the
//! downstream function `&mut Value`.
//!
//! # Examples
//!
//! ```rust
//! use fnadapt::adaptors::{mem_var_equal_to, mem_var_less2};
//! use fnadapt::function::{BinaryFunction, UnaryFunction};
//! use fnadapt::member;
//!
//! #[derive(Debug)]
//! struct Order { id: u32, total: i64 }
//!
//! let mut orders = vec![
//!     Order { id: 3, total: 300 },
//!     Order { id: 1, total: 100 },
//!     Order { id: 2, total: 200 },
//! ];
//!
//! let has_id_two = mem_var_equal_to(member!(Order, id), 2);
//! let found = orders.iter().find(|order| has_id_two.apply(*order));
//! assert_eq!(found.map(|order| order.total), Some(200));
//!
//! let by_total = mem_var_less2(member!(Order, total));
//! orders.sort_by(|first, second| {
//!     if by_total.apply(first, second) {
//!         std::cmp::Ordering::Less
//!     } else if by_total.apply(second, first) {
//!         std::cmp::Ordering::Greater
//!     } else {
//!         std::cmp::Ordering::Equal
//!     }
//! });
//! assert_eq!(orders.iter().map(|order| order.id).collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use super::binder::BindSecond;
use super::member::{MemberVariable, MemberVariableMut};
use crate::function::{BinaryFunction, UnaryFunction};
use crate::operators::{EqualTo, Less};

/// Unary adaptor projecting a field of `&T`.
///
/// Created by [`mem_var1`].
#[derive(Debug, Clone, Copy)]
pub struct MemVar1<M, F> {
    member: M,
    function: F,
}

/// Unary adaptor projecting a field of `&mut T`.
///
/// Created by [`mem_var1_mut`].
#[derive(Debug, Clone, Copy)]
pub struct MemVar1Mut<M, F> {
    member: M,
    function: F,
}

/// Binary adaptor projecting the same field of two `&T`.
///
/// Created by [`mem_var2`].
#[derive(Debug, Clone, Copy)]
pub struct MemVar2<M, F> {
    member: M,
    function: F,
}

/// Binary adaptor projecting the same field of two `&mut T`.
///
/// Created by [`mem_var2_mut`].
#[derive(Debug, Clone, Copy)]
pub struct MemVar2Mut<M, F> {
    member: M,
    function: F,
}

macro_rules! member_variable_common {
    ($($name:ident),+) => {
        $(
            impl<M, F> $name<M, F> {
                /// Creates the adaptor from a member accessor and a downstream
                /// function.
                #[inline]
                #[must_use]
                pub const fn new(member: M, function: F) -> Self {
                    Self { member, function }
                }

                /// Returns the member accessor.
                #[inline]
                pub const fn member(&self) -> &M {
                    &self.member
                }

                /// Returns the downstream function.
                #[inline]
                pub const fn function(&self) -> &F {
                    &self.function
                }
            }
        )+
    };
}

member_variable_common!(MemVar1, MemVar1Mut, MemVar2, MemVar2Mut);

impl<'a, T: ?Sized, M, F> UnaryFunction<&'a T> for MemVar1<M, F>
where
    M: MemberVariable<T>,
    M::Value: 'a,
    F: UnaryFunction<&'a M::Value>,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, object: &'a T) -> Self::Output {
        self.function.apply(self.member.get(object))
    }
}

impl<'a, T: ?Sized, M, F> UnaryFunction<&'a mut T> for MemVar1Mut<M, F>
where
    M: MemberVariableMut<T>,
    M::Value: 'a,
    F: UnaryFunction<&'a mut M::Value>,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, object: &'a mut T) -> Self::Output {
        self.function.apply(self.member.get_mut(object))
    }
}

impl<'a, 'b, T: ?Sized, M, F> BinaryFunction<&'a T, &'b T> for MemVar2<M, F>
where
    M: MemberVariable<T>,
    M::Value: 'a + 'b,
    F: BinaryFunction<&'a M::Value, &'b M::Value>,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, first: &'a T, second: &'b T) -> Self::Output {
        self.function
            .apply(self.member.get(first), self.member.get(second))
    }
}

impl<'a, 'b, T: ?Sized, M, F> BinaryFunction<&'a mut T, &'b mut T> for MemVar2Mut<M, F>
where
    M: MemberVariableMut<T>,
    M::Value: 'a + 'b,
    F: BinaryFunction<&'a mut M::Value, &'b mut M::Value>,
{
    type Output = F::Output;

    #[inline]
    fn apply(&self, first: &'a mut T, second: &'b mut T) -> Self::Output {
        self.function
            .apply(self.member.get_mut(first), self.member.get_mut(second))
    }
}

/// Returns a unary function calling `function` on the field `member`
/// selects.
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::mem_var1;
/// use fnadapt::function::UnaryFunction;
/// use fnadapt::member;
///
/// struct User { name: String }
///
/// let name_length = mem_var1(member!(User, name), |name: &String| name.len());
/// assert_eq!(name_length.apply(&User { name: "alice".to_string() }), 5);
/// ```
#[inline]
#[must_use]
pub const fn mem_var1<M, F>(member: M, function: F) -> MemVar1<M, F> {
    MemVar1::new(member, function)
}

/// Returns a unary function calling `function` on a mutable reference to
/// the field `member` selects.
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::mem_var1_mut;
/// use fnadapt::function::UnaryFunction;
/// use fnadapt::member;
///
/// struct Gauge { level: u8 }
///
/// let reset = mem_var1_mut(member!(Gauge, level), |level: &mut u8| *level = 0);
/// let mut gauges = vec![Gauge { level: 3 }, Gauge { level: 9 }];
/// gauges.iter_mut().for_each(|gauge| reset.apply(gauge));
/// assert!(gauges.iter().all(|gauge| gauge.level == 0));
/// ```
#[inline]
#[must_use]
pub const fn mem_var1_mut<M, F>(member: M, function: F) -> MemVar1Mut<M, F> {
    MemVar1Mut::new(member, function)
}

/// Returns a binary function calling `function` on the field `member`
/// selects in each argument.
#[inline]
#[must_use]
pub const fn mem_var2<M, F>(member: M, function: F) -> MemVar2<M, F> {
    MemVar2::new(member, function)
}

/// Returns a binary function calling `function` on mutable references to
/// the field `member` selects in each argument.
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::mem_var2_mut;
/// use fnadapt::function::BinaryFunction;
/// use fnadapt::member;
///
/// struct Slot { item: Option<char> }
///
/// let swap_items = mem_var2_mut(member!(Slot, item), std::mem::swap::<Option<char>>);
/// let mut left = Slot { item: Some('a') };
/// let mut right = Slot { item: None };
/// swap_items.apply(&mut left, &mut right);
/// assert_eq!((left.item, right.item), (None, Some('a')));
/// ```
#[inline]
#[must_use]
pub const fn mem_var2_mut<M, F>(member: M, function: F) -> MemVar2Mut<M, F> {
    MemVar2Mut::new(member, function)
}

/// Returns a predicate testing `object.field == value`.
#[inline]
#[must_use]
pub const fn mem_var_equal_to<T, M>(
    member: M,
    value: M::Value,
) -> MemVar1<M, BindSecond<EqualTo<M::Value>, M::Value>>
where
    T: ?Sized,
    M: MemberVariable<T>,
    M::Value: Sized,
{
    mem_var1(member, BindSecond::new(EqualTo::new(), value))
}

/// Returns a predicate testing `object.field < value`.
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::mem_var_less;
/// use fnadapt::function::UnaryFunction;
/// use fnadapt::member;
///
/// struct Reading { celsius: f64 }
///
/// let freezing = mem_var_less(member!(Reading, celsius), 0.0);
/// assert!(freezing.apply(&Reading { celsius: -4.5 }));
/// assert!(!freezing.apply(&Reading { celsius: 0.0 }));
/// ```
#[inline]
#[must_use]
pub const fn mem_var_less<T, M>(
    member: M,
    value: M::Value,
) -> MemVar1<M, BindSecond<Less<M::Value>, M::Value>>
where
    T: ?Sized,
    M: MemberVariable<T>,
    M::Value: Sized,
{
    mem_var1(member, BindSecond::new(Less::new(), value))
}

/// Returns a predicate testing `first.field == second.field`.
#[inline]
#[must_use]
pub const fn mem_var_equal_to2<T, M>(member: M) -> MemVar2<M, EqualTo<M::Value>>
where
    T: ?Sized,
    M: MemberVariable<T>,
{
    mem_var2(member, EqualTo::new())
}

/// Returns a predicate testing `first.field < second.field`.
#[inline]
#[must_use]
pub const fn mem_var_less2<T, M>(member: M) -> MemVar2<M, Less<M::Value>>
where
    T: ?Sized,
    M: MemberVariable<T>,
{
    mem_var2(member, Less::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adaptors::FieldGetter;
    use crate::member;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq)]
    struct Obj {
        id: u32,
        label: String,
    }

    fn obj(id: u32, label: &str) -> Obj {
        Obj {
            id,
            label: label.to_string(),
        }
    }

    #[rstest]
    #[case(5, true)]
    #[case(4, false)]
    fn test_mem_var_equal_to(#[case] id: u32, #[case] expected: bool) {
        let is_five = mem_var_equal_to(member!(Obj, id), 5);
        assert_eq!(is_five.apply(&obj(id, "x")), expected);
    }

    #[rstest]
    #[case(1, true)]
    #[case(5, false)]
    #[case(9, false)]
    fn test_mem_var_less(#[case] id: u32, #[case] expected: bool) {
        let below_five = mem_var_less(member!(Obj, id), 5);
        assert_eq!(below_five.apply(&obj(id, "x")), expected);
    }

    #[test]
    fn test_binary_predicates_compare_only_the_field() {
        let same_id = mem_var_equal_to2(member!(Obj, id));
        let lower_id = mem_var_less2(member!(Obj, id));
        let first = obj(1, "first");
        let second = obj(1, "second");
        let third = obj(2, "first");
        assert!(same_id.apply(&first, &second));
        assert!(!same_id.apply(&first, &third));
        assert!(lower_id.apply(&first, &third));
        assert!(!lower_id.apply(&third, &first));
    }

    #[test]
    fn test_mem_var1_with_read_only_getter() {
        let label_length = mem_var1(
            FieldGetter::new(|object: &Obj| object.label.as_str()),
            str::len,
        );
        assert_eq!(label_length.apply(&obj(0, "four")), 4);
    }

    #[test]
    fn test_mem_var1_mut_updates_field() {
        let bump = mem_var1_mut(member!(Obj, id), |id: &mut u32| {
            *id += 10;
            *id
        });
        let mut target = obj(1, "x");
        assert_eq!(bump.apply(&mut target), 11);
        assert_eq!(target.id, 11);
    }

    #[test]
    fn test_mem_var2_mut_swaps_fields() {
        let swap_labels = mem_var2_mut(member!(Obj, label), std::mem::swap::<String>);
        let mut first = obj(1, "a");
        let mut second = obj(2, "b");
        swap_labels.apply(&mut first, &mut second);
        assert_eq!(first, obj(1, "b"));
        assert_eq!(second, obj(2, "a"));
    }

    #[test]
    fn test_mem_var2_with_closure() {
        let total_ids = mem_var2(member!(Obj, id), |first: &u32, second: &u32| first + second);
        assert_eq!(total_ids.apply(&obj(2, ""), &obj(3, "")), 5);
    }

    #[test]
    fn test_accessors_are_exposed() {
        let is_five = mem_var_equal_to(member!(Obj, id), 5);
        assert_eq!(*is_five.function().value(), 5);
        assert_eq!(*is_five.member().get(&obj(7, "")), 7);
    }
}
