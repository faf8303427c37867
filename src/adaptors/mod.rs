//! Function adaptors.
//!
//! Adaptors wrap a callable and change how it is called:
//!
//! - [`functor1`] / [`functor2`]: name a function pointer as a functor type
//! - [`unary_negator`] / [`binary_negator`]: invert a predicate
//! - [`bind_first`] / [`bind_second`]: fix one argument of a binary function,
//!   with [`bind_first_cloned`] / [`bind_second_cloned`] for by-value callables
//! - [`mem_fun`], [`mem_fun_mut`], [`bind_mem_fun`], [`bind_mem_fun_mut`]:
//!   call a method on the argument, or on a stored receiver
//! - [`mem_var1`], [`mem_var2`] and their helpers: project a struct field
//!   before delegating
//!
//! Every adaptor implements [`UnaryFunction`](crate::function::UnaryFunction)
//! or [`BinaryFunction`](crate::function::BinaryFunction), so adaptors nest
//! freely. [`FunctionExt`] offers the most common ones in method form.
//!
//! # Examples
//!
//! ```rust
//! use fnadapt::adaptors::{unary_negator, FunctionExt};
//! use fnadapt::function::UnaryFunction;
//! use fnadapt::operators::less;
//!
//! let at_least_ten = unary_negator(less::<i32>().bind_second(10));
//! let kept: Vec<i32> = vec![3, 10, 42].into_iter().filter(|value| at_least_ten.apply(*value)).collect();
//! assert_eq!(kept, vec![10, 42]);
//! ```

mod binder;
mod functor;
mod member;
mod member_function;
mod member_variable;
mod negate;

pub use binder::{
    BindFirst, BindFirstCloned, BindSecond, BindSecondCloned, bind_first, bind_first_cloned,
    bind_second, bind_second_cloned,
};
pub use functor::{Functor1, Functor2, functor1, functor2};
pub use member::{FieldAccessor, FieldGetter, MemberVariable, MemberVariableMut};
pub use member_function::{
    BoundMemFun, BoundMemFunMut, MemFun, MemFunMut, bind_mem_fun, bind_mem_fun_mut, mem_fun,
    mem_fun_mut,
};
pub use member_variable::{
    MemVar1, MemVar1Mut, MemVar2, MemVar2Mut, mem_var_equal_to, mem_var_equal_to2, mem_var_less,
    mem_var_less2, mem_var1, mem_var1_mut, mem_var2, mem_var2_mut,
};
pub use negate::{BinaryNegate, UnaryNegate, binary_negator, unary_negator};

/// Method forms of the negators and binders, available on every value.
///
/// The methods only build the adaptor; whether the result is callable is
/// checked where it is applied.
///
/// # Examples
///
/// ```rust
/// use fnadapt::adaptors::FunctionExt;
/// use fnadapt::function::{BinaryFunction, UnaryFunction};
/// use fnadapt::operators::{greater, minus};
///
/// let not_greater = greater::<i32>().negate_binary();
/// assert!(not_greater.apply(1, 1));
///
/// let from_hundred = minus::<i32>().bind_first(100);
/// assert_eq!(from_hundred.apply(58), 42);
///
/// let is_odd = |value: u32| value % 2 == 1;
/// assert!(is_odd.negate_unary().apply(4));
/// ```
pub trait FunctionExt: Sized {
    /// Wraps `self` in a [`UnaryNegate`].
    #[inline]
    fn negate_unary(self) -> UnaryNegate<Self> {
        UnaryNegate::new(self)
    }

    /// Wraps `self` in a [`BinaryNegate`].
    #[inline]
    fn negate_binary(self) -> BinaryNegate<Self> {
        BinaryNegate::new(self)
    }

    /// Binds the first argument of `self` to `value`.
    #[inline]
    fn bind_first<V>(self, value: V) -> BindFirst<Self, V> {
        BindFirst::new(self, value)
    }

    /// Binds the second argument of `self` to `value`.
    #[inline]
    fn bind_second<V>(self, value: V) -> BindSecond<Self, V> {
        BindSecond::new(self, value)
    }
}

impl<F> FunctionExt for F {}

static_assertions::assert_impl_all!(BindSecond<crate::operators::Less<i32>, i32>: Copy, Send, Sync);
static_assertions::assert_impl_all!(UnaryNegate<BindFirst<crate::operators::EqualTo<str>, &'static str>>: Copy, Send, Sync);
static_assertions::assert_impl_all!(Functor2<i32, i32, bool>: Copy, Send, Sync);
static_assertions::assert_impl_all!(BindFirstCloned<Functor2<i32, i32, i32>, i32>: Copy, Send, Sync);
static_assertions::assert_impl_all!(MemFun<String, usize>: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(BindSecond<crate::operators::Less<i32>, std::rc::Rc<i32>>: Send, Sync);
