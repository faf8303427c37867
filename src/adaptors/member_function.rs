//! Member-function adaptors.
//!
//! These adaptors turn a method into a functor that takes the receiver as
//! its argument:
//!
//! | Constructor          | Method shape            | Receiver argument             |
//! |----------------------|-------------------------|-------------------------------|
//! | [`mem_fun`]          | `fn(&T) -> R`           | anything `Borrow<T>`          |
//! | [`mem_fun_mut`]      | `fn(&mut T) -> R`       | anything `BorrowMut<T>`       |
//! | [`bind_mem_fun`]     | `fn(&T, A) -> R`        | stored; the argument is `A`   |
//! | [`bind_mem_fun_mut`] | `fn(&mut T, A) -> R`    | stored; the argument is `A`   |
//!
//! A receiver can be passed as a plain reference or through any pointer
//! type implementing `Borrow`/`BorrowMut` (`Box`, `Rc`, `Arc`, ...), so the
//! same adaptor serves both "by reference" and "by pointer" callers.
//!
//! # Examples
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use fnadapt::adaptors::{mem_fun, mem_fun_mut};
//! use fnadapt::function::UnaryFunction;
//!
//! let length = mem_fun(String::len);
//! assert_eq!(length.apply(&"four".to_string()), 4);
//! assert_eq!(length.apply(Rc::new("three".to_string())), 5);
//!
//! let lengths: Vec<usize> = ["a", "bb"].iter().map(|text| mem_fun(str::len).apply(*text)).collect();
//! assert_eq!(lengths, vec![1, 2]);
//!
//! let mut stack = vec![1, 2, 3];
//! let pop = mem_fun_mut(Vec::<i32>::pop);
//! assert_eq!(pop.apply(&mut stack), Some(3));
//! assert_eq!(stack, vec![1, 2]);
//! ```

use std::borrow::{Borrow, BorrowMut};

use crate::function::UnaryFunction;

/// A functor calling a `&self` method on its argument.
///
/// Created by [`mem_fun`].
pub struct MemFun<T: ?Sized, R> {
    method: fn(&T) -> R,
}

impl<T: ?Sized, R> MemFun<T, R> {
    /// Wraps `method`.
    #[inline]
    #[must_use]
    pub const fn new(method: fn(&T) -> R) -> Self {
        Self { method }
    }
}

impl<T: ?Sized, R, P> UnaryFunction<P> for MemFun<T, R>
where
    P: Borrow<T>,
{
    type Output = R;

    #[inline]
    fn apply(&self, receiver: P) -> R {
        (self.method)(receiver.borrow())
    }
}

/// A functor calling a `&mut self` method on its argument.
///
/// Created by [`mem_fun_mut`].
pub struct MemFunMut<T: ?Sized, R> {
    method: fn(&mut T) -> R,
}

impl<T: ?Sized, R> MemFunMut<T, R> {
    /// Wraps `method`.
    #[inline]
    #[must_use]
    pub const fn new(method: fn(&mut T) -> R) -> Self {
        Self { method }
    }
}

impl<T: ?Sized, R, P> UnaryFunction<P> for MemFunMut<T, R>
where
    P: BorrowMut<T>,
{
    type Output = R;

    #[inline]
    fn apply(&self, mut receiver: P) -> R {
        (self.method)(receiver.borrow_mut())
    }
}

/// A functor calling a one-argument `&self` method on a stored receiver.
///
/// Created by [`bind_mem_fun`]. The receiver is borrowed for `'r`, so the
/// adaptor cannot outlive it.
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::bind_mem_fun;
/// use fnadapt::function::UnaryFunction;
///
/// struct Limits { maximum: u32 }
///
/// impl Limits {
///     fn allows(&self, amount: u32) -> bool { amount <= self.maximum }
/// }
///
/// let limits = Limits { maximum: 100 };
/// let allowed = bind_mem_fun(&limits, Limits::allows);
/// let accepted: Vec<u32> = vec![50, 150, 100].into_iter().filter(|amount| allowed.apply(*amount)).collect();
/// assert_eq!(accepted, vec![50, 100]);
/// ```
pub struct BoundMemFun<'r, T: ?Sized, A, R> {
    receiver: &'r T,
    method: fn(&T, A) -> R,
}

impl<'r, T: ?Sized, A, R> BoundMemFun<'r, T, A, R> {
    /// Binds `method` to `receiver`.
    #[inline]
    #[must_use]
    pub const fn new(receiver: &'r T, method: fn(&T, A) -> R) -> Self {
        Self { receiver, method }
    }

    /// Returns the stored receiver.
    #[inline]
    pub const fn receiver(&self) -> &'r T {
        self.receiver
    }
}

impl<T: ?Sized, A, R> UnaryFunction<A> for BoundMemFun<'_, T, A, R> {
    type Output = R;

    #[inline]
    fn apply(&self, argument: A) -> R {
        (self.method)(self.receiver, argument)
    }
}

/// A functor calling a one-argument `&mut self` method on a stored receiver.
///
/// Created by [`bind_mem_fun_mut`]. Calling it needs exclusive access to the
/// adaptor, so it is invoked with [`apply`](Self::apply) on `&mut self` (or
/// through [`into_fn_mut`](Self::into_fn_mut)) rather than through
/// [`UnaryFunction`].
///
/// # Example
///
/// ```rust
/// use fnadapt::adaptors::bind_mem_fun_mut;
///
/// let mut log: Vec<String> = Vec::new();
/// let mut append = bind_mem_fun_mut(&mut log, Vec::push);
/// append.apply("started".to_string());
/// append.apply("stopped".to_string());
/// assert_eq!(log, vec!["started", "stopped"]);
/// ```
pub struct BoundMemFunMut<'r, T: ?Sized, A, R> {
    receiver: &'r mut T,
    method: fn(&mut T, A) -> R,
}

impl<'r, T: ?Sized, A, R> BoundMemFunMut<'r, T, A, R> {
    /// Binds `method` to `receiver`.
    #[inline]
    #[must_use]
    pub const fn new(receiver: &'r mut T, method: fn(&mut T, A) -> R) -> Self {
        Self { receiver, method }
    }

    /// Invokes the method on the stored receiver with `argument`.
    #[inline]
    pub fn apply(&mut self, argument: A) -> R {
        (self.method)(&mut *self.receiver, argument)
    }

    /// Converts the adaptor into a closure for APIs taking `impl FnMut`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fnadapt::adaptors::bind_mem_fun_mut;
    ///
    /// let mut total = Vec::new();
    /// [1, 2, 3].into_iter().for_each(bind_mem_fun_mut(&mut total, Vec::push).into_fn_mut());
    /// assert_eq!(total, vec![1, 2, 3]);
    /// ```
    pub fn into_fn_mut(mut self) -> impl FnMut(A) -> R + 'r
    where
        A: 'r,
        R: 'r,
    {
        move |argument| self.apply(argument)
    }
}

/// Wraps a `&self` method into a functor taking the receiver.
#[inline]
#[must_use]
pub const fn mem_fun<T: ?Sized, R>(method: fn(&T) -> R) -> MemFun<T, R> {
    MemFun::new(method)
}

/// Wraps a `&mut self` method into a functor taking the receiver.
#[inline]
#[must_use]
pub const fn mem_fun_mut<T: ?Sized, R>(method: fn(&mut T) -> R) -> MemFunMut<T, R> {
    MemFunMut::new(method)
}

/// Binds a one-argument `&self` method to `receiver`.
#[inline]
#[must_use]
pub const fn bind_mem_fun<'r, T: ?Sized, A, R>(
    receiver: &'r T,
    method: fn(&T, A) -> R,
) -> BoundMemFun<'r, T, A, R> {
    BoundMemFun::new(receiver, method)
}

/// Binds a one-argument `&mut self` method to `receiver`.
#[inline]
#[must_use]
pub const fn bind_mem_fun_mut<'r, T: ?Sized, A, R>(
    receiver: &'r mut T,
    method: fn(&mut T, A) -> R,
) -> BoundMemFunMut<'r, T, A, R> {
    BoundMemFunMut::new(receiver, method)
}

macro_rules! impl_copy_and_debug {
    ($name:ident < $($lifetime:lifetime,)? $($parameter:ident),+ >) => {
        impl<$($lifetime,)? T: ?Sized, $($parameter),+> Clone for $name<$($lifetime,)? T, $($parameter),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($lifetime,)? T: ?Sized, $($parameter),+> Copy for $name<$($lifetime,)? T, $($parameter),+> {}

        impl<$($lifetime,)? T: ?Sized, $($parameter),+> std::fmt::Debug for $name<$($lifetime,)? T, $($parameter),+> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}

impl_copy_and_debug!(MemFun<R>);
impl_copy_and_debug!(MemFunMut<R>);
impl_copy_and_debug!(BoundMemFun<'r, A, R>);

impl<T: ?Sized, A, R> std::fmt::Debug for BoundMemFunMut<'_, T, A, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("BoundMemFunMut")
            .finish_non_exhaustive()
    }
}
