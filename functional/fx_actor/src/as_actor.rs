//! Operand lifting: one normalization point for composition code.
//!
//! Every operand of a composite strategy is either a plain constant or an
//! expression that is already an actor. [`AsActor`] resolves which at
//! compile time:
//!
//! | Operand      | `AsActor::Eval` | `convert` returns         |
//! |--------------|-----------------|---------------------------|
//! | `T: Constant`| `Value<T>`      | fresh `Actor<Value<T>>`   |
//! | `Actor<E>`   | `E`             | `&Actor<E>` (the operand) |
//!
//! The two impls never overlap: `Actor` does not implement [`Constant`], and
//! no other crate can make it do so.
//!
//! Anything else is rejected when the expression is built:
//!
//! ```compile_fail
//! use fx_actor::as_actor;
//!
//! struct Opaque;
//! let _ = as_actor(&Opaque);
//! ```

use core::borrow::Borrow;

use crate::actor::Actor;
use crate::value::{val, Value};

/// Marker for plain values that lift into a [`Value`] terminal.
///
/// Implemented here for the primitive scalars, `()`, `&'static str`,
/// `Duration` and `Ordering`, and structurally for `Option`, arrays and
/// tuples of constants. With the `alloc` feature `String` and `Vec` lift too.
///
/// Other crates can only implement it for types they define themselves.
pub trait Constant: Clone {}

macro_rules! impl_constant {
    ($($ty:ty),+ $(,)?) => {
        $( impl Constant for $ty {} )+
    };
}

impl_constant! {
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, (), &'static str,
    core::time::Duration, core::cmp::Ordering,
}

impl<T: Constant> Constant for Option<T> {}

impl<T: Constant, const N: usize> Constant for [T; N] {}

/// Tuples of constants, up to the widest environment.
macro_rules! impl_constant_tuple {
    ($( ( $($T:ident),+ ) )+) => {
        $( impl<$($T: Constant),+> Constant for ($($T,)+) {} )+
    };
}

impl_constant_tuple! {
    (T0)
    (T0, T1)
    (T0, T1, T2)
    (T0, T1, T2, T3)
    (T0, T1, T2, T3, T4)
    (T0, T1, T2, T3, T4, T5)
    (T0, T1, T2, T3, T4, T5, T6)
    (T0, T1, T2, T3, T4, T5, T6, T7)
    (T0, T1, T2, T3, T4, T5, T6, T7, T8)
    (T0, T1, T2, T3, T4, T5, T6, T7, T8, T9)
}

#[cfg(feature = "alloc")]
impl Constant for alloc::string::String {}

#[cfg(feature = "alloc")]
impl<T: Constant> Constant for alloc::vec::Vec<T> {}

/// Conversion of an expression operand into an actor.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an operand of a lazy expression",
    label = "neither a constant nor an actor",
    note = "wrap it in an actor, or, if `{Self}` is defined in your crate, implement `fx_actor::Constant` for it"
)]
pub trait AsActor {
    /// Strategy of the actor this operand becomes.
    type Eval;

    /// What `convert` hands back: an owned actor for lifted constants, a
    /// borrow of the operand itself for actors.
    type Converted<'a>: Borrow<Actor<Self::Eval>>
    where
        Self: 'a;

    fn convert(&self) -> Self::Converted<'_>;
}

/// The actor type an operand of type `T` becomes.
pub type ActorOf<T> = Actor<<T as AsActor>::Eval>;

impl<T> AsActor for T
where
    T: Constant,
{
    type Eval = Value<T>;
    type Converted<'a> = Actor<Value<T>>
    where
        Self: 'a;

    #[inline]
    fn convert(&self) -> Actor<Value<T>> {
        val(self.clone())
    }
}

impl<E> AsActor for Actor<E> {
    type Eval = E;
    type Converted<'a> = &'a Actor<E>
    where
        Self: 'a;

    #[inline]
    fn convert(&self) -> &Actor<E> {
        self
    }
}

/// Convert an operand. See [`AsActor`].
#[inline]
pub fn as_actor<T: AsActor>(operand: &T) -> T::Converted<'_> {
    operand.convert()
}

#[cfg(test)]
mod tests;
