//! The actor: a callable wrapper over an evaluation strategy.

use core::ops::Deref;

use fx_env::{IntoEnvironment, Null, NULL};

use crate::eval::{ApplyActor, Eval};

/// A lazily evaluated expression with a uniform call surface.
///
/// `Actor<E>` adds call methods of arity 0 through [`fx_env::MAX_ARITY`] to
/// the strategy `E`. Each method binds its arguments into an environment in
/// call order and returns whatever `E` computes for that environment, so the
/// result type varies with both arity and argument types.
///
/// The wrapper is transparent: it has exactly the size and alignment of `E`,
/// is `Default`, `Clone` or `Copy` exactly when `E` is, and derefs to `E`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Actor<E> {
    eval: E,
}

impl<E> Actor<E> {
    /// Wrap a strategy.
    #[inline]
    pub const fn new(eval: E) -> Self {
        Actor { eval }
    }

    /// The wrapped strategy.
    #[inline]
    pub fn eval_ref(&self) -> &E {
        &self.eval
    }

    /// Unwrap the strategy.
    #[inline]
    pub fn into_inner(self) -> E {
        self.eval
    }

    /// Evaluate against an environment the caller has already built.
    #[inline]
    pub fn apply<Env>(&self, env: &mut Env) -> ApplyActor<E, Env>
    where
        E: Eval<Env>,
    {
        self.eval.eval(env)
    }

    /// Call with an argument pack.
    ///
    /// `()` binds the empty environment; a tuple of mutable references binds
    /// itself. This is the single generic form of the `callN` family.
    #[inline]
    pub fn call<A>(&self, args: A) -> ApplyActor<E, A::Env>
    where
        A: IntoEnvironment,
        E: Eval<A::Env>,
    {
        let mut env = args.into_env();
        self.eval.eval(&mut env)
    }

    /// Call with no arguments.
    #[inline]
    pub fn call0(&self) -> ApplyActor<E, Null>
    where
        E: Eval<Null>,
    {
        let mut env = NULL;
        self.eval.eval(&mut env)
    }
}

/// Generate the fixed-arity call methods.
///
/// Each method takes its arguments by mutable reference and binds them as
/// one reference tuple, position 0 first.
macro_rules! impl_call_arities {
    ($( $method:ident ( $($arg:ident : $T:ident),+ ) ),+ $(,)?) => {
        impl<E> Actor<E> {
            $(
                #[doc = concat!(
                    "Call with ",
                    stringify!($($arg),+),
                    " bound at consecutive environment positions."
                )]
                #[inline]
                #[allow(clippy::too_many_arguments)]
                pub fn $method<'a, $($T),+>(
                    &self,
                    $($arg: &'a mut $T),+
                ) -> ApplyActor<E, ($(&'a mut $T,)+)>
                where
                    E: Eval<($(&'a mut $T,)+)>,
                {
                    let mut env = ($($arg,)+);
                    self.eval.eval(&mut env)
                }
            )+
        }
    };
}

impl_call_arities! {
    call1(a0: T0),
    call2(a0: T0, a1: T1),
    call3(a0: T0, a1: T1, a2: T2),
    call4(a0: T0, a1: T1, a2: T2, a3: T3),
    call5(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4),
    call6(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5),
    call7(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6),
    call8(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7),
    call9(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7, a8: T8),
    call10(a0: T0, a1: T1, a2: T2, a3: T3, a4: T4, a5: T5, a6: T6, a7: T7, a8: T8, a9: T9),
}

impl<E> From<E> for Actor<E> {
    #[inline]
    fn from(eval: E) -> Self {
        Actor::new(eval)
    }
}

impl<E> Deref for Actor<E> {
    type Target = E;

    #[inline]
    fn deref(&self) -> &E {
        &self.eval
    }
}

// Actors nest as operands of composite strategies.
impl<E, Env> Eval<Env> for Actor<E>
where
    E: Eval<Env>,
{
    type Output = E::Output;

    #[inline]
    fn eval(&self, env: &mut Env) -> E::Output {
        self.eval.eval(env)
    }
}
