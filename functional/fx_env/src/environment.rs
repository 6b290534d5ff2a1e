//! Environment shapes and the binding of call arguments.

/// Largest number of arguments an environment can bind.
///
/// The tuple impls below are generated up to this arity. Raising it means
/// extending the impl lists here, in `get.rs`, and the call surface of
/// `fx_actor::Actor`.
pub const MAX_ARITY: usize = 10;

/// The empty environment bound by every zero-argument call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Null;

/// Shared instance of [`Null`].
pub const NULL: Null = Null;

/// A fixed-arity, positionally indexed environment.
pub trait Environment {
    /// Number of bound arguments.
    const ARITY: usize;
}

impl Environment for Null {
    const ARITY: usize = 0;
}

/// Conversion from a call's argument pack into the environment it binds.
///
/// `()` binds [`Null`]; a tuple of mutable references is already an
/// environment and binds itself.
pub trait IntoEnvironment {
    /// The environment produced for this argument pack.
    type Env: Environment;

    fn into_env(self) -> Self::Env;
}

impl IntoEnvironment for () {
    type Env = Null;

    #[inline]
    fn into_env(self) -> Null {
        NULL
    }
}

impl IntoEnvironment for Null {
    type Env = Null;

    #[inline]
    fn into_env(self) -> Null {
        self
    }
}

/// Implement [`Environment`] and [`IntoEnvironment`] for one reference tuple arity.
macro_rules! impl_environment {
    ($( $arity:literal => ( $($T:ident),+ ) ),+ $(,)?) => {
        $(
            impl<'a, $($T),+> Environment for ($(&'a mut $T,)+) {
                const ARITY: usize = $arity;
            }

            impl<'a, $($T),+> IntoEnvironment for ($(&'a mut $T,)+) {
                type Env = Self;

                #[inline]
                fn into_env(self) -> Self {
                    self
                }
            }
        )+
    };
}

impl_environment! {
    1 => (T0),
    2 => (T0, T1),
    3 => (T0, T1, T2),
    4 => (T0, T1, T2, T3),
    5 => (T0, T1, T2, T3, T4),
    6 => (T0, T1, T2, T3, T4, T5),
    7 => (T0, T1, T2, T3, T4, T5, T6),
    8 => (T0, T1, T2, T3, T4, T5, T6, T7),
    9 => (T0, T1, T2, T3, T4, T5, T6, T7, T8),
    10 => (T0, T1, T2, T3, T4, T5, T6, T7, T8, T9),
}
