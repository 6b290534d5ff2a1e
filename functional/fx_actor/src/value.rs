//! Constant terminal.

use crate::actor::Actor;
use crate::eval::Eval;

/// A terminal that evaluates to a stored constant.
///
/// The environment is ignored entirely, so `Value<T>` implements `Eval<Env>`
/// for every `Env` with `Output = T`, including [`fx_env::Null`]. Each
/// evaluation returns a clone of the constant; copying a `Value` copies the
/// constant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Value<T> {
    value: T,
}

impl<T> Value<T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Value { value }
    }

    /// The stored constant.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T, Env> Eval<Env> for Value<T>
where
    T: Clone,
{
    type Output = T;

    #[inline]
    fn eval(&self, _env: &mut Env) -> T {
        self.value.clone()
    }
}

/// Lift a constant into an actor.
#[inline]
pub const fn val<T>(value: T) -> Actor<Value<T>> {
    Actor::new(Value::new(value))
}
