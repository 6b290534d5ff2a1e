//! Placeholders.

use fx_env::Get;

use crate::actor::Actor;
use crate::eval::Eval;

/// A terminal that evaluates to the argument bound at position `N`.
///
/// As an expression, a placeholder reads: evaluation clones the argument
/// out of the environment, so it needs the argument type to be `Clone`. As
/// a [`Place`], it refers to the caller's argument itself, which is how
/// composites write through it or use arguments that cannot be cloned.
///
/// An environment without position `N` has no `Get<N>` impl, so using a
/// placeholder past the call's arity fails to compile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Argument<const N: usize>;

impl<const N: usize> Argument<N> {
    /// Zero-based environment position this placeholder reads.
    pub const POSITION: usize = N;
}

impl<const N: usize, Env> Eval<Env> for Argument<N>
where
    Env: Get<N>,
    Env::Item: Clone,
{
    type Output = Env::Item;

    #[inline]
    fn eval(&self, env: &mut Env) -> Env::Item {
        env.get().clone()
    }
}

/// A strategy that names a location in the environment rather than a value.
///
/// Composite strategies use this for operands they write to: an assignment
/// evaluates its right-hand side, then stores the result through
/// `place` of its left-hand side. The returned reference is the caller's
/// argument, so the write is visible after the call returns.
pub trait Place<Env> {
    /// Type of the referenced argument.
    type Target;

    fn place<'e>(&self, env: &'e mut Env) -> &'e mut Self::Target;
}

impl<const N: usize, Env> Place<Env> for Argument<N>
where
    Env: Get<N>,
{
    type Target = Env::Item;

    #[inline]
    fn place<'e>(&self, env: &'e mut Env) -> &'e mut Env::Item {
        env.get_mut()
    }
}

impl<E, Env> Place<Env> for Actor<E>
where
    E: Place<Env>,
{
    type Target = E::Target;

    #[inline]
    fn place<'e>(&self, env: &'e mut Env) -> &'e mut E::Target {
        self.eval_ref().place(env)
    }
}

/// Placeholder actors, named from 1 after the argument they stand for.
pub mod placeholders {
    use super::{Actor, Argument};

    pub const _1: Actor<Argument<0>> = Actor::new(Argument);
    pub const _2: Actor<Argument<1>> = Actor::new(Argument);
    pub const _3: Actor<Argument<2>> = Actor::new(Argument);
    pub const _4: Actor<Argument<3>> = Actor::new(Argument);
    pub const _5: Actor<Argument<4>> = Actor::new(Argument);
    pub const _6: Actor<Argument<5>> = Actor::new(Argument);
    pub const _7: Actor<Argument<6>> = Actor::new(Argument);
    pub const _8: Actor<Argument<7>> = Actor::new(Argument);
    pub const _9: Actor<Argument<8>> = Actor::new(Argument);
    pub const _10: Actor<Argument<9>> = Actor::new(Argument);
}
