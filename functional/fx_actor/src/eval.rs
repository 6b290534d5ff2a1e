//! The evaluation-strategy capability and the result-type resolver.

/// An evaluation strategy: how a value is computed from a bound environment.
///
/// A strategy implements `Eval<Env>` once for each environment shape it can
/// be called with. Terminals that ignore their arguments implement it for
/// every `Env`; composites implement it wherever all of their operands do.
/// The associated `Output` is the strategy's result computation, so the
/// same strategy can produce different types at different arities.
///
/// `eval` receives the environment by mutable reference. Composites thread
/// the same environment through each operand in turn; writes made by one
/// operand are visible to the next.
///
/// Implementations must not allocate, panic, or dispatch dynamically: the
/// same expression runs once per element of large ranges, on every worker.
pub trait Eval<Env> {
    /// Result of evaluating under `Env`.
    type Output;

    fn eval(&self, env: &mut Env) -> Self::Output;
}

/// Result type of evaluating strategy `E` under environment `Env`.
///
/// Composition code names "what does this operand return here" through this
/// alias without caring whether `E` is a terminal or a composite. If `E` has
/// no `Eval<Env>` impl the alias does not resolve and compilation fails at
/// the use site.
pub type ApplyActor<E, Env> = <E as Eval<Env>>::Output;
