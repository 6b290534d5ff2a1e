//! Element-wise algorithms.
//!
//! Every algorithm applies an actor once per element, binding the element
//! (or the elements at the same index of several slices) by mutable
//! reference. On the parallel backend each rayon worker clones the actor
//! once and reuses its copy, so no actor state is shared between workers.

use fx_actor::{val, Actor, Eval};
use fx_env::Null;
use rayon::prelude::*;

use crate::config::{Backend, ExecConfig};
use crate::error::{check_len, AlgoResult};

/// How one call runs, decided from the config and the input length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Sequential,
    Parallel,
}

/// Runs algorithms under an [`ExecConfig`].
pub struct Executor {
    config: ExecConfig,
    /// Dedicated pool when `config.threads` is set and the pool could be built.
    pool: Option<rayon::ThreadPool>,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor {
    /// Create an executor with the default (sequential) config.
    pub fn new() -> Self {
        Executor {
            config: ExecConfig::default(),
            pool: None,
        }
    }

    /// Create an executor with a custom config.
    ///
    /// A dedicated pool is built when `threads` is set. If that fails the
    /// executor runs everything sequentially.
    pub fn with_config(config: ExecConfig) -> Self {
        Self::with_pool_builder(config, |threads| {
            rayon::ThreadPoolBuilder::new().num_threads(threads).build()
        })
    }

    /// `with_config` with the pool construction supplied by the caller.
    fn with_pool_builder(
        mut config: ExecConfig,
        build: impl FnOnce(usize) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError>,
    ) -> Self {
        let pool = match (config.backend, config.threads) {
            (Backend::Parallel, Some(threads)) => match build(threads) {
                Ok(pool) => Some(pool),
                Err(e) => {
                    tracing::warn!(threads, "failed to create thread pool ({e}), running sequentially");
                    config.backend = Backend::Sequential;
                    None
                }
            },
            _ => None,
        };
        Executor { config, pool }
    }

    pub fn config(&self) -> &ExecConfig {
        &self.config
    }

    fn mode(&self, len: usize) -> Mode {
        let mode = match self.config.backend {
            Backend::Parallel if len >= self.config.min_parallel_len => Mode::Parallel,
            _ => Mode::Sequential,
        };
        tracing::debug!(?mode, len, "selected execution mode");
        mode
    }

    /// Run parallel work on the dedicated pool, or the global one.
    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Set every element to a copy of `value`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn fill<T>(&self, data: &mut [T], value: &T)
    where
        T: Clone + Send,
    {
        self.generate(data, &val(value.clone()));
    }

    /// Set every element to the result of a zero-argument call.
    #[tracing::instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn generate<T, E>(&self, data: &mut [T], actor: &Actor<E>)
    where
        T: Send,
        E: Eval<Null, Output = T> + Clone + Send,
    {
        match self.mode(data.len()) {
            Mode::Sequential => {
                for x in data.iter_mut() {
                    *x = actor.call0();
                }
            }
            Mode::Parallel => {
                let actor = actor.clone();
                self.install(move || {
                    data.par_iter_mut()
                        .for_each_with(actor, |actor, x| *x = actor.call0());
                });
            }
        }
    }

    /// Call `actor` with each element bound at position 0.
    ///
    /// Writes the actor makes through its environment land in `data`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn for_each<T, E>(&self, data: &mut [T], actor: &Actor<E>)
    where
        T: Send,
        E: for<'a> Eval<(&'a mut T,)> + Clone + Send,
    {
        match self.mode(data.len()) {
            Mode::Sequential => {
                for x in data.iter_mut() {
                    actor.call1(x);
                }
            }
            Mode::Parallel => {
                let actor = actor.clone();
                self.install(move || {
                    data.par_iter_mut().for_each_with(actor, |actor, x| {
                        actor.call1(x);
                    });
                });
            }
        }
    }

    /// `output[i] = actor(input[i])`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn transform<A, B, E>(
        &self,
        input: &mut [A],
        output: &mut [B],
        actor: &Actor<E>,
    ) -> AlgoResult<()>
    where
        A: Send,
        B: Send,
        E: for<'a> Eval<(&'a mut A,), Output = B> + Clone + Send,
    {
        check_len(input.len(), output.len())?;
        match self.mode(input.len()) {
            Mode::Sequential => {
                for (a, out) in input.iter_mut().zip(output.iter_mut()) {
                    *out = actor.call1(a);
                }
            }
            Mode::Parallel => {
                let actor = actor.clone();
                self.install(move || {
                    input
                        .par_iter_mut()
                        .zip(output.par_iter_mut())
                        .for_each_with(actor, |actor, (a, out)| *out = actor.call1(a));
                });
            }
        }
        Ok(())
    }

    /// `output[i] = actor(lhs[i], rhs[i])`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = lhs.len()))]
    pub fn transform2<A, B, C, E>(
        &self,
        lhs: &mut [A],
        rhs: &mut [B],
        output: &mut [C],
        actor: &Actor<E>,
    ) -> AlgoResult<()>
    where
        A: Send,
        B: Send,
        C: Send,
        E: for<'a> Eval<(&'a mut A, &'a mut B), Output = C> + Clone + Send,
    {
        check_len(lhs.len(), rhs.len())?;
        check_len(lhs.len(), output.len())?;
        match self.mode(lhs.len()) {
            Mode::Sequential => {
                for ((a, b), out) in lhs.iter_mut().zip(rhs.iter_mut()).zip(output.iter_mut()) {
                    *out = actor.call2(a, b);
                }
            }
            Mode::Parallel => {
                let actor = actor.clone();
                self.install(move || {
                    lhs.par_iter_mut()
                        .zip(rhs.par_iter_mut())
                        .zip(output.par_iter_mut())
                        .for_each_with(actor, |actor, ((a, b), out)| {
                            *out = actor.call2(a, b);
                        });
                });
            }
        }
        Ok(())
    }

    /// Index of the first element the predicate accepts.
    ///
    /// The parallel backend also reports the lowest matching index.
    #[tracing::instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn find_if<T, E>(&self, data: &mut [T], pred: &Actor<E>) -> Option<usize>
    where
        T: Send,
        E: for<'a> Eval<(&'a mut T,), Output = bool> + Clone + Send,
    {
        match self.mode(data.len()) {
            Mode::Sequential => data.iter_mut().position(|x| pred.call1(x)),
            Mode::Parallel => {
                let pred = pred.clone();
                self.install(move || {
                    data.par_iter_mut()
                        .map_with(pred, |pred, x| pred.call1(x))
                        .position_first(|hit| hit)
                })
            }
        }
    }

    /// Number of elements the predicate accepts.
    #[tracing::instrument(level = "debug", skip_all, fields(len = data.len()))]
    pub fn count_if<T, E>(&self, data: &mut [T], pred: &Actor<E>) -> usize
    where
        T: Send,
        E: for<'a> Eval<(&'a mut T,), Output = bool> + Clone + Send,
    {
        match self.mode(data.len()) {
            Mode::Sequential => data.iter_mut().map(|x| pred.call1(x)).filter(|hit| *hit).count(),
            Mode::Parallel => {
                let pred = pred.clone();
                self.install(move || {
                    data.par_iter_mut()
                        .map_with(pred, |pred, x| pred.call1(x))
                        .filter(|hit| *hit)
                        .count()
                })
            }
        }
    }
}
