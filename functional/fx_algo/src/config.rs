//! Execution configuration.

use std::str::FromStr;

use crate::error::{AlgoError, AlgoResult};

/// Environment variable selecting the backend (`sequential` or `parallel`).
pub const BACKEND_VAR: &str = "FX_BACKEND";
/// Environment variable fixing the worker count of a dedicated pool.
pub const THREADS_VAR: &str = "FX_THREADS";
/// Environment variable overriding [`ExecConfig::min_parallel_len`].
pub const MIN_PARALLEL_LEN_VAR: &str = "FX_MIN_PARALLEL_LEN";

/// Where element-wise work runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
    /// One element after another on the calling thread (default).
    #[default]
    Sequential,
    /// Split across rayon workers, each holding its own copy of the actor.
    Parallel,
}

impl FromStr for Backend {
    type Err = AlgoError;

    fn from_str(s: &str) -> AlgoResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Backend::Sequential),
            "parallel" | "par" => Ok(Backend::Parallel),
            _ => Err(AlgoError::InvalidConfig {
                key: BACKEND_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for an [`crate::Executor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecConfig {
    /// Backend to use for inputs long enough to split.
    pub backend: Backend,
    /// Worker count for a dedicated pool. `None` uses rayon's global pool.
    ///
    /// `Some(0)` is not a request for zero workers: rayon reads it as "pick
    /// automatically", the same as `None` but on a separate pool.
    /// [`ExecConfig::from_lookup`] rejects `0`.
    pub threads: Option<usize>,
    /// Inputs shorter than this always run sequentially.
    pub min_parallel_len: usize,
}

impl Default for ExecConfig {
    fn default() -> Self {
        ExecConfig {
            backend: Backend::Sequential,
            threads: None,
            min_parallel_len: 1024,
        }
    }
}

impl ExecConfig {
    #[must_use]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Use a dedicated pool of `threads` workers. `0` lets rayon choose.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    #[must_use]
    pub fn with_min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len;
        self
    }

    /// Read the configuration from `FX_BACKEND`, `FX_THREADS` and
    /// `FX_MIN_PARALLEL_LEN`. Unset variables keep their defaults.
    pub fn from_env() -> AlgoResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AlgoResult<Self> {
        let mut config = ExecConfig::default();

        if let Some(value) = lookup(BACKEND_VAR) {
            config.backend = value.parse()?;
        }
        if let Some(value) = lookup(THREADS_VAR) {
            config.threads = Some(parse_threads(&value)?);
        }
        if let Some(value) = lookup(MIN_PARALLEL_LEN_VAR) {
            config.min_parallel_len = parse_count(MIN_PARALLEL_LEN_VAR, &value)?;
        }

        Ok(config)
    }
}

fn parse_count(key: &'static str, value: &str) -> AlgoResult<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| AlgoError::InvalidConfig {
            key,
            value: value.to_string(),
        })
}

/// A worker count of at least one.
fn parse_threads(value: &str) -> AlgoResult<usize> {
    match parse_count(THREADS_VAR, value)? {
        0 => Err(AlgoError::InvalidConfig {
            key: THREADS_VAR,
            value: value.to_string(),
        }),
        threads => Ok(threads),
    }
}

#[cfg(test)]
mod tests;
