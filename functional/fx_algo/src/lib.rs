//! FX Algo - Element-wise algorithms over lazy functional expressions.
//!
//! The algorithms here are the consumers actors are built for: an actor is
//! applied once per element of a slice, sequentially or across rayon
//! workers, with no per-call allocation or dispatch.
//!
//! ```
//! use fx_actor::{placeholders::_1, val};
//! use fx_algo::{Backend, ExecConfig, Executor};
//!
//! let exec = Executor::with_config(ExecConfig::default().with_backend(Backend::Parallel));
//!
//! let mut data = vec![0_u32; 4];
//! exec.fill(&mut data, &7);
//! assert_eq!(data, [7, 7, 7, 7]);
//!
//! let mut out = vec![0_u32; 4];
//! exec.transform(&mut data, &mut out, &_1).unwrap();
//! assert_eq!(out, data);
//!
//! assert_eq!(exec.find_if(&mut data, &val(true)), Some(0));
//! ```
//!
//! # Logging
//!
//! Entry points emit `tracing` spans at debug level. Evaluation of the
//! actors themselves never logs. Call [`init_tracing`] to print them,
//! with `FX_LOG=debug` or a full `RUST_LOG` filter in the environment.

mod config;
mod error;
mod executor;

use std::sync::Once;

pub use config::{Backend, ExecConfig, BACKEND_VAR, MIN_PARALLEL_LEN_VAR, THREADS_VAR};
pub use error::{AlgoError, AlgoResult};
pub use executor::Executor;

/// Environment variable holding a filter for this crate's spans alone.
pub const LOG_VAR: &str = "FX_LOG";

/// Filter used when `FX_LOG` is set but empty.
const DEFAULT_FILTER: &str = "fx_algo=debug";

static TRACING_INIT: Once = Once::new();

/// Install a `tracing-subscriber` formatter for this crate's spans.
///
/// Safe to call multiple times, and does nothing when another subscriber
/// is already installed. Logging stays off unless `RUST_LOG` or `FX_LOG` is
/// set; see [`filter_directives`] for which one wins.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let rust_log = std::env::var("RUST_LOG").ok();
        let fx_log = std::env::var(LOG_VAR).ok();
        let Some(directives) = filter_directives(rust_log.as_deref(), fx_log.as_deref()) else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!("fx_algo: ignoring log filter {directives:?} ({e})");
            EnvFilter::new(DEFAULT_FILTER)
        });
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(filter)
            .try_init();
    });
}

/// Pick the filter directives from `RUST_LOG` and `FX_LOG`.
///
/// `RUST_LOG` is used verbatim. Otherwise `FX_LOG` names a level for
/// `fx_algo` (`FX_LOG=trace` means `fx_algo=trace`), or is passed through
/// when it already holds directives. An empty `FX_LOG` means
/// `fx_algo=debug`. `None` when neither is set.
pub fn filter_directives(rust_log: Option<&str>, fx_log: Option<&str>) -> Option<String> {
    if let Some(rust_log) = rust_log {
        return Some(rust_log.to_string());
    }
    let fx_log = fx_log?.trim();
    Some(if fx_log.is_empty() {
        DEFAULT_FILTER.to_string()
    } else if fx_log.contains(['=', ',']) {
        fx_log.to_string()
    } else {
        format!("fx_algo={fx_log}")
    })
}

#[cfg(test)]
mod tests;
