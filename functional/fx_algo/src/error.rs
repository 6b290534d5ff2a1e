//! Errors reported by the algorithm layer.
//!
//! Expression evaluation itself cannot fail at run time; these cover the
//! inputs handed to an algorithm and its configuration.

/// Error from an algorithm call or from building an [`crate::ExecConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AlgoError {
    /// Two slices that are walked in lockstep have different lengths.
    #[error("slice length mismatch: expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// A configuration variable holds a value that cannot be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

/// Result type for algorithm calls.
pub type AlgoResult<T> = Result<T, AlgoError>;

/// Check that `found` has the `expected` length.
pub(crate) fn check_len(expected: usize, found: usize) -> AlgoResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(AlgoError::LengthMismatch { expected, found })
    }
}
