//! Error types for lexorder

use thiserror::Error;

/// Main error type for lexorder operations.
///
/// `ContradictoryPrefix` and `CyclicConstraints` both mean "no consistent
/// order exists" and a caller is free to collapse them; they stay separate
/// so richer reporting remains possible. Neither is transient: both are
/// properties of the input data and retrying cannot succeed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexOrderError {
    /// A token is immediately followed by a strict prefix of itself.
    ///
    /// `index` is the position of the longer token in the input sequence.
    #[error("token at index {index} is followed by a strict prefix of itself")]
    ContradictoryPrefix { index: usize },

    /// The derived precedes-relations form a cycle, so no linear extension
    /// exists. `resolved` symbols were placed before the queue drained out
    /// of the `total` observed.
    #[error("ordering constraints are cyclic ({resolved} of {total} symbols resolved)")]
    CyclicConstraints { resolved: usize, total: usize },

    /// A token at `index` contained no symbols.
    #[error("token at index {index} is empty")]
    EmptyToken { index: usize },

    /// A configured input-size limit was exceeded before extraction began.
    #[error("input exceeds configured limit: {what} is {actual}, limit is {limit}")]
    LimitExceeded {
        what: &'static str,
        actual: usize,
        limit: usize,
    },
}

/// Result type alias for lexorder operations.
pub type Result<T> = std::result::Result<T, LexOrderError>;
