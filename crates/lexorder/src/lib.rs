//! lexorder - Infers an unknown symbol order from a sorted word list.
//!
//! Given tokens known to be sorted under some unknown total order over
//! their symbols, lexorder derives the ordering constraints and produces a
//! consistent total order, or reports why none exists.
//!
//! # Example
//!
//! ```rust
//! use lexorder::prelude::*;
//!
//! let order = resolve_words(&["wrt", "wrf", "er", "ett", "rftt"]).unwrap();
//! assert_eq!(order.len(), 5);
//!
//! // No valid order exists for a cyclic word list.
//! assert!(resolve_words(&["abc", "bca", "cab"]).is_err());
//! ```

// Core data model
pub use lexorder_core::{ConstraintGraph, LexOrderError, Result, Symbol};

// Configuration
pub use lexorder_config::{ConfigError, LimitsConfig, ResolverConfig, TieBreak};

// Resolution stages and the composed pipeline
pub use lexorder_solver::{
    extract_constraints, resolve, resolve_with_config, resolve_words, resolve_words_with_config,
    topological_order,
};

pub mod console;

pub mod prelude {
    pub use super::{resolve, resolve_words, LexOrderError, ResolverConfig, TieBreak};
}
