//! Configuration system for lexorder.
//!
//! Load resolver configuration from TOML or YAML files to control input
//! limits and the tie-break among unconstrained symbols without code
//! changes. The resolver itself has no cancellation support; a host
//! handling large or untrusted inputs caps them up front with the limits
//! here.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use lexorder_config::{ResolverConfig, TieBreak};
//!
//! let config = ResolverConfig::from_toml_str(r#"
//!     tie_break = "insertion"
//!
//!     [limits]
//!     max_tokens = 10000
//!     max_total_symbols = 1000000
//! "#).unwrap();
//!
//! assert_eq!(config.tie_break, TieBreak::Insertion);
//! assert_eq!(config.limits.max_tokens, Some(10000));
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use lexorder_config::ResolverConfig;
//!
//! let config = ResolverConfig::load("resolver.toml").unwrap_or_default();
//! // Proceeds with defaults (no limits, sorted tie-break)
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Main resolver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolverConfig {
    /// Tie-break among symbols that become eligible together.
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Input-size limits, checked before extraction.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl ResolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the tie-break mode.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Caps the number of input tokens.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.limits.max_tokens = Some(max_tokens);
        self
    }

    /// Caps the total symbol count summed over all tokens.
    pub fn with_max_total_symbols(mut self, max_total_symbols: usize) -> Self {
        self.limits.max_total_symbols = Some(max_total_symbols);
        self
    }
}

/// Tie-break among symbols whose predecessor count reaches zero together.
///
/// Any deterministic choice yields a valid order; the mode only matters to
/// callers that compare outputs across runs or implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Eligible symbols are taken in their natural `Ord` order.
    /// Reproducible across runs without any extra bookkeeping.
    #[default]
    Sorted,

    /// Eligible symbols are taken in the order they were first observed
    /// in the input, matching the reference behavior.
    Insertion,
}

/// Input-size limits.
///
/// `None` means unlimited. Limits are checked before any extraction work
/// and violations surface as an error, never as a truncated result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct LimitsConfig {
    /// Maximum number of input tokens.
    pub max_tokens: Option<usize>,

    /// Maximum total symbol count summed over all tokens.
    pub max_total_symbols: Option<usize>,
}

#[cfg(test)]
mod tests;
