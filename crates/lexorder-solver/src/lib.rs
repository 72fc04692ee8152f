//! Lexorder Solver - Infers a symbol order from a sorted token sequence.
//!
//! Two composed pure stages over call-local state:
//! - [`extract_constraints`]: walks consecutive token pairs and derives
//!   "precedes" edges from the first differing position of each pair.
//! - [`topological_order`]: Kahn's algorithm over the extracted graph.
//!
//! [`resolve`] runs both stages; [`resolve_with_config`] additionally
//! enforces input limits and the configured tie-break. Both are
//! synchronous and single-threaded: there is no I/O, no suspension point,
//! and no state shared between calls, so concurrent callers need no
//! coordination.
//!
//! # Example
//!
//! ```
//! use lexorder_solver::resolve_words;
//!
//! let order = resolve_words(&["wrt", "wrf", "er", "ett", "rftt"]).unwrap();
//!
//! // The order is a valid witness, not necessarily unique: check edges.
//! let pos = |c: char| order.iter().position(|&s| s == c).unwrap();
//! assert!(pos('w') < pos('e'));
//! assert!(pos('r') < pos('t'));
//! assert!(pos('t') < pos('f'));
//! ```

use lexorder_config::ResolverConfig;
use lexorder_core::{LexOrderError, Result, Symbol};
use tracing::info;

mod extract;
mod resolve;

pub use extract::extract_constraints;
pub use resolve::topological_order;

#[cfg(test)]
mod resolve_tests;

/// Resolves a token sequence with the default configuration.
///
/// See [`resolve_with_config`].
pub fn resolve<S, T>(tokens: &[T]) -> Result<Vec<S>>
where
    S: Symbol,
    T: AsRef<[S]>,
{
    resolve_with_config(tokens, &ResolverConfig::default())
}

/// Resolves a token sequence: extraction followed by topological ordering.
///
/// On success the returned sequence contains every distinct input symbol
/// exactly once, with `a` strictly before `b` for every derived constraint
/// `(a, b)`. An empty token sequence succeeds vacuously with an empty
/// order. The result is all-or-nothing: no partial order is ever returned.
///
/// # Errors
///
/// * [`LexOrderError::LimitExceeded`] if the input exceeds a configured
///   limit; checked before any extraction work.
/// * [`LexOrderError::EmptyToken`] and
///   [`LexOrderError::ContradictoryPrefix`] from extraction.
/// * [`LexOrderError::CyclicConstraints`] from resolution.
pub fn resolve_with_config<S, T>(tokens: &[T], config: &ResolverConfig) -> Result<Vec<S>>
where
    S: Symbol,
    T: AsRef<[S]>,
{
    check_limits(tokens, config)?;

    info!(event = "resolve_start", tokens = tokens.len());

    let graph = match extract_constraints(tokens) {
        Ok(graph) => graph,
        Err(err) => {
            info!(event = "resolve_end", outcome = "extraction_failed", error = %err);
            return Err(err);
        }
    };

    info!(
        event = "extraction_end",
        symbols = graph.symbol_count(),
        edges = graph.edge_count(),
    );

    match topological_order(&graph, config.tie_break) {
        Ok(order) => {
            info!(event = "resolve_end", outcome = "success", symbols = order.len());
            Ok(order)
        }
        Err(err) => {
            info!(event = "resolve_end", outcome = "resolution_failed", error = %err);
            Err(err)
        }
    }
}

/// Resolves a word list in the reference domain: tokens are strings,
/// symbols are their characters.
///
/// # Example
///
/// ```
/// use lexorder_solver::resolve_words;
///
/// assert_eq!(resolve_words(&["z", "x"]).unwrap(), vec!['z', 'x']);
/// ```
pub fn resolve_words(words: &[impl AsRef<str>]) -> Result<Vec<char>> {
    resolve_words_with_config(words, &ResolverConfig::default())
}

/// Like [`resolve_words`], with an explicit configuration.
pub fn resolve_words_with_config(
    words: &[impl AsRef<str>],
    config: &ResolverConfig,
) -> Result<Vec<char>> {
    let tokens: Vec<Vec<char>> = words
        .iter()
        .map(|w| w.as_ref().chars().collect())
        .collect();
    resolve_with_config(&tokens, config)
}

fn check_limits<S, T>(tokens: &[T], config: &ResolverConfig) -> Result<()>
where
    S: Symbol,
    T: AsRef<[S]>,
{
    if let Some(limit) = config.limits.max_tokens {
        if tokens.len() > limit {
            return Err(LexOrderError::LimitExceeded {
                what: "token count",
                actual: tokens.len(),
                limit,
            });
        }
    }
    if let Some(limit) = config.limits.max_total_symbols {
        let actual: usize = tokens.iter().map(|t| t.as_ref().len()).sum();
        if actual > limit {
            return Err(LexOrderError::LimitExceeded {
                what: "total symbol count",
                actual,
                limit,
            });
        }
    }
    Ok(())
}
