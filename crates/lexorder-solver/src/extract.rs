//! Constraint extraction from an ordered token sequence.

use lexorder_core::{ConstraintGraph, LexOrderError, Result, Symbol};
use tracing::debug;

/// Builds the constraint graph implied by a sorted token sequence.
///
/// Every symbol in every token is registered. Each adjacent token pair is
/// then compared position by position: the first differing position yields
/// a precedes edge and ends the comparison, since a lexicographic order is
/// fully decided by the first difference. Pairs that agree on every shared
/// position yield no edge, except for the contradictory case where the
/// second token is a strict prefix of the first.
///
/// # Errors
///
/// * [`LexOrderError::EmptyToken`] if any token has no symbols.
/// * [`LexOrderError::ContradictoryPrefix`] if a token is immediately
///   followed by a strict prefix of itself. Extraction stops at the
///   offending pair; later pairs are never examined.
///
/// # Example
///
/// ```
/// use lexorder_solver::extract_constraints;
///
/// let tokens: Vec<Vec<char>> = ["ba", "bc", "ac"]
///     .iter()
///     .map(|t| t.chars().collect())
///     .collect();
/// let graph = extract_constraints(&tokens).unwrap();
///
/// assert!(graph.contains_edge(&'a', &'c')); // from "ba" vs "bc"
/// assert!(graph.contains_edge(&'b', &'a')); // from "bc" vs "ac"
/// assert_eq!(graph.symbol_count(), 3);
/// ```
pub fn extract_constraints<S, T>(tokens: &[T]) -> Result<ConstraintGraph<S>>
where
    S: Symbol,
    T: AsRef<[S]>,
{
    let mut graph = ConstraintGraph::new();

    for (index, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        if token.is_empty() {
            return Err(LexOrderError::EmptyToken { index });
        }
        for &symbol in token {
            graph.insert_symbol(symbol);
        }
    }

    for (index, pair) in tokens.windows(2).enumerate() {
        let first = pair[0].as_ref();
        let second = pair[1].as_ref();

        match first.iter().zip(second).position(|(a, b)| a != b) {
            Some(pos) => {
                // Only the first difference carries information; positions
                // past it are unreachable once the order is decided here.
                let (from, to) = (first[pos], second[pos]);
                if graph.insert_edge(from, to) {
                    debug!(from = ?from, to = ?to, pair_index = index, "edge recorded");
                }
            }
            // No difference within the shared length. A strictly longer
            // token cannot sort before its own strict prefix.
            None if first.len() > second.len() => {
                return Err(LexOrderError::ContradictoryPrefix { index });
            }
            // Equal tokens, or a true prefix in the benign direction:
            // length already decides the order, no edge to record.
            None => {}
        }
    }

    Ok(graph)
}
