//! Topological resolution via Kahn's algorithm.

use std::collections::VecDeque;

use lexorder_config::TieBreak;
use lexorder_core::{ConstraintGraph, LexOrderError, Result, Symbol};
use tracing::trace;

/// Produces a total order over the graph's symbols honoring every edge.
///
/// Kahn's method: seed a queue with every symbol whose predecessor count is
/// zero, then repeatedly place the front symbol and release its successors
/// as their remaining counts reach zero. The graph itself is only read;
/// counts are decremented on a snapshot, so the structure being traversed
/// is never the structure being mutated.
///
/// The seed order (and thus the order among mutually unconstrained
/// symbols) follows `tie_break`; any choice yields a valid order.
///
/// # Errors
///
/// [`LexOrderError::CyclicConstraints`] if the queue drains before every
/// symbol is placed: at least one symbol never reached a zero count, so
/// the constraints touching it form a cycle. No partial order is returned.
pub fn topological_order<S: Symbol>(
    graph: &ConstraintGraph<S>,
    tie_break: TieBreak,
) -> Result<Vec<S>> {
    let mut remaining = graph.predecessor_counts();

    let mut queue: VecDeque<S> = match tie_break {
        TieBreak::Sorted => graph
            .symbols()
            .filter(|&s| remaining[s] == 0)
            .copied()
            .collect(),
        TieBreak::Insertion => graph
            .symbols_first_seen()
            .filter(|&s| remaining[s] == 0)
            .copied()
            .collect(),
    };

    let mut order = Vec::with_capacity(graph.symbol_count());
    while let Some(symbol) = queue.pop_front() {
        trace!(symbol = ?symbol, position = order.len(), "symbol placed");
        order.push(symbol);

        for &target in graph.successors(&symbol) {
            if let Some(count) = remaining.get_mut(&target) {
                *count -= 1;
                if *count == 0 {
                    queue.push_back(target);
                }
            }
        }
    }

    if order.len() == graph.symbol_count() {
        Ok(order)
    } else {
        Err(LexOrderError::CyclicConstraints {
            resolved: order.len(),
            total: graph.symbol_count(),
        })
    }
}
