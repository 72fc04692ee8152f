//! The constraint graph built by extraction and consumed by resolution.

use std::collections::{BTreeMap, BTreeSet};

use crate::symbol::Symbol;

/// A directed graph of "precedes" constraints over a symbol set.
///
/// Edges are deduplicated: inserting the same ordered pair twice is a no-op,
/// and the target's predecessor count only moves on the first insertion.
/// Self-loops are rejected; an edge only ever arises from two symbols that
/// differ.
///
/// The adjacency structure is the read-only side of resolution; predecessor
/// counts are exposed as a snapshot so the resolver can decrement a working
/// copy without aliasing the graph it is traversing.
///
/// # Example
///
/// ```
/// use lexorder_core::ConstraintGraph;
///
/// let mut graph = ConstraintGraph::new();
/// graph.insert_symbol('a');
/// graph.insert_symbol('b');
/// assert!(graph.insert_edge('a', 'b'));
/// assert!(!graph.insert_edge('a', 'b')); // duplicate, not recorded again
/// assert_eq!(graph.predecessor_count(&'b'), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConstraintGraph<S: Symbol> {
    /// All distinct symbols, in `Ord` order.
    symbols: BTreeSet<S>,
    /// The same symbols in first-seen order, for the insertion tie-break.
    first_seen: Vec<S>,
    /// Outgoing edges per symbol. Only symbols with at least one outgoing
    /// edge have an entry.
    adjacency: BTreeMap<S, BTreeSet<S>>,
    /// Number of distinct symbols required to precede each symbol.
    predecessors: BTreeMap<S, usize>,
}

impl<S: Symbol> Default for ConstraintGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> ConstraintGraph<S> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            symbols: BTreeSet::new(),
            first_seen: Vec::new(),
            adjacency: BTreeMap::new(),
            predecessors: BTreeMap::new(),
        }
    }

    /// Registers a symbol. Idempotent.
    pub fn insert_symbol(&mut self, symbol: S) {
        if self.symbols.insert(symbol) {
            self.first_seen.push(symbol);
            self.predecessors.insert(symbol, 0);
        }
    }

    /// Records that `from` must sort before `to`.
    ///
    /// Returns `true` if the edge was newly inserted. A duplicate edge is
    /// ignored and does not touch the predecessor count. Both endpoints are
    /// registered as symbols if they were not already.
    ///
    /// # Panics
    ///
    /// Panics if `from == to`; callers only derive edges from differing
    /// symbols, so a self-loop is a logic error, not an input condition.
    pub fn insert_edge(&mut self, from: S, to: S) -> bool {
        assert!(from != to, "self-loop {from:?} -> {to:?}");
        self.insert_symbol(from);
        self.insert_symbol(to);
        let inserted = self.adjacency.entry(from).or_default().insert(to);
        if inserted {
            *self.predecessors.entry(to).or_insert(0) += 1;
        }
        inserted
    }

    /// Number of distinct symbols observed.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// True if no symbol has been registered.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// True if `symbol` has been registered.
    pub fn contains(&self, symbol: &S) -> bool {
        self.symbols.contains(symbol)
    }

    /// True if the ordered pair has been recorded.
    pub fn contains_edge(&self, from: &S, to: &S) -> bool {
        self.adjacency.get(from).is_some_and(|out| out.contains(to))
    }

    /// Number of distinct recorded edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// All symbols in `Ord` order.
    pub fn symbols(&self) -> impl Iterator<Item = &S> {
        self.symbols.iter()
    }

    /// All symbols in the order they were first registered.
    pub fn symbols_first_seen(&self) -> impl Iterator<Item = &S> {
        self.first_seen.iter()
    }

    /// The symbols `symbol` directly precedes, in `Ord` order.
    pub fn successors(&self, symbol: &S) -> impl Iterator<Item = &S> {
        self.adjacency.get(symbol).into_iter().flatten()
    }

    /// Number of distinct symbols that must precede `symbol`.
    ///
    /// Zero for unregistered symbols.
    pub fn predecessor_count(&self, symbol: &S) -> usize {
        self.predecessors.get(symbol).copied().unwrap_or(0)
    }

    /// A snapshot of every predecessor count, including zeros.
    ///
    /// The resolver decrements this copy while reading the graph, so the
    /// structure being traversed is never the structure being mutated.
    pub fn predecessor_counts(&self) -> BTreeMap<S, usize> {
        self.predecessors.clone()
    }
}
