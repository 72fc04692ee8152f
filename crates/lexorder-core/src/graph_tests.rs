//! Unit tests for the constraint graph.

use crate::graph::ConstraintGraph;

#[test]
fn test_insert_symbol_idempotent() {
    let mut graph = ConstraintGraph::new();
    graph.insert_symbol('a');
    graph.insert_symbol('a');
    graph.insert_symbol('b');

    assert_eq!(graph.symbol_count(), 2);
    assert!(graph.contains(&'a'));
    assert!(graph.contains(&'b'));
    assert!(!graph.contains(&'c'));
}

#[test]
fn test_edge_dedup_and_predecessor_count() {
    let mut graph = ConstraintGraph::new();
    assert!(graph.insert_edge('a', 'b'));
    assert!(!graph.insert_edge('a', 'b'));
    assert!(!graph.insert_edge('a', 'b'));

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.predecessor_count(&'b'), 1);
    assert_eq!(graph.predecessor_count(&'a'), 0);
}

#[test]
fn test_edge_registers_endpoints() {
    let mut graph = ConstraintGraph::new();
    graph.insert_edge('x', 'y');

    assert_eq!(graph.symbol_count(), 2);
    assert!(graph.contains_edge(&'x', &'y'));
    assert!(!graph.contains_edge(&'y', &'x'));
}

#[test]
#[should_panic(expected = "self-loop")]
fn test_self_loop_panics() {
    let mut graph = ConstraintGraph::new();
    graph.insert_edge('a', 'a');
}

#[test]
fn test_successors_in_ord_order() {
    let mut graph = ConstraintGraph::new();
    graph.insert_edge('m', 'z');
    graph.insert_edge('m', 'a');
    graph.insert_edge('m', 'k');

    let out: Vec<char> = graph.successors(&'m').copied().collect();
    assert_eq!(out, vec!['a', 'k', 'z']);
}

#[test]
fn test_first_seen_order_preserved() {
    let mut graph = ConstraintGraph::new();
    graph.insert_symbol('q');
    graph.insert_symbol('a');
    graph.insert_edge('q', 'm');
    graph.insert_symbol('a'); // duplicate, must not reorder

    let seen: Vec<char> = graph.symbols_first_seen().copied().collect();
    assert_eq!(seen, vec!['q', 'a', 'm']);

    let sorted: Vec<char> = graph.symbols().copied().collect();
    assert_eq!(sorted, vec!['a', 'm', 'q']);
}

#[test]
fn test_predecessor_counts_snapshot_includes_zeros() {
    let mut graph = ConstraintGraph::new();
    graph.insert_symbol('a');
    graph.insert_edge('b', 'c');

    let counts = graph.predecessor_counts();
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&'a'], 0);
    assert_eq!(counts[&'b'], 0);
    assert_eq!(counts[&'c'], 1);
}

#[test]
fn test_unregistered_symbol_has_zero_predecessors() {
    let graph: ConstraintGraph<char> = ConstraintGraph::new();
    assert_eq!(graph.predecessor_count(&'z'), 0);
    assert!(graph.is_empty());
}
