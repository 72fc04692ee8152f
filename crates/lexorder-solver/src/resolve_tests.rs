//! Unit tests for topological resolution.

use lexorder_config::TieBreak;
use lexorder_core::{ConstraintGraph, LexOrderError};

use crate::topological_order;

#[test]
fn test_chain_resolves_in_order() {
    let mut graph = ConstraintGraph::new();
    graph.insert_edge('a', 'b');
    graph.insert_edge('b', 'c');

    let order = topological_order(&graph, TieBreak::Sorted).unwrap();
    assert_eq!(order, vec!['a', 'b', 'c']);
}

#[test]
fn test_two_cycle_rejected() {
    let mut graph = ConstraintGraph::new();
    graph.insert_edge('a', 'b');
    graph.insert_edge('b', 'a');

    let err = topological_order(&graph, TieBreak::Sorted).unwrap_err();
    assert_eq!(
        err,
        LexOrderError::CyclicConstraints {
            resolved: 0,
            total: 2
        }
    );
}

#[test]
fn test_cycle_after_partial_progress() {
    let mut graph = ConstraintGraph::new();
    graph.insert_edge('a', 'b');
    graph.insert_edge('b', 'c');
    graph.insert_edge('c', 'b');

    let err = topological_order(&graph, TieBreak::Sorted).unwrap_err();
    assert_eq!(
        err,
        LexOrderError::CyclicConstraints {
            resolved: 1,
            total: 3
        }
    );
}

#[test]
fn test_empty_graph_resolves_empty() {
    let graph: ConstraintGraph<char> = ConstraintGraph::new();
    let order = topological_order(&graph, TieBreak::Sorted).unwrap();
    assert!(order.is_empty());
}

#[test]
fn test_unconstrained_symbols_sorted_tie_break() {
    let mut graph = ConstraintGraph::new();
    graph.insert_symbol('c');
    graph.insert_symbol('a');
    graph.insert_symbol('b');

    let order = topological_order(&graph, TieBreak::Sorted).unwrap();
    assert_eq!(order, vec!['a', 'b', 'c']);
}

#[test]
fn test_unconstrained_symbols_insertion_tie_break() {
    let mut graph = ConstraintGraph::new();
    graph.insert_symbol('c');
    graph.insert_symbol('a');
    graph.insert_symbol('b');

    let order = topological_order(&graph, TieBreak::Insertion).unwrap();
    assert_eq!(order, vec!['c', 'a', 'b']);
}

#[test]
fn test_diamond_honors_every_edge() {
    let mut graph = ConstraintGraph::new();
    graph.insert_edge('a', 'b');
    graph.insert_edge('a', 'c');
    graph.insert_edge('b', 'd');
    graph.insert_edge('c', 'd');

    let order = topological_order(&graph, TieBreak::Sorted).unwrap();
    assert_eq!(order.len(), 4);

    let pos = |c: char| order.iter().position(|&s| s == c).unwrap();
    assert!(pos('a') < pos('b'));
    assert!(pos('a') < pos('c'));
    assert!(pos('b') < pos('d'));
    assert!(pos('c') < pos('d'));
}
