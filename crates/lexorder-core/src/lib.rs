//! Lexorder Core - Data model for ordering-constraint resolution
//!
//! This crate provides the fundamental types shared by the lexorder stages:
//! - The `Symbol` trait for atomic alphabet elements
//! - The constraint graph built during extraction and consumed by resolution
//! - Error types covering every way an input can fail to admit an order

pub mod error;
pub mod graph;
pub mod symbol;

pub use error::{LexOrderError, Result};
pub use graph::ConstraintGraph;
pub use symbol::Symbol;

#[cfg(test)]
mod graph_tests;
