//! Core data model for the Coalesce contraction engine.
//!
//! This crate provides the fundamental types for randomized graph
//! contraction:
//! - `Graph` for the undirected graph model
//! - `NodeGroup` for contracted node groups and their boundaries
//! - `ContractionAutomaton` and `BoruvkaContraction` for the round-based
//!   contraction state machine

pub mod contraction;
pub mod graph;
mod proptest_utils;
pub mod testing;

// Re-export commonly used types
pub use contraction::{
    BoruvkaContraction, ContractionAutomaton, ContractionConfig, ContractionOutcome, NodeGroup,
};
pub use graph::Graph;
