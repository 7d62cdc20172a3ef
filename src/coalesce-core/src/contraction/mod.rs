//! Round-based graph contraction.
//!
//! This module provides the contraction primitives:
//! - `NodeGroup` for a merged set of nodes and its outward boundary
//! - `ContractionAutomaton` for the round-based state machine interface
//! - `BoruvkaContraction` for the randomized pairing engine

mod automaton;
mod boruvka;
mod group;

pub use automaton::ContractionAutomaton;
pub use boruvka::{BoruvkaContraction, ContractionConfig, ContractionOutcome};
pub use group::NodeGroup;
