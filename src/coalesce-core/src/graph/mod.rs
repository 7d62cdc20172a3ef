//! Undirected graph model.
//!
//! This module provides the foundational data structure the contraction
//! engine operates on: an insertion-ordered node collection with a
//! symmetric adjacency relation.

mod undirected;

pub use undirected::Graph;
