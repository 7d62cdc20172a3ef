//! Property-based testing utilities for coalesce-core.
//!
//! This module provides proptest strategies for graphs and contraction
//! runs to enable property-based testing of the engine's invariants.
