//! Coalesce Playground - Experiments and Examples
//!
//! This crate provides executable apps for experimenting with Coalesce's
//! graph contraction engine.
//!
//! # Available Binaries
//!
//! - **`contraction-demo`**: generates a random graph, contracts it round
//!   by round, and optionally reports force-directed positions
//!
//! # Usage
//!
//! ```bash
//! # Run the contraction demo on the default 75-node graph
//! cargo run --package coalesce-playground --bin contraction-demo
//!
//! # Reproducible run with layout positions, reported as JSON
//! cargo run --package coalesce-playground --bin contraction-demo -- \
//!     --seed 42 --layout --json
//! ```

pub mod data;
pub mod utils;

pub use data::{path_graph, random_graph, sample_graph};
pub use utils::{format_groups, print_divider, print_header};
