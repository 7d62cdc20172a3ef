//! Force-directed layout for Coalesce graphs.
//!
//! This crate computes 2-D positions for graph nodes with a spring-style
//! simulation: adjacent nodes attract, all nodes repel at short range,
//! and a weak gravity pulls the cloud toward the origin. The layout is
//! pure math over a borrowed graph; it never influences contraction
//! correctness and does no rendering of its own.

pub mod forces;
pub mod geom;
pub mod layout;

pub use geom::Vec2;
pub use layout::{ForceLayout, LayoutConfig};
