//! The force-directed layout engine.

use std::collections::HashMap;
use std::hash::Hash;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use coalesce_core::Graph;
use common_error::{CoalesceError, CoalesceResult};

use crate::forces::{attractive_force, distance_gradient, gravity, repulsive_force};
use crate::geom::Vec2;

/// Configuration for stepping and settling a layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Base step speed for the decayed cooling schedule.
    pub speed: f32,
    /// Number of ramp-up iterations performed by [`ForceLayout::settle`].
    pub warmup_iterations: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            warmup_iterations: 200,
        }
    }
}

impl LayoutConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base step speed.
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the number of warmup iterations.
    #[must_use]
    pub fn with_warmup_iterations(mut self, warmup_iterations: usize) -> Self {
        self.warmup_iterations = warmup_iterations;
        self
    }
}

/// Spring simulation assigning a 2-D position to every node of a
/// borrowed graph.
///
/// Adjacent nodes attract, every node pair repels at short range, and a
/// weak gravity pulls the cloud toward the origin. Positions start
/// uniformly random in the unit square and are re-centered after every
/// step so the bounding-box center stays at the origin.
#[derive(Debug, Clone)]
pub struct ForceLayout<'g, N: Eq + Hash> {
    graph: &'g Graph<N>,
    positions: HashMap<N, Vec2>,
    config: LayoutConfig,
}

impl<'g, N: Clone + Eq + Hash> ForceLayout<'g, N> {
    /// Lay out `graph` with entropy-seeded initial positions.
    pub fn new(graph: &'g Graph<N>) -> Self {
        Self::with_rng(graph, StdRng::from_entropy())
    }

    /// Lay out `graph` with a fixed seed, for reproducible positions.
    pub fn with_seed(graph: &'g Graph<N>, seed: u64) -> Self {
        Self::with_rng(graph, StdRng::seed_from_u64(seed))
    }

    /// Lay out `graph` with an injected random source.
    pub fn with_rng<R: Rng>(graph: &'g Graph<N>, mut rng: R) -> Self {
        let positions = graph
            .nodes()
            .iter()
            .map(|node| (node.clone(), Vec2::new(rng.gen::<f32>(), rng.gen::<f32>())))
            .collect();

        Self {
            graph,
            positions,
            config: LayoutConfig::default(),
        }
    }

    /// Replace the layout configuration.
    #[must_use]
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    fn position(&self, node: &N) -> Vec2 {
        self.positions.get(node).copied().unwrap_or_default()
    }

    /// Net force on `node` from one `other` node.
    fn pairwise_force(&self, node: &N, other: &N) -> Vec2 {
        let this_pos = self.position(node);
        let other_pos = self.position(other);

        let gradient = distance_gradient(this_pos, other_pos);
        let distance = this_pos.distance(other_pos);

        let mut magnitude = repulsive_force(distance);
        if self.graph.has_edge(node, other) {
            magnitude += attractive_force(distance);
        }

        gradient * magnitude + gravity(this_pos)
    }

    fn net_force(&self, node: &N) -> Vec2 {
        let mut sum = Vec2::ZERO;
        for other in self.graph.nodes() {
            if other == node {
                continue;
            }
            sum += self.pairwise_force(node, other);
        }
        sum
    }

    /// Advance the simulation by one step of size `delta`, then re-center
    /// so the bounding-box center of the cloud is the origin.
    ///
    /// Nodes are updated sequentially in place, so later nodes see the
    /// moved positions of earlier ones within the same step.
    pub fn step(&mut self, delta: f32) {
        for node in self.graph.nodes() {
            let displacement = self.net_force(node) * delta;
            let position = self.position(node) + displacement;
            self.positions.insert(node.clone(), position);
        }

        if let Some(center) = self.bounding_box_center() {
            for position in self.positions.values_mut() {
                *position -= center;
            }
        }
    }

    /// One step of the cooling schedule: the step size shrinks with the
    /// square root of the iteration count.
    pub fn step_decayed(&mut self, iteration: usize) {
        #[allow(clippy::cast_precision_loss)]
        let delta = self.config.speed / ((iteration + 10) as f32).sqrt();
        self.step(delta);
    }

    /// Run the warmup loop: `warmup_iterations` steps with a linearly
    /// ramping step size, bringing a random cloud near equilibrium.
    pub fn settle(&mut self) {
        let count = self.config.warmup_iterations;
        for i in 1..count {
            #[allow(clippy::cast_precision_loss)]
            self.step(i as f32 / count as f32 * 0.5);
        }
        debug!("layout settled after {count} warmup iterations");
    }

    /// Current positions, centered on the origin.
    pub fn positions(&self) -> &HashMap<N, Vec2> {
        &self.positions
    }

    /// Position of one node, if it is part of the graph.
    pub fn position_of(&self, node: &N) -> Option<Vec2> {
        self.positions.get(node).copied()
    }

    fn bounding_box(&self) -> Option<(Vec2, Vec2)> {
        let mut min = Vec2::new(f32::INFINITY, f32::INFINITY);
        let mut max = Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY);

        for position in self.positions.values() {
            min.x = min.x.min(position.x);
            min.y = min.y.min(position.y);
            max.x = max.x.max(position.x);
            max.y = max.y.max(position.y);
        }

        (!self.positions.is_empty()).then_some((min, max))
    }

    fn bounding_box_center(&self) -> Option<Vec2> {
        self.bounding_box().map(|(min, max)| (min + max) / 2.0)
    }

    /// Map the centered positions into a `width` x `height` viewport:
    /// scale to fill 90% of the smaller axis and translate to the
    /// viewport center.
    ///
    /// Errors on a non-positive viewport. A degenerate point cloud with
    /// no extent maps every node to the viewport center.
    pub fn project(&self, width: f32, height: f32) -> CoalesceResult<HashMap<N, Vec2>> {
        if width <= 0.0 || height <= 0.0 {
            return Err(CoalesceError::invalid_parameter(format!(
                "viewport must be positive, got {width}x{height}"
            )));
        }

        let center = Vec2::new(width / 2.0, height / 2.0);
        let Some((min, max)) = self.bounding_box() else {
            return Ok(HashMap::new());
        };

        let extent = max - min;
        let factor = if extent.x > 0.0 && extent.y > 0.0 {
            0.9 * (width / extent.x).min(height / extent.y)
        } else {
            0.0
        };

        Ok(self
            .positions
            .iter()
            .map(|(node, position)| (node.clone(), *position * factor + center))
            .collect())
    }
}
