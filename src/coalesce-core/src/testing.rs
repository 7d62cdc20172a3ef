//! Testing utilities and helpers for coalesce-core.
//!
//! This module provides common test patterns, fixtures, and assertion
//! helpers to make testing the contraction engine easier and more
//! consistent.

use std::collections::HashSet;

use crate::contraction::NodeGroup;
use crate::graph::Graph;

/// Test fixture builder for common graph shapes.
pub struct GraphFixture {
    graph: Graph<u32>,
}

impl GraphFixture {
    /// Create a fixture with an empty graph.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// A path `0 - 1 - ... - (len-1)`. A length of one is a single
    /// isolated node; zero is an empty graph.
    pub fn path(len: u32) -> Self {
        let mut fixture = Self::new();
        if len > 0 {
            fixture.graph.add_node(0);
        }
        for i in 1..len {
            fixture.graph.add_edge(i - 1, i);
        }
        fixture
    }

    /// A cycle over `len` nodes. Lengths below three degrade to a path.
    pub fn cycle(len: u32) -> Self {
        let mut fixture = Self::path(len);
        if len >= 3 {
            fixture.graph.add_edge(len - 1, 0);
        }
        fixture
    }

    /// A star with node `0` at the center and `leaves` leaf nodes.
    pub fn star(leaves: u32) -> Self {
        let mut fixture = Self::new();
        fixture.graph.add_node(0);
        for leaf in 1..=leaves {
            fixture.graph.add_edge(0, leaf);
        }
        fixture
    }

    /// `pairs` disjoint two-node components: `(0,1)`, `(2,3)`, ...
    pub fn disconnected_pairs(pairs: u32) -> Self {
        let mut fixture = Self::new();
        for pair in 0..pairs {
            fixture.graph.add_edge(2 * pair, 2 * pair + 1);
        }
        fixture
    }

    /// A small mixed graph: a square with a pendant, a triangle, and an
    /// isolated node. Three connected components in total.
    pub fn sample() -> Self {
        let mut fixture = Self::new();
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0), (2, 4)] {
            fixture.graph.add_edge(a, b);
        }
        for (a, b) in [(5, 6), (6, 7), (7, 5)] {
            fixture.graph.add_edge(a, b);
        }
        fixture.graph.add_node(8);
        fixture
    }

    /// Add an edge to the fixture graph.
    pub fn with_edge(mut self, a: u32, b: u32) -> Self {
        self.graph.add_edge(a, b);
        self
    }

    /// Add an isolated node to the fixture graph.
    pub fn with_node(mut self, node: u32) -> Self {
        self.graph.add_node(node);
        self
    }

    /// Get the graph.
    pub const fn graph(&self) -> &Graph<u32> {
        &self.graph
    }

    /// Consume the fixture, returning the graph.
    pub fn into_graph(self) -> Graph<u32> {
        self.graph
    }

    /// Number of connected components, computed independently of the
    /// contraction engine so tests can compare against it.
    pub fn component_count(&self) -> usize {
        component_count(&self.graph)
    }
}

impl Default for GraphFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Count connected components with a plain breadth-first traversal.
pub fn component_count(graph: &Graph<u32>) -> usize {
    let mut visited: HashSet<u32> = HashSet::new();
    let mut components = 0;

    for start in graph.nodes() {
        if !visited.insert(*start) {
            continue;
        }
        components += 1;

        let mut frontier = vec![*start];
        while let Some(node) = frontier.pop() {
            for neighbor in graph.neighbors_of(&node) {
                if visited.insert(*neighbor) {
                    frontier.push(*neighbor);
                }
            }
        }
    }

    components
}

/// Assertion helpers for contraction state.
pub struct ContractionAssertions<'a> {
    graph: &'a Graph<u32>,
    groups: &'a [NodeGroup<u32>],
}

impl<'a> ContractionAssertions<'a> {
    /// Create new assertions over a graph and a group list.
    pub const fn new(graph: &'a Graph<u32>, groups: &'a [NodeGroup<u32>]) -> Self {
        Self { graph, groups }
    }

    /// Assert the expected number of groups.
    #[must_use]
    pub fn assert_group_count(self, expected: usize) -> Self {
        assert_eq!(
            self.groups.len(),
            expected,
            "Expected {} groups, found {}",
            expected,
            self.groups.len()
        );
        self
    }

    /// Assert that the groups partition the graph's node set: every node
    /// in exactly one group, no group holding a foreign node.
    pub fn assert_partition(self) -> Self {
        let nodes: HashSet<u32> = self.graph.nodes().iter().copied().collect();

        let mut seen: HashSet<u32> = HashSet::new();
        for group in self.groups {
            for member in group.members() {
                assert!(
                    nodes.contains(member),
                    "group member {member} is not a graph node"
                );
                assert!(
                    seen.insert(*member),
                    "node {member} appears in more than one group"
                );
            }
        }
        assert_eq!(
            seen.len(),
            nodes.len(),
            "groups cover {} of {} nodes",
            seen.len(),
            nodes.len()
        );
        self
    }

    /// Assert that every boundary node lies outside its group and is a
    /// genuine graph-neighbor of at least one member.
    pub fn assert_boundary_consistency(self) -> Self {
        for group in self.groups {
            for boundary_node in group.boundary() {
                assert!(
                    !group.contains(boundary_node),
                    "boundary node {boundary_node} is also a member"
                );
                let adjacent = group
                    .members()
                    .iter()
                    .any(|member| self.graph.has_edge(member, boundary_node));
                assert!(
                    adjacent,
                    "boundary node {boundary_node} neighbors no member of its group"
                );
            }
        }
        self
    }

    /// Assert that every group's boundary is empty.
    pub fn assert_all_isolated(self) -> Self {
        for (index, group) in self.groups.iter().enumerate() {
            assert!(
                group.is_isolated(),
                "group {index} still has boundary {:?}",
                group.boundary()
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_fixture_shapes() {
        assert_eq!(GraphFixture::path(4).graph().node_count(), 4);
        assert_eq!(GraphFixture::path(4).graph().edge_count(), 3);

        assert_eq!(GraphFixture::cycle(5).graph().edge_count(), 5);
        assert_eq!(GraphFixture::star(6).graph().node_count(), 7);
        assert_eq!(GraphFixture::disconnected_pairs(3).graph().node_count(), 6);
    }

    #[test]
    fn test_component_count() {
        assert_eq!(GraphFixture::new().component_count(), 0);
        assert_eq!(GraphFixture::path(4).component_count(), 1);
        assert_eq!(GraphFixture::disconnected_pairs(3).component_count(), 3);
        assert_eq!(GraphFixture::sample().component_count(), 3);
    }

    #[test]
    fn test_assertions_on_seeded_groups() {
        let fixture = GraphFixture::sample();
        let mut rng = StdRng::seed_from_u64(2);

        let groups: Vec<NodeGroup<u32>> = fixture
            .graph()
            .nodes()
            .iter()
            .map(|node| NodeGroup::seed(fixture.graph(), node, &mut rng))
            .collect();

        ContractionAssertions::new(fixture.graph(), &groups)
            .assert_group_count(fixture.graph().node_count())
            .assert_partition()
            .assert_boundary_consistency();
    }
}
