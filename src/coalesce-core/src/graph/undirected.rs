//! Undirected graph with insertion-ordered nodes and symmetric adjacency.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// An undirected graph over node identities of type `N`.
///
/// Nodes keep their insertion order, which gives iteration a stable,
/// observable order with no semantic meaning beyond that. Adjacency is
/// stored in both directions; neighbor lists are deduplicated and keep
/// first-insertion order, so a seeded consumer sees the same boundary
/// order on every run.
///
/// All operations are total: mutating an absent node does nothing and
/// querying one yields an empty or false result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph<N: Eq + Hash> {
    nodes: Vec<N>,

    // Invariant 1: every adjacency endpoint is present in `nodes`.
    // Invariant 2: adjacency is symmetric, b in adjacency[a] iff a in adjacency[b].
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: Clone + Eq + Hash> Graph<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Create a graph containing `nodes` and no edges.
    pub fn with_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// Insert `node` if absent; idempotent.
    pub fn add_node(&mut self, node: N) {
        if !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
    }

    // Records a single direction. Only sound as half of `add_edge`.
    fn add_directed_edge(&mut self, from: N, to: N) {
        let neighbors = self.adjacency.entry(from).or_default();
        if !neighbors.contains(&to) {
            neighbors.push(to);
        }
    }

    /// Add the undirected edge `(a, b)`, inserting either endpoint that is
    /// missing from the graph. A self-edge (`a == b`) is stored once.
    pub fn add_edge(&mut self, a: N, b: N) {
        self.add_node(a.clone());
        self.add_node(b.clone());

        self.add_directed_edge(a.clone(), b.clone());
        self.add_directed_edge(b, a);
    }

    fn remove_directed_edge(&mut self, from: &N, to: &N) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.retain(|neighbor| neighbor != to);
        }
    }

    /// Remove the edge `(a, b)`. Both nodes stay in the graph.
    pub fn remove_edge(&mut self, a: &N, b: &N) {
        self.remove_directed_edge(a, b);
        self.remove_directed_edge(b, a);
    }

    /// Remove every edge with `node` as an endpoint, in either direction.
    pub fn remove_edges_with(&mut self, node: &N) {
        self.adjacency.remove(node);

        for neighbors in self.adjacency.values_mut() {
            neighbors.retain(|neighbor| neighbor != node);
        }
    }

    /// Remove `node` and all of its edges. Edges go first, so no edge
    /// referencing `node` survives the removal.
    pub fn remove_node(&mut self, node: &N) {
        self.remove_edges_with(node);
        self.nodes.retain(|existing| existing != node);
    }

    /// Whether `node` is present.
    pub fn has_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Whether the edge `(a, b)` is present.
    pub fn has_edge(&self, a: &N, b: &N) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.contains(b))
    }

    /// Neighbors of `node`, in first-insertion order; empty if `node` is
    /// absent or isolated.
    pub fn neighbors_of(&self, node: &N) -> &[N] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let mut directed = 0;
        let mut loops = 0;
        for (node, neighbors) in &self.adjacency {
            directed += neighbors.len();
            if neighbors.contains(node) {
                loops += 1;
            }
        }
        (directed + loops) / 2
    }

    /// Every undirected edge exactly once, in node insertion order.
    ///
    /// The internal representation stores both directions of each edge;
    /// enumeration deduplicates them by insertion index, and reports a
    /// self-loop once.
    pub fn edges(&self) -> Vec<(&N, &N)> {
        let index: HashMap<&N, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node, position))
            .collect();

        let mut edges = Vec::new();
        for a in &self.nodes {
            for b in self.neighbors_of(a) {
                if index[a] <= index[b] {
                    edges.push((a, b));
                }
            }
        }
        edges
    }
}

impl<N: Clone + Eq + Hash> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_inserts_missing_endpoints() {
        let mut graph: Graph<i32> = Graph::new();
        graph.add_edge(1, 2);
        assert!(graph.has_node(&1));
        assert!(graph.has_node(&2));
        assert!(graph.has_edge(&1, &2));

        let mut named: Graph<String> = Graph::new();
        named.add_edge("hello".to_string(), "world".to_string());
        assert!(named.has_node(&"hello".to_string()));
        assert!(named.has_node(&"world".to_string()));
        assert!(!named.has_node(&"star".to_string()));

        named.add_edge("world".to_string(), "star".to_string());
        assert!(named.has_node(&"star".to_string()));
        assert!(named.has_edge(&"hello".to_string(), &"world".to_string()));
        assert!(named.has_edge(&"world".to_string(), &"star".to_string()));
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        assert!(graph.has_edge(&1, &2));
        assert!(graph.has_edge(&2, &1));
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut graph = Graph::new();
        graph.add_node(7);
        graph.add_node(7);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.nodes(), &[7]);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors_of(&1), &[2]);
        assert_eq!(graph.neighbors_of(&2), &[1]);
    }

    #[test]
    fn test_remove_edge_keeps_nodes() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.remove_edge(&1, &2);

        assert!(!graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &1));
        assert!(graph.has_node(&1));
        assert!(graph.has_node(&2));
    }

    #[test]
    fn test_remove_node_detaches_all_edges() {
        let mut graph = Graph::new();
        graph.add_edge(1, 2);
        graph.add_edge(3, 4);
        graph.add_edge(2, 3);

        graph.remove_node(&3);

        assert!(!graph.has_node(&3));
        assert!(!graph.has_edge(&3, &4));
        assert!(!graph.has_edge(&4, &3));
        assert!(!graph.has_edge(&3, &2));
        assert!(!graph.has_edge(&2, &3));
        assert!(graph.has_edge(&1, &2));
        assert!(graph.has_edge(&2, &1));
    }

    #[test]
    fn test_absent_node_queries_degrade() {
        let mut graph: Graph<u32> = Graph::new();
        graph.add_edge(0, 1);

        assert!(!graph.has_node(&9));
        assert!(!graph.has_edge(&9, &0));
        assert!(graph.neighbors_of(&9).is_empty());

        // Removals of absent nodes and edges are no-ops.
        graph.remove_edge(&9, &0);
        graph.remove_node(&9);
        assert_eq!(graph.node_count(), 2);
        assert!(graph.has_edge(&0, &1));
    }

    #[test]
    fn test_self_loop_stored_once() {
        let mut graph = Graph::new();
        graph.add_edge(5, 5);

        assert!(graph.has_node(&5));
        assert!(graph.has_edge(&5, &5));
        assert_eq!(graph.neighbors_of(&5), &[5]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(), vec![(&5, &5)]);
    }

    #[test]
    fn test_edges_reports_each_edge_once() {
        let mut graph = Graph::new();
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(0, 2);

        let edges = graph.edges();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges.len(), graph.edge_count());
        assert!(edges.contains(&(&0, &1)));
        assert!(edges.contains(&(&1, &2)));
        assert!(edges.contains(&(&0, &2)));
    }

    #[test]
    fn test_nodes_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge(3, 1);
        graph.add_edge(1, 2);
        graph.add_node(0);
        assert_eq!(graph.nodes(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_with_nodes_builds_edgeless_graph() {
        let graph = Graph::with_nodes([1, 2, 3, 2]);
        assert_eq!(graph.nodes(), &[1, 2, 3]);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors_of(&1).is_empty());
    }
}
