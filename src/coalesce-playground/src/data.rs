//! Sample graph generation for playground examples.
//!
//! This module provides functions to create random and fixed graphs for
//! demos and tests.

use rand::Rng;

use coalesce_core::Graph;
use common_error::{CoalesceError, CoalesceResult};

/// Generate a random graph by drawing `edge_count` edges between node
/// identities in `0..node_limit`.
///
/// Both endpoints are drawn independently, so self-loops are possible
/// and duplicate edges collapse; the resulting node count is at most
/// `node_limit`. Errors when edges are requested over an empty identity
/// range.
pub fn random_graph<R: Rng + ?Sized>(
    node_limit: u32,
    edge_count: u32,
    rng: &mut R,
) -> CoalesceResult<Graph<u32>> {
    if node_limit == 0 && edge_count > 0 {
        return Err(CoalesceError::graph(
            "cannot generate edges with a node limit of zero",
        ));
    }

    let mut graph = Graph::new();
    for _ in 0..edge_count {
        graph.add_edge(rng.gen_range(0..node_limit), rng.gen_range(0..node_limit));
    }
    Ok(graph)
}

/// A path `0 - 1 - ... - (len-1)`.
pub fn path_graph(len: u32) -> Graph<u32> {
    let mut graph = Graph::new();
    if len > 0 {
        graph.add_node(0);
    }
    for i in 1..len {
        graph.add_edge(i - 1, i);
    }
    graph
}

/// A small fixed graph with two connected components and an isolated
/// node, handy for deterministic demo output.
pub fn sample_graph() -> Graph<u32> {
    let mut graph = Graph::new();
    for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0), (2, 4), (5, 6), (6, 7)] {
        graph.add_edge(a, b);
    }
    graph.add_node(8);
    graph
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_random_graph_respects_limits() {
        let mut rng = StdRng::seed_from_u64(4);
        let graph = random_graph(75, 50, &mut rng).unwrap();

        assert!(graph.node_count() <= 75);
        assert!(graph.edge_count() <= 50);
        for node in graph.nodes() {
            assert!(*node < 75);
        }
        for (a, b) in graph.edges() {
            assert_eq!(graph.has_edge(a, b), graph.has_edge(b, a));
        }
    }

    #[test]
    fn test_random_graph_rejects_zero_limit_with_edges() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(random_graph(0, 1, &mut rng).is_err());

        let empty = random_graph(0, 0, &mut rng).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_random_graph_is_seed_deterministic() {
        let first = random_graph(30, 20, &mut StdRng::seed_from_u64(9)).unwrap();
        let second = random_graph(30, 20, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_path_graph() {
        let graph = path_graph(5);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert!(graph.has_edge(&0, &1));
        assert!(!graph.has_edge(&0, &2));

        assert!(path_graph(0).is_empty());
        assert_eq!(path_graph(1).node_count(), 1);
    }

    #[test]
    fn test_sample_graph_shape() {
        let graph = sample_graph();
        assert_eq!(graph.node_count(), 9);
        assert!(graph.neighbors_of(&8).is_empty());
    }
}
