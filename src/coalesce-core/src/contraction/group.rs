//! Contraction groups and their boundaries.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use common_error::{CoalesceResult, ensure};

use crate::graph::Graph;

/// A group of nodes contracted into a single super-node, together with its
/// boundary: the neighbor identities that lie outside the group.
///
/// The boundary is shuffled once at construction and then scanned in that
/// stored order by [`NodeGroup::find_partner`], so repeated rounds do not
/// bias toward any fixed neighbor while a single scan stays deterministic.
/// Groups are immutable once constructed; a contraction round replaces the
/// whole group list instead of mutating groups in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeGroup<N: Eq + Hash> {
    members: HashSet<N>,

    // Invariant: boundary and members are disjoint.
    boundary: Vec<N>,
}

impl<N: Clone + Eq + Hash> NodeGroup<N> {
    /// Seed a singleton group from one graph node.
    ///
    /// The boundary is the node's graph-neighbors with the node itself
    /// filtered out, so a self-loop never puts a group in its own
    /// boundary.
    pub fn seed<R: Rng + ?Sized>(graph: &Graph<N>, node: &N, rng: &mut R) -> Self {
        let mut members = HashSet::new();
        members.insert(node.clone());

        let mut boundary: Vec<N> = graph
            .neighbors_of(node)
            .iter()
            .filter(|neighbor| *neighbor != node)
            .cloned()
            .collect();
        boundary.shuffle(rng);

        Self { members, boundary }
    }

    /// Merge `inputs` into a single group.
    ///
    /// Members are the union of the inputs' members. The boundary is the
    /// union of the inputs' boundaries minus everything that became a
    /// member, deduplicated, then shuffled. Errors when `inputs` is empty;
    /// merging a single group copies it.
    pub fn merge<R: Rng + ?Sized>(inputs: &[&Self], rng: &mut R) -> CoalesceResult<Self> {
        ensure!(!inputs.is_empty(), "merge requires at least one input group");

        let members: HashSet<N> = inputs
            .iter()
            .flat_map(|group| group.members.iter().cloned())
            .collect();

        let mut seen: HashSet<N> = HashSet::new();
        let mut boundary: Vec<N> = Vec::new();
        for group in inputs {
            for node in &group.boundary {
                if !members.contains(node) && seen.insert(node.clone()) {
                    boundary.push(node.clone());
                }
            }
        }
        boundary.shuffle(rng);

        Ok(Self { members, boundary })
    }

    /// Find a partner group to merge with, scanning the stored boundary
    /// order.
    ///
    /// For each boundary node, locates the first group in `all_groups`
    /// whose members contain it; skips a missing match and a match equal
    /// to `self_index`; returns the first differing match, or `None` once
    /// the boundary is exhausted.
    pub fn find_partner(&self, all_groups: &[Self], self_index: usize) -> Option<usize> {
        for candidate in &self.boundary {
            match all_groups.iter().position(|group| group.contains(candidate)) {
                Some(index) if index != self_index => return Some(index),
                _ => {}
            }
        }
        None
    }

    /// The node identities merged into this group.
    pub fn members(&self) -> &HashSet<N> {
        &self.members
    }

    /// The boundary, in its stored (shuffled) scan order.
    pub fn boundary(&self) -> &[N] {
        &self.boundary
    }

    /// Whether `node` is a member of this group.
    pub fn contains(&self, node: &N) -> bool {
        self.members.contains(node)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members. False for any constructed group.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the group has no edge leaving it. An isolated group can
    /// never find a partner.
    pub fn is_isolated(&self) -> bool {
        self.boundary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn triangle_with_tail() -> Graph<u32> {
        let mut graph = Graph::new();
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 0);
        graph.add_edge(2, 3);
        graph
    }

    #[test]
    fn test_seed_collects_neighbors() {
        let graph = triangle_with_tail();
        let mut rng = StdRng::seed_from_u64(1);

        let group = NodeGroup::seed(&graph, &2, &mut rng);
        assert_eq!(group.members(), &HashSet::from([2]));
        assert_eq!(group.len(), 1);
        assert!(!group.is_isolated());

        let mut boundary: Vec<u32> = group.boundary().to_vec();
        boundary.sort_unstable();
        assert_eq!(boundary, vec![0, 1, 3]);
    }

    #[test]
    fn test_seed_filters_self_loop() {
        let mut graph = triangle_with_tail();
        graph.add_edge(2, 2);
        let mut rng = StdRng::seed_from_u64(1);

        let group = NodeGroup::seed(&graph, &2, &mut rng);
        assert!(!group.boundary().contains(&2));
        assert_eq!(group.boundary().len(), 3);
    }

    #[test]
    fn test_seed_isolated_node() {
        let graph: Graph<u32> = Graph::with_nodes([42]);
        let mut rng = StdRng::seed_from_u64(1);

        let group = NodeGroup::seed(&graph, &42, &mut rng);
        assert!(group.is_isolated());
        assert!(group.boundary().is_empty());
        assert!(group.contains(&42));
    }

    #[test]
    fn test_seed_is_deterministic_given_seed() {
        let graph = triangle_with_tail();

        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);
        let first = NodeGroup::seed(&graph, &2, &mut first_rng);
        let second = NodeGroup::seed(&graph, &2, &mut second_rng);

        assert_eq!(first.boundary(), second.boundary());
    }

    #[test]
    fn test_merge_unions_members_and_drops_internal_boundary() {
        let graph = triangle_with_tail();
        let mut rng = StdRng::seed_from_u64(7);

        let zero = NodeGroup::seed(&graph, &0, &mut rng);
        let one = NodeGroup::seed(&graph, &1, &mut rng);
        let merged = NodeGroup::merge(&[&zero, &one], &mut rng).unwrap();

        assert_eq!(merged.members(), &HashSet::from([0, 1]));

        // 0 and 1 are now internal; only 2 remains outside.
        let mut boundary: Vec<u32> = merged.boundary().to_vec();
        boundary.sort_unstable();
        assert_eq!(boundary, vec![2]);
    }

    #[test]
    fn test_merge_deduplicates_shared_neighbors() {
        let graph = triangle_with_tail();
        let mut rng = StdRng::seed_from_u64(7);

        // Both 0 and 1 see 2; the merged boundary lists it once.
        let zero = NodeGroup::seed(&graph, &0, &mut rng);
        let one = NodeGroup::seed(&graph, &1, &mut rng);
        let merged = NodeGroup::merge(&[&zero, &one], &mut rng).unwrap();

        let twos = merged.boundary().iter().filter(|node| **node == 2).count();
        assert_eq!(twos, 1);
    }

    #[test]
    fn test_merge_single_group_copies_it() {
        let graph = triangle_with_tail();
        let mut rng = StdRng::seed_from_u64(7);

        let group = NodeGroup::seed(&graph, &3, &mut rng);
        let merged = NodeGroup::merge(&[&group], &mut rng).unwrap();

        assert_eq!(merged.members(), group.members());
        let mut expected: Vec<u32> = group.boundary().to_vec();
        let mut actual: Vec<u32> = merged.boundary().to_vec();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_merge_empty_input_errors() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = NodeGroup::<u32>::merge(&[], &mut rng);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_partner_skips_self_and_misses() {
        let graph = triangle_with_tail();
        let mut rng = StdRng::seed_from_u64(3);

        let groups: Vec<NodeGroup<u32>> = graph
            .nodes()
            .iter()
            .map(|node| NodeGroup::seed(&graph, node, &mut rng))
            .collect();

        // Node 3 has exactly one neighbor, node 2 at index 2.
        let tail_index = graph.nodes().iter().position(|node| *node == 3).unwrap();
        assert_eq!(groups[tail_index].find_partner(&groups, tail_index), Some(2));

        // An isolated group never finds a partner.
        let lonely: Graph<u32> = Graph::with_nodes([9]);
        let isolated = NodeGroup::seed(&lonely, &9, &mut rng);
        assert_eq!(isolated.find_partner(&groups, 0), None);
    }
}
