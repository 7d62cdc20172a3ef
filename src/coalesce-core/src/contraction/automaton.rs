//! Contraction automaton interface.

use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::Graph;

use super::group::NodeGroup;

/// Round-based state machine contracting a graph toward its connected
/// components.
///
/// An automaton moves from *active* (at least one group has a non-empty
/// boundary) to *finished* (every boundary is empty) and never leaves the
/// terminal state except through [`ContractionAutomaton::initialize`].
/// Each round is atomic from the caller's perspective: it starts from a
/// consistent partition of the graph's nodes and ends with the next one.
pub trait ContractionAutomaton<N: Clone + Eq + Hash> {
    /// Re-seed the automaton from `graph`: one singleton group per node,
    /// in the graph's node iteration order. Resets the round counter.
    /// Callable repeatedly to restart from scratch.
    fn initialize(&mut self, graph: &Graph<N>);

    /// Perform one contraction round, replacing the group list wholesale.
    /// Safe to call with no groups or on a finished automaton; both are
    /// no-ops since no group can find a partner.
    fn perform_round(&mut self);

    /// The current groups: unmerged singletons first in their original
    /// relative order, then merges in grouping-construction order.
    fn groups(&self) -> &[NodeGroup<N>];

    /// The current partition as owned member sets, for observers.
    fn current_groups(&self) -> Vec<HashSet<N>> {
        self.groups()
            .iter()
            .map(|group| group.members().clone())
            .collect()
    }

    /// True once no group has an edge leaving it. Exactly the condition
    /// under which no `find_partner` call can succeed, so further rounds
    /// leave the partition unchanged.
    fn finished(&self) -> bool {
        self.groups().iter().all(NodeGroup::is_isolated)
    }
}
