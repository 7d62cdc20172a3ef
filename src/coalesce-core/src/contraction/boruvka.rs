//! Randomized Borůvka-style contraction engine.

use std::collections::BTreeSet;
use std::hash::Hash;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;

use super::automaton::ContractionAutomaton;
use super::group::NodeGroup;

/// Configuration for running a contraction to completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractionConfig {
    /// Maximum number of rounds to perform. The default is effectively
    /// unbounded; termination is guaranteed regardless of the cap.
    pub max_rounds: usize,
    /// Emit a debug log line for every round.
    pub trace_rounds: bool,
}

impl Default for ContractionConfig {
    fn default() -> Self {
        Self {
            max_rounds: usize::MAX,
            trace_rounds: false,
        }
    }
}

impl ContractionConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Enable or disable per-round debug logging.
    #[must_use]
    pub fn with_trace_rounds(mut self, trace_rounds: bool) -> Self {
        self.trace_rounds = trace_rounds;
        self
    }
}

/// Summary of a contraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractionOutcome {
    /// Rounds performed by this run.
    pub rounds: usize,
    /// Number of groups when the run stopped.
    pub groups: usize,
    /// Whether the contraction reached its terminal state.
    pub finished: bool,
}

/// Borůvka-style randomized contraction automaton.
///
/// Every group attempts to pair with one neighboring group per round.
/// Mutual selections collapse to a single pairing, chained selections
/// accrete into larger groupings, and each grouping is merged into a
/// single replacement group. The group list shrinks monotonically and
/// converges to one group per connected component of the graph.
///
/// Constructing the automaton seeds its groups immediately, so there is
/// no unseeded state to misuse; [`ContractionAutomaton::initialize`]
/// re-seeds for a restart.
#[derive(Debug, Clone)]
pub struct BoruvkaContraction<N: Eq + Hash, R = StdRng> {
    groups: Vec<NodeGroup<N>>,
    rounds: usize,
    rng: R,
}

impl<N: Clone + Eq + Hash> BoruvkaContraction<N, StdRng> {
    /// Seed from `graph` with an entropy-seeded generator.
    pub fn new(graph: &Graph<N>) -> Self {
        Self::with_rng(graph, StdRng::from_entropy())
    }

    /// Seed from `graph` with a fixed seed, for reproducible runs.
    pub fn with_seed(graph: &Graph<N>, seed: u64) -> Self {
        Self::with_rng(graph, StdRng::seed_from_u64(seed))
    }
}

impl<N: Clone + Eq + Hash, R: Rng> BoruvkaContraction<N, R> {
    /// Seed from `graph` with an injected random source.
    pub fn with_rng(graph: &Graph<N>, mut rng: R) -> Self {
        let groups = Self::seed_groups(graph, &mut rng);
        Self {
            groups,
            rounds: 0,
            rng,
        }
    }

    fn seed_groups(graph: &Graph<N>, rng: &mut R) -> Vec<NodeGroup<N>> {
        graph
            .nodes()
            .iter()
            .map(|node| NodeGroup::seed(graph, node, rng))
            .collect()
    }

    /// Rounds performed since construction or the last `initialize`.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Perform rounds until the contraction is finished, returning how
    /// many were needed. Never exceeds `nodes - components` rounds.
    pub fn run_to_completion(&mut self) -> usize {
        let config = ContractionConfig::new().with_trace_rounds(true);
        let outcome = self.run_with_config(&config);
        debug!("contraction reached fixpoint after {} rounds", outcome.rounds);
        outcome.rounds
    }

    /// Perform rounds until the contraction is finished or the config's
    /// round cap is reached.
    pub fn run_with_config(&mut self, config: &ContractionConfig) -> ContractionOutcome {
        let mut performed = 0;
        while performed < config.max_rounds && !self.finished() {
            let before = self.groups.len();
            self.perform_round();
            performed += 1;
            if config.trace_rounds {
                debug!(
                    "round {}: {} groups -> {}",
                    self.rounds,
                    before,
                    self.groups.len()
                );
            }
        }

        ContractionOutcome {
            rounds: performed,
            groups: self.groups.len(),
            finished: self.finished(),
        }
    }

    /// One `(group, partner)` entry per group that found a partner this
    /// round, in group scan order.
    fn collect_pairs(&self) -> Vec<(usize, usize)> {
        self.groups
            .iter()
            .enumerate()
            .filter_map(|(index, group)| {
                group
                    .find_partner(&self.groups, index)
                    .map(|partner| (index, partner))
            })
            .collect()
    }
}

impl<N: Clone + Eq + Hash, R: Rng> ContractionAutomaton<N> for BoruvkaContraction<N, R> {
    fn initialize(&mut self, graph: &Graph<N>) {
        self.groups = Self::seed_groups(graph, &mut self.rng);
        self.rounds = 0;
    }

    fn perform_round(&mut self) {
        let pairs = drop_reversed_pairs(self.collect_pairs());
        let groupings = build_groupings(&pairs);

        let mut grouped = vec![false; self.groups.len()];
        for grouping in &groupings {
            for &index in grouping {
                grouped[index] = true;
            }
        }

        // Unpaired groups carry forward in their original relative order,
        // followed by one merged group per grouping.
        let mut next: Vec<NodeGroup<N>> = self
            .groups
            .iter()
            .enumerate()
            .filter(|(index, _)| !grouped[*index])
            .map(|(_, group)| group.clone())
            .collect();

        for grouping in &groupings {
            let inputs: Vec<&NodeGroup<N>> = grouping
                .iter()
                .map(|&index| &self.groups[index])
                .collect();
            let merged = NodeGroup::merge(&inputs, &mut self.rng)
                .expect("a grouping always references at least two groups");
            next.push(merged);
        }

        self.groups = next;
        self.rounds += 1;
    }

    fn groups(&self) -> &[NodeGroup<N>] {
        &self.groups
    }
}

/// Drop every pair that is the exact reverse of an earlier pair.
///
/// Mutual selections (`i -> j` and `j -> i`) collapse to the first
/// occurrence; chained selections (`i -> j`, `j -> k`) both survive.
fn drop_reversed_pairs(pairs: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    let mut retained: Vec<(usize, usize)> = Vec::new();
    for (lhs, rhs) in pairs {
        if !retained.contains(&(rhs, lhs)) {
            retained.push((lhs, rhs));
        }
    }
    retained
}

/// Build the disjoint sets of group indices slated to merge this round.
///
/// Each pair joins the first grouping already containing one of its
/// endpoints. A pair whose endpoints sit in two distinct groupings
/// unifies them instead of being split between them, so the grouping
/// list stays pairwise disjoint.
fn build_groupings(pairs: &[(usize, usize)]) -> Vec<BTreeSet<usize>> {
    let mut groupings: Vec<BTreeSet<usize>> = Vec::new();

    for &(lhs, rhs) in pairs {
        let lhs_hit = groupings.iter().position(|grouping| grouping.contains(&lhs));
        let rhs_hit = groupings.iter().position(|grouping| grouping.contains(&rhs));

        match (lhs_hit, rhs_hit) {
            (None, None) => groupings.push(BTreeSet::from([lhs, rhs])),
            (Some(index), None) | (None, Some(index)) => {
                groupings[index].insert(lhs);
                groupings[index].insert(rhs);
            }
            (Some(first), Some(second)) if first == second => {}
            (Some(first), Some(second)) => {
                let (keep, absorb) = if first < second {
                    (first, second)
                } else {
                    (second, first)
                };
                let absorbed = groupings.remove(absorb);
                groupings[keep].extend(absorbed);
            }
        }
    }

    groupings
}
