//! Radicchi divisive community detection.
//!
//! Top-down counterpart to agglomerative modularity methods: instead of
//! merging nodes, tear the graph apart at its weakest edges and accept the
//! pieces that pass a community test.
//!
//! ## The Algorithm (Radicchi et al. 2004)
//!
//! 1. **Score**: compute the edge clustering coefficient of every remaining
//!    edge (triangle-based for the strong measure, square-based for weak).
//!
//! 2. **Remove**: delete *all* edges tied at the minimum score in one batch.
//!    Batching the whole tie is what makes the result independent of edge
//!    iteration order.
//!
//! 3. **Split**: if the component count did not grow, go back to scoring.
//!    If it grew, test every component against the community predicate in the
//!    *original* graph.
//!
//! 4. **Recurse**: once two or more components qualify, recurse into each
//!    confirmed community and into whatever is left over; vertices that no
//!    recursive call claims become singleton communities.
//!
//! A recursive call that runs out of edges without ever confirming a split
//! reports an empty list ("unresolved"), and its caller keeps the confirmed
//! component as a leaf. If the root itself is unresolved, the connected
//! components of the input are taken as the cover, which also handles
//! zero-edge graphs (every vertex its own singleton).
//!
//! ## Complexity
//!
//! - Scoring pass: O(E · deg²) worst case (square ECC is the hot spot)
//! - One pass removes at least one edge, so at most E passes per level
//!
//! ## References
//!
//! Radicchi, Castellano, Cecconi, Loreto, Parisi (2004). "Defining and
//! identifying communities in networks." PNAS 101 (9), 2658-2663.

use std::collections::HashSet;

use petgraph::graph::UnGraph;

use crate::cover::build_cover;
use crate::error::{Error, Result};
use crate::measure::Measure;
use crate::prune::prune_components;
use crate::state::{OriginalGraph, WorkingGraph};
use crate::traits::CommunityDetection;

/// Radicchi divisive community detection algorithm.
///
/// Deterministic: no randomness anywhere, and tied minimum-score edges are
/// always removed together.
#[derive(Debug, Clone)]
pub struct Radicchi {
    /// Community-strength measure; also fixes the edge scorer.
    measure: Measure,
}

impl Radicchi {
    /// Create a new detector using the weak community measure.
    pub fn new() -> Self {
        Self {
            measure: Measure::Weak,
        }
    }

    /// Set the community measure (and with it the edge scorer).
    pub fn with_measure(mut self, measure: Measure) -> Self {
        self.measure = measure;
        self
    }

    /// Get the configured measure.
    pub fn measure(&self) -> Measure {
        self.measure
    }

    /// Edge-removal loop over one owned working graph.
    ///
    /// Returns the communities resolved at this level and below, or an empty
    /// list if the edges ran out before any split was confirmed.
    fn split(
        &self,
        original: &OriginalGraph,
        working: &mut WorkingGraph,
    ) -> Result<Vec<Vec<usize>>> {
        let mut baseline = working.component_count();
        let mut communities = Vec::new();

        while working.edge_count() > 0 {
            let batch = minimum_score_batch(working, self.measure);
            working.delete_edges(&batch);

            let count = working.component_count();
            if count <= baseline {
                continue;
            }

            let Some(pruned) = prune_components(original, working, self.measure)? else {
                // At most one component qualified; adopt the new component
                // count and keep removing edges.
                baseline = count;
                continue;
            };

            for (ids, group) in pruned
                .confirmed_original
                .into_iter()
                .zip(&pruned.confirmed_working)
            {
                let mut subgraph = working.induced_subgraph(group);
                let subcommunities = self.split(original, &mut subgraph)?;
                if subcommunities.is_empty() {
                    // Unresolved below: the confirmed component is a leaf.
                    communities.push(ids);
                } else {
                    communities.extend(subcommunities);
                }
            }

            let remaining_ids: Vec<usize> = pruned
                .remaining
                .iter()
                .map(|&v| working.original_id(v))
                .collect();
            let mut rest = working.induced_subgraph(&pruned.remaining);
            let subcommunities = self.split(original, &mut rest)?;
            let clustered: HashSet<usize> = subcommunities.iter().flatten().copied().collect();
            communities.extend(subcommunities);
            // Leftover vertices claimed by no subcommunity become singletons.
            communities.extend(
                remaining_ids
                    .into_iter()
                    .filter(|id| !clustered.contains(id))
                    .map(|id| vec![id]),
            );
            break;
        }

        Ok(communities)
    }
}

impl Default for Radicchi {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityDetection for Radicchi {
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>> {
        let n = graph.node_count();
        if n == 0 {
            return Err(Error::EmptyInput);
        }

        let original = OriginalGraph::from_graph(graph);
        let mut working = WorkingGraph::from_graph(graph);
        let mut communities = self.split(&original, &mut working)?;

        if communities.is_empty() {
            // Unresolved at the root: fall back to the connected components of
            // the input, one community each, so every vertex gets a label.
            // Covers zero-edge graphs (all singletons) as a special case.
            communities = original.components();
        }

        Ok(build_cover(n, &communities))
    }
}

/// All edges tied at the minimum score under `measure`.
///
/// Exact float equality on purpose: every edge at the observed minimum goes
/// into one removal batch. `+inf` ties (pendant edges) are common and are
/// collected like any finite tie.
fn minimum_score_batch(working: &WorkingGraph, measure: Measure) -> Vec<(usize, usize)> {
    let mut minimum = f64::INFINITY;
    let mut batch = Vec::new();

    for (u, v) in working.edges() {
        let score = measure.edge_score(working, u, v);
        if score < minimum {
            minimum = score;
            batch.clear();
            batch.push((u, v));
        } else if score == minimum {
            batch.push((u, v));
        }
    }

    batch
}
