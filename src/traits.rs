//! Community detection traits.

use crate::error::Result;
use petgraph::graph::UnGraph;

/// Trait for community detection algorithms.
///
/// Implementations take an undirected simple graph and return one community
/// label per node index. Labels are cover indices: every node gets exactly one,
/// and nodes sharing a label belong to the same community. Node and edge
/// weights are ignored.
pub trait CommunityDetection {
    /// Detect communities in a graph.
    ///
    /// Returns a mapping from node index to community ID.
    fn detect<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Vec<usize>>;
}
