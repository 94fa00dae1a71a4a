//! Community measures: edge scoring and community validation.
//!
//! Radicchi et al. define two notions of community strength, each tied to an
//! edge clustering coefficient (ECC) that drives edge removal:
//!
//! - **Strong** communities require every member to have more neighbors inside
//!   the community than outside. Paired with the triangle-based ECC.
//! - **Weak** communities only require the aggregate internal degree to exceed
//!   the aggregate external degree. Paired with the square-based ECC.
//!
//! ```text
//! triangle:  ecc(u,v) = (|N(u) ∩ N(v)| + 1) / min(deg(u)-1, deg(v)-1)
//! square:    ecc(u,v) = (#4-cycles through (u,v) + 1) / ((deg(u)-1)(deg(v)-1))
//! ```
//!
//! A low ECC means the edge closes few triangles (or squares) relative to the
//! maximum its endpoints' degrees allow, marking it as likely inter-community.
//! When either denominator is zero the edge cannot close any such cycle and
//! scores `+inf`.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::state::{OriginalGraph, WorkingGraph};

/// Community-strength measure.
///
/// Selecting a measure fixes both halves of the algorithm: `Strong` binds the
/// per-vertex community test to triangle-based edge scoring, `Weak` binds the
/// aggregate test to square-based scoring. The two halves are not
/// independently selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Every member has more neighbors inside the community than outside.
    Strong,
    /// Members collectively have more neighbors inside than outside.
    Weak,
}

impl Measure {
    /// Score an edge of the working graph; lower is structurally weaker.
    pub(crate) fn edge_score(&self, working: &WorkingGraph, u: usize, v: usize) -> f64 {
        match self {
            Measure::Strong => triangle_coefficient(working, u, v),
            Measure::Weak => square_coefficient(working, u, v),
        }
    }

    /// Test whether `members` forms a community in the original graph.
    ///
    /// Degrees are taken from the untouched input, not from whatever is left
    /// of the working copy. An empty subset is rejected with
    /// [`Error::InvalidCommunity`].
    pub(crate) fn is_community(
        &self,
        original: &OriginalGraph,
        members: &[usize],
    ) -> Result<bool> {
        if members.is_empty() {
            return Err(Error::InvalidCommunity);
        }
        let subset: HashSet<usize> = members.iter().copied().collect();

        Ok(match self {
            Measure::Strong => members.iter().all(|&v| {
                let internal = original.internal_degree(v, &subset);
                internal > original.degree(v) - internal
            }),
            Measure::Weak => {
                let internal: usize = members
                    .iter()
                    .map(|&v| original.internal_degree(v, &subset))
                    .sum();
                let total: usize = members.iter().map(|&v| original.degree(v)).sum();
                internal > total - internal
            }
        })
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Strong => "strong",
            Measure::Weak => "weak",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Measure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strong" => Ok(Measure::Strong),
            "weak" => Ok(Measure::Weak),
            other => Err(Error::InvalidMeasure(other.to_string())),
        }
    }
}

/// Triangle-based edge clustering coefficient.
///
/// Shared neighbors of the endpoints close triangles; `min(deg-1)` bounds how
/// many triangles the edge could close. A degree-1 endpoint can close none.
fn triangle_coefficient(working: &WorkingGraph, u: usize, v: usize) -> f64 {
    let m = working.degree(u).min(working.degree(v)) - 1;
    if m == 0 {
        return f64::INFINITY;
    }
    let shared = working.neighbors(u).intersection(working.neighbors(v)).count();
    (shared as f64 + 1.0) / m as f64
}

/// Square-based edge clustering coefficient.
///
/// Counts 4-cycles through the edge: for each `w` adjacent to `u` (other than
/// `v`), common neighbors of `w` and `v` besides `u`. This is the hot spot of
/// the algorithm, O(deg(u) · deg(w)) per edge.
fn square_coefficient(working: &WorkingGraph, u: usize, v: usize) -> f64 {
    let m = (working.degree(u) - 1) * (working.degree(v) - 1);
    if m == 0 {
        return f64::INFINITY;
    }

    let mut squares = 0usize;
    for &w in working.neighbors(u) {
        if w == v {
            continue;
        }
        squares += working
            .neighbors(w)
            .iter()
            .filter(|&&x| x != u && working.neighbors(v).contains(&x))
            .count();
    }
    (squares as f64 + 1.0) / m as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::UnGraph;

    /// Two triangles {0,1,2} and {3,4,5} joined by the bridge 2-3.
    fn bridged_triangles() -> UnGraph<(), ()> {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
        for &(u, v) in &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)] {
            let _ = graph.add_edge(nodes[u], nodes[v], ());
        }
        graph
    }

    #[test]
    fn test_triangle_coefficient_values() {
        let graph = bridged_triangles();
        let working = WorkingGraph::from_graph(&graph);

        // Triangle-internal edge: min(deg)-1 = 1, one shared neighbor.
        assert_eq!(triangle_coefficient(&working, 0, 1), 2.0);
        // Bridge: min(3,3)-1 = 2, no shared neighbors.
        assert_eq!(triangle_coefficient(&working, 2, 3), 0.5);
    }

    #[test]
    fn test_triangle_coefficient_pendant_is_infinite() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        let _ = graph.add_edge(a, b, ());
        let _ = graph.add_edge(b, c, ());

        let working = WorkingGraph::from_graph(&graph);
        assert_eq!(triangle_coefficient(&working, 0, 1), f64::INFINITY);
    }

    #[test]
    fn test_square_coefficient_counts_four_cycles() {
        // Square 0-1-2-3-0: every edge sits on exactly one 4-cycle.
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        for &(u, v) in &[(0, 1), (1, 2), (2, 3), (3, 0)] {
            let _ = graph.add_edge(nodes[u], nodes[v], ());
        }

        let working = WorkingGraph::from_graph(&graph);
        // m = (2-1)(2-1) = 1, one square -> (1+1)/1.
        assert_eq!(square_coefficient(&working, 0, 1), 2.0);
    }

    #[test]
    fn test_square_coefficient_bridge_is_low() {
        // Two squares joined by a bridge: 0-1-2-3-0, 4-5-6-7-4, bridge 0-4.
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..8).map(|_| graph.add_node(())).collect();
        for &(u, v) in &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
        ] {
            let _ = graph.add_edge(nodes[u], nodes[v], ());
        }

        let working = WorkingGraph::from_graph(&graph);
        // Bridge closes no squares: (0+1)/((3-1)(3-1)).
        assert_eq!(square_coefficient(&working, 0, 4), 0.25);
        // A cycle edge off the bridge endpoint: one square, m = (3-1)(2-1).
        assert_eq!(square_coefficient(&working, 0, 1), 1.0);
    }

    #[test]
    fn test_strong_community_per_vertex() {
        let graph = bridged_triangles();
        let original = OriginalGraph::from_graph(&graph);

        // Each triangle: internal degree 2 everywhere, external at most 1.
        assert!(Measure::Strong.is_community(&original, &[0, 1, 2]).unwrap());
        assert!(Measure::Strong.is_community(&original, &[3, 4, 5]).unwrap());
        // A lone bridge endpoint fails its own test.
        assert!(!Measure::Strong.is_community(&original, &[2]).unwrap());
        // Vertex 3 has internal degree 1, external degree 2 inside {2,3}.
        assert!(!Measure::Strong.is_community(&original, &[2, 3]).unwrap());
    }

    #[test]
    fn test_weak_community_aggregate() {
        let graph = bridged_triangles();
        let original = OriginalGraph::from_graph(&graph);

        // Triangle: internal endpoint sum 6, external 1.
        assert!(Measure::Weak.is_community(&original, &[0, 1, 2]).unwrap());
        // {2,3}: internal sum 2, external 4.
        assert!(!Measure::Weak.is_community(&original, &[2, 3]).unwrap());
        // Whole graph is trivially weakly connected to itself.
        assert!(Measure::Weak
            .is_community(&original, &[0, 1, 2, 3, 4, 5])
            .unwrap());
    }

    #[test]
    fn test_empty_subset_is_rejected() {
        let graph = bridged_triangles();
        let original = OriginalGraph::from_graph(&graph);

        assert_eq!(
            Measure::Strong.is_community(&original, &[]),
            Err(Error::InvalidCommunity)
        );
        assert_eq!(
            Measure::Weak.is_community(&original, &[]),
            Err(Error::InvalidCommunity)
        );
    }

    #[test]
    fn test_measure_from_str() {
        assert_eq!("strong".parse::<Measure>().unwrap(), Measure::Strong);
        assert_eq!("weak".parse::<Measure>().unwrap(), Measure::Weak);
        assert_eq!(
            "modular".parse::<Measure>(),
            Err(Error::InvalidMeasure("modular".to_string()))
        );
        assert_eq!(Measure::Strong.to_string(), "strong");
    }
}
