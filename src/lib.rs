//! # radicchi
//!
//! Divisive community detection for undirected simple graphs, after
//! Radicchi et al. (2004).
//!
//! Where agglomerative methods grow communities bottom-up, this algorithm
//! works top-down: repeatedly find the structurally weakest edges, remove them
//! all at once, and watch for the graph falling apart. Pieces that pass a
//! community-strength test are accepted and recursively split further;
//! whatever never resolves bottoms out as leaf communities or singletons.
//!
//! ## Edge Clustering Coefficient
//!
//! Edge weakness is measured by the **edge clustering coefficient** (ECC): the
//! number of short cycles an edge participates in, relative to the maximum its
//! endpoints' degrees allow.
//!
//! ```text
//! ecc3(u,v) = (|N(u) ∩ N(v)| + 1) / min(deg(u)-1, deg(v)-1)      (triangles)
//! ecc4(u,v) = (squares through (u,v) + 1) / ((deg(u)-1)(deg(v)-1))
//! ```
//!
//! Edges inside dense regions close many triangles and score high;
//! inter-community edges close few and score low. Edges that cannot close any
//! cycle (a degree-1 endpoint) score `+inf`.
//!
//! ## Strong vs. Weak Communities
//!
//! Two community definitions, each bound to one scorer:
//!
//! - [`Measure::Strong`] (triangle ECC): *every* member must have more
//!   neighbors inside the community than outside.
//! - [`Measure::Weak`] (square ECC): members must have more neighbors inside
//!   than outside *in aggregate*.
//!
//! Community tests always run against the original input graph, never against
//! the partially dismantled working copy.
//!
//! ## Usage
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use radicchi::{CommunityDetection, Measure, Radicchi};
//!
//! // Two triangles joined by a bridge.
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
//! for &(u, v) in &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)] {
//!     graph.add_edge(nodes[u], nodes[v], ());
//! }
//!
//! let detector = Radicchi::new().with_measure(Measure::Strong);
//! let labels = detector.detect(&graph).unwrap();
//! // labels[i] = community ID for node i
//! assert_eq!(labels, vec![0, 0, 0, 1, 1, 1]);
//! ```
//!
//! The algorithm is fully deterministic: all edges tied at the minimum score
//! are removed in one batch, so the partition does not depend on edge
//! iteration order.
//!
//! ## References
//!
//! - Radicchi, Castellano, Cecconi, Loreto, Parisi (2004). "Defining and
//!   identifying communities in networks." PNAS 101 (9), 2658-2663.

mod cover;
/// Error types used across `radicchi`.
pub mod error;
mod measure;
mod prune;
mod radicchi;
mod state;
mod traits;


pub use error::{Error, Result};
pub use measure::Measure;
pub use radicchi::Radicchi;
pub use traits::CommunityDetection;
