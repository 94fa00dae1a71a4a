//! Incremental graph bookkeeping for the edge-removal loop.
//!
//! The splitter removes edges in batches and re-checks connectivity after
//! every batch. Rebuilding degrees and adjacency from the petgraph structure
//! on each pass would dominate the runtime, so each recursive call owns a
//! [`WorkingGraph`]: a degree array, neighbor sets, and a canonical edge set,
//! all patched in place as edges are deleted.
//!
//! Community predicates are never evaluated against the working copy; they use
//! an [`OriginalGraph`] snapshot of the untouched input, shared read-only by
//! every recursion level.

use std::collections::{HashSet, VecDeque};

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// Canonical unordered edge: smaller endpoint first.
fn canonical(u: usize, v: usize) -> (usize, usize) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Connected components by BFS over neighbor sets.
///
/// Components are discovered in ascending start-vertex order, so the
/// enumeration (and everything downstream of it) is deterministic.
fn bfs_components(neighbors: &[HashSet<usize>]) -> Vec<Vec<usize>> {
    let n = neighbors.len();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut component = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(v) = queue.pop_front() {
            for &u in &neighbors[v] {
                if !visited[u] {
                    visited[u] = true;
                    component.push(u);
                    queue.push_back(u);
                }
            }
        }
        components.push(component);
    }

    components
}

/// Mutable working copy of (a piece of) the graph.
///
/// Working vertices are dense indices `0..vertex_count()`; each keeps a
/// back-reference to its id in the original graph, stable across recursion.
/// Degrees, neighbor sets, and the edge set stay mutually consistent after
/// every mutation: `degree(v) == neighbors(v).len()`, and `neighbors(v)`
/// contains `u` iff the canonical pair is in the edge set.
#[derive(Debug, Clone)]
pub(crate) struct WorkingGraph {
    original_ids: Vec<usize>,
    degrees: Vec<usize>,
    neighbors: Vec<HashSet<usize>>,
    edges: HashSet<(usize, usize)>,
}

impl WorkingGraph {
    /// Build the root working copy from the input graph.
    ///
    /// Self-loops are ignored and parallel edges collapse into one canonical
    /// pair; the caller contract is a simple graph, this just keeps the
    /// bookkeeping consistent if it is not.
    pub fn from_graph<N, E>(graph: &UnGraph<N, E>) -> Self {
        let n = graph.node_count();
        let mut working = Self::with_ids((0..n).collect());
        for edge in graph.edge_references() {
            working.insert_edge(edge.source().index(), edge.target().index());
        }
        working
    }

    fn with_ids(original_ids: Vec<usize>) -> Self {
        let n = original_ids.len();
        Self {
            original_ids,
            degrees: vec![0; n],
            neighbors: vec![HashSet::new(); n],
            edges: HashSet::new(),
        }
    }

    fn insert_edge(&mut self, u: usize, v: usize) {
        if u == v {
            return;
        }
        if self.edges.insert(canonical(u, v)) {
            let _ = self.neighbors[u].insert(v);
            let _ = self.neighbors[v].insert(u);
            self.degrees[u] += 1;
            self.degrees[v] += 1;
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.original_ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Id of working vertex `v` in the original graph.
    pub fn original_id(&self, v: usize) -> usize {
        self.original_ids[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.degrees[v]
    }

    pub fn neighbors(&self, v: usize) -> &HashSet<usize> {
        &self.neighbors[v]
    }

    /// Iterate over the current edge set as canonical `(u, v)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// Delete a batch of edges, patching degrees and neighbor sets in place.
    ///
    /// Each pair is removed at most once; cost is O(batch length).
    pub fn delete_edges(&mut self, batch: &[(usize, usize)]) {
        for &(u, v) in batch {
            if self.edges.remove(&canonical(u, v)) {
                let _ = self.neighbors[u].remove(&v);
                let _ = self.neighbors[v].remove(&u);
                self.degrees[u] -= 1;
                self.degrees[v] -= 1;
            }
        }
    }

    /// Connected components over the current adjacency.
    pub fn components(&self) -> Vec<Vec<usize>> {
        bfs_components(&self.neighbors)
    }

    pub fn component_count(&self) -> usize {
        self.components().len()
    }

    /// Induced subgraph over `vertices`: a fresh working graph containing
    /// exactly the current edges with both endpoints in the subset, original
    /// ids preserved.
    pub fn induced_subgraph(&self, vertices: &[usize]) -> Self {
        let mut remap = vec![usize::MAX; self.vertex_count()];
        for (new, &old) in vertices.iter().enumerate() {
            remap[old] = new;
        }

        let ids = vertices.iter().map(|&v| self.original_ids[v]).collect();
        let mut sub = Self::with_ids(ids);
        for &(u, v) in &self.edges {
            if remap[u] != usize::MAX && remap[v] != usize::MAX {
                sub.insert_edge(remap[u], remap[v]);
            }
        }
        sub
    }
}

/// Immutable degree/neighbor snapshot of the input graph.
///
/// Built once per detection run; community predicates always test candidate
/// subsets against this, never against the working copy the splitter is
/// tearing down.
#[derive(Debug)]
pub(crate) struct OriginalGraph {
    neighbors: Vec<HashSet<usize>>,
}

impl OriginalGraph {
    pub fn from_graph<N, E>(graph: &UnGraph<N, E>) -> Self {
        let n = graph.node_count();
        let mut neighbors = vec![HashSet::new(); n];
        for edge in graph.edge_references() {
            let (u, v) = (edge.source().index(), edge.target().index());
            if u != v {
                let _ = neighbors[u].insert(v);
                let _ = neighbors[v].insert(u);
            }
        }
        Self { neighbors }
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }

    /// Number of neighbors of `v` that lie inside `subset`.
    pub fn internal_degree(&self, v: usize, subset: &HashSet<usize>) -> usize {
        self.neighbors[v].intersection(subset).count()
    }

    /// Connected components of the untouched input structure.
    pub fn components(&self) -> Vec<Vec<usize>> {
        bfs_components(&self.neighbors)
    }
}
