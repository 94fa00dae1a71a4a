//! Separation of freshly split components into confirmed communities and
//! leftover vertices.

use std::collections::HashSet;

use crate::error::Result;
use crate::measure::Measure;
use crate::state::{OriginalGraph, WorkingGraph};

/// Outcome of an active prune.
///
/// `confirmed_original` and `confirmed_working` are index-aligned: the same
/// component as original-graph ids and as working-vertex indices. `remaining`
/// holds the working vertices in no confirmed component, ascending.
pub(crate) struct Pruned {
    pub confirmed_original: Vec<Vec<usize>>,
    pub confirmed_working: Vec<Vec<usize>>,
    pub remaining: Vec<usize>,
}

/// Evaluate every current component of `working` against the measure's
/// community predicate in the original graph.
///
/// Returns `None` when fewer than two components qualify: a split that yields
/// at most one confirmed community is not acted on, and the caller keeps
/// removing edges.
pub(crate) fn prune_components(
    original: &OriginalGraph,
    working: &WorkingGraph,
    measure: Measure,
) -> Result<Option<Pruned>> {
    let mut confirmed_original = Vec::new();
    let mut confirmed_working = Vec::new();

    for component in working.components() {
        let ids: Vec<usize> = component.iter().map(|&v| working.original_id(v)).collect();
        if measure.is_community(original, &ids)? {
            confirmed_original.push(ids);
            confirmed_working.push(component);
        }
    }

    if confirmed_working.len() < 2 {
        return Ok(None);
    }

    let confirmed: HashSet<usize> = confirmed_working.iter().flatten().copied().collect();
    let remaining = (0..working.vertex_count())
        .filter(|v| !confirmed.contains(v))
        .collect();

    Ok(Some(Pruned {
        confirmed_original,
        confirmed_working,
        remaining,
    }))
}
