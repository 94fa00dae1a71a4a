//! Conversion of a community list into per-vertex labels.

/// Assign each vertex the index of its community in `communities`.
///
/// The input must be an exhaustive, disjoint partition of `0..vertex_count`.
/// Anything else is a defect in the splitter, surfaced as a panic rather than
/// recovered.
pub(crate) fn build_cover(vertex_count: usize, communities: &[Vec<usize>]) -> Vec<usize> {
    let mut labels = vec![usize::MAX; vertex_count];

    for (index, community) in communities.iter().enumerate() {
        assert!(!community.is_empty(), "empty community in partition");
        for &v in community {
            assert!(
                labels[v] == usize::MAX,
                "vertex {v} assigned to more than one community"
            );
            labels[v] = index;
        }
    }
    for (v, &label) in labels.iter().enumerate() {
        assert!(label != usize::MAX, "vertex {v} missing from the partition");
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_labels_by_position() {
        let labels = build_cover(5, &[vec![3, 0], vec![1], vec![4, 2]]);
        assert_eq!(labels, vec![0, 1, 2, 0, 2]);
    }

    #[test]
    #[should_panic(expected = "more than one community")]
    fn test_cover_rejects_overlap() {
        let _ = build_cover(3, &[vec![0, 1], vec![1, 2]]);
    }

    #[test]
    #[should_panic(expected = "missing from the partition")]
    fn test_cover_rejects_missing_vertex() {
        let _ = build_cover(3, &[vec![0, 2]]);
    }
}
