//! Consistent winding ("chirality") per connected component.
//!
//! Two triangles sharing an edge are consistently wound when they traverse
//! that edge in opposite directions. Topology alone fixes the winding of a
//! component only up to a global flip, so different components may still
//! disagree with each other after normalization; picking an outside for each
//! component needs geometry this crate does not have.

use std::collections::VecDeque;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::mesh_error::MeshError;
use crate::topology::factory::RecordFactory;
use crate::topology::keys::VertexId;
use crate::topology::manifold::{InsertOutcome, ManifoldMesh};
use crate::topology::options::MeshOptions;

/// Connected components found while normalizing a compact graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChiralityComponents {
    /// Triangle indices grouped by component, in breadth-first order.
    pub components: Vec<usize>,
    /// Number of triangles of each component, in the order the components
    /// appear in `components`.
    pub num_component_triangles: Vec<usize>,
}

impl ChiralityComponents {
    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_component_triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_component_triangles.is_empty()
    }

    /// Triangle indices of each component.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.num_component_triangles
            .iter()
            .scan(0usize, |start, &n| {
                let range = *start..*start + n;
                *start += n;
                Some(range)
            })
            .map(|range| &self.components[range])
    }
}

/// Re-wind `triangles` so that neighbors inside each connected component
/// traverse their shared edge in opposite directions.
///
/// Components are explored breadth-first, each seeded at the lowest index
/// not yet visited. The seed keeps its winding. A neighbor that runs along
/// the shared edge in the same direction as the triangle being expanded is
/// flipped by swapping the two shared vertices; its two other adjacency
/// slots are swapped along with them so `adjacents` stays aligned.
///
/// Both arrays are validated while they are read: they must have the same
/// length, and every adjacency entry must name an in-range triangle that
/// contains the corresponding edge.
pub fn components_consistent_chirality(
    triangles: &mut [[VertexId; 3]],
    adjacents: &mut [[Option<usize>; 3]],
) -> Result<ChiralityComponents, MeshError> {
    if triangles.len() != adjacents.len() {
        return Err(MeshError::CompactGraphLengthMismatch {
            triangles: triangles.len(),
            adjacents: adjacents.len(),
        });
    }

    let n = triangles.len();
    let mut visited = vec![false; n];
    let mut components = Vec::with_capacity(n);
    // Running totals {0, n0, n0 + n1, ...}, turned into sizes at the end.
    let mut prefix = vec![0usize];
    let mut queue = VecDeque::new();
    let mut cursor = 0;

    loop {
        while cursor < n && visited[cursor] {
            cursor += 1;
        }
        if cursor == n {
            break;
        }

        visited[cursor] = true;
        components.push(cursor);
        queue.push_back(cursor);

        while let Some(current) = queue.pop_front() {
            let tri = triangles[current];
            for i0 in 0..3 {
                let Some(adj) = adjacents[current][i0] else {
                    continue;
                };
                let edge = [tri[i0], tri[(i0 + 1) % 3]];
                if adj >= n {
                    return Err(MeshError::CompactGraphAdjacencyMismatch {
                        triangle: current,
                        neighbor: adj,
                        edge,
                    });
                }
                if visited[adj] {
                    continue;
                }

                let [tv0, tv1] = edge;
                let neighbor = triangles[adj];
                let j0 = neighbor.iter().position(|&v| v == tv0);
                let Some(j0) = j0.filter(|_| neighbor.contains(&tv1)) else {
                    return Err(MeshError::CompactGraphAdjacencyMismatch {
                        triangle: current,
                        neighbor: adj,
                        edge,
                    });
                };
                let j1 = (j0 + 1) % 3;
                if neighbor[j1] == tv1 {
                    // Same direction: flip the neighbor.
                    let j2 = (j1 + 1) % 3;
                    triangles[adj].swap(j0, j1);
                    adjacents[adj].swap(j1, j2);
                }

                visited[adj] = true;
                components.push(adj);
                queue.push_back(adj);
            }
        }
        prefix.push(components.len());
    }

    let num_component_triangles = prefix.iter().tuple_windows().map(|(a, b)| b - a).collect();
    Ok(ChiralityComponents {
        components,
        num_component_triangles,
    })
}

impl<F: RecordFactory> ManifoldMesh<F> {
    /// Re-wind every connected component consistently.
    ///
    /// The mesh is exported to a [`CompactGraph`](crate::mesh_graph::CompactGraph),
    /// normalized, cleared and rebuilt. Rebuilding admits every row whatever
    /// the current options; they are restored afterwards. Edge and triangle
    /// payloads are recreated by the record factory, and handles taken before
    /// the call no longer resolve.
    pub fn make_consistent_chirality(&mut self) -> Result<ChiralityComponents, MeshError> {
        if self.is_empty() {
            return Ok(ChiralityComponents::default());
        }
        let mut graph = self.create_compact_graph();
        let found = graph.make_consistent_chirality()?;

        let options = std::mem::replace(&mut self.options, MeshOptions::lenient());
        self.clear();
        let rebuilt = self.reinsert(&graph.triangles);
        self.options = options;
        rebuilt?;
        Ok(found)
    }

    fn reinsert(&mut self, rows: &[[VertexId; 3]]) -> Result<(), MeshError> {
        for &[v0, v1, v2] in rows {
            match self.insert(v0, v1, v2)? {
                InsertOutcome::Created(_) => {}
                InsertOutcome::AlreadyPresent => {
                    log::warn!("rewound triangle ({v0}, {v1}, {v2}) duplicates another; dropped");
                }
                InsertOutcome::RejectedNonManifold { edge, reason } => {
                    log::warn!("rewound triangle ({v0}, {v1}, {v2}) dropped: edge {edge} {reason}");
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_the_minority_triangle() {
        let mut tris = vec![[0, 1, 2], [1, 2, 3]];
        let mut adjs = vec![[None, Some(1), None], [Some(0), None, None]];
        let found = components_consistent_chirality(&mut tris, &mut adjs).unwrap();
        assert_eq!(tris, vec![[0, 1, 2], [2, 1, 3]]);
        assert_eq!(adjs, vec![[None, Some(1), None], [Some(0), None, None]]);
        assert_eq!(found.components, vec![0, 1]);
        assert_eq!(found.num_component_triangles, vec![2]);
    }

    #[test]
    fn flip_keeps_adjacency_aligned() {
        let mut tris = vec![[0, 1, 2], [1, 2, 3], [3, 1, 4]];
        let mut adjs = vec![
            [None, Some(1), None],
            [Some(0), None, Some(2)],
            [Some(1), None, None],
        ];
        let found = components_consistent_chirality(&mut tris, &mut adjs).unwrap();
        assert_eq!(tris, vec![[0, 1, 2], [2, 1, 3], [3, 1, 4]]);
        assert_eq!(adjs[1], [Some(0), Some(2), None]);
        assert_eq!(adjs[0], [None, Some(1), None]);
        assert_eq!(adjs[2], [Some(1), None, None]);
        assert_eq!(found.num_component_triangles, vec![3]);
    }

    #[test]
    fn sizes_per_component() {
        let mut tris = vec![[0, 1, 2], [5, 6, 7], [2, 1, 3]];
        let mut adjs = vec![[None, Some(2), None], [None; 3], [Some(0), None, None]];
        let found = components_consistent_chirality(&mut tris, &mut adjs).unwrap();
        assert_eq!(found.components, vec![0, 2, 1]);
        assert_eq!(found.num_component_triangles, vec![2, 1]);
        assert_eq!(found.len(), 2);
        let parts: Vec<&[usize]> = found.iter().collect();
        assert_eq!(parts, vec![&[0, 2][..], &[1][..]]);
    }

    #[test]
    fn empty_input_has_no_components() {
        let found = components_consistent_chirality(&mut [], &mut []).unwrap();
        assert!(found.is_empty());
        assert!(found.components.is_empty());
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let mut tris = vec![[0, 1, 2]];
        let err = components_consistent_chirality(&mut tris, &mut []).unwrap_err();
        assert_eq!(
            err,
            MeshError::CompactGraphLengthMismatch {
                triangles: 1,
                adjacents: 0
            }
        );
    }

    #[test]
    fn neighbor_without_the_edge_is_an_error() {
        let mut tris = vec![[0, 1, 2], [5, 6, 7]];
        let mut adjs = vec![[Some(1), None, None], [None; 3]];
        let err = components_consistent_chirality(&mut tris, &mut adjs).unwrap_err();
        assert_eq!(
            err,
            MeshError::CompactGraphAdjacencyMismatch {
                triangle: 0,
                neighbor: 1,
                edge: [0, 1]
            }
        );
    }

    #[test]
    fn out_of_range_neighbor_is_an_error() {
        let mut tris = vec![[0, 1, 2]];
        let mut adjs = vec![[None, None, Some(4)]];
        let err = components_consistent_chirality(&mut tris, &mut adjs).unwrap_err();
        assert!(matches!(
            err,
            MeshError::CompactGraphAdjacencyMismatch { neighbor: 4, .. }
        ));
    }

    #[test]
    fn mesh_rewind_restores_options() {
        let mut m = ManifoldMesh::with_options(MeshOptions::default());
        m.set_winding_check(crate::topology::options::WindingCheck::Ignore);
        let before = m.options();
        m.insert(0, 1, 2).unwrap();
        m.insert(1, 2, 3).unwrap();
        assert!(!m.is_oriented());

        let found = m.make_consistent_chirality().unwrap();
        assert_eq!(found.num_component_triangles, vec![2]);
        assert!(m.is_oriented());
        assert_eq!(m.options(), before);
        assert!(m.find_triangle(2, 1, 3).is_some());
        assert!(m.find_triangle(1, 2, 3).is_none());
    }

    #[test]
    fn empty_mesh_rewind_is_a_no_op() {
        let mut m = ManifoldMesh::new();
        assert_eq!(m.make_consistent_chirality().unwrap(), ChiralityComponents::default());
        assert!(m.is_empty());
    }
}
