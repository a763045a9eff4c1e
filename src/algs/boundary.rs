//! Boundary loop extraction.
//!
//! A boundary edge is a triangle side without a neighbor. Following boundary
//! edges head to tail, and pivoting around each head vertex through the fan
//! of interior triangles hinged there, yields closed polygons. Bow-tie
//! vertices are allowed, in which case a polygon can pass through the same
//! vertex more than once.

use std::collections::BTreeMap;

use hashbrown::HashSet;

use crate::mesh_error::MeshError;
use crate::topology::factory::RecordFactory;
use crate::topology::keys::VertexId;
use crate::topology::manifold::ManifoldMesh;
use crate::topology::records::TriangleHandle;
use crate::topology::tables::TriangleTable;

#[derive(Clone, Copy, Debug)]
struct BoundaryEdge {
    triangle: TriangleHandle,
    /// Side of `triangle` that is the boundary edge.
    index: usize,
    visited: bool,
}

/// Directed boundary edges keyed by `(tail, head)`.
type BoundaryEdgeMap = BTreeMap<[VertexId; 2], BoundaryEdge>;

impl<F: RecordFactory> ManifoldMesh<F> {
    /// Closed boundary polygons of the mesh, each as a vertex list that
    /// follows the winding of the triangles.
    ///
    /// With `duplicate_endpoints` the first vertex is repeated at the end of
    /// each polygon. Fails with [`MeshError::NotOrientable`] when the walk
    /// around a vertex comes back to a triangle it already crossed, which
    /// happens on inconsistently wound meshes; check
    /// [`is_oriented`](Self::is_oriented) first if in doubt.
    pub fn boundary_polygons(
        &self,
        duplicate_endpoints: bool,
    ) -> Result<Vec<Vec<VertexId>>, MeshError> {
        let mut edges = BoundaryEdgeMap::new();
        for (th, tri) in self.triangles.iter() {
            for (i, adj) in tri.t.iter().enumerate() {
                if adj.is_none() {
                    let directed = [tri.v[i], tri.v[(i + 1) % 3]];
                    edges.insert(
                        directed,
                        BoundaryEdge {
                            triangle: th,
                            index: i,
                            visited: false,
                        },
                    );
                }
            }
        }

        let seeds: Vec<[VertexId; 2]> = edges.keys().copied().collect();
        let mut polygons = Vec::new();
        for seed in seeds {
            let start = edges[&seed];
            if start.visited {
                continue;
            }
            let mut polygon = walk_polygon(&self.triangles, &mut edges, start)?;
            if !duplicate_endpoints {
                polygon.pop();
            }
            polygons.push(polygon);
        }
        Ok(polygons)
    }
}

/// Follow boundary edges from `start` until an already visited one comes up.
/// The returned polygon ends with its first vertex.
fn walk_polygon<D>(
    triangles: &TriangleTable<D>,
    edges: &mut BoundaryEdgeMap,
    start: BoundaryEdge,
) -> Result<Vec<VertexId>, MeshError> {
    let mut tri = &triangles[start.triangle];
    let mut i1 = (start.index + 1) % 3;
    let mut current = [tri.v[start.index], tri.v[i1]];
    let mut polygon = vec![current[0]];

    loop {
        let entry = edges
            .get_mut(&current)
            .expect("boundary walk reached an edge that is not on the boundary");
        if entry.visited {
            break;
        }
        entry.visited = true;
        let hinge = current[1];
        polygon.push(hinge);

        // Pivot around `hinge` until its outgoing side is a boundary edge.
        let mut crossed: HashSet<TriangleHandle> = HashSet::new();
        crossed.insert(entry.triangle);
        while let Some(next) = tri.t[i1] {
            if !crossed.insert(next) {
                return Err(MeshError::NotOrientable { vertex: hinge });
            }
            tri = &triangles[next];
            i1 = tri
                .vertex_index(hinge)
                .expect("triangle across a hinge must contain the hinge vertex");
        }

        let i2 = (i1 + 1) % 3;
        current = [hinge, tri.v[i2]];
        i1 = i2;
    }
    Ok(polygon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::options::MeshOptions;

    #[test]
    fn lone_triangle() {
        let m = ManifoldMesh::from_triangles([[0, 1, 2]]).unwrap();
        assert_eq!(m.boundary_polygons(false).unwrap(), vec![vec![0, 1, 2]]);
        assert_eq!(m.boundary_polygons(true).unwrap(), vec![vec![0, 1, 2, 0]]);
    }

    #[test]
    fn square_walks_around_the_diagonal() {
        let m = ManifoldMesh::from_triangles([[0, 1, 2], [0, 2, 3]]).unwrap();
        assert_eq!(m.boundary_polygons(false).unwrap(), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn bow_tie_gives_two_loops() {
        let m = ManifoldMesh::from_triangles([[0, 1, 2], [0, 3, 4]]).unwrap();
        assert_eq!(
            m.boundary_polygons(false).unwrap(),
            vec![vec![0, 1, 2], vec![0, 3, 4]]
        );
    }

    #[test]
    fn closed_mesh_has_no_boundary() {
        let m =
            ManifoldMesh::from_triangles([[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]]).unwrap();
        assert!(m.boundary_polygons(true).unwrap().is_empty());
    }

    #[test]
    fn inconsistent_winding_is_reported() {
        let mut m = ManifoldMesh::with_options(MeshOptions::lenient());
        m.insert(0, 1, 2).unwrap();
        m.insert(0, 3, 2).unwrap();
        assert!(!m.is_oriented());
        assert_eq!(
            m.boundary_polygons(false),
            Err(MeshError::NotOrientable { vertex: 2 })
        );
    }
}
