//! [`ManifoldMesh`]: a dynamic edge-triangle mesh that keeps every edge
//! shared by at most two triangles.
//!
//! Triangles are inserted and removed by vertex id. The mesh maintains, for
//! every edge, the (at most two) triangles that use it, and for every
//! triangle its three edges and edge-adjacent neighbors. Insertion is
//! transactional: a triangle that would break the manifold property leaves
//! the mesh exactly as it was.
//!
//! # Example
//! ```rust
//! use manifold_mesh::topology::manifold::{InsertOutcome, ManifoldMesh};
//!
//! let mut mesh = ManifoldMesh::new();
//! for [a, b, c] in [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]] {
//!     assert!(matches!(mesh.insert(a, b, c)?, InsertOutcome::Created(_)));
//! }
//! assert!(mesh.is_closed());
//! assert!(mesh.is_oriented());
//! assert_eq!(mesh.num_edges(), 6);
//! # Ok::<(), manifold_mesh::mesh_error::MeshError>(())
//! ```

use std::fmt;

use crate::debug_invariants;
use crate::mesh_error::{MeshError, NonManifoldReason};
use crate::topology::factory::{PlainRecords, RecordFactory};
use crate::topology::keys::{EdgeKey, TriangleKey, VertexId};
use crate::topology::options::{MeshOptions, NonManifoldHandling, WindingCheck};
use crate::topology::records::{Edge, EdgeHandle, EdgeSide, Triangle, TriangleHandle};
use crate::topology::tables::{EdgeTable, TriangleTable};

/// Result of [`ManifoldMesh::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The triangle is new and has been linked into the mesh.
    Created(TriangleHandle),
    /// A triangle with the same key already exists; nothing changed.
    AlreadyPresent,
    /// The triangle would make `edge` non-manifold; nothing changed.
    /// Only returned under [`NonManifoldHandling::Reject`].
    RejectedNonManifold {
        edge: EdgeKey,
        reason: NonManifoldReason,
    },
}

impl InsertOutcome {
    /// Handle of the created triangle, if any.
    #[inline]
    pub fn created(self) -> Option<TriangleHandle> {
        match self {
            InsertOutcome::Created(h) => Some(h),
            _ => None,
        }
    }
}

/// Edge-triangle manifold mesh over externally owned vertex ids.
///
/// `F` decides what payload new edges and triangles carry; see
/// [`RecordFactory`].
#[derive(Clone)]
pub struct ManifoldMesh<F: RecordFactory = PlainRecords> {
    pub(crate) factory: F,
    pub(crate) edges: EdgeTable<F::EdgeData>,
    pub(crate) triangles: TriangleTable<F::TriangleData>,
    pub(crate) options: MeshOptions,
}

impl Default for ManifoldMesh<PlainRecords> {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifoldMesh<PlainRecords> {
    /// Creates a new, empty mesh with the default (strict) options.
    pub fn new() -> Self {
        Self::with_options(MeshOptions::default())
    }

    pub fn with_options(options: MeshOptions) -> Self {
        Self::with_factory_and_options(PlainRecords, options)
    }

    /// Builds a mesh from an iterator of vertex triples.
    ///
    /// Fails on the first triangle the default strict options refuse.
    pub fn from_triangles<I>(triangles: I) -> Result<Self, MeshError>
    where
        I: IntoIterator<Item = [VertexId; 3]>,
    {
        let mut mesh = Self::new();
        for [v0, v1, v2] in triangles {
            let _ = mesh.insert(v0, v1, v2)?;
        }
        Ok(mesh)
    }
}

impl<F: RecordFactory> ManifoldMesh<F> {
    pub fn with_factory(factory: F) -> Self {
        Self::with_factory_and_options(factory, MeshOptions::default())
    }

    pub fn with_factory_and_options(factory: F, options: MeshOptions) -> Self {
        Self {
            factory,
            edges: EdgeTable::new(),
            triangles: TriangleTable::new(),
            options,
        }
    }

    // ---------- configuration ----------

    #[inline]
    pub fn options(&self) -> MeshOptions {
        self.options
    }

    /// Switch between loud and quiet non-manifold failures.
    /// Returns the previous setting.
    pub fn set_non_manifold_handling(
        &mut self,
        handling: NonManifoldHandling,
    ) -> NonManifoldHandling {
        std::mem::replace(&mut self.options.non_manifold, handling)
    }

    /// Returns the previous setting.
    pub fn set_winding_check(&mut self, winding: WindingCheck) -> WindingCheck {
        std::mem::replace(&mut self.options.winding, winding)
    }

    // ---------- read access ----------

    /// Edges in table order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeHandle, &Edge<F::EdgeData>)> + '_ {
        self.edges.iter()
    }

    /// Triangles in table order.
    pub fn triangles(
        &self,
    ) -> impl Iterator<Item = (TriangleHandle, &Triangle<F::TriangleData>)> + '_ {
        self.triangles.iter()
    }

    #[inline]
    pub fn edge(&self, h: EdgeHandle) -> Option<&Edge<F::EdgeData>> {
        self.edges.get(h)
    }

    #[inline]
    pub fn triangle(&self, h: TriangleHandle) -> Option<&Triangle<F::TriangleData>> {
        self.triangles.get(h)
    }

    /// Edge joining `v0` and `v1`, in either direction.
    #[inline]
    pub fn find_edge(&self, v0: VertexId, v1: VertexId) -> Option<EdgeHandle> {
        self.edges.find(&EdgeKey::new(v0, v1))
    }

    /// Triangle `(v0, v1, v2)` in any rotation of that winding.
    #[inline]
    pub fn find_triangle(
        &self,
        v0: VertexId,
        v1: VertexId,
        v2: VertexId,
    ) -> Option<TriangleHandle> {
        self.triangles.find(&TriangleKey::new(v0, v1, v2))
    }

    /// Mutable access to an edge payload. Topology fields stay read-only.
    pub fn edge_data_mut(&mut self, h: EdgeHandle) -> Option<&mut F::EdgeData> {
        self.edges.get_mut(h).map(|e| &mut e.data)
    }

    /// Mutable access to a triangle payload. Topology fields stay read-only.
    pub fn triangle_data_mut(&mut self, h: TriangleHandle) -> Option<&mut F::TriangleData> {
        self.triangles.get_mut(h).map(|t| &mut t.data)
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    // ---------- mutation ----------

    /// Inserts the triangle `(v0, v1, v2)`, wound counterclockwise.
    ///
    /// All three edges are validated before anything is modified, so a
    /// rejected or failed insertion never changes the mesh.
    pub fn insert(
        &mut self,
        v0: VertexId,
        v1: VertexId,
        v2: VertexId,
    ) -> Result<InsertOutcome, MeshError> {
        if v0 == v1 || v1 == v2 || v2 == v0 {
            return Err(MeshError::DegenerateTriangle(v0, v1, v2));
        }
        let key = TriangleKey::new(v0, v1, v2);
        if self.triangles.contains_key(&key) {
            return Ok(InsertOutcome::AlreadyPresent);
        }

        let v = [v0, v1, v2];

        // Validate every edge before touching shared state.
        let mut shared: [Option<EdgeHandle>; 3] = [None; 3];
        for i0 in 0..3 {
            let (a, b, c) = (v[i0], v[(i0 + 1) % 3], v[(i0 + 2) % 3]);
            let Some(eh) = self.edges.find(&EdgeKey::new(a, b)) else {
                continue;
            };
            if let Err(reason) = self.check_attach(eh, a, b, c) {
                return self.reject(v, EdgeKey::new(a, b), reason);
            }
            shared[i0] = Some(eh);
        }

        // Link. Nothing below can fail.
        let data = self.factory.create_triangle(v);
        let th = self.triangles.insert(key, Triangle::new(v, data));
        for i0 in 0..3 {
            let (a, b) = (v[i0], v[(i0 + 1) % 3]);
            match shared[i0] {
                None => {
                    let data = self.factory.create_edge(a, b);
                    let eh = self
                        .edges
                        .insert(EdgeKey::new(a, b), Edge::new(a, b, th, data));
                    self.triangles[th].e[i0] = eh;
                }
                Some(eh) => {
                    let edge = &mut self.edges[eh];
                    edge.t[1] = Some(th);
                    let adjacent = edge.t[0].expect("shared edge has an empty first slot");

                    let adj = &mut self.triangles[adjacent];
                    let j = adj
                        .e
                        .iter()
                        .position(|&e| e == eh)
                        .expect("adjacent triangle does not reference the shared edge");
                    adj.t[j] = Some(th);

                    let tri = &mut self.triangles[th];
                    tri.e[i0] = eh;
                    tri.t[i0] = Some(adjacent);
                }
            }
        }

        log::trace!("created triangle {key}");
        debug_invariants!(self, "insert");
        Ok(InsertOutcome::Created(th))
    }

    /// Removes the triangle `(v0, v1, v2)`. Returns `false` if it is not in
    /// the mesh.
    pub fn remove(&mut self, v0: VertexId, v1: VertexId, v2: VertexId) -> bool {
        let key = TriangleKey::new(v0, v1, v2);
        let Some(th) = self.triangles.find(&key) else {
            return false;
        };
        let (edges, adjacents) = {
            let tri = &self.triangles[th];
            (tri.e, tri.t)
        };

        for (eh, adjacent) in edges.into_iter().zip(adjacents) {
            let edge = &mut self.edges[eh];
            if edge.t[0] == Some(th) {
                // Single-triangle edges always keep their triangle in slot 0.
                edge.t[0] = edge.t[1].take();
            } else if edge.t[1] == Some(th) {
                edge.t[1] = None;
            } else {
                panic!("edge {} does not reference triangle {key}", edge.key());
            }
            if edge.t[0].is_none() {
                let ekey = edge.key();
                self.edges.erase(&ekey);
            }

            if let Some(adj) = adjacent {
                let adj = &mut self.triangles[adj];
                if let Some(j) = adj.e.iter().position(|&e| e == eh) {
                    adj.t[j] = None;
                }
            }
        }

        self.triangles.erase(&key);
        log::trace!("removed triangle {key}");
        debug_invariants!(self, "remove");
        true
    }

    /// Destroys all edges and triangles.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.triangles.clear();
    }

    // ---------- whole-mesh predicates ----------

    /// A mesh is closed when every edge is shared by two triangles.
    ///
    /// A closed mesh is not necessarily oriented: a sphere whose upper
    /// hemisphere faces out and lower hemisphere faces in is closed.
    pub fn is_closed(&self) -> bool {
        self.edges.iter().all(|(_, e)| e.t[0].is_some() && e.t[1].is_some())
    }

    /// All triangles are oriented consistently and no two are coincident.
    ///
    /// Every shared edge must be traversed in opposite directions by its two
    /// triangles, and the vertices opposite the edge must differ. The second
    /// condition rejects the mirrored pair `(0, 1, 2)` / `(0, 2, 1)`, which
    /// traverses every edge in opposite directions.
    pub fn is_oriented(&self) -> bool {
        for (_, edge) in self.edges.iter() {
            let [Some(t0), Some(t1)] = edge.t else {
                continue;
            };
            let [u0, u1] = edge.key().vertices();
            let (pos0, opp0) = directed_use(&self.triangles[t0], u0, u1);
            let (pos1, opp1) = directed_use(&self.triangles[t1], u0, u1);
            if pos0 == pos1 || opp0 == opp1 {
                return false;
            }
        }
        true
    }

    // ---------- helpers ----------

    fn check_attach(
        &self,
        eh: EdgeHandle,
        a: VertexId,
        b: VertexId,
        c: VertexId,
    ) -> Result<(), NonManifoldReason> {
        let edge = &self.edges[eh];
        if edge.t[1].is_some() {
            return Err(NonManifoldReason::EdgeFull);
        }
        if self.options.winding == WindingCheck::Strict {
            let first = edge.t[0].expect("edge without triangles left in table");
            // The existing triangle must run along (b, a).
            let existing = &self.triangles[first];
            if existing.which_side_of_edge(a, b) != EdgeSide::Negative {
                return Err(NonManifoldReason::SameDirection);
            }
            if existing.opposite_vertex_of_edge(a, b) == Some(c) {
                return Err(NonManifoldReason::Coincident);
            }
        }
        Ok(())
    }

    fn reject(
        &self,
        triangle: [VertexId; 3],
        edge: EdgeKey,
        reason: NonManifoldReason,
    ) -> Result<InsertOutcome, MeshError> {
        match self.options.non_manifold {
            NonManifoldHandling::Error => Err(MeshError::NonManifoldInsertion {
                triangle,
                edge,
                reason,
            }),
            NonManifoldHandling::Reject => {
                log::debug!("rejected triangle {triangle:?}: edge {edge} {reason}");
                Ok(InsertOutcome::RejectedNonManifold { edge, reason })
            }
        }
    }
}

/// Direction in which `tri` uses the edge `{u0, u1}` (true for `(u0, u1)`),
/// and the vertex opposite that edge.
fn directed_use<D>(tri: &Triangle<D>, u0: VertexId, u1: VertexId) -> (bool, VertexId) {
    let i = tri
        .vertex_index(u0)
        .expect("triangle on an edge must contain the edge's endpoints");
    let next = tri.v[(i + 1) % 3];
    if next == u1 {
        (true, tri.v[(i + 2) % 3])
    } else {
        (false, next)
    }
}

impl<F: RecordFactory> fmt::Debug for ManifoldMesh<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManifoldMesh")
            .field("edges", &self.edges.len())
            .field("triangles", &self.triangles.len())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_links_shared_edge_both_ways() {
        let mut m = ManifoldMesh::new();
        let a = m.insert(0, 1, 2).unwrap().created().unwrap();
        let b = m.insert(2, 1, 3).unwrap().created().unwrap();
        let e = m.find_edge(1, 2).unwrap();
        assert_eq!(m.edge(e).unwrap().t, [Some(a), Some(b)]);
        assert_eq!(m.triangle(a).unwrap().t, [None, Some(b), None]);
        assert_eq!(m.triangle(b).unwrap().t, [Some(a), None, None]);
        assert_eq!(m.triangle(a).unwrap().adjacent_of_edge(2, 1), Some(b));
    }

    #[test]
    fn degenerate_triangle_is_an_error() {
        let mut m = ManifoldMesh::new();
        assert_eq!(m.insert(1, 1, 2), Err(MeshError::DegenerateTriangle(1, 1, 2)));
        assert!(m.is_empty());
    }

    #[test]
    fn setters_return_previous_value() {
        let mut m = ManifoldMesh::new();
        let prev = m.set_non_manifold_handling(NonManifoldHandling::Reject);
        assert_eq!(prev, NonManifoldHandling::Error);
        let prev = m.set_non_manifold_handling(NonManifoldHandling::Reject);
        assert_eq!(prev, NonManifoldHandling::Reject);
        assert_eq!(m.set_winding_check(WindingCheck::Ignore), WindingCheck::Strict);
        assert_eq!(m.options(), MeshOptions::lenient());
    }

    #[test]
    fn remove_first_triangle_shifts_slot() {
        let mut m = ManifoldMesh::new();
        m.insert(0, 1, 2).unwrap();
        let b = m.insert(2, 1, 3).unwrap().created().unwrap();
        assert!(m.remove(1, 2, 0));
        let e = m.find_edge(2, 1).unwrap();
        assert_eq!(m.edge(e).unwrap().t, [Some(b), None]);
        assert_eq!(m.triangle(b).unwrap().t, [None; 3]);
        assert_eq!(m.num_edges(), 3);
    }

    #[test]
    fn stale_handle_does_not_resolve() {
        let mut m = ManifoldMesh::new();
        let a = m.insert(0, 1, 2).unwrap().created().unwrap();
        assert!(m.remove(0, 1, 2));
        let b = m.insert(3, 4, 5).unwrap().created().unwrap();
        assert!(m.triangle(a).is_none());
        assert!(m.triangle(b).is_some());
    }

    #[test]
    fn debug_shows_counts() {
        let m = ManifoldMesh::from_triangles([[0, 1, 2]]).unwrap();
        let s = format!("{m:?}");
        assert!(s.contains("edges: 3"));
        assert!(s.contains("triangles: 1"));
    }
}
