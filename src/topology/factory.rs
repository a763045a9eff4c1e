//! Record factories: how a mesh builds the payload of new edges and
//! triangles.
//!
//! Host code that needs per-edge or per-triangle data implements
//! [`RecordFactory`] (or wraps two closures in [`FnRecords`]) and keeps
//! reusing the topology algorithms unchanged. The default [`PlainRecords`]
//! attaches nothing.

use std::fmt;
use std::marker::PhantomData;

use crate::topology::keys::VertexId;

/// Minimal bound we expect for per-record payloads.
/// Keep this deliberately small to avoid over-constraining higher layers.
pub trait PayloadLike: Clone {}
impl<T: Clone> PayloadLike for T {}

/// Strategy that produces the payload of every edge and triangle a mesh
/// creates.
pub trait RecordFactory {
    type EdgeData: PayloadLike;
    type TriangleData: PayloadLike;

    /// Payload of a new edge first traversed as `(v0, v1)`.
    fn create_edge(&mut self, v0: VertexId, v1: VertexId) -> Self::EdgeData;

    /// Payload of a new triangle with vertices `v` in winding order.
    fn create_triangle(&mut self, v: [VertexId; 3]) -> Self::TriangleData;
}

/// Factory for records without payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainRecords;

impl RecordFactory for PlainRecords {
    type EdgeData = ();
    type TriangleData = ();

    #[inline]
    fn create_edge(&mut self, _v0: VertexId, _v1: VertexId) {}

    #[inline]
    fn create_triangle(&mut self, _v: [VertexId; 3]) {}
}

/// Factory built from two closures.
///
/// ```rust
/// use manifold_mesh::topology::factory::FnRecords;
/// use manifold_mesh::topology::manifold::ManifoldMesh;
///
/// let mut next = 0u32;
/// let factory = FnRecords::new(
///     |a, b| (a.min(b), a.max(b)),
///     move |_| {
///         next += 1;
///         next
///     },
/// );
/// let mut mesh = ManifoldMesh::with_factory(factory);
/// mesh.insert(0, 1, 2).unwrap();
/// let (_, tri) = mesh.triangles().next().unwrap();
/// assert_eq!(tri.data, 1);
/// ```
pub struct FnRecords<FE, FT, E, T> {
    edge: FE,
    triangle: FT,
    _payloads: PhantomData<fn() -> (E, T)>,
}

impl<FE, FT, E, T> FnRecords<FE, FT, E, T>
where
    FE: FnMut(VertexId, VertexId) -> E,
    FT: FnMut([VertexId; 3]) -> T,
{
    pub fn new(edge: FE, triangle: FT) -> Self {
        Self {
            edge,
            triangle,
            _payloads: PhantomData,
        }
    }
}

impl<FE: Clone, FT: Clone, E, T> Clone for FnRecords<FE, FT, E, T> {
    fn clone(&self) -> Self {
        Self {
            edge: self.edge.clone(),
            triangle: self.triangle.clone(),
            _payloads: PhantomData,
        }
    }
}

impl<FE, FT, E, T> fmt::Debug for FnRecords<FE, FT, E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRecords").finish_non_exhaustive()
    }
}

impl<FE, FT, E, T> RecordFactory for FnRecords<FE, FT, E, T>
where
    FE: FnMut(VertexId, VertexId) -> E,
    FT: FnMut([VertexId; 3]) -> T,
    E: PayloadLike,
    T: PayloadLike,
{
    type EdgeData = E;
    type TriangleData = T;

    #[inline]
    fn create_edge(&mut self, v0: VertexId, v1: VertexId) -> E {
        (self.edge)(v0, v1)
    }

    #[inline]
    fn create_triangle(&mut self, v: [VertexId; 3]) -> T {
        (self.triangle)(v)
    }
}
