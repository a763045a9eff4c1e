//! Edge and triangle records stored by a [`ManifoldMesh`].
//!
//! Records refer to each other through generational arena handles rather
//! than pointers. A handle of a removed record never resolves again, even if
//! its slot is reused.
//!
//! [`ManifoldMesh`]: crate::topology::manifold::ManifoldMesh

use slotmap::new_key_type;

use crate::topology::keys::{EdgeKey, TriangleKey, VertexId};

new_key_type! {
    /// Stable handle of an [`Edge`] inside its mesh.
    pub struct EdgeHandle;
    /// Stable handle of a [`Triangle`] inside its mesh.
    pub struct TriangleHandle;
}

/// Which way a triangle traverses a directed edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeSide {
    /// The triangle contains the directed edge `(u0, u1)`.
    Positive,
    /// The triangle contains the reversed edge `(u1, u0)`.
    Negative,
    /// The triangle does not contain the edge at all.
    Absent,
}

/// An edge shared by at most two triangles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<D = ()> {
    /// Endpoints, in the direction the first adjacent triangle traversed them.
    pub v: [VertexId; 2],
    /// Adjacent triangles. Slot 0 is always filled before slot 1.
    pub t: [Option<TriangleHandle>; 2],
    /// Caller payload produced by the mesh's record factory.
    pub data: D,
}

impl<D> Edge<D> {
    pub(crate) fn new(v0: VertexId, v1: VertexId, first: TriangleHandle, data: D) -> Self {
        Self {
            v: [v0, v1],
            t: [Some(first), None],
            data,
        }
    }

    #[inline]
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.v[0], self.v[1])
    }

    /// Number of adjacent triangles (0, 1 or 2).
    #[inline]
    pub fn adjacent_count(&self) -> usize {
        self.t.iter().flatten().count()
    }

    /// An edge with a single adjacent triangle lies on the mesh boundary.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.t[0].is_some() && self.t[1].is_none()
    }

    /// The triangle across this edge from `tri`, if any.
    pub fn other(&self, tri: TriangleHandle) -> Option<TriangleHandle> {
        match self.t {
            [Some(a), b] if a == tri => b,
            [a, Some(b)] if b == tri => a,
            _ => None,
        }
    }
}

/// A triangle with its edges and edge-adjacent neighbors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle<D = ()> {
    /// Vertices in counterclockwise order.
    pub v: [VertexId; 3],
    /// `e[i]` is the edge `(v[i], v[(i + 1) % 3])`.
    pub e: [EdgeHandle; 3],
    /// `t[i]` is the triangle sharing `e[i]`, if that edge has two triangles.
    pub t: [Option<TriangleHandle>; 3],
    /// Caller payload produced by the mesh's record factory.
    pub data: D,
}

impl<D> Triangle<D> {
    pub(crate) fn new(v: [VertexId; 3], data: D) -> Self {
        Self {
            v,
            e: [EdgeHandle::default(); 3],
            t: [None; 3],
            data,
        }
    }

    #[inline]
    pub fn key(&self) -> TriangleKey {
        TriangleKey::new(self.v[0], self.v[1], self.v[2])
    }

    /// The three directed edges `(v[i], v[(i + 1) % 3])`.
    #[inline]
    pub fn directed_edges(&self) -> [[VertexId; 2]; 3] {
        [
            [self.v[0], self.v[1]],
            [self.v[1], self.v[2]],
            [self.v[2], self.v[0]],
        ]
    }

    /// Slot index `i` whose edge `e[i]` joins `u0` and `u1` in either
    /// direction.
    pub fn edge_index(&self, u0: VertexId, u1: VertexId) -> Option<usize> {
        self.directed_edges()
            .iter()
            .position(|&[a, b]| (a == u0 && b == u1) || (a == u1 && b == u0))
    }

    /// Determine whether the triangle traverses the directed edge `(u0, u1)`
    /// forwards, backwards, or not at all.
    pub fn which_side_of_edge(&self, u0: VertexId, u1: VertexId) -> EdgeSide {
        for [a, b] in self.directed_edges() {
            if a == u0 && b == u1 {
                return EdgeSide::Positive;
            }
            if a == u1 && b == u0 {
                return EdgeSide::Negative;
            }
        }
        EdgeSide::Absent
    }

    /// Neighbor across the edge joining `u0` and `u1`.
    pub fn adjacent_of_edge(&self, u0: VertexId, u1: VertexId) -> Option<TriangleHandle> {
        self.edge_index(u0, u1).and_then(|i| self.t[i])
    }

    /// Vertex of this triangle that is not on the edge joining `u0` and `u1`.
    pub fn opposite_vertex_of_edge(&self, u0: VertexId, u1: VertexId) -> Option<VertexId> {
        self.edge_index(u0, u1).map(|i| self.v[(i + 2) % 3])
    }

    /// Slot index of vertex `v`.
    #[inline]
    pub fn vertex_index(&self, v: VertexId) -> Option<usize> {
        self.v.iter().position(|&w| w == v)
    }
}
