//! Vertex ids and the canonical keys that index edges and triangles.
//!
//! Vertex ids are plain integers owned by the caller; the mesh never creates
//! or destroys them. Two key types turn vertex tuples into hashable,
//! order-independent identities:
//!
//! - [`EdgeKey`] forgets direction: `(a, b)` and `(b, a)` are the same edge.
//! - [`TriangleKey`] forgets rotation but keeps winding: `(a, b, c)`,
//!   `(b, c, a)` and `(c, a, b)` are the same triangle, while the reflected
//!   `(a, c, b)` is a different one.
//!
//! Both keys re-canonicalize on deserialization, so a serialized key can be
//! edited by hand without breaking lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Externally assigned vertex identifier.
pub type VertexId = i32;

/// Unordered pair of vertex ids, stored with the smaller id first.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[VertexId; 2]", into = "[VertexId; 2]")]
#[repr(transparent)]
pub struct EdgeKey([VertexId; 2]);

impl EdgeKey {
    /// Canonical key of the edge joining `a` and `b`.
    #[inline]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a < b { EdgeKey([a, b]) } else { EdgeKey([b, a]) }
    }

    /// The endpoints, smaller id first.
    #[inline]
    pub const fn vertices(self) -> [VertexId; 2] {
        self.0
    }

    #[inline]
    pub fn contains(self, v: VertexId) -> bool {
        self.0[0] == v || self.0[1] == v
    }
}

impl From<[VertexId; 2]> for EdgeKey {
    fn from(v: [VertexId; 2]) -> Self {
        EdgeKey::new(v[0], v[1])
    }
}

impl From<EdgeKey> for [VertexId; 2] {
    fn from(k: EdgeKey) -> Self {
        k.0
    }
}

impl fmt::Debug for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EdgeKey").field(&self.0[0]).field(&self.0[1]).finish()
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0[0], self.0[1])
    }
}

/// Ordered vertex triple, rotated so that the smallest id comes first.
///
/// Rotation preserves the winding of the triangle, so the key still tells
/// `(0, 1, 2)` apart from its mirror image `(0, 2, 1)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[VertexId; 3]", into = "[VertexId; 3]")]
#[repr(transparent)]
pub struct TriangleKey([VertexId; 3]);

impl TriangleKey {
    /// Canonical key of the triangle `(v0, v1, v2)`.
    #[inline]
    pub fn new(v0: VertexId, v1: VertexId, v2: VertexId) -> Self {
        if v0 < v1 {
            if v0 < v2 {
                TriangleKey([v0, v1, v2])
            } else {
                TriangleKey([v2, v0, v1])
            }
        } else if v1 < v2 {
            TriangleKey([v1, v2, v0])
        } else {
            TriangleKey([v2, v0, v1])
        }
    }

    /// The vertices in canonical rotation.
    #[inline]
    pub const fn vertices(self) -> [VertexId; 3] {
        self.0
    }

    /// Key of the same vertices with the opposite winding.
    #[inline]
    pub fn reversed(self) -> Self {
        TriangleKey::new(self.0[0], self.0[2], self.0[1])
    }
}

impl From<[VertexId; 3]> for TriangleKey {
    fn from(v: [VertexId; 3]) -> Self {
        TriangleKey::new(v[0], v[1], v[2])
    }
}

impl From<TriangleKey> for [VertexId; 3] {
    fn from(k: TriangleKey) -> Self {
        k.0
    }
}

impl fmt::Debug for TriangleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TriangleKey")
            .field(&self.0[0])
            .field(&self.0[1])
            .field(&self.0[2])
            .finish()
    }
}

impl fmt::Display for TriangleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
