//! MeshError: Unified error type for manifold-mesh public APIs
//!
//! Every fallible operation of the crate reports through this enum. Quiet
//! outcomes (a triangle that is already present, a removal of a missing
//! triangle, a rejection under [`NonManifoldHandling::Reject`]) are *not*
//! errors and are reported through return values instead.
//!
//! [`NonManifoldHandling::Reject`]: crate::topology::options::NonManifoldHandling::Reject

use std::fmt;

use thiserror::Error;

use crate::topology::keys::{EdgeKey, VertexId};

/// Why attaching a triangle to an existing edge would break the manifold
/// property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonManifoldReason {
    /// The edge already has two adjacent triangles.
    EdgeFull,
    /// The edge's only triangle traverses it in the same direction as the
    /// new triangle.
    SameDirection,
    /// The edge's only triangle has the same three vertices as the new
    /// triangle, wound the other way.
    Coincident,
}

impl fmt::Display for NonManifoldReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonManifoldReason::EdgeFull => f.write_str("already has two adjacent triangles"),
            NonManifoldReason::SameDirection => {
                f.write_str("is traversed in the same direction by its adjacent triangle")
            }
            NonManifoldReason::Coincident => {
                f.write_str("already borders a mirrored copy of the triangle")
            }
        }
    }
}

/// Unified error type for manifold-mesh operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A triangle was given with repeated vertex ids.
    #[error("degenerate triangle ({0}, {1}, {2}): vertex ids must be distinct")]
    DegenerateTriangle(VertexId, VertexId, VertexId),

    /// Inserting the triangle would make the mesh non-manifold.
    #[error("non-manifold insertion of triangle {triangle:?}: edge {edge} {reason}")]
    NonManifoldInsertion {
        triangle: [VertexId; 3],
        edge: EdgeKey,
        reason: NonManifoldReason,
    },

    /// The boundary walk around `vertex` came back to a triangle it had
    /// already crossed. The mesh is not consistently oriented there.
    #[error("boundary walk around vertex {vertex} revisited a triangle; is the mesh orientable?")]
    NotOrientable { vertex: VertexId },

    /// The two arrays of a compact graph have different lengths.
    #[error("compact graph has {triangles} triangles but {adjacents} adjacency rows")]
    CompactGraphLengthMismatch { triangles: usize, adjacents: usize },

    /// An adjacency entry of a compact graph names a triangle that does not
    /// share the corresponding edge.
    #[error(
        "compact graph triangle {triangle} lists {neighbor} across directed edge {edge:?} but the neighbor does not contain it"
    )]
    CompactGraphAdjacencyMismatch {
        triangle: usize,
        neighbor: usize,
        edge: [VertexId; 2],
    },

    /// A structural invariant of the mesh does not hold.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
