#![cfg_attr(docsrs, feature(doc_cfg))]
//! # manifold-mesh
//!
//! manifold-mesh is a topology engine for triangle meshes whose vertices are
//! integer ids owned by the caller. It tracks which triangles share which
//! edges, optionally enforces the 2-manifold constraint on insertion, and
//! provides graph algorithms over the result: connected components,
//! consistent re-winding ("chirality") of each component, and extraction of
//! boundary loops.
//!
//! ## Features
//! - [`ManifoldMesh`](topology::manifold::ManifoldMesh): transactional
//!   insert/remove with edge and triangle adjacency kept up to date
//! - Loud or quiet handling of non-manifold insertions via
//!   [`MeshOptions`](topology::options::MeshOptions)
//! - Pointer-free [`CompactGraph`](mesh_graph::CompactGraph) export and
//!   in-place chirality normalization
//! - Boundary polygon extraction that tolerates bow-tie vertices
//! - Caller payloads on edges and triangles through
//!   [`RecordFactory`](topology::factory::RecordFactory)
//!
//! ## Determinism
//!
//! Iteration follows arena slot order and boundary edges are visited in
//! vertex-id order, so every algorithm returns the same result for the same
//! sequence of mutations.
//!
//! ## Invariant checking
//!
//! Mutators audit the whole mesh after every change in debug builds, or when
//! the `strict-invariants` / `check-invariants` features are enabled. The
//! audit is also available explicitly through [`DebugInvariants`].
//!
//! ```rust
//! use manifold_mesh::prelude::*;
//!
//! let mesh = ManifoldMesh::from_triangles([[0, 1, 2], [0, 2, 3]])?;
//! assert_eq!(mesh.boundary_polygons(false)?, vec![vec![0, 1, 2, 3]]);
//! # Ok::<(), MeshError>(())
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod mesh_error;
pub mod mesh_graph;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::chirality::{ChiralityComponents, components_consistent_chirality};
    pub use crate::algs::components::TriangleRef;
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::{MeshError, NonManifoldReason};
    pub use crate::mesh_graph::CompactGraph;
    pub use crate::topology::factory::{FnRecords, PayloadLike, PlainRecords, RecordFactory};
    pub use crate::topology::keys::{EdgeKey, TriangleKey, VertexId};
    pub use crate::topology::manifold::{InsertOutcome, ManifoldMesh};
    pub use crate::topology::options::{MeshOptions, NonManifoldHandling, WindingCheck};
    pub use crate::topology::records::{Edge, EdgeHandle, EdgeSide, Triangle, TriangleHandle};
}
