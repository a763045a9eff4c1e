//! Mesh topology: keyed edge and triangle records and the manifold mesh that
//! links them.
//!
//! This module provides:
//! - vertex ids and canonical [`EdgeKey`] / [`TriangleKey`] identities
//! - [`Edge`] and [`Triangle`] records addressed by generational handles
//! - [`ManifoldMesh`], which inserts and removes triangles while keeping
//!   every edge shared by at most two of them
//! - [`MeshOptions`] controlling how strict insertion is
//!
//! Graph algorithms over a mesh (components, re-winding, boundaries) live in
//! [`crate::algs`].

pub mod factory;
pub mod keys;
pub mod manifold;
pub mod options;
pub mod records;
pub mod tables;
pub mod validation;

pub use factory::{FnRecords, PayloadLike, PlainRecords, RecordFactory};
pub use keys::{EdgeKey, TriangleKey, VertexId};
pub use manifold::{InsertOutcome, ManifoldMesh};
pub use options::{MeshOptions, NonManifoldHandling, WindingCheck};
pub use records::{Edge, EdgeHandle, EdgeSide, Triangle, TriangleHandle};

#[cfg(test)]
mod tests;
