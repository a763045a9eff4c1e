//! Graph algorithms over a [`ManifoldMesh`](crate::topology::manifold::ManifoldMesh).

pub mod boundary;
pub mod chirality;
pub mod components;

pub use chirality::{ChiralityComponents, components_consistent_chirality};
pub use components::TriangleRef;
