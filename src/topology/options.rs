//! Insertion policy for [`ManifoldMesh`](crate::topology::manifold::ManifoldMesh).

use serde::{Deserialize, Serialize};

/// What `insert` does when a triangle would make the mesh non-manifold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NonManifoldHandling {
    /// Return [`MeshError::NonManifoldInsertion`](crate::mesh_error::MeshError::NonManifoldInsertion).
    #[default]
    Error,
    /// Return [`InsertOutcome::RejectedNonManifold`](crate::topology::manifold::InsertOutcome::RejectedNonManifold)
    /// and leave the mesh untouched.
    Reject,
}

/// Whether a second triangle on an edge must traverse it in the opposite
/// direction from the first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindingCheck {
    /// Reject a second triangle that runs along the shared edge in the same
    /// direction as the first, or that is the first one mirrored.
    #[default]
    Strict,
    /// Only limit edges to two triangles. Use this to load meshes whose
    /// winding is repaired afterwards with `make_consistent_chirality`.
    Ignore,
}

/// Options toggling the insertion checks of a mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshOptions {
    /// How to report a rejected insertion.
    pub non_manifold: NonManifoldHandling,
    /// How strictly to check the winding of triangles sharing an edge.
    pub winding: WindingCheck,
}

impl MeshOptions {
    /// Fail loudly on any manifold or winding violation (the default).
    pub fn strict() -> Self {
        Self::default()
    }

    /// Quietly reject a third triangle on an edge and accept any winding.
    pub fn lenient() -> Self {
        Self {
            non_manifold: NonManifoldHandling::Reject,
            winding: WindingCheck::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict() {
        let o = MeshOptions::default();
        assert_eq!(o, MeshOptions::strict());
        assert_eq!(o.non_manifold, NonManifoldHandling::Error);
        assert_eq!(o.winding, WindingCheck::Strict);
    }

    #[test]
    fn json_roundtrip() {
        let o = MeshOptions::lenient();
        let s = serde_json::to_string(&o).unwrap();
        let back: MeshOptions = serde_json::from_str(&s).unwrap();
        assert_eq!(back, o);
    }
}
