//! Structural audit of a [`ManifoldMesh`].
//!
//! The mutators keep these invariants by construction; the audit exists for
//! tests, for debug builds (see [`debug_invariants!`](crate::debug_invariants))
//! and for callers that want to double-check a mesh handed to them.

use itertools::Itertools;

use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshError;
use crate::topology::factory::RecordFactory;
use crate::topology::keys::EdgeKey;
use crate::topology::manifold::ManifoldMesh;

fn violation(msg: String) -> MeshError {
    MeshError::InvariantViolation(msg)
}

impl<F: RecordFactory> DebugInvariants for ManifoldMesh<F> {
    /// Checks, in order:
    /// - both lookup indices resolve to live records stored under the same key;
    /// - every edge has a triangle in slot 0, distinct triangles in its
    ///   slots, and each of them references the edge;
    /// - every triangle references the right edge for each of its sides and
    ///   its neighbor slot is filled exactly when that edge is shared.
    fn validate_invariants(&self) -> Result<(), MeshError> {
        if self.edges.index_entries().count() != self.edges.len() {
            return Err(violation("edge index and edge arena differ in size".into()));
        }
        for (key, h) in self.edges.index_entries() {
            match self.edges.get(h) {
                Some(e) if e.key() == key => {}
                Some(e) => {
                    return Err(violation(format!("edge {} indexed under {key}", e.key())));
                }
                None => return Err(violation(format!("edge index {key} is dangling"))),
            }
        }
        if self.triangles.index_entries().count() != self.triangles.len() {
            return Err(violation("triangle index and triangle arena differ in size".into()));
        }
        for (key, h) in self.triangles.index_entries() {
            match self.triangles.get(h) {
                Some(t) if t.key() == key => {}
                Some(t) => {
                    return Err(violation(format!("triangle {} indexed under {key}", t.key())));
                }
                None => return Err(violation(format!("triangle index {key} is dangling"))),
            }
        }

        for (eh, edge) in self.edges.iter() {
            let key = edge.key();
            match edge.t {
                [None, Some(_)] => {
                    return Err(violation(format!("edge {key} has slot 1 filled but slot 0 empty")));
                }
                [None, None] => return Err(violation(format!("edge {key} has no triangles"))),
                [Some(a), Some(b)] if a == b => {
                    return Err(violation(format!("edge {key} lists the same triangle twice")));
                }
                _ => {}
            }
            for th in edge.t.into_iter().flatten() {
                let Some(tri) = self.triangles.get(th) else {
                    return Err(violation(format!("edge {key} references a removed triangle")));
                };
                if !tri.e.contains(&eh) {
                    return Err(violation(format!(
                        "triangle {} does not reference its edge {key}",
                        tri.key()
                    )));
                }
            }
        }

        for (th, tri) in self.triangles.iter() {
            let corners = tri.v.iter().copied().circular_tuple_windows::<(_, _)>();
            for (i, (a, b)) in corners.enumerate() {
                let Some(edge) = self.edges.get(tri.e[i]) else {
                    return Err(violation(format!(
                        "triangle {} side {i} references a removed edge",
                        tri.key()
                    )));
                };
                if edge.key() != EdgeKey::new(a, b) {
                    return Err(violation(format!(
                        "triangle {} side {i} references edge {} instead of {}",
                        tri.key(),
                        edge.key(),
                        EdgeKey::new(a, b)
                    )));
                }
                if tri.t[i] != edge.other(th) {
                    return Err(violation(format!(
                        "triangle {} neighbor across {} disagrees with the edge",
                        tri.key(),
                        edge.key()
                    )));
                }
            }
        }
        Ok(())
    }
}
