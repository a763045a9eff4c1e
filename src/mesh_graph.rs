//! Pointer-free export of a mesh's edge-triangle graph.
//!
//! A [`CompactGraph`] stores the triangles of a mesh as vertex triples and
//! their edge-adjacency as index triples into the same array. It can be
//! serialized, handed to code that knows nothing about handles, edited in
//! place (see [`CompactGraph::make_consistent_chirality`]) and fed back into
//! a fresh mesh.

use serde::{Deserialize, Serialize};
use slotmap::SecondaryMap;

use crate::algs::chirality::{ChiralityComponents, components_consistent_chirality};
use crate::mesh_error::MeshError;
use crate::topology::factory::RecordFactory;
use crate::topology::keys::VertexId;
use crate::topology::manifold::ManifoldMesh;
use crate::topology::records::TriangleHandle;

/// Flattened triangle graph.
///
/// Triangle `i` has edges `(t[0], t[1])`, `(t[1], t[2])` and `(t[2], t[0])`
/// where `t = triangles[i]`. `adjacents[i][j]` is the index of the other
/// triangle on edge `j`, or `None` when that edge is on the boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactGraph {
    pub triangles: Vec<[VertexId; 3]>,
    pub adjacents: Vec<[Option<usize>; 3]>,
}

impl CompactGraph {
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The vertex triples as one flat index buffer, three ids per triangle.
    #[inline]
    pub fn vertex_indices(&self) -> &[VertexId] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Re-wind every connected component consistently, in place.
    ///
    /// See [`components_consistent_chirality`].
    pub fn make_consistent_chirality(&mut self) -> Result<ChiralityComponents, MeshError> {
        components_consistent_chirality(&mut self.triangles, &mut self.adjacents)
    }
}

impl<F: RecordFactory> ManifoldMesh<F> {
    /// Export the triangles in table order together with their neighbor
    /// indices. An empty mesh gives an empty graph.
    pub fn create_compact_graph(&self) -> CompactGraph {
        let index: SecondaryMap<TriangleHandle, usize> = self
            .triangles
            .handles()
            .enumerate()
            .map(|(i, h)| (h, i))
            .collect();

        let mut graph = CompactGraph {
            triangles: Vec::with_capacity(index.len()),
            adjacents: Vec::with_capacity(index.len()),
        };
        for (_, tri) in self.triangles.iter() {
            graph.triangles.push(tri.v);
            graph.adjacents.push(tri.t.map(|adj| adj.map(|h| index[h])));
        }
        graph
    }
}
