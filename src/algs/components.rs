//! Connected components of a mesh under edge adjacency.
//!
//! Two triangles are connected when they share an edge. Triangles that only
//! touch at a vertex (bow-ties) end up in different components.

use std::ops::Deref;

use slotmap::SecondaryMap;

use crate::topology::factory::RecordFactory;
use crate::topology::keys::TriangleKey;
use crate::topology::manifold::ManifoldMesh;
use crate::topology::records::{Triangle, TriangleHandle};
use crate::topology::tables::TriangleTable;

/// Borrowed view of a triangle inside its mesh.
///
/// The lifetime ties the view to a shared borrow of the mesh, so the mesh
/// cannot be mutated while components are alive.
#[derive(Debug)]
pub struct TriangleRef<'a, D = ()> {
    pub handle: TriangleHandle,
    pub triangle: &'a Triangle<D>,
}

impl<D> Clone for TriangleRef<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for TriangleRef<'_, D> {}

impl<D> Deref for TriangleRef<'_, D> {
    type Target = Triangle<D>;

    fn deref(&self) -> &Triangle<D> {
        self.triangle
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    Discovered,
    Finished,
}

/// Components as lists of handles, each in depth-first finishing order.
/// Seeds are taken in table order.
fn component_handles<D>(triangles: &TriangleTable<D>) -> Vec<Vec<TriangleHandle>> {
    let mut state: SecondaryMap<TriangleHandle, VisitState> = triangles
        .handles()
        .map(|h| (h, VisitState::Unvisited))
        .collect();
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for seed in triangles.handles() {
        if state[seed] != VisitState::Unvisited {
            continue;
        }
        let mut component = Vec::new();
        stack.push(seed);
        while let Some(&top) = stack.last() {
            state[top] = VisitState::Discovered;
            let next = triangles[top]
                .t
                .into_iter()
                .flatten()
                .find(|&adj| state[adj] == VisitState::Unvisited);
            match next {
                Some(adj) => stack.push(adj),
                None => {
                    state[top] = VisitState::Finished;
                    component.push(top);
                    stack.pop();
                }
            }
        }
        components.push(component);
    }
    components
}

impl<F: RecordFactory> ManifoldMesh<F> {
    /// Connected components as borrowed triangle views.
    pub fn components(&self) -> Vec<Vec<TriangleRef<'_, F::TriangleData>>> {
        component_handles(&self.triangles)
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .map(|handle| TriangleRef {
                        handle,
                        triangle: &self.triangles[handle],
                    })
                    .collect()
            })
            .collect()
    }

    /// Connected components as triangle keys, which stay meaningful after
    /// the mesh is modified or dropped.
    pub fn component_keys(&self) -> Vec<Vec<TriangleKey>> {
        component_handles(&self.triangles)
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .map(|h| self.triangles[h].key())
                    .collect()
            })
            .collect()
    }
}
