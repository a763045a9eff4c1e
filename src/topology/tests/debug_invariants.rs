#![cfg(any(debug_assertions, feature = "strict-invariants"))]

use crate::debug_invariants::DebugInvariants;
use crate::topology::manifold::ManifoldMesh;

fn two_triangles() -> ManifoldMesh {
    ManifoldMesh::from_triangles([[0, 1, 2], [2, 1, 3]]).unwrap()
}

#[test]
#[should_panic]
fn dangling_neighbor_panics_in_debug() {
    let mut m = two_triangles();
    let th = m.find_triangle(0, 1, 2).unwrap();
    m.triangles[th].t = [None; 3];
    m.debug_assert_invariants();
}

#[test]
#[should_panic]
fn wrong_edge_handle_panics_in_debug() {
    let mut m = two_triangles();
    let th = m.find_triangle(2, 1, 3).unwrap();
    let tri = &mut m.triangles[th];
    tri.e.swap(1, 2);
    m.debug_assert_invariants();
}

#[test]
#[should_panic]
fn edge_without_triangles_panics_in_debug() {
    let mut m = two_triangles();
    let eh = m.find_edge(0, 1).unwrap();
    m.edges[eh].t = [None, None];
    m.debug_assert_invariants();
}

#[test]
fn consistent_mesh_does_not_panic() {
    two_triangles().debug_assert_invariants();
}
