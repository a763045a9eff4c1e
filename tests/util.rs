#![allow(dead_code)]
use manifold_mesh::{
    topology::keys::{EdgeKey, TriangleKey, VertexId},
    topology::manifold::ManifoldMesh,
    topology::factory::RecordFactory,
};

/// Faces of a consistently wound tetrahedron.
pub const TETRAHEDRON: [[VertexId; 3]; 4] = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

/// Vertex id of grid node `(row, col)` in a grid `n` quads wide.
pub fn node(n: i32, row: i32, col: i32) -> VertexId {
    row * (n + 1) + col
}

/// Consistently wound triangulation of an `n` x `n` quad grid.
pub fn grid_triangles(n: i32) -> Vec<[VertexId; 3]> {
    let mut out = Vec::with_capacity((2 * n * n) as usize);
    for r in 0..n {
        for c in 0..n {
            let a = node(n, r, c);
            let b = node(n, r, c + 1);
            let cc = node(n, r + 1, c);
            let d = node(n, r + 1, c + 1);
            out.push([a, b, d]);
            out.push([a, d, cc]);
        }
    }
    out
}

/// Sorted edge and triangle keys, for before/after comparisons.
pub fn snapshot<F: RecordFactory>(m: &ManifoldMesh<F>) -> (Vec<EdgeKey>, Vec<TriangleKey>) {
    let mut e: Vec<_> = m.edges().map(|(_, e)| e.key()).collect();
    let mut t: Vec<_> = m.triangles().map(|(_, t)| t.key()).collect();
    e.sort_unstable();
    t.sort_unstable();
    (e, t)
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
