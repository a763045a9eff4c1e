mod util;
use manifold_mesh::prelude::*;
use proptest::prelude::*;
use util::*;

#[derive(Clone, Debug)]
enum Op {
    Insert(VertexId, VertexId, VertexId),
    Remove(VertexId, VertexId, VertexId),
}

fn op() -> impl Strategy<Value = Op> {
    let v = 0i32..7;
    prop_oneof![
        3 => (v.clone(), v.clone(), v.clone()).prop_map(|(a, b, c)| Op::Insert(a, b, c)),
        1 => (v.clone(), v.clone(), v).prop_map(|(a, b, c)| Op::Remove(a, b, c)),
    ]
}

fn options() -> impl Strategy<Value = MeshOptions> {
    (any::<bool>(), any::<bool>()).prop_map(|(reject, ignore)| MeshOptions {
        non_manifold: if reject {
            NonManifoldHandling::Reject
        } else {
            NonManifoldHandling::Error
        },
        winding: if ignore {
            WindingCheck::Ignore
        } else {
            WindingCheck::Strict
        },
    })
}

proptest! {
    #[test]
    fn random_edits_keep_the_mesh_consistent(
        opts in options(),
        ops in prop::collection::vec(op(), 0..60),
    ) {
        let mut m = ManifoldMesh::with_options(opts);
        for op in ops {
            match op {
                Op::Insert(a, b, c) => {
                    let before = snapshot(&m);
                    match m.insert(a, b, c) {
                        Ok(InsertOutcome::Created(h)) => {
                            prop_assert_eq!(m.triangle(h).unwrap().key(), TriangleKey::new(a, b, c));
                        }
                        Ok(_) | Err(_) => prop_assert_eq!(snapshot(&m), before),
                    }
                }
                Op::Remove(a, b, c) => {
                    let present = m.find_triangle(a, b, c).is_some();
                    prop_assert_eq!(m.remove(a, b, c), present);
                    prop_assert!(m.find_triangle(a, b, c).is_none());
                }
            }
            prop_assert!(m.validate_invariants().is_ok());
            prop_assert!(m.edges().all(|(_, e)| e.adjacent_count() <= 2));
        }
        if opts.winding == WindingCheck::Strict {
            prop_assert!(m.is_oriented());
        }
    }

    #[test]
    fn compact_graph_rebuild_matches(
        rows in prop::collection::vec((0i32..8, 0i32..8, 0i32..8), 0..40),
    ) {
        let mut m = ManifoldMesh::with_options(MeshOptions::lenient());
        for (a, b, c) in rows {
            let _ = m.insert(a, b, c);
        }
        let g = m.create_compact_graph();
        prop_assert_eq!(g.len(), m.num_triangles());

        let mut back = ManifoldMesh::with_options(MeshOptions::lenient());
        for &[a, b, c] in &g.triangles {
            prop_assert!(back.insert(a, b, c).unwrap().created().is_some());
        }
        prop_assert_eq!(back.is_closed(), m.is_closed());
        prop_assert_eq!(back.is_oriented(), m.is_oriented());
        prop_assert_eq!(snapshot(&back), snapshot(&m));
    }

    #[test]
    fn chirality_partitions_all_triangles(
        rows in prop::collection::vec((0i32..8, 0i32..8, 0i32..8), 0..40),
    ) {
        let mut m = ManifoldMesh::with_options(MeshOptions::lenient());
        for (a, b, c) in rows {
            let _ = m.insert(a, b, c);
        }
        let mut g = m.create_compact_graph();
        let found = g.make_consistent_chirality().unwrap();
        prop_assert_eq!(found.num_component_triangles.iter().sum::<usize>(), g.len());
        assert_permutation(&found.components, &(0..g.len()).collect::<Vec<_>>());
        prop_assert_eq!(found.len(), m.component_keys().len());
    }
}
