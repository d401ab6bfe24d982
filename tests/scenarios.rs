//! Integration tests driving the public builder surface through the
//! concrete scenario table, matching the literal (V, E, F) counts every
//! implementation of this engine is expected to reproduce.

use wythoff_core::{
    Builder, Catalan, CoxeterDescriptor, Polychoron, Polyhedron, Polytope5D, Rational, Snub,
    Snub24Cell,
};

fn r(n: i64) -> Rational {
    Rational::int(n)
}

fn descriptor(diagram: &[i64], init_dist: &[f64]) -> CoxeterDescriptor {
    let diagram: Vec<Rational> = diagram.iter().map(|&n| r(n)).collect();
    CoxeterDescriptor::new(&diagram, init_dist.to_vec(), vec![]).unwrap()
}

#[test]
fn tetrahedron() {
    let geom = Polyhedron::new(descriptor(&[3, 2, 3], &[1.0, 0.0, 0.0]))
        .unwrap()
        .build_geometry()
        .unwrap();
    assert_eq!((geom.num_vertices(), geom.num_edges(), geom.num_faces()), (4, 6, 4));
}

#[test]
fn cube() {
    let geom = Polyhedron::new(descriptor(&[4, 2, 3], &[1.0, 0.0, 0.0]))
        .unwrap()
        .build_geometry()
        .unwrap();
    assert_eq!((geom.num_vertices(), geom.num_edges(), geom.num_faces()), (8, 12, 6));
}

#[test]
fn icosahedron_from_either_orientation_of_its_diagram() {
    let a = Polyhedron::new(descriptor(&[3, 2, 5], &[0.0, 0.0, 1.0]))
        .unwrap()
        .build_geometry()
        .unwrap();
    let b = Polyhedron::new(descriptor(&[5, 2, 3], &[1.0, 0.0, 0.0]))
        .unwrap()
        .build_geometry()
        .unwrap();
    for geom in [&a, &b] {
        assert_eq!((geom.num_vertices(), geom.num_edges(), geom.num_faces()), (12, 30, 20));
    }
}

#[test]
fn truncated_octahedron() {
    let geom = Polyhedron::new(descriptor(&[4, 2, 3], &[1.0, 1.0, 0.0]))
        .unwrap()
        .build_geometry()
        .unwrap();
    assert_eq!((geom.num_vertices(), geom.num_edges(), geom.num_faces()), (24, 36, 14));
}

#[test]
fn snub_cube() {
    let geom = Snub::new(descriptor(&[4, 2, 3], &[1.0, 1.0, 1.0]))
        .unwrap()
        .build_geometry()
        .unwrap();
    assert_eq!((geom.num_vertices(), geom.num_edges(), geom.num_faces()), (24, 60, 38));
}

#[test]
fn hundred_twenty_cell() {
    let geom = Polychoron::new(descriptor(&[5, 2, 2, 3, 2, 3], &[1.0, 0.0, 0.0, 0.0]))
        .unwrap()
        .build_geometry()
        .unwrap();
    assert_eq!((geom.num_vertices(), geom.num_edges(), geom.num_faces()), (600, 1200, 720));
}

#[test]
fn snub_24_cell() {
    let geom = Snub24Cell::new().build_geometry().unwrap();
    assert_eq!(geom.num_vertices(), 96);
    assert_eq!(geom.num_edges(), 432);
    assert_eq!(geom.num_faces(), 144);
}

#[test]
fn five_cube() {
    let geom = Polytope5D::new(descriptor(
        &[4, 2, 2, 2, 3, 2, 2, 3, 2, 3],
        &[1.0, 0.0, 0.0, 0.0, 0.0],
    ))
    .unwrap()
    .build_geometry()
    .unwrap();
    assert_eq!(geom.num_vertices(), 32);
    assert_eq!(geom.num_edges(), 80);
    assert_eq!(geom.num_faces(), 80);
}

#[test]
fn dual_of_cube_is_the_octahedron() {
    let cube = Polyhedron::new(descriptor(&[4, 2, 3], &[1.0, 0.0, 0.0]))
        .unwrap()
        .build_geometry()
        .unwrap();
    let dual = Catalan::new(cube).build_geometry().unwrap();
    assert_eq!((dual.num_vertices(), dual.num_edges(), dual.num_faces()), (6, 12, 8));
}

#[test]
fn dual_of_the_dual_recovers_the_original_face_count() {
    let cube = Polyhedron::new(descriptor(&[4, 2, 3], &[1.0, 0.0, 0.0]))
        .unwrap()
        .build_geometry()
        .unwrap();
    let original_faces = cube.num_faces();
    let original_vertices = cube.num_vertices();

    let dual = Catalan::new(cube).build_geometry().unwrap();
    let double_dual = Catalan::new(dual).build_geometry().unwrap();

    assert_eq!(double_dual.num_vertices(), original_vertices);
    assert_eq!(double_dual.num_faces(), original_faces);
}

#[test]
fn euler_formula_holds_for_every_convex_uniform_scenario() {
    let cases: &[(&[i64], &[f64])] = &[
        (&[3, 2, 3], &[1.0, 0.0, 0.0]),
        (&[4, 2, 3], &[1.0, 0.0, 0.0]),
        (&[5, 2, 3], &[1.0, 0.0, 0.0]),
        (&[4, 2, 3], &[1.0, 1.0, 0.0]),
    ];
    for &(diagram, dist) in cases {
        let geom = Polyhedron::new(descriptor(diagram, dist)).unwrap().build_geometry().unwrap();
        let (v, e, f) = (geom.num_vertices() as i64, geom.num_edges() as i64, geom.num_faces() as i64);
        assert_eq!(v - e + f, 2, "Euler's formula failed for diagram {diagram:?}");
    }
}

#[test]
fn reflections_permute_the_vertex_set_of_the_cube() {
    use wythoff_core::geometry;

    let d = descriptor(&[4, 2, 3], &[1.0, 0.0, 0.0]);
    let geom = Polyhedron::new(d.clone()).unwrap().build_geometry().unwrap();

    let normals = geometry::mirrors(d.matrix()).unwrap();
    for normal in &normals {
        let r = geometry::reflection_matrix(normal);
        for v in &geom.vertices_coords {
            let reflected = &r * v;
            let matches_some_vertex = geom
                .vertices_coords
                .iter()
                .any(|w| (w - &reflected).norm() < 1e-6);
            assert!(matches_some_vertex, "reflection of a cube vertex landed off the vertex set");
        }
    }
}

#[test]
fn init_dist_rejects_a_negative_distance() {
    let diagram = [r(4), r(2), r(3)];
    let err = CoxeterDescriptor::new(&diagram, vec![-1.0, 0.0, 0.0], vec![]);
    assert!(err.is_err());
}

#[test]
fn rank_mismatch_is_rejected_for_every_polytope_class() {
    let d3 = descriptor(&[4, 2, 3], &[1.0, 0.0, 0.0]);
    assert!(Polychoron::new(d3.clone()).is_err());
    assert!(Polytope5D::new(d3).is_err());
}
