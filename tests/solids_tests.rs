// Host-side tests for polyhedron topology, projection and depth sorting.

use glam::{DVec2, DVec3};
use vismath_core::geometry::solids::*;

#[test]
fn every_solid_satisfies_euler_formula() {
    for kind in SolidKind::ALL {
        let s = Solid::load(kind);
        assert_eq!(s.euler_characteristic(), 2, "{}", kind.name());
    }
}

#[test]
fn platonic_counts() {
    let counts = [
        (SolidKind::Tetrahedron, 4, 6, 4),
        (SolidKind::Cube, 8, 12, 6),
        (SolidKind::Octahedron, 6, 12, 8),
        (SolidKind::Dodecahedron, 20, 30, 12),
        (SolidKind::Icosahedron, 12, 30, 20),
    ];
    for (kind, v, e, f) in counts {
        let s = Solid::load(kind);
        assert!(kind.is_platonic());
        assert_eq!((s.vertices.len(), s.edges.len(), s.faces.len()), (v, e, f), "{}", kind.name());
    }
}

#[test]
fn archimedean_counts() {
    let counts = [
        (SolidKind::TruncatedTetrahedron, 12, 18, 8),
        (SolidKind::Cuboctahedron, 12, 24, 14),
        (SolidKind::TruncatedCube, 24, 36, 14),
        (SolidKind::TruncatedOctahedron, 24, 36, 14),
    ];
    for (kind, v, e, f) in counts {
        let s = Solid::load(kind);
        assert!(!kind.is_platonic());
        assert_eq!((s.vertices.len(), s.edges.len(), s.faces.len()), (v, e, f), "{}", kind.name());
    }
}

#[test]
fn loaded_solids_have_unit_circumradius() {
    for kind in SolidKind::ALL {
        let s = Solid::load(kind);
        assert!((s.max_radius() - 1.0).abs() < 1e-9, "{}", kind.name());
    }
}

#[test]
fn edges_match_face_boundaries() {
    for kind in SolidKind::ALL {
        let s = Solid::load(kind);
        let mut derived = edges_from_faces(&s.faces);
        let mut edges: Vec<Edge> = s.edges.iter().map(|&[a, b]| [a.min(b), a.max(b)]).collect();
        derived.sort_unstable();
        edges.sort_unstable();
        assert_eq!(edges, derived, "{}", kind.name());
    }
}

#[test]
fn truncations_have_uniform_edges() {
    for kind in [
        SolidKind::TruncatedTetrahedron,
        SolidKind::TruncatedCube,
        SolidKind::TruncatedOctahedron,
    ] {
        let s = Solid::load(kind);
        let lens: Vec<f64> = s
            .edges
            .iter()
            .map(|&[a, b]| s.vertices[a].distance(s.vertices[b]))
            .collect();
        let first = lens[0];
        assert!(lens.iter().all(|l| (l - first).abs() < 1e-9), "{}", kind.name());
    }
}

#[test]
fn face_colors_cover_every_face() {
    for kind in SolidKind::ALL {
        let s = Solid::load(kind);
        for i in 0..s.faces.len() {
            assert!(!s.face_color(i).is_empty());
        }
    }
}

#[test]
fn face_descriptions() {
    assert_eq!(Solid::load(SolidKind::Cube).face_description(), "Square");
    assert_eq!(Solid::load(SolidKind::Icosahedron).face_description(), "Triangular");
    assert_eq!(
        Solid::load(SolidKind::TruncatedTetrahedron).face_description(),
        "Tri/Hexagonal"
    );
}

#[test]
fn depth_order_sorts_back_to_front() {
    let faces: Vec<Face> = vec![Face::from_slice(&[0]), Face::from_slice(&[1]), Face::from_slice(&[2])];
    let z = [1.0, -1.0, 0.0];
    assert_eq!(depth_order(&faces, |v| z[v]), vec![1, 2, 0]);
}

#[test]
fn depth_order_uses_mean_vertex_depth() {
    let faces: Vec<Face> = vec![Face::from_slice(&[0, 1]), Face::from_slice(&[2, 3])];
    let z = [-3.0, 3.0, -1.0, -0.5];
    // means 0.0 and -0.75
    assert_eq!(depth_order(&faces, |v| z[v]), vec![1, 0]);
}

#[test]
fn rotation_ignores_z_angle() {
    let p = DVec3::new(0.3, -0.2, 0.9);
    let a = rotate_point(p, &Rotation::new(0.4, 1.1, 0.0), 1.0);
    let b = rotate_point(p, &Rotation::new(0.4, 1.1, 2.5), 1.0);
    assert!(a.distance(b) < 1e-12);
}

#[test]
fn rotation_preserves_length_and_scales() {
    let p = DVec3::new(0.3, -0.2, 0.9);
    let r = rotate_point(p, &Rotation::new(0.7, -1.3, 0.0), 1.5);
    assert!((r.length() - p.length() * 1.5).abs() < 1e-12);
}

#[test]
fn projection_is_orthographic() {
    let center = DVec2::new(400.0, 300.0);
    let q = project(DVec3::new(1.0, 0.5, -0.25), &Rotation::new(0.0, 0.0, 0.0), 2.0, 600.0, center);
    assert!((q.x - (400.0 + 2.0 * 600.0 * 0.28)).abs() < 1e-9);
    assert!((q.y - (300.0 + 1.0 * 600.0 * 0.28)).abs() < 1e-9);
    assert!((q.z + 0.5).abs() < 1e-12);
}
