// Host-side tests for the triangle-center kernel.

use glam::DVec2;
use vismath_core::geometry::triangle::*;

const EPS: f64 = 1e-9;

fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle {
    [DVec2::new(a.0, a.1), DVec2::new(b.0, b.1), DVec2::new(c.0, c.1)]
}

fn assert_close(a: DVec2, b: DVec2) {
    assert!(a.distance(b) < EPS, "{:?} != {:?}", a, b);
}

#[test]
fn centroid_is_vertex_mean() {
    let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
    assert_close(centroid(&t), DVec2::new(4.0 / 3.0, 1.0));

    let t = tri((0.12, 0.9), (0.33, 0.01), (0.75, 0.5));
    assert_close(centroid(&t), (t[0] + t[1] + t[2]) / 3.0);
}

#[test]
fn right_triangle_circumcenter_is_hypotenuse_midpoint() {
    let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
    let o = circumcenter(&t).expect("non-degenerate");
    assert_close(o, DVec2::new(2.0, 1.5));
    assert!((circumradius(&t, Some(o)) - 2.5).abs() < EPS);
}

#[test]
fn equilateral_centers_coincide() {
    let t = tri((0.0, 0.0), (2.0, 0.0), (1.0, 3f64.sqrt()));
    let c = TriangleCenters::compute(&t);
    let g = c.centroid;
    assert_close(c.circumcenter.unwrap(), g);
    assert_close(c.incenter.unwrap(), g);
    assert_close(c.orthocenter.unwrap(), g);
}

#[test]
fn collinear_points_have_no_circumcenter_or_incenter() {
    let t = tri((0.0, 0.0), (1.0, 1.0), (2.0, 2.0));
    assert!(circumcenter(&t).is_none());
    assert!(incenter(&t).is_none());
    assert!(orthocenter(&t).is_none());
    assert_eq!(circumradius(&t, None), 0.0);
    // centroid stays defined
    assert_close(centroid(&t), DVec2::new(1.0, 1.0));
}

#[test]
fn coincident_points_have_no_incenter() {
    let t = tri((0.5, 0.5), (0.5, 0.5), (0.5, 0.5));
    assert!(incenter(&t).is_none());
    assert_eq!(inradius(&t), 0.0);
}

#[test]
fn centroid_divides_euler_line() {
    let t = tri((0.5, 0.25), (0.3, 0.65), (0.8, 0.7));
    let c = TriangleCenters::compute(&t);
    let (o, h) = (c.circumcenter.unwrap(), c.orthocenter.unwrap());
    // G is one third of the way from O to H
    assert_close(c.centroid, o + (h - o) / 3.0);
}

#[test]
fn inradius_of_3_4_5_triangle_is_one() {
    let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
    assert!((inradius(&t) - 1.0).abs() < EPS);
    assert_close(incenter(&t).unwrap(), DVec2::new(1.0, 1.0));
}

#[test]
fn altitude_foot_lies_on_opposite_side() {
    let t = tri((0.0, 3.0), (0.0, 0.0), (4.0, 0.0));
    // from A straight down onto BC
    assert_close(altitude_foot(&t, 0).unwrap(), DVec2::new(0.0, 0.0));
    assert_close(opposite_midpoint(&t, 0), DVec2::new(2.0, 0.0));
}

#[test]
fn altitude_skipped_for_tiny_opposite_side() {
    let t = tri((0.0, 0.0), (1.0, 1.0), (1.05, 1.0));
    assert!(altitude_foot(&t, 0).is_none());
    assert!(altitude_foot(&t, 1).is_some());
}
