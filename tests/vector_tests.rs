// Host-side tests for parallelogram vector addition.

use glam::DVec2;
use vismath_core::geometry::vector::{resultant, VectorStats};

#[test]
fn resultant_uses_parallelogram_construction() {
    let r = resultant(DVec2::new(0.5, 0.5), DVec2::new(0.7, 0.3), DVec2::new(0.3, 0.3));
    assert!(r.distance(DVec2::new(0.5, 0.1)) < 1e-9);
}

#[test]
fn perpendicular_vectors() {
    let origin = DVec2::ZERO;
    let stats = VectorStats::measure(origin, DVec2::new(3.0, 0.0), DVec2::new(0.0, 4.0), DVec2::ONE);
    assert!((stats.mag1 - 3.0).abs() < 1e-9);
    assert!((stats.mag2 - 4.0).abs() < 1e-9);
    assert!((stats.mag_sum - 5.0).abs() < 1e-9);
    assert!((stats.theta_degrees - 90.0).abs() < 1e-9);
}

#[test]
fn law_of_cosines_holds() {
    let size = DVec2::new(1280.0, 720.0);
    let stats = VectorStats::measure(
        DVec2::new(0.5, 0.5),
        DVec2::new(0.7, 0.3),
        DVec2::new(0.3, 0.3),
        size,
    );
    let lhs = stats.law_of_cosines_lhs();
    assert!((lhs - stats.law_of_cosines_rhs()).abs() < 1e-6 * lhs.max(1.0));
}

#[test]
fn measured_in_pixels() {
    // equal normalized lengths, different pixel lengths on a wide viewport
    let stats = VectorStats::measure(
        DVec2::ZERO,
        DVec2::new(0.1, 0.0),
        DVec2::new(0.0, 0.1),
        DVec2::new(1000.0, 500.0),
    );
    assert!((stats.mag1 - 100.0).abs() < 1e-9);
    assert!((stats.mag2 - 50.0).abs() < 1e-9);
}

#[test]
fn zero_vector_has_zero_angle() {
    let o = DVec2::new(0.5, 0.5);
    let stats = VectorStats::measure(o, o, DVec2::new(0.8, 0.5), DVec2::ONE);
    assert_eq!(stats.cos_theta, 1.0);
    assert_eq!(stats.theta_degrees, 0.0);
    assert!(stats.theta_degrees.is_finite());
}

#[test]
fn opposite_vectors_clamp_to_180() {
    let o = DVec2::ZERO;
    let stats = VectorStats::measure(o, DVec2::new(1.0, 0.0), DVec2::new(-2.0, 0.0), DVec2::ONE);
    assert!((stats.theta_degrees - 180.0).abs() < 1e-9);
    assert!((stats.mag_sum - 1.0).abs() < 1e-9);
}
