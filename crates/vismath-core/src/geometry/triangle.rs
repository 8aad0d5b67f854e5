//! Classical triangle centers.
//!
//! All functions work in whatever coordinate space the points are given in;
//! the triangle mode evaluates them in screen pixels so that circles and
//! angles are not distorted by the viewport aspect.

use crate::constants::{ALTITUDE_MIN_SIDE_SQ, DEGENERACY_EPSILON};
use glam::DVec2;

pub type Triangle = [DVec2; 3];

/// Side lengths opposite each vertex: `[|BC|, |CA|, |AB|]`.
pub fn side_lengths(t: &Triangle) -> [f64; 3] {
    [
        t[1].distance(t[2]),
        t[0].distance(t[2]),
        t[0].distance(t[1]),
    ]
}

pub fn centroid(t: &Triangle) -> DVec2 {
    (t[0] + t[1] + t[2]) / 3.0
}

/// Center of the circle through all three vertices; `None` when the points
/// are (nearly) collinear.
pub fn circumcenter(t: &Triangle) -> Option<DVec2> {
    let [a, b, c] = *t;
    let d = 2.0 * twice_area(t);
    if d.abs() < DEGENERACY_EPSILON {
        return None;
    }
    let (a2, b2, c2) = (a.length_squared(), b.length_squared(), c.length_squared());
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    Some(DVec2::new(ux, uy))
}

/// Twice the signed area; the circumcenter determinant.
#[inline]
fn twice_area(t: &Triangle) -> f64 {
    let [a, b, c] = *t;
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

/// Side-length weighted vertex average; `None` when the points are
/// (nearly) collinear, since no circle is inscribed then.
pub fn incenter(t: &Triangle) -> Option<DVec2> {
    let [a, b, c] = side_lengths(t);
    let perimeter = a + b + c;
    if perimeter < DEGENERACY_EPSILON || (2.0 * twice_area(t)).abs() < DEGENERACY_EPSILON {
        return None;
    }
    Some((t[0] * a + t[1] * b + t[2] * c) / perimeter)
}

/// `H = A + B + C - 2·O`.
pub fn orthocenter(t: &Triangle) -> Option<DVec2> {
    let o = circumcenter(t)?;
    Some(t[0] + t[1] + t[2] - 2.0 * o)
}

pub fn circumradius(t: &Triangle, center: Option<DVec2>) -> f64 {
    center.map_or(0.0, |o| t[0].distance(o))
}

/// Heron's area over the semiperimeter; 0 for a degenerate triangle.
pub fn inradius(t: &Triangle) -> f64 {
    let [a, b, c] = side_lengths(t);
    let s = (a + b + c) / 2.0;
    if s <= 0.0 {
        return 0.0;
    }
    let area = (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
    area / s
}

/// Midpoint of the side opposite vertex `i`.
pub fn opposite_midpoint(t: &Triangle, i: usize) -> DVec2 {
    (t[(i + 1) % 3] + t[(i + 2) % 3]) * 0.5
}

/// Foot of the altitude from vertex `i` onto the line through the opposite
/// side; `None` when that side is too short to define a direction.
pub fn altitude_foot(t: &Triangle, i: usize) -> Option<DVec2> {
    let p = t[(i + 1) % 3];
    let d = t[(i + 2) % 3] - p;
    let len2 = d.length_squared();
    if len2 <= ALTITUDE_MIN_SIDE_SQ {
        return None;
    }
    let s = (t[i] - p).dot(d) / len2;
    Some(p + d * s)
}

/// All four centers of one triangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleCenters {
    pub centroid: DVec2,
    pub circumcenter: Option<DVec2>,
    pub incenter: Option<DVec2>,
    pub orthocenter: Option<DVec2>,
}

impl TriangleCenters {
    pub fn compute(t: &Triangle) -> Self {
        let circumcenter = circumcenter(t);
        Self {
            centroid: centroid(t),
            circumcenter,
            incenter: incenter(t),
            orthocenter: circumcenter.map(|o| t[0] + t[1] + t[2] - 2.0 * o),
        }
    }
}
