//! Parallelogram-rule vector addition and the law of cosines.

use glam::DVec2;

/// Head of `v1 + v2` when both vectors are anchored at `origin`.
#[inline]
pub fn resultant(origin: DVec2, v1_head: DVec2, v2_head: DVec2) -> DVec2 {
    v1_head + (v2_head - origin)
}

/// Magnitudes and angle of two anchored vectors, measured in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorStats {
    pub mag1: f64,
    pub mag2: f64,
    pub mag_sum: f64,
    /// Clamped to [-1, 1]; 1 when either vector has zero length.
    pub cos_theta: f64,
    pub theta_degrees: f64,
}

impl VectorStats {
    /// `origin` and both heads are normalized; `size` maps them to pixels.
    pub fn measure(origin: DVec2, v1_head: DVec2, v2_head: DVec2, size: DVec2) -> Self {
        let v1 = (v1_head - origin) * size;
        let v2 = (v2_head - origin) * size;
        let (mag1, mag2) = (v1.length(), v2.length());
        let denom = mag1 * mag2;
        let cos_theta = if denom > f64::EPSILON {
            (v1.dot(v2) / denom).clamp(-1.0, 1.0)
        } else {
            1.0
        };
        Self {
            mag1,
            mag2,
            mag_sum: (v1 + v2).length(),
            cos_theta,
            theta_degrees: cos_theta.acos().to_degrees(),
        }
    }

    /// `|v1 + v2|²`.
    pub fn law_of_cosines_lhs(&self) -> f64 {
        self.mag_sum * self.mag_sum
    }

    /// `|v1|² + |v2|² + 2|v1||v2|cos θ`.
    pub fn law_of_cosines_rhs(&self) -> f64 {
        self.mag1 * self.mag1 + self.mag2 * self.mag2 + 2.0 * self.mag1 * self.mag2 * self.cos_theta
    }
}
