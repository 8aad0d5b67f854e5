//! Damped simple pendulum, semi-implicit Euler at a fixed step.

use crate::constants::{DAMPING_MAX, DAMPING_MIN, DEFAULT_DAMPING, DEGENERACY_EPSILON, GRAVITY};
use glam::DVec2;
use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pendulum {
    /// In viewport-height units; also shown as meters.
    pub length: f64,
    /// Radians from straight down, positive to the right.
    pub angle: f64,
    pub velocity: f64,
    pub acceleration: f64,
    /// Per-step velocity multiplier in (0, 1].
    pub damping: f64,
    pub gravity: f64,
}

impl Pendulum {
    pub fn new(length: f64, angle: f64) -> Self {
        Self {
            length,
            angle,
            velocity: 0.0,
            acceleration: 0.0,
            damping: DEFAULT_DAMPING,
            gravity: GRAVITY,
        }
    }

    /// `α = -(g/L)·sin θ`, `ω = (ω + α·dt)·damping`, `θ += ω·dt`.
    ///
    /// A pendulum too short to define `g/L` feels no torque.
    pub fn step(&mut self, dt: f64) {
        self.acceleration = if self.length > DEGENERACY_EPSILON {
            -(self.gravity / self.length) * self.angle.sin()
        } else {
            0.0
        };
        self.velocity += self.acceleration * dt;
        self.velocity *= self.damping;
        self.angle += self.velocity * dt;
    }

    pub fn period(&self) -> f64 {
        period(self.length, self.gravity)
    }

    /// Bob position relative to the pivot, in length units (y grows down).
    pub fn bob_offset(&self) -> DVec2 {
        DVec2::new(self.angle.sin(), self.angle.cos()) * self.length
    }

    /// Re-aims the rod at `offset` (relative to the pivot) and stops it.
    pub fn set_from_offset(&mut self, offset: DVec2) {
        self.angle = offset.x.atan2(offset.y);
        self.length = offset.length();
        self.velocity = 0.0;
        self.acceleration = 0.0;
    }
}

/// Small-angle period `2π·√(L/g)`; 0 for non-positive inputs.
pub fn period(length: f64, gravity: f64) -> f64 {
    if length <= 0.0 || gravity <= 0.0 {
        return 0.0;
    }
    TAU * (length / gravity).sqrt()
}

/// Maps a resistance slider value in [0, 1] to a damping coefficient:
/// 0 is the least resistance, 1 the most.
pub fn damping_for_resistance(value: f64) -> f64 {
    DAMPING_MAX - value.clamp(0.0, 1.0) * (DAMPING_MAX - DAMPING_MIN)
}
