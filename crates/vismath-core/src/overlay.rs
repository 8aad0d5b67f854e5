//! Hand skeleton overlay drawn on top of every mode.

use crate::constants::FINGERTIPS;
use crate::gesture::{Hand, Landmark};
use crate::surface::Surface;
use glam::DVec2;

/// Bones of the 21-point hand model: thumb, four fingers, then the palm.
pub const HAND_CONNECTIONS: [(usize, usize); 23] = [
    (0, 1), (1, 2), (2, 3), (3, 4),
    (0, 5), (5, 6), (6, 7), (7, 8),
    (0, 9), (9, 10), (10, 11), (11, 12),
    (0, 13), (13, 14), (14, 15), (15, 16),
    (0, 17), (17, 18), (18, 19), (19, 20),
    (5, 9), (9, 13), (13, 17),
];

const BONE_COLOR: &str = "rgba(0, 212, 255, 0.6)";
const BONE_GLOW: &str = "#00d4ff";
const BONE_WIDTH: f64 = 2.0;

#[inline]
fn to_screen(l: Landmark, w: f64, h: f64) -> DVec2 {
    l.mirrored() * DVec2::new(w, h)
}

/// Bones with a cyan glow. Bones touching a missing landmark are skipped.
pub fn draw_skeleton(s: &mut dyn Surface, w: f64, h: f64, hand: &Hand) {
    s.set_stroke_color(BONE_COLOR);
    s.set_line_width(BONE_WIDTH);
    s.set_shadow(BONE_GLOW, BONE_WIDTH * 4.0);
    for &(a, b) in HAND_CONNECTIONS.iter() {
        let (Some(la), Some(lb)) = (hand.landmark(a), hand.landmark(b)) else {
            continue;
        };
        let (p, q) = (to_screen(la, w, h), to_screen(lb, w, h));
        s.stroke_line(p.x, p.y, q.x, q.y);
    }
    s.set_shadow(BONE_GLOW, 0.0);
}

/// Two rings and a dot on each fingertip.
pub fn draw_finger_rings(s: &mut dyn Surface, w: f64, h: f64, hand: &Hand) {
    for tip in FINGERTIPS {
        let Some(l) = hand.landmark(tip) else { continue };
        let p = to_screen(l, w, h);

        s.circle(p.x, p.y, 16.0);
        s.set_stroke_color("rgba(59, 130, 246, 0.3)");
        s.set_line_width(1.0);
        s.stroke();

        s.circle(p.x, p.y, 10.0);
        s.set_stroke_color("rgba(59, 130, 246, 0.5)");
        s.set_line_width(1.5);
        s.stroke();

        s.circle(p.x, p.y, 4.0);
        s.set_fill_color("#3b82f6");
        s.fill();
    }
}

pub fn draw_hand(s: &mut dyn Surface, w: f64, h: f64, hand: &Hand) {
    draw_skeleton(s, w, h, hand);
    draw_finger_rings(s, w, h, hand);
}
