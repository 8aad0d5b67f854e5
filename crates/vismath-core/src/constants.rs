// Shared interaction and simulation tuning constants.

// Hand landmarks (21-point hand model)
pub const LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

// Gestures
pub const PINCH_THRESHOLD: f64 = 0.08; // 3D thumb-index distance, normalized units
pub const POINTER_CAPTURE_RADIUS: f64 = 0.05; // normalized
pub const PINCH_CAPTURE_RADIUS: f64 = 0.06; // normalized, looser to absorb tracking jitter

// Geometry
pub const DEGENERACY_EPSILON: f64 = 1e-4; // |2·signed area| below this means collinear
pub const ALTITUDE_MIN_SIDE_SQ: f64 = 0.01; // squared px; shorter opposite sides draw no altitude

// Platonic solids
pub const DEFAULT_ROTATION: [f64; 3] = [0.5, 0.5, 0.0];
pub const DEFAULT_ROTATION_SPEED: f64 = 0.01; // radians per frame
pub const ROTATION_SPEED_MIN: f64 = 0.005;
pub const ROTATION_SPEED_SPAN: f64 = 0.035;
pub const ROTATION_SPEED_GAIN: f64 = 0.3; // per unit of pinch opening
pub const AUTO_ROTATE_X_RATIO: f64 = 0.3; // x spins slower than y
pub const PINCH_REST_DISTANCE: f64 = 0.03; // 2D thumb-index distance treated as closed
pub const HAND_SCALE_BASE: f64 = 0.6;
pub const HAND_SCALE_GAIN: f64 = 6.5;
pub const HAND_SCALE_MIN: f64 = 0.5;
pub const HAND_SCALE_MAX: f64 = 1.8;
pub const WHEEL_ZOOM_FACTOR: f64 = 0.001; // per wheel delta unit
pub const WHEEL_SCALE_MIN: f64 = 0.5;
pub const WHEEL_SCALE_MAX: f64 = 2.0;
pub const SCALE_SMOOTHING: f64 = 0.12; // fraction of the remaining gap closed per frame
pub const DRAG_ROTATE_FACTOR: f64 = 0.01; // radians per pixel
pub const PROJECTION_FACTOR: f64 = 0.28; // of min(width, height)
pub const FACE_ALPHA: f64 = 0.5;

// Pendulum
pub const GRAVITY: f64 = 9.81; // m/s²
pub const PENDULUM_DT: f64 = 1.0 / 60.0; // fixed timestep, seconds
pub const PENDULUM_LENGTH: f64 = 0.5; // fraction of viewport height
pub const PENDULUM_ANGLE: f64 = std::f64::consts::FRAC_PI_6;
pub const PENDULUM_PIVOT: [f64; 2] = [0.5, 0.15];
pub const PENDULUM_BOB_RADIUS: f64 = 24.0; // px
pub const DEFAULT_DAMPING: f64 = 0.998;
pub const DAMPING_MIN: f64 = 0.990; // strongest air resistance
pub const DAMPING_MAX: f64 = 0.9995; // weakest air resistance
pub const PINCH_BOB_RADIUS: f64 = 0.1; // aspect-corrected
pub const SLIDER_POINTER_SLOP_Y: f64 = 0.04;
pub const SLIDER_PINCH_SLOP: [f64; 2] = [0.05, 0.08];

/// Tunable gesture thresholds shared by every mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub pinch_threshold: f64,
    pub pointer_capture_radius: f64,
    pub pinch_capture_radius: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: PINCH_THRESHOLD,
            pointer_capture_radius: POINTER_CAPTURE_RADIUS,
            pinch_capture_radius: PINCH_CAPTURE_RADIUS,
        }
    }
}
