// Host-side tests for mode dispatch, the hand overlay and the frame driver.

use vismath_core::dispatcher::FALLBACK_CONTROLS;
use vismath_core::surface::Command;
use vismath_core::*;

const W: f64 = 640.0;
const H: f64 = 480.0;

fn sample(x: f64, y: f64) -> PointerSample {
    let rect = CanvasRect {
        left: 0.0,
        top: 0.0,
        width: W,
        height: H,
    };
    PointerSample::new(x * W, y * H, rect)
}

fn hand() -> Hand {
    let lm = (0..21)
        .map(|i| Landmark::new(0.3 + i as f64 * 0.01, 0.4 + i as f64 * 0.005, 0.0))
        .collect();
    Hand::new(lm)
}

fn one_hand_frame() -> VisionResult {
    VisionResult::from_hands([(Handedness::Left, hand())])
}

fn fingertip_rings(s: &RecordingSurface) -> usize {
    s.count(|c| matches!(c, Command::Arc { radius, .. } if *radius == 16.0))
}

#[test]
fn registry_order_and_groups() {
    let d = ModeDispatcher::default();
    let listed: Vec<_> = d.modes().map(|(i, k)| (i, k.name(), k.category())).collect();
    assert_eq!(
        listed,
        vec![
            (0, "Triangle Centers", "MATH"),
            (1, "Platonic Solids", "MATH"),
            (2, "Vector Addition", "PHYSICS"),
            (3, "Pendulum", "PHYSICS"),
        ]
    );
    assert_eq!(d.mode_count(), ModeKind::ALL.len());
}

#[test]
fn nothing_active_until_selected() {
    let mut d = ModeDispatcher::default();
    assert_eq!(d.active_index(), None);
    assert_eq!(d.controls_description(), FALLBACK_CONTROLS);
    // update, input and draw are all no-ops apart from the clear
    d.update(one_hand_frame());
    d.handle_input(&InputEvent::PointerDown(sample(0.5, 0.5)));
    let mut s = RecordingSurface::new();
    d.draw(&mut s, W, H);
    assert_eq!(s.commands.first(), Some(&Command::ClearRect(0.0, 0.0, W, H)));
}

#[test]
fn select_mode_activates_and_describes() {
    let mut d = ModeDispatcher::default();
    d.select_mode(3);
    assert_eq!(d.active_index(), Some(3));
    assert_eq!(d.active_kind(), Some(ModeKind::Pendulum));
    assert!(d.controls_description().contains("resistance"));

    d.select_mode(0);
    assert_eq!(d.active_kind(), Some(ModeKind::TriangleCenters));
    assert!(d.controls_description().contains("Drag vertices"));
}

#[test]
fn out_of_range_select_is_ignored() {
    let mut d = ModeDispatcher::default();
    d.select_mode(4);
    assert_eq!(d.active_index(), None);
    d.select_mode(1);
    d.select_mode(usize::MAX);
    assert_eq!(d.active_index(), Some(1));
}

#[test]
fn mode_switch_mid_drag_clears_capture() {
    let mut d = ModeDispatcher::default();
    d.select_mode(0);
    // vertex A of the acute preset
    d.handle_input(&InputEvent::PointerDown(sample(0.5, 0.25)));
    assert!(d.active_mode().map_or(false, |m| m.is_capturing()));

    d.select_mode(2);
    d.select_mode(0);
    assert!(!d.active_mode().map_or(true, |m| m.is_capturing()));
    // the pointer is still physically down; moving it drags nothing
    d.handle_input(&InputEvent::PointerMove(sample(0.9, 0.9)));
    assert!(!d.active_mode().map_or(true, |m| m.is_capturing()));
}

#[test]
fn leaving_a_mode_abandons_its_drag() {
    let mut d = ModeDispatcher::default();
    d.select_mode(2);
    d.handle_input(&InputEvent::PointerDown(sample(0.5, 0.5)));
    assert!(d.active_mode().map_or(false, |m| m.is_capturing()));
    d.select_mode(1);
    d.handle_input(&InputEvent::PointerUp);
    d.select_mode(2);
    assert!(!d.active_mode().map_or(true, |m| m.is_capturing()));
}

#[test]
fn overlay_draws_every_hand_over_the_mode() {
    let mut d = ModeDispatcher::default();
    d.update(VisionResult::from_hands([
        (Handedness::Left, hand()),
        (Handedness::Right, hand()),
    ]));
    let mut s = RecordingSurface::new();
    d.draw(&mut s, W, H);
    assert_eq!(fingertip_rings(&s), 10);
    // one glow pass per skeleton
    let glow = s.count(|c| matches!(c, Command::Shadow(_, blur) if *blur > 0.0));
    assert_eq!(glow, 2);
    assert_eq!(d.viewport(), Viewport::new(W, H));
}

#[test]
fn overlay_uses_mirrored_positions() {
    let mut d = ModeDispatcher::default();
    d.update(one_hand_frame());
    let mut s = RecordingSurface::new();
    d.draw(&mut s, W, H);
    // index tip (landmark 8) sits at x = 0.38 in camera space
    let expected_x = (1.0 - 0.38) * W;
    let found = s.commands.iter().any(|c| {
        matches!(c, Command::Arc { x, radius, .. } if *radius == 16.0 && (x - expected_x).abs() < 1e-9)
    });
    assert!(found);
}

#[test]
fn run_frame_skips_update_on_empty_frames() {
    let mut d = ModeDispatcher::default();
    d.select_mode(3);
    let mut source = ScriptedVisionSource::new([Some(one_hand_frame()), None]);
    source.initialize().expect("scripted source");
    assert!(source.is_initialized());

    let mut s = RecordingSurface::new();
    assert!(run_frame(&mut d, &mut source, &mut s, W, H));
    assert_eq!(fingertip_rings(&s), 5);

    // no new detection: state is kept and the last hands are still drawn
    s.clear();
    assert!(!run_frame(&mut d, &mut source, &mut s, W, H));
    assert_eq!(source.remaining(), 0);
    assert_eq!(s.commands.first(), Some(&Command::ClearRect(0.0, 0.0, W, H)));
    assert_eq!(fingertip_rings(&s), 5);
    assert!(s.has_text("PENDULUM PHYSICS"));
}

#[test]
fn unavailable_source_fails_to_initialize() {
    let mut source = ScriptedVisionSource::unavailable("camera permission denied");
    let err = source.initialize().unwrap_err();
    assert_eq!(err, VisionError::Unavailable("camera permission denied".into()));
    assert!(err.to_string().contains("camera permission denied"));
    assert!(!source.is_initialized());
}

#[test]
fn timeout_error_names_the_wait() {
    let err = VisionError::Timeout { seconds: 10 };
    assert!(err.to_string().contains("10"));
}
