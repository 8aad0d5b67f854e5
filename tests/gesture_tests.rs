// Host-side tests for landmark parsing and pinch interpretation.

use vismath_core::{
    GestureConfig, GestureInterpreter, Hand, Handedness, Landmark, PinchState, Viewport,
    VisionError, VisionResult,
};

fn hand_with_tips(thumb: (f64, f64, f64), index: (f64, f64, f64)) -> Hand {
    let mut lm = vec![Landmark::new(0.5, 0.5, 0.0); 21];
    lm[4] = Landmark::new(thumb.0, thumb.1, thumb.2);
    lm[8] = Landmark::new(index.0, index.1, index.2);
    Hand::new(lm)
}

#[test]
fn close_tips_pinch_at_mirrored_midpoint() {
    let hand = hand_with_tips((0.5, 0.5, 0.0), (0.5, 0.55, 0.0));
    let p = PinchState::detect(Some(&hand), 0.08);
    assert!(p.is_pinching);
    assert!((p.x - 0.5).abs() < 1e-12);
    assert!((p.y - 0.525).abs() < 1e-12);
}

#[test]
fn pinch_position_is_mirrored() {
    let hand = hand_with_tips((0.2, 0.3, 0.0), (0.2, 0.32, 0.0));
    let p = PinchState::detect(Some(&hand), 0.08);
    assert!((p.x - 0.8).abs() < 1e-12);
}

#[test]
fn depth_counts_toward_pinch_distance() {
    // 2D distance 0.05, 3D distance ~0.086
    let hand = hand_with_tips((0.5, 0.5, 0.0), (0.5, 0.55, 0.07));
    assert!(!PinchState::detect(Some(&hand), 0.08).is_pinching);
}

#[test]
fn missing_hand_never_pinches() {
    assert_eq!(PinchState::detect(None, 0.08), PinchState::default());
    let stub = Hand::new(vec![Landmark::new(0.1, 0.1, 0.0); 5]);
    assert!(!PinchState::detect(Some(&stub), 0.08).is_pinching);
}

#[test]
fn labels_swap_for_mirrored_camera() {
    let right_label = hand_with_tips((0.1, 0.1, 0.0), (0.1, 0.12, 0.0));
    let left_label = hand_with_tips((0.9, 0.9, 0.0), (0.9, 0.5, 0.0));
    let result = VisionResult::from_hands([
        (Handedness::Right, right_label.clone()),
        (Handedness::Left, left_label.clone()),
    ]);
    let input = GestureInterpreter::new(GestureConfig::default())
        .interpret(&result, Viewport::new(800.0, 600.0));

    assert_eq!(input.left_hand, Some(&right_label));
    assert_eq!(input.right_hand, Some(&left_label));
    assert!(input.left_pinch.is_pinching);
    assert!(!input.right_pinch.is_pinching);
    assert_eq!(input.active_pinch(), Some(input.left_pinch));
    assert_eq!(input.viewport, Viewport::new(800.0, 600.0));
}

#[test]
fn empty_result_has_no_hands() {
    let interp = GestureInterpreter::default();
    for result in [VisionResult::default(), VisionResult::from_hands(Vec::<(Handedness, Hand)>::new())] {
        let input = interp.interpret(&result, Viewport::default());
        assert!(input.left_hand.is_none() && input.right_hand.is_none());
        assert_eq!(input.left_pinch, PinchState::default());
        assert!(input.active_pinch().is_none());
    }
}

#[test]
fn parses_landmarker_json() {
    let json = r#"{
        "hands": {
            "landmarks": [[{"x": 0.25, "y": 0.5, "z": -0.01}, {"x": 0.3, "y": 0.4}]],
            "handednesses": [[{"categoryName": "Left", "score": 0.98, "index": 1}]]
        }
    }"#;
    let result = VisionResult::from_json(json).expect("valid frame");
    let hands = result.hands.as_ref().expect("hands");
    assert_eq!(hands.landmarks.len(), 1);
    let hand = &hands.landmarks[0];
    assert_eq!(hand.landmark(0), Some(Landmark::new(0.25, 0.5, -0.01)));
    assert_eq!(hand.landmark(1).map(|l| l.z), Some(0.0));

    let labels: Vec<_> = result.labeled_hands().map(|(side, _)| side).collect();
    assert_eq!(labels, vec![Some(Handedness::Left)]);
}

#[test]
fn frame_without_hands_parses() {
    let result = VisionResult::from_json("{}").expect("empty frame");
    assert!(result.hands.is_none());
    let result = VisionResult::from_json(r#"{"hands": {"landmarks": [], "handednesses": []}}"#)
        .expect("no hands");
    assert_eq!(result.labeled_hands().count(), 0);
}

#[test]
fn malformed_json_is_reported() {
    let err = VisionResult::from_json("{\"hands\": 3}").unwrap_err();
    assert!(matches!(err, VisionError::Malformed(_)));
}

#[test]
fn unknown_labels_are_ignored() {
    let json = r#"{"hands": {"landmarks": [[{"x": 0.5, "y": 0.5}]],
                   "handednesses": [[{"categoryName": "Unknown"}]]}}"#;
    let result = VisionResult::from_json(json).unwrap();
    let input = GestureInterpreter::default().interpret(&result, Viewport::default());
    assert!(input.left_hand.is_none() && input.right_hand.is_none());
}
