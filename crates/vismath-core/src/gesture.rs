//! Hand landmarks, pinch detection and per-frame gesture interpretation.
//!
//! The vision collaborator reports hands with 21 normalized landmarks and a
//! handedness label. The camera image is mirrored for display, so the label
//! "Right" belongs to the user's left hand on screen and vice versa.

use crate::constants::{GestureConfig, INDEX_TIP, THUMB_TIP};
use crate::error::VisionError;
use crate::input::Viewport;
use glam::{DVec2, DVec3};
use serde::Deserialize;

/// One landmark in normalized camera space; `z` is relative depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn xy(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn xyz(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Screen position with the horizontal mirror applied.
    #[inline]
    pub fn mirrored(&self) -> DVec2 {
        DVec2::new(1.0 - self.x, self.y)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    pub landmarks: Vec<Landmark>,
}

impl Hand {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    #[inline]
    pub fn landmark(&self, index: usize) -> Option<Landmark> {
        self.landmarks.get(index).copied()
    }

    fn pinch_pair(&self) -> Option<(Landmark, Landmark)> {
        Some((self.landmark(THUMB_TIP)?, self.landmark(INDEX_TIP)?))
    }

    /// Planar thumb-index distance, used for continuous pinch-opening
    /// controls. `None` for a hand missing either tip.
    pub fn pinch_opening(&self) -> Option<f64> {
        let (thumb, index) = self.pinch_pair()?;
        Some(thumb.xy().distance(index.xy()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Category {
    #[serde(rename = "categoryName", alias = "label")]
    pub category_name: String,
    #[serde(default)]
    pub score: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HandLandmarks {
    #[serde(default)]
    pub landmarks: Vec<Hand>,
    #[serde(default, alias = "handedness")]
    pub handednesses: Vec<Vec<Category>>,
}

/// Raw per-frame detection result.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct VisionResult {
    #[serde(default)]
    pub hands: Option<HandLandmarks>,
}

impl VisionResult {
    pub fn from_json(json: &str) -> Result<Self, VisionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a result from `(label, hand)` pairs, mostly for tests and
    /// scripted sources.
    pub fn from_hands(hands: impl IntoIterator<Item = (Handedness, Hand)>) -> Self {
        let (handednesses, landmarks): (Vec<Vec<Category>>, Vec<Hand>) = hands
            .into_iter()
            .map(|(side, hand)| {
                let category = Category {
                    category_name: side.label().to_string(),
                    score: 1.0,
                };
                (vec![category], hand)
            })
            .unzip();
        Self {
            hands: Some(HandLandmarks {
                landmarks,
                handednesses,
            }),
        }
    }

    /// Every detected hand paired with its label, in detection order.
    pub fn labeled_hands(&self) -> impl Iterator<Item = (Option<Handedness>, &Hand)> {
        let hands = self.hands.as_ref();
        hands
            .into_iter()
            .flat_map(|h| h.landmarks.iter().enumerate())
            .map(move |(i, hand)| {
                let side = hands
                    .and_then(|h| h.handednesses.get(i))
                    .and_then(|cats| cats.first())
                    .and_then(|c| Handedness::from_label(&c.category_name));
                (side, hand)
            })
    }
}

/// Handedness label as reported by the tracker (camera perspective).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Left" => Some(Handedness::Left),
            "Right" => Some(Handedness::Right),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }
}

/// Pinch of one hand; the position is the mirrored thumb-index midpoint and
/// is only meaningful while `is_pinching`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    pub is_pinching: bool,
    pub x: f64,
    pub y: f64,
}

impl PinchState {
    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Pinch state of `hand`. A missing hand, or one without both tips,
    /// never pinches.
    pub fn detect(hand: Option<&Hand>, threshold: f64) -> Self {
        let Some((thumb, index)) = hand.and_then(Hand::pinch_pair) else {
            return Self::default();
        };
        let distance = thumb.xyz().distance(index.xyz());
        let mid = (thumb.mirrored() + index.mirrored()) * 0.5;
        Self {
            is_pinching: distance < threshold,
            x: mid.x,
            y: mid.y,
        }
    }
}

/// Interpreted hands for one frame, keyed by on-screen side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput<'a> {
    pub left_hand: Option<&'a Hand>,
    pub right_hand: Option<&'a Hand>,
    pub left_pinch: PinchState,
    pub right_pinch: PinchState,
    pub viewport: Viewport,
}

impl<'a> FrameInput<'a> {
    /// Input with no hands in view.
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            left_hand: None,
            right_hand: None,
            left_pinch: PinchState::default(),
            right_pinch: PinchState::default(),
            viewport,
        }
    }

    /// The pinch that drives single-target dragging: left when pinching,
    /// otherwise right when pinching.
    pub fn active_pinch(&self) -> Option<PinchState> {
        [self.left_pinch, self.right_pinch]
            .into_iter()
            .find(|p| p.is_pinching)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GestureInterpreter {
    pub config: GestureConfig,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    /// Maps a raw result onto screen-side hands and their pinches. Later
    /// detections overwrite earlier ones with the same label; unlabeled hands
    /// are ignored.
    pub fn interpret<'a>(&self, result: &'a VisionResult, viewport: Viewport) -> FrameInput<'a> {
        let mut input = FrameInput::empty(viewport);
        for (side, hand) in result.labeled_hands() {
            match side {
                Some(Handedness::Right) => input.left_hand = Some(hand),
                Some(Handedness::Left) => input.right_hand = Some(hand),
                None => {}
            }
        }
        let threshold = self.config.pinch_threshold;
        input.left_pinch = PinchState::detect(input.left_hand, threshold);
        input.right_pinch = PinchState::detect(input.right_hand, threshold);
        input
    }
}
