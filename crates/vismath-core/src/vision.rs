//! Hand-tracking sources and the per-frame driver.

use crate::dispatcher::ModeDispatcher;
use crate::error::VisionError;
use crate::gesture::VisionResult;
use crate::surface::Surface;
use std::collections::VecDeque;

/// Anything that can produce hand detections once per frame.
pub trait VisionSource {
    /// Prepares the source (camera, model). Called once before the loop.
    fn initialize(&mut self) -> Result<(), VisionError> {
        Ok(())
    }

    /// The newest detection, or `None` when no new frame is ready.
    fn detect(&mut self) -> Option<VisionResult>;
}

/// Replays a fixed list of frames, then reports nothing.
#[derive(Debug, Default)]
pub struct ScriptedVisionSource {
    frames: VecDeque<Option<VisionResult>>,
    initialized: bool,
    fail_with: Option<String>,
}

impl ScriptedVisionSource {
    pub fn new(frames: impl IntoIterator<Item = Option<VisionResult>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            initialized: false,
            fail_with: None,
        }
    }

    /// A source whose initialization fails with `reason`.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn push(&mut self, frame: Option<VisionResult>) {
        self.frames.push_back(frame);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl VisionSource for ScriptedVisionSource {
    fn initialize(&mut self) -> Result<(), VisionError> {
        if let Some(reason) = &self.fail_with {
            return Err(VisionError::Unavailable(reason.clone()));
        }
        self.initialized = true;
        Ok(())
    }

    fn detect(&mut self) -> Option<VisionResult> {
        self.frames.pop_front().flatten()
    }
}

/// One frame-loop iteration: detect, update when a result arrived, draw.
/// Returns whether a result was delivered.
pub fn run_frame(
    dispatcher: &mut ModeDispatcher,
    source: &mut dyn VisionSource,
    surface: &mut dyn Surface,
    width: f64,
    height: f64,
) -> bool {
    let delivered = match source.detect() {
        Some(result) => {
            dispatcher.update(result);
            true
        }
        None => false,
    };
    dispatcher.draw(surface, width, height);
    delivered
}
