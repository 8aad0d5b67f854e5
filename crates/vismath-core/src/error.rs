use thiserror::Error;

/// Failures surfaced by a hand-tracking source.
///
/// Only initialization is fallible; a frame without detections is simply
/// `None` from [`crate::VisionSource::detect`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisionError {
    #[error("hand tracking unavailable: {0}")]
    Unavailable(String),
    #[error("camera did not become ready within {seconds}s")]
    Timeout { seconds: u32 },
    #[error("malformed detection result: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for VisionError {
    fn from(e: serde_json::Error) -> Self {
        VisionError::Malformed(e.to_string())
    }
}
