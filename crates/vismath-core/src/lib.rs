//! Gesture-driven math and physics visualizations.
//!
//! The crate turns per-frame hand-landmark detections and pointer events into
//! interactive simulations (triangle centers, polyhedra, vector addition, a
//! damped pendulum) drawn on an abstract [`Surface`]. It has no platform
//! dependencies; the web front-end supplies the canvas, the event wiring and
//! the hand tracker.

pub mod color;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod modes;
pub mod overlay;
pub mod physics;
pub mod render;
pub mod surface;
pub mod vision;
pub mod widgets;

pub use constants::GestureConfig;
pub use dispatcher::ModeDispatcher;
pub use error::VisionError;
pub use gesture::{FrameInput, GestureInterpreter, Hand, Handedness, Landmark, PinchState, VisionResult};
pub use input::{CanvasRect, DragSource, DragState, InputEvent, PointerSample, Viewport};
pub use modes::{Mode, ModeKind};
pub use surface::{Paint, RecordingSurface, Surface, TextAlign};
pub use vision::{run_frame, ScriptedVisionSource, VisionSource};
