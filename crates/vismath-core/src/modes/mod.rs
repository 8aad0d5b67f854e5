//! The interactive modes and the interface the dispatcher drives them through.

use crate::gesture::{FrameInput, VisionResult};
use crate::input::InputEvent;
use crate::surface::Surface;

pub mod pendulum;
pub mod solids;
pub mod triangle;
pub mod vector;

pub use pendulum::PendulumMode;
pub use solids::PlatonicSolidsMode;
pub use triangle::TriangleCentersMode;
pub use vector::VectorAdditionMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModeKind {
    TriangleCenters,
    PlatonicSolids,
    VectorAddition,
    Pendulum,
}

impl ModeKind {
    /// Registry order.
    pub const ALL: [ModeKind; 4] = [
        ModeKind::TriangleCenters,
        ModeKind::PlatonicSolids,
        ModeKind::VectorAddition,
        ModeKind::Pendulum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ModeKind::TriangleCenters => "Triangle Centers",
            ModeKind::PlatonicSolids => "Platonic Solids",
            ModeKind::VectorAddition => "Vector Addition",
            ModeKind::Pendulum => "Pendulum",
        }
    }

    /// Menu group for the host UI.
    pub fn category(self) -> &'static str {
        match self {
            ModeKind::TriangleCenters | ModeKind::PlatonicSolids => "MATH",
            ModeKind::VectorAddition | ModeKind::Pendulum => "PHYSICS",
        }
    }
}

/// One interactive visualization.
///
/// The dispatcher calls `update` once per frame with a detection result,
/// forwards pointer events through `handle_input` as they arrive, and draws
/// the active mode every frame. Modes never touch the host directly.
pub trait Mode {
    fn kind(&self) -> ModeKind;

    /// Restores the initial simulation state and drops any capture.
    fn reset(&mut self);

    fn update(&mut self, result: &VisionResult, input: &FrameInput<'_>);

    fn handle_input(&mut self, event: &InputEvent);

    fn draw(&self, surface: &mut dyn Surface, width: f64, height: f64);

    /// Abandons an in-progress drag without touching anything else.
    fn cancel_capture(&mut self);

    /// Whether a pointer or pinch currently holds an element.
    fn is_capturing(&self) -> bool;

    /// Control hints as HTML markup for the host's controls panel.
    fn controls_description(&self) -> Option<&'static str> {
        None
    }

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}
