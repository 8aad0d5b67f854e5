use crate::constants::GestureConfig;
use crate::gesture::{GestureInterpreter, VisionResult};
use crate::input::{InputEvent, Viewport};
use crate::modes::{
    Mode, ModeKind, PendulumMode, PlatonicSolidsMode, TriangleCentersMode, VectorAdditionMode,
};
use crate::overlay;
use crate::surface::Surface;

pub const FALLBACK_CONTROLS: &str = "Interactive Mode Active";

/// Owns the registered modes, routes frames and pointer events to the active
/// one and draws the hand overlay on top.
pub struct ModeDispatcher {
    modes: Vec<Box<dyn Mode>>,
    active: Option<usize>,
    interpreter: GestureInterpreter,
    last_result: Option<VisionResult>,
    viewport: Viewport,
}

impl ModeDispatcher {
    /// Registers the four modes in menu order. No mode is active until
    /// [`ModeDispatcher::select_mode`] is called.
    pub fn new(config: GestureConfig) -> Self {
        let modes: Vec<Box<dyn Mode>> = vec![
            Box::new(TriangleCentersMode::new(config)),
            Box::new(PlatonicSolidsMode::new()),
            Box::new(VectorAdditionMode::new(config)),
            Box::new(PendulumMode::new(config)),
        ];
        Self {
            modes,
            active: None,
            interpreter: GestureInterpreter::new(config),
            last_result: None,
            viewport: Viewport::default(),
        }
    }

    /// `(index, kind)` for every registered mode.
    pub fn modes(&self) -> impl Iterator<Item = (usize, ModeKind)> + '_ {
        self.modes.iter().map(|m| m.kind()).enumerate()
    }

    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_kind(&self) -> Option<ModeKind> {
        self.active_mode().map(|m| m.kind())
    }

    pub fn active_mode(&self) -> Option<&dyn Mode> {
        self.active.and_then(|i| self.modes.get(i)).map(|m| m.as_ref())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Activates mode `index` and resets it. Any drag held by the mode being
    /// left is abandoned. Out-of-range indices are silently
    /// ignored.
    pub fn select_mode(&mut self, index: usize) {
        if index >= self.modes.len() {
            return;
        }
        if let Some(prev) = self.active.and_then(|i| self.modes.get_mut(i)) {
            prev.cancel_capture();
        }
        let mode = &mut self.modes[index];
        mode.reset();
        self.active = Some(index);
        log::info!("[modes] selected {} ({})", index, mode.name());
    }

    /// Feeds one detection result to the active mode. The result is kept for
    /// the overlay drawn by [`ModeDispatcher::draw`].
    pub fn update(&mut self, result: VisionResult) {
        let Self {
            modes,
            active,
            interpreter,
            last_result,
            viewport,
        } = self;
        let result: &VisionResult = last_result.insert(result);
        let input = interpreter.interpret(result, *viewport);
        if let Some(mode) = (*active).and_then(|i| modes.get_mut(i)) {
            mode.update(result, &input);
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        if let Some(mode) = self.active.and_then(|i| self.modes.get_mut(i)) {
            mode.handle_input(event);
        }
    }

    /// Clears the surface, draws the active mode and then every tracked hand.
    pub fn draw(&mut self, surface: &mut dyn Surface, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        surface.clear_rect(0.0, 0.0, width, height);
        if let Some(mode) = self.active_mode() {
            mode.draw(surface, width, height);
        }
        let hands = self.last_result.as_ref().and_then(|r| r.hands.as_ref());
        for hand in hands.into_iter().flat_map(|h| h.landmarks.iter()) {
            overlay::draw_hand(surface, width, height, hand);
        }
    }

    /// The active mode's control hints, or the fallback line.
    pub fn controls_description(&self) -> &'static str {
        self.active_mode()
            .and_then(|m| m.controls_description())
            .unwrap_or(FALLBACK_CONTROLS)
    }
}

impl Default for ModeDispatcher {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
