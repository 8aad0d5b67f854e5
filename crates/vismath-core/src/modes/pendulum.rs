use crate::constants::*;
use crate::gesture::{FrameInput, VisionResult};
use crate::input::{DragState, InputEvent};
use crate::modes::{Mode, ModeKind};
use crate::physics::pendulum::{damping_for_resistance, Pendulum};
use crate::render::{draw_grid, draw_info_panel, wrap_text, TEXT_MUTED, TEXT_PRIMARY};
use crate::surface::{Paint, RadialGradient, Surface, TextAlign};
use crate::widgets::Slider;
use glam::DVec2;

const CONTROLS: &str = concat!(
    "<div class=\"control-item\"><span class=\"icon\">✊</span>",
    "<span class=\"text\">Drag bob to change length</span></div>",
    "<div class=\"control-item\"><span class=\"icon\">🤏</span>",
    "<span class=\"text\">Pinch slider to adjust resistance</span></div>",
);

const EXPLANATION: &str =
    "Period increases with √L. Independent of mass and amplitude (for small angles).";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendulumTarget {
    Bob,
    Pivot,
    Slider,
}

fn resistance_slider() -> Slider {
    Slider {
        label: "Air Resistance",
        value: 0.2,
        x: 0.3,
        y: 0.85,
        w: 0.4,
        h: 0.015,
    }
}

/// A damped pendulum whose bob, pivot and air resistance can be grabbed.
///
/// Hit tests run in an aspect-corrected space (x scaled by width/height) so
/// that the bob drawn at `pivot + L·h·(sin θ, cos θ)` pixels is where it is
/// picked up.
pub struct PendulumMode {
    config: GestureConfig,
    origin: DVec2,
    pendulum: Pendulum,
    slider: Slider,
    drag: DragState<PendulumTarget>,
}

impl PendulumMode {
    pub fn new(config: GestureConfig) -> Self {
        let slider = resistance_slider();
        let mut pendulum = Pendulum::new(PENDULUM_LENGTH, PENDULUM_ANGLE);
        pendulum.damping = damping_for_resistance(slider.value);
        Self {
            config,
            origin: DVec2::from_array(PENDULUM_PIVOT),
            pendulum,
            slider,
            drag: DragState::idle(),
        }
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn pendulum(&self) -> &Pendulum {
        &self.pendulum
    }

    pub fn slider(&self) -> &Slider {
        &self.slider
    }

    pub fn target(&self) -> Option<PendulumTarget> {
        self.drag.target()
    }

    /// Offset from the pivot in height units.
    fn local(&self, p: DVec2, aspect: f64) -> DVec2 {
        DVec2::new((p.x - self.origin.x) * aspect, p.y - self.origin.y)
    }

    fn bob_distance(&self, p: DVec2, aspect: f64) -> f64 {
        self.local(p, aspect).distance(self.pendulum.bob_offset())
    }

    fn pick_pointer(&self, p: DVec2, aspect: f64) -> Option<PendulumTarget> {
        let radius = self.config.pointer_capture_radius;
        if self.slider.contains(p, DVec2::new(0.0, SLIDER_POINTER_SLOP_Y)) {
            Some(PendulumTarget::Slider)
        } else if self.bob_distance(p, aspect) < radius {
            Some(PendulumTarget::Bob)
        } else if self.local(p, aspect).length() < radius {
            Some(PendulumTarget::Pivot)
        } else {
            None
        }
    }

    fn pick_pinch(&self, p: DVec2, aspect: f64) -> Option<PendulumTarget> {
        if self.bob_distance(p, aspect) < PINCH_BOB_RADIUS {
            Some(PendulumTarget::Bob)
        } else if self.slider.contains(p, DVec2::from_array(SLIDER_PINCH_SLOP)) {
            Some(PendulumTarget::Slider)
        } else {
            None
        }
    }

    fn move_target(&mut self, target: PendulumTarget, p: DVec2, aspect: f64) {
        match target {
            PendulumTarget::Bob => {
                let offset = self.local(p, aspect);
                self.pendulum.set_from_offset(offset);
            }
            PendulumTarget::Pivot => self.origin = p,
            PendulumTarget::Slider => {
                let value = self.slider.set_from_x(p.x);
                self.pendulum.damping = damping_for_resistance(value);
            }
        }
    }
}

impl Default for PendulumMode {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl Mode for PendulumMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Pendulum
    }

    /// Resets the rod and pivot; the chosen air resistance is kept.
    fn reset(&mut self) {
        self.origin = DVec2::from_array(PENDULUM_PIVOT);
        let damping = self.pendulum.damping;
        self.pendulum = Pendulum::new(PENDULUM_LENGTH, PENDULUM_ANGLE);
        self.pendulum.damping = damping;
        self.drag.clear();
    }

    fn update(&mut self, _result: &VisionResult, input: &FrameInput<'_>) {
        let aspect = input.viewport.aspect();
        let mut drag = self.drag;
        let moved = drag.pinch(input.active_pinch(), |p| self.pick_pinch(p, aspect));
        self.drag = drag;
        if let Some((target, p)) = moved {
            self.move_target(target, p, aspect);
        }

        if !self.drag.is_captured(PendulumTarget::Bob) {
            self.pendulum.step(PENDULUM_DT);
        }
    }

    fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown(sample) => {
                let (p, aspect) = (sample.normalized(), sample.viewport().aspect());
                let pick = self.pick_pointer(p, aspect);
                match self.drag.pointer_down(pick) {
                    Some(PendulumTarget::Slider) => {
                        self.move_target(PendulumTarget::Slider, p, aspect)
                    }
                    Some(PendulumTarget::Bob) => self.pendulum.velocity = 0.0,
                    _ => {}
                }
            }
            InputEvent::PointerMove(sample) => {
                if let Some(target) = self.drag.pointer_move() {
                    let aspect = sample.viewport().aspect();
                    self.move_target(target, sample.normalized(), aspect);
                }
            }
            InputEvent::PointerUp => self.drag.pointer_up(),
            InputEvent::Wheel { .. } => {}
        }
    }

    fn draw(&self, s: &mut dyn Surface, w: f64, h: f64) {
        draw_grid(s, w, h, 20.0, "rgba(148, 163, 184, 0.03)");

        let o = self.origin * DVec2::new(w, h);
        let bob = o + self.pendulum.bob_offset() * h;
        let radius = PENDULUM_BOB_RADIUS;

        s.set_stroke_color("rgba(255, 255, 255, 0.4)");
        s.set_line_width(2.0);
        s.stroke_line(o.x, o.y, bob.x, bob.y);

        // equilibrium
        s.set_line_dash(&[4.0, 4.0]);
        s.set_stroke_color("rgba(255, 255, 255, 0.1)");
        s.stroke_line(o.x, o.y, o.x, o.y + self.pendulum.length * h + 50.0);
        s.set_line_dash(&[]);

        s.circle(o.x, o.y, 6.0);
        s.set_fill_color(TEXT_MUTED);
        s.fill();

        let dragged = self.drag.is_captured(PendulumTarget::Bob);
        let (inner, outer) = if dragged {
            ("#93c5fd", "#3b82f6")
        } else {
            ("#60a5fa", "#2563eb")
        };
        s.circle(bob.x, bob.y, radius);
        s.set_fill(&Paint::Radial(RadialGradient {
            inner: (bob.x - 5.0, bob.y - 5.0, 2.0),
            outer: (bob.x, bob.y, radius),
            stops: vec![(0.0, inner.to_string()), (1.0, outer.to_string())],
        }));
        s.fill();
        s.set_stroke_color("rgba(255, 255, 255, 0.9)");
        s.set_line_width(2.0);
        s.stroke();

        self.draw_slider(s, w, h);
        self.draw_info(s, w);
    }

    fn cancel_capture(&mut self) {
        self.drag.clear();
    }

    fn is_capturing(&self) -> bool {
        self.drag.is_active()
    }

    fn controls_description(&self) -> Option<&'static str> {
        Some(CONTROLS)
    }
}

impl PendulumMode {
    fn draw_slider(&self, s: &mut dyn Surface, w: f64, h: f64) {
        let sl = &self.slider;
        let (sx, sy, sw, sh) = (sl.x * w, sl.y * h, sl.w * w, sl.h * h);

        s.begin_path();
        s.round_rect(sx, sy, sw, sh, 4.0);
        s.set_fill_color("rgba(255, 255, 255, 0.1)");
        s.fill();

        s.begin_path();
        s.round_rect(sx, sy, sw * sl.value, sh, 4.0);
        s.set_fill_color("#3b82f6");
        s.fill();

        s.circle(sx + sw * sl.value, sy + sh / 2.0, 10.0);
        s.set_fill_color("#ffffff");
        s.fill();
        s.set_shadow("#3b82f6", 10.0);
        s.stroke();
        s.set_shadow("#3b82f6", 0.0);

        s.set_fill_color(TEXT_PRIMARY);
        s.set_font("600 12px Inter");
        s.set_text_align(TextAlign::Center);
        s.fill_text(&sl.label.to_uppercase(), sx + sw / 2.0, sy - 15.0);

        s.set_fill_color(TEXT_MUTED);
        s.set_font("10px Inter");
        s.set_text_align(TextAlign::Left);
        s.fill_text("Low", sx, sy + sh + 15.0);
        s.set_text_align(TextAlign::Right);
        s.fill_text("High", sx + sw, sy + sh + 15.0);
        s.set_text_align(TextAlign::Left);
    }

    fn draw_info(&self, s: &mut dyn Surface, w: f64) {
        const PANEL_W: f64 = 340.0;
        let p = &self.pendulum;
        let (x, y) = draw_info_panel(s, w, PANEL_W, 240.0, "PENDULUM PHYSICS");

        s.set_fill_color(TEXT_PRIMARY);
        s.set_font("500 14px Inter");
        s.fill_text("Period Formula:", x + 20.0, y + 65.0);

        s.set_font("italic 22px \"Times New Roman\", serif");
        s.set_fill_color("#ffffff");
        s.fill_text("T = 2π√(L/g)", x + 20.0, y + 95.0);

        s.set_font("14px \"Times New Roman\", serif");
        s.set_fill_color(TEXT_MUTED);
        s.fill_text(&format!("L = {:.2} m", p.length), x + 20.0, y + 125.0);
        s.fill_text(&format!("g = {:.2} m/s²", p.gravity), x + 160.0, y + 125.0);

        s.set_fill_color(TEXT_PRIMARY);
        s.set_font("13px \"Times New Roman\", serif");
        s.fill_text(
            &format!("T = 2π√({:.2} / {:.2})", p.length, p.gravity),
            x + 20.0,
            y + 155.0,
        );

        s.set_fill_color("#4ade80");
        s.set_font("bold 16px Inter");
        s.fill_text(&format!("   = {:.3} seconds", p.period()), x + 20.0, y + 185.0);

        s.set_fill_color("#cbd5e1");
        s.set_font("400 12px Inter");
        wrap_text(s, EXPLANATION, x + 20.0, y + 210.0, PANEL_W - 40.0, 16.0);
    }
}
