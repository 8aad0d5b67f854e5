use crate::constants::GestureConfig;
use crate::geometry::vector::{resultant, VectorStats};
use crate::gesture::{FrameInput, VisionResult};
use crate::input::{nearest_point, DragState, InputEvent};
use crate::modes::{Mode, ModeKind};
use crate::render::{draw_arrow, draw_grid, draw_info_panel, PANEL_TITLE, TEXT_MUTED, TEXT_PRIMARY};
use crate::surface::{Surface, TextAlign};
use glam::DVec2;

const CONTROLS: &str = concat!(
    "<div class=\"control-item\"><span class=\"icon\">👆</span>",
    "<span class=\"text\">Drag vector heads to change magnitude/direction</span></div>",
    "<div class=\"control-item\"><span class=\"icon\">⚪</span>",
    "<span class=\"text\">Drag origin to move coordinate system</span></div>",
);

const RESULTANT_COLOR: &str = "#22c55e";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VectorTarget {
    Origin,
    Head(usize),
}

/// A vector anchored at the shared origin, stored by its head position.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowVector {
    pub head: DVec2,
    pub color: &'static str,
    pub label: &'static str,
}

fn initial_vectors() -> [ArrowVector; 2] {
    [
        ArrowVector {
            head: DVec2::new(0.7, 0.3),
            color: "#ef4444",
            label: "v1",
        },
        ArrowVector {
            head: DVec2::new(0.3, 0.3),
            color: "#3b82f6",
            label: "v2",
        },
    ]
}

/// Two vectors from a movable origin, their parallelogram and the resultant.
pub struct VectorAdditionMode {
    config: GestureConfig,
    origin: DVec2,
    vectors: [ArrowVector; 2],
    drag: DragState<VectorTarget>,
}

impl VectorAdditionMode {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            origin: DVec2::splat(0.5),
            vectors: initial_vectors(),
            drag: DragState::idle(),
        }
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn vectors(&self) -> &[ArrowVector; 2] {
        &self.vectors
    }

    pub fn target(&self) -> Option<VectorTarget> {
        self.drag.target()
    }

    pub fn resultant(&self) -> DVec2 {
        resultant(self.origin, self.vectors[0].head, self.vectors[1].head)
    }

    /// Origin wins over heads when both are in range.
    fn pick(&self, p: DVec2, radius: f64) -> Option<VectorTarget> {
        if p.distance(self.origin) < radius {
            return Some(VectorTarget::Origin);
        }
        let heads = self
            .vectors
            .iter()
            .enumerate()
            .map(|(i, v)| (VectorTarget::Head(i), v.head));
        nearest_point(heads, p, radius)
    }

    fn move_target(&mut self, target: VectorTarget, p: DVec2) {
        match target {
            VectorTarget::Origin => self.origin = p,
            VectorTarget::Head(i) => {
                if let Some(v) = self.vectors.get_mut(i) {
                    v.head = p;
                }
            }
        }
    }
}

impl Default for VectorAdditionMode {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl Mode for VectorAdditionMode {
    fn kind(&self) -> ModeKind {
        ModeKind::VectorAddition
    }

    fn reset(&mut self) {
        self.origin = DVec2::splat(0.5);
        self.vectors = initial_vectors();
        self.drag.clear();
    }

    fn update(&mut self, _result: &VisionResult, input: &FrameInput<'_>) {
        let radius = self.config.pinch_capture_radius;
        let mut drag = self.drag;
        let moved = drag.pinch(input.active_pinch(), |p| self.pick(p, radius));
        self.drag = drag;
        if let Some((target, p)) = moved {
            self.move_target(target, p);
        }
    }

    fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown(sample) => {
                let p = sample.normalized();
                let pick = self.pick(p, self.config.pointer_capture_radius);
                if let Some(target) = self.drag.pointer_down(pick) {
                    log::debug!("[vector] pointer captured {:?}", target);
                }
            }
            InputEvent::PointerMove(sample) => {
                if let Some(target) = self.drag.pointer_move() {
                    self.move_target(target, sample.normalized());
                }
            }
            InputEvent::PointerUp => self.drag.pointer_up(),
            InputEvent::Wheel { .. } => {}
        }
    }

    fn draw(&self, s: &mut dyn Surface, w: f64, h: f64) {
        draw_grid(s, w, h, 16.0, "rgba(148, 163, 184, 0.05)");

        let size = DVec2::new(w, h);
        let o = self.origin * size;
        let r = self.resultant() * size;
        let heads = self.vectors.clone().map(|v| v.head * size);
        let stats = VectorStats::measure(self.origin, self.vectors[0].head, self.vectors[1].head, size);

        s.set_line_dash(&[4.0, 4.0]);
        s.set_stroke_color("rgba(255, 255, 255, 0.2)");
        s.begin_path();
        s.move_to(heads[0].x, heads[0].y);
        s.line_to(r.x, r.y);
        s.line_to(heads[1].x, heads[1].y);
        s.stroke();
        s.set_line_dash(&[]);

        labelled_arrow(s, o, r, RESULTANT_COLOR, "v1 + v2", stats.mag_sum);
        let mags = [stats.mag1, stats.mag2];
        for (i, v) in self.vectors.iter().enumerate() {
            labelled_arrow(s, o, heads[i], v.color, v.label, mags[i]);
        }

        s.circle(o.x, o.y, 6.0);
        s.set_fill_color("#fff");
        s.fill();
        s.set_fill_color(TEXT_MUTED);
        s.set_font("12px Inter");
        s.set_text_align(TextAlign::Left);
        s.fill_text("Origin", o.x - 20.0, o.y + 20.0);

        draw_stats_panel(s, w, &stats);
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

fn labelled_arrow(s: &mut dyn Surface, from: DVec2, to: DVec2, color: &str, label: &str, magnitude: f64) {
    draw_arrow(s, from.x, from.y, to.x, to.y, color);
    let mid = (from + to) * 0.5;
    s.set_fill_color(color);
    s.set_font("600 14px Inter");
    s.set_text_align(TextAlign::Left);
    s.fill_text(label, mid.x + 10.0, mid.y - 5.0);

    s.set_font("400 12px Inter");
    s.set_fill_color("#cbd5e1");
    s.fill_text(&format!("|{}| = {:.1}", label, magnitude), mid.x + 10.0, mid.y + 10.0);
}

fn draw_stats_panel(s: &mut dyn Surface, w: f64, stats: &VectorStats) {
    const LINE: f64 = 22.0;
    let (x, y) = draw_info_panel(s, w, 320.0, 260.0, "VECTOR ADDITION");
    let mut y_pos = y + 60.0;

    s.set_fill_color(TEXT_PRIMARY);
    s.set_font("500 13px Inter");
    s.fill_text(&format!("|v₁| = {:.1}", stats.mag1), x + 20.0, y_pos);
    s.fill_text(&format!("|v₂| = {:.1}", stats.mag2), x + 160.0, y_pos);
    y_pos += LINE;
    s.fill_text(&format!("|v₁ + v₂| = {:.1}", stats.mag_sum), x + 20.0, y_pos);
    y_pos += LINE + 8.0;

    s.set_fill_color(TEXT_MUTED);
    s.set_font("400 12px Inter");
    s.fill_text("Angle between vectors:", x + 20.0, y_pos);
    y_pos += LINE - 4.0;

    s.set_fill_color(TEXT_PRIMARY);
    s.set_font("500 13px Inter");
    s.fill_text(&format!("θ = {:.1}°", stats.theta_degrees), x + 20.0, y_pos);
    y_pos += LINE + 8.0;

    s.set_fill_color(PANEL_TITLE);
    s.set_font("bold 13px \"Georgia\", serif");
    s.fill_text("|v₁ + v₂|² = |v₁|² + |v₂|² + 2|v₁||v₂|cos θ", x + 20.0, y_pos);
    y_pos += LINE;

    s.set_fill_color(TEXT_MUTED);
    s.set_font("400 11px Inter");
    s.fill_text(
        &format!(
            "{:.0} ≈ {:.0}",
            stats.law_of_cosines_lhs(),
            stats.law_of_cosines_rhs()
        ),
        x + 20.0,
        y_pos,
    );
}
