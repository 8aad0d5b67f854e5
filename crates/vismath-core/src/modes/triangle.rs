use crate::constants::GestureConfig;
use crate::geometry::triangle::{
    altitude_foot, circumradius, inradius, opposite_midpoint, Triangle, TriangleCenters,
};
use crate::gesture::{FrameInput, VisionResult};
use crate::input::{nearest_point, DragState, InputEvent};
use crate::modes::{Mode, ModeKind};
use crate::render::{draw_button_frame, draw_grid, draw_info_panel, TEXT_MUTED, TEXT_PRIMARY};
use crate::surface::{Surface, TextAlign};
use crate::widgets::ButtonRow;
use glam::DVec2;

const CONTROLS: &str = concat!(
    "<div class=\"control-item\"><span class=\"icon\">🖱️</span>",
    "<span class=\"text\">Drag vertices to reshape</span></div>",
    "<div class=\"control-item\"><span class=\"icon\">🖱️</span>",
    "<span class=\"text\">Click buttons to set type</span></div>",
);

pub const PRESET_BUTTONS: ButtonRow = ButtonRow {
    count: 3,
    width: 100.0,
    height: 32.0,
    gap: 10.0,
    bottom_offset: 60.0,
};

const VERTEX_LABELS: [&str; 3] = ["A", "B", "C"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrianglePreset {
    Acute,
    Right,
    Obtuse,
}

impl TrianglePreset {
    pub const ALL: [TrianglePreset; 3] = [
        TrianglePreset::Acute,
        TrianglePreset::Right,
        TrianglePreset::Obtuse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TrianglePreset::Acute => "Acute",
            TrianglePreset::Right => "Right",
            TrianglePreset::Obtuse => "Obtuse",
        }
    }

    /// Vertex positions in normalized viewport units.
    pub fn points(self) -> Triangle {
        let p = |x, y| DVec2::new(x, y);
        match self {
            TrianglePreset::Acute => [p(0.5, 0.25), p(0.3, 0.65), p(0.7, 0.65)],
            TrianglePreset::Right => [p(0.3, 0.25), p(0.3, 0.65), p(0.7, 0.65)],
            TrianglePreset::Obtuse => [p(0.2, 0.25), p(0.4, 0.65), p(0.8, 0.65)],
        }
    }
}

/// Three draggable vertices with their centroid, circumcenter, incenter and
/// orthocenter drawn live.
pub struct TriangleCentersMode {
    config: GestureConfig,
    points: Triangle,
    preset: TrianglePreset,
    drag: DragState<usize>,
}

impl TriangleCentersMode {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            points: TrianglePreset::Acute.points(),
            preset: TrianglePreset::Acute,
            drag: DragState::idle(),
        }
    }

    pub fn points(&self) -> &Triangle {
        &self.points
    }

    pub fn preset(&self) -> TrianglePreset {
        self.preset
    }

    /// Index of the captured vertex.
    pub fn drag_index(&self) -> Option<usize> {
        self.drag.target()
    }

    pub fn set_preset(&mut self, preset: TrianglePreset) {
        self.preset = preset;
        self.points = preset.points();
    }

    fn nearest_vertex(&self, p: DVec2, radius: f64) -> Option<usize> {
        nearest_point(self.points.iter().copied().enumerate(), p, radius)
    }

    fn screen_points(&self, w: f64, h: f64) -> Triangle {
        let size = DVec2::new(w, h);
        self.points.map(|p| p * size)
    }
}

impl Default for TriangleCentersMode {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl Mode for TriangleCentersMode {
    fn kind(&self) -> ModeKind {
        ModeKind::TriangleCenters
    }

    fn reset(&mut self) {
        self.set_preset(TrianglePreset::Acute);
        self.drag.clear();
    }

    fn update(&mut self, _result: &VisionResult, input: &FrameInput<'_>) {
        let radius = self.config.pinch_capture_radius;
        let points = self.points;
        let was_active = self.drag.is_active();
        let moved = self.drag.pinch(input.active_pinch(), |p| {
            nearest_point(points.iter().copied().enumerate(), p, radius)
        });
        if let Some((i, p)) = moved {
            if !was_active {
                log::debug!("[triangle] pinch captured vertex {}", VERTEX_LABELS[i]);
            }
            self.points[i] = p;
        }
    }

    fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown(sample) => {
                let vp = sample.viewport();
                if let Some(i) = PRESET_BUTTONS.hit(sample.local_px(), vp.width, vp.height) {
                    self.set_preset(TrianglePreset::ALL[i]);
                    log::info!("[triangle] preset {}", self.preset.label());
                    return;
                }
                let p = sample.normalized();
                let pick = self.nearest_vertex(p, self.config.pointer_capture_radius);
                if let Some(i) = self.drag.pointer_down(pick) {
                    self.points[i] = p;
                }
            }
            InputEvent::PointerMove(sample) => {
                if let Some(i) = self.drag.pointer_move() {
                    self.points[i] = sample.normalized();
                }
            }
            InputEvent::PointerUp => self.drag.pointer_up(),
            InputEvent::Wheel { .. } => {}
        }
    }

    fn draw(&self, s: &mut dyn Surface, w: f64, h: f64) {
        draw_grid(s, w, h, 16.0, "rgba(148, 163, 184, 0.05)");

        let pts = self.screen_points(w, h);
        let centers = TriangleCenters::compute(&pts);

        if let Some(o) = centers.circumcenter {
            s.set_stroke_color("rgba(34, 197, 94, 0.4)");
            s.set_line_width(1.5);
            s.circle(o.x, o.y, circumradius(&pts, Some(o)));
            s.stroke();
        }
        if let Some(i) = centers.incenter {
            s.set_stroke_color("rgba(234, 179, 8, 0.5)");
            s.set_line_width(1.5);
            s.circle(i.x, i.y, inradius(&pts));
            s.stroke();
        }

        // medians
        s.set_line_dash(&[4.0, 4.0]);
        s.set_stroke_color("rgba(239, 68, 68, 0.4)");
        s.set_line_width(1.5);
        for (i, v) in pts.iter().enumerate() {
            let mid = opposite_midpoint(&pts, i);
            s.stroke_line(v.x, v.y, mid.x, mid.y);
        }

        // altitudes
        s.set_line_dash(&[2.0, 3.0]);
        s.set_stroke_color("rgba(168, 85, 247, 0.4)");
        for (i, v) in pts.iter().enumerate() {
            if let Some(foot) = altitude_foot(&pts, i) {
                s.stroke_line(v.x, v.y, foot.x, foot.y);
            }
        }
        s.set_line_dash(&[]);

        s.begin_path();
        s.move_to(pts[0].x, pts[0].y);
        s.line_to(pts[1].x, pts[1].y);
        s.line_to(pts[2].x, pts[2].y);
        s.close_path();
        s.set_fill_color("rgba(59, 130, 246, 0.06)");
        s.fill();
        s.set_stroke_color("rgba(59, 130, 246, 0.8)");
        s.set_line_width(2.0);
        s.stroke();

        // Euler line, H through O (G lies on it)
        if let (Some(o), Some(hc)) = (centers.circumcenter, centers.orthocenter) {
            s.set_line_dash(&[6.0, 4.0]);
            s.set_stroke_color("rgba(148, 163, 184, 0.5)");
            s.set_line_width(1.5);
            s.stroke_line(hc.x, hc.y, o.x, o.y);
            s.set_line_dash(&[]);
        }

        draw_center(s, Some(centers.centroid), "#ef4444", "G");
        draw_center(s, centers.circumcenter, "#22c55e", "O");
        draw_center(s, centers.incenter, "#eab308", "I");
        draw_center(s, centers.orthocenter, "#a855f7", "H");

        for (i, p) in pts.iter().enumerate() {
            let captured = self.drag.is_captured(i);
            s.circle(p.x, p.y, if captured { 8.0 } else { 5.0 });
            s.set_fill_color(if captured { "#60a5fa" } else { "rgba(59, 130, 246, 0.8)" });
            s.fill();

            s.set_fill_color(TEXT_PRIMARY);
            s.set_font("500 11px Inter");
            s.set_text_align(TextAlign::Center);
            s.fill_text(VERTEX_LABELS[i], p.x, p.y - 12.0);
        }

        draw_legend(s, w);
        draw_presets(s, w, h);
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

fn draw_center(s: &mut dyn Surface, pos: Option<DVec2>, color: &str, label: &str) {
    let Some(p) = pos else { return };
    s.circle(p.x, p.y, 4.0);
    s.set_fill_color(color);
    s.fill();
    s.set_font("500 10px Inter");
    s.set_text_align(TextAlign::Left);
    s.fill_text(label, p.x + 8.0, p.y + 3.0);
}

fn draw_legend(s: &mut dyn Surface, w: f64) {
    const ITEMS: [(&str, &str, &str, &str); 4] = [
        ("rgba(239, 68, 68, 0.95)", "G", "Centroid", "Intersection of medians"),
        ("rgba(34, 197, 94, 0.95)", "O", "Circumcenter", "Equidistant from vertices"),
        ("rgba(234, 179, 8, 0.95)", "I", "Incenter", "Equidistant from edges"),
        ("rgba(168, 85, 247, 0.95)", "H", "Orthocenter", "Intersection of altitudes"),
    ];
    let (x, y) = draw_info_panel(s, w, 280.0, 200.0, "TRIANGLE CENTERS");
    for (i, (color, label, name, desc)) in ITEMS.iter().enumerate() {
        let iy = y + 60.0 + i as f64 * 36.0;
        s.set_fill_color(color);
        s.circle(x + 28.0, iy, 5.0);
        s.fill();

        s.set_fill_color(TEXT_PRIMARY);
        s.set_font("600 13px Inter");
        s.fill_text(&format!("{}  {}", label, name), x + 44.0, iy + 4.0);

        s.set_fill_color(TEXT_MUTED);
        s.set_font("400 11px Inter");
        s.fill_text(desc, x + 44.0, iy + 20.0);
    }
}

fn draw_presets(s: &mut dyn Surface, w: f64, h: f64) {
    for (i, preset) in TrianglePreset::ALL.iter().enumerate() {
        let rect = PRESET_BUTTONS.rect(i, w, h);
        draw_button_frame(s, rect, 6.0, "rgba(255, 255, 255, 0.05)", "rgba(255, 255, 255, 0.1)");
        s.set_fill_color(TEXT_PRIMARY);
        s.set_font("500 12px Inter");
        s.set_text_align(TextAlign::Center);
        s.fill_text(preset.label(), rect[0] + rect[2] / 2.0, rect[1] + 20.0);
    }
}
