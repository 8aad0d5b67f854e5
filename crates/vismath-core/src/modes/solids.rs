use crate::color::add_alpha;
use crate::constants::*;
use crate::geometry::solids::{depth_order, project, Rotation, Solid, SolidKind};
use crate::gesture::{FrameInput, VisionResult};
use crate::input::{DragState, InputEvent};
use crate::modes::{Mode, ModeKind};
use crate::render::{draw_button_frame, draw_grid, draw_info_panel, PANEL_TITLE, TEXT_MUTED, TEXT_PRIMARY};
use crate::surface::Surface;
use crate::widgets::ButtonRow;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

const CONTROLS: &str = concat!(
    "<div class=\"control-item\"><span class=\"icon\">🤏</span>",
    "<span class=\"text\">Left Pinch: Rotate Speed</span></div>",
    "<div class=\"control-item\"><span class=\"icon\">🤏</span>",
    "<span class=\"text\">Right Pinch: Zoom Scale</span></div>",
    "<div class=\"control-item\"><span class=\"icon\">🖱️</span>",
    "<span class=\"text\">Click icons below to switch shape</span></div>",
);

pub const SOLID_BUTTONS: ButtonRow = ButtonRow {
    count: SolidKind::ALL.len(),
    width: 40.0,
    height: 40.0,
    gap: 10.0,
    bottom_offset: 80.0,
};

const DEFAULT_SOLID: usize = 1; // cube

/// The only draggable thing here is the view itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RotateView;

/// A rotating, depth-sorted polyhedron with hand-controlled spin and zoom.
pub struct PlatonicSolidsMode {
    selected: usize,
    solid: Solid,
    rotation: Rotation,
    rotation_speed: f64,
    auto_rotate: bool,
    scale: f64,
    target_scale: f64,
    drag: DragState<RotateView>,
    last_pointer: DVec2,
}

impl PlatonicSolidsMode {
    pub fn new() -> Self {
        let [x, y, z] = DEFAULT_ROTATION;
        Self {
            selected: DEFAULT_SOLID,
            solid: Solid::load(SolidKind::ALL[DEFAULT_SOLID]),
            rotation: Rotation::new(x, y, z),
            rotation_speed: DEFAULT_ROTATION_SPEED,
            auto_rotate: true,
            scale: 1.0,
            target_scale: 1.0,
            drag: DragState::idle(),
            last_pointer: DVec2::ZERO,
        }
    }

    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    /// Loads catalogue entry `index`; out-of-range indices are ignored.
    pub fn select_solid(&mut self, index: usize) {
        let Some(&kind) = SolidKind::ALL.get(index) else {
            return;
        };
        self.selected = index;
        self.solid = Solid::load(kind);
        log::info!(
            "[solids] loaded {} (V={} E={} F={})",
            kind.name(),
            self.solid.vertices.len(),
            self.solid.edges.len(),
            self.solid.faces.len()
        );
    }
}

impl Default for PlatonicSolidsMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Mode for PlatonicSolidsMode {
    fn kind(&self) -> ModeKind {
        ModeKind::PlatonicSolids
    }

    fn reset(&mut self) {
        let [x, y, z] = DEFAULT_ROTATION;
        self.rotation = Rotation::new(x, y, z);
        self.rotation_speed = DEFAULT_ROTATION_SPEED;
        self.auto_rotate = true;
        self.scale = 1.0;
        self.target_scale = 1.0;
        self.drag.clear();
        self.select_solid(self.selected);
    }

    fn update(&mut self, _result: &VisionResult, input: &FrameInput<'_>) {
        if let Some(d) = input.left_hand.and_then(|h| h.pinch_opening()) {
            let boost = ((d - PINCH_REST_DISTANCE) * ROTATION_SPEED_GAIN).max(0.0);
            self.rotation_speed = ROTATION_SPEED_MIN + boost.min(ROTATION_SPEED_SPAN);
            self.auto_rotate = true;
        }
        if let Some(d) = input.right_hand.and_then(|h| h.pinch_opening()) {
            self.target_scale = (HAND_SCALE_BASE + (d - PINCH_REST_DISTANCE) * HAND_SCALE_GAIN)
                .clamp(HAND_SCALE_MIN, HAND_SCALE_MAX);
        }

        if self.auto_rotate {
            self.rotation.y += self.rotation_speed;
            self.rotation.x += self.rotation_speed * AUTO_ROTATE_X_RATIO;
        }
        self.scale += (self.target_scale - self.scale) * SCALE_SMOOTHING;
    }

    fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown(sample) => {
                let vp = sample.viewport();
                if let Some(i) = SOLID_BUTTONS.hit(sample.local_px(), vp.width, vp.height) {
                    self.select_solid(i);
                    return;
                }
                if self.drag.pointer_down(Some(RotateView)).is_some() {
                    self.auto_rotate = false;
                    self.last_pointer = sample.local_px();
                }
            }
            InputEvent::PointerMove(sample) => {
                if self.drag.pointer_move().is_some() {
                    let p = sample.local_px();
                    let delta = p - self.last_pointer;
                    self.rotation.y += delta.x * DRAG_ROTATE_FACTOR;
                    self.rotation.x += delta.y * DRAG_ROTATE_FACTOR;
                    self.last_pointer = p;
                }
            }
            InputEvent::PointerUp => self.drag.pointer_up(),
            InputEvent::Wheel { delta_y } => {
                self.target_scale = (self.target_scale - delta_y * WHEEL_ZOOM_FACTOR)
                    .clamp(WHEEL_SCALE_MIN, WHEEL_SCALE_MAX);
            }
        }
    }

    fn draw(&self, s: &mut dyn Surface, w: f64, h: f64) {
        draw_grid(s, w, h, 16.0, "rgba(148, 163, 184, 0.04)");

        let size = w.min(h);
        let center = DVec2::new(w / 2.0, h / 2.0);
        let projected: Vec<_> = self
            .solid
            .vertices
            .iter()
            .map(|&v| project(v, &self.rotation, self.scale, size, center))
            .collect();

        for fi in depth_order(&self.solid.faces, |v| projected[v].z) {
            let face = &self.solid.faces[fi];
            let Some(&first) = face.first() else { continue };
            s.begin_path();
            s.move_to(projected[first].x, projected[first].y);
            for &v in &face[1..] {
                s.line_to(projected[v].x, projected[v].y);
            }
            s.close_path();
            s.set_fill_color(&add_alpha(self.solid.face_color(fi), FACE_ALPHA));
            s.fill();
            s.set_stroke_color("rgba(255, 255, 255, 0.2)");
            s.set_line_width(1.0);
            s.stroke();
        }

        s.set_stroke_color("rgba(255, 255, 255, 0.5)");
        s.set_line_width(1.0);
        for &[a, b] in &self.solid.edges {
            s.stroke_line(projected[a].x, projected[a].y, projected[b].x, projected[b].y);
        }

        s.set_fill_color(TEXT_PRIMARY);
        for p in &projected {
            s.circle(p.x, p.y, 2.0);
            s.fill();
        }

        self.draw_selector(s, w, h);
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

impl PlatonicSolidsMode {
    fn draw_selector(&self, s: &mut dyn Surface, w: f64, h: f64) {
        for (i, kind) in SolidKind::ALL.iter().enumerate() {
            let rect = SOLID_BUTTONS.rect(i, w, h);
            let (fill, stroke) = if i == self.selected {
                ("rgba(59, 130, 246, 0.3)", "#3b82f6")
            } else {
                ("rgba(255, 255, 255, 0.05)", "rgba(255, 255, 255, 0.1)")
            };
            draw_button_frame(s, rect, 8.0, fill, stroke);
            draw_icon(s, rect[0] + rect[2] / 2.0, rect[1] + rect[3] / 2.0, *kind);
        }
    }

    fn draw_info(&self, s: &mut dyn Surface, w: f64) {
        let kind = self.solid.kind;
        let (v, e, f) = (
            self.solid.vertices.len(),
            self.solid.edges.len(),
            self.solid.faces.len(),
        );
        let title = kind.name().to_uppercase();
        let (x, y) = draw_info_panel(s, w, 220.0, 160.0, &title);

        s.set_fill_color(TEXT_PRIMARY);
        s.set_font("500 13px Inter");
        s.fill_text(
            &format!("Faces: {} ({})", f, self.solid.face_description()),
            x + 20.0,
            y + 60.0,
        );
        s.fill_text(&format!("Vertices: {}", v), x + 20.0, y + 82.0);
        s.fill_text(&format!("Edges: {}", e), x + 20.0, y + 104.0);

        s.set_fill_color(TEXT_MUTED);
        s.set_font("400 11px Inter");
        s.fill_text(&format!("Dual: {}", kind.dual_name()), x + 20.0, y + 126.0);

        s.set_fill_color(PANEL_TITLE);
        s.set_font("bold 14px Inter");
        s.fill_text(
            &format!(
                "V − E + F = {} − {} + {} = {}",
                v,
                e,
                f,
                self.solid.euler_characteristic()
            ),
            x + 20.0,
            y + 150.0,
        );
    }
}

/// Small outline glyph for a selector button.
fn draw_icon(s: &mut dyn Surface, cx: f64, cy: f64, kind: SolidKind) {
    const R: f64 = 8.0;
    s.set_stroke_color(TEXT_PRIMARY);
    s.set_line_width(1.5);
    s.begin_path();
    match kind {
        SolidKind::Tetrahedron | SolidKind::SquarePyramid => {
            s.move_to(cx, cy - R);
            s.line_to(cx + R, cy + R);
            s.line_to(cx - R, cy + R);
            s.close_path();
        }
        SolidKind::Cube => s.rect(cx - R, cy - R, R * 2.0, R * 2.0),
        SolidKind::Octahedron => {
            s.move_to(cx, cy - R);
            s.line_to(cx + R, cy);
            s.line_to(cx, cy + R);
            s.line_to(cx - R, cy);
            s.close_path();
        }
        SolidKind::Dodecahedron => polygon(s, cx, cy, R, 5, -FRAC_PI_2),
        SolidKind::Icosahedron => polygon(s, cx, cy, R, 6, 0.0),
        _ => s.arc(cx, cy, R, 0.0, TAU),
    }
    s.stroke();
}

fn polygon(s: &mut dyn Surface, cx: f64, cy: f64, r: f64, sides: usize, phase: f64) {
    for j in 0..sides {
        let a = j as f64 * TAU / sides as f64 + phase;
        let (px, py) = (cx + r * a.cos(), cy + r * a.sin());
        if j == 0 {
            s.move_to(px, py);
        } else {
            s.line_to(px, py);
        }
    }
    s.close_path();
}
