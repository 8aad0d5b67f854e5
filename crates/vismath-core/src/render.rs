//! Drawing helpers shared by the modes: background grid, glass info panels,
//! wrapped text, arrows and rounded buttons.

use crate::surface::{Surface, TextAlign};
use std::f64::consts::FRAC_PI_6;

pub const PANEL_FILL: &str = "rgba(15, 23, 42, 0.95)";
pub const PANEL_BORDER: &str = "rgba(100, 180, 255, 0.2)";
pub const PANEL_TITLE: &str = "#60a5fa";
pub const PANEL_MARGIN: f64 = 24.0; // from the right edge
pub const PANEL_TOP: f64 = 80.0;
pub const TEXT_PRIMARY: &str = "#e2e8f0";
pub const TEXT_MUTED: &str = "#94a3b8";
pub const ARROW_HEAD_LEN: f64 = 10.0;

/// Faint square grid with `divisions` cells along the shorter side.
pub fn draw_grid(s: &mut dyn Surface, w: f64, h: f64, divisions: f64, color: &str) {
    let step = w.min(h) / divisions;
    if step.is_nan() || step <= 0.0 {
        return;
    }
    s.set_stroke_color(color);
    s.set_line_width(1.0);
    let mut x = 0.0;
    while x < w {
        s.stroke_line(x, 0.0, x, h);
        x += step;
    }
    let mut y = 0.0;
    while y < h {
        s.stroke_line(0.0, y, w, y);
        y += step;
    }
}

/// Draws the dark rounded panel anchored top-right and its title.
/// Returns the panel's top-left corner.
pub fn draw_info_panel(
    s: &mut dyn Surface,
    w: f64,
    panel_w: f64,
    panel_h: f64,
    title: &str,
) -> (f64, f64) {
    let x = w - panel_w - PANEL_MARGIN;
    let y = PANEL_TOP;
    s.set_fill_color(PANEL_FILL);
    s.begin_path();
    s.round_rect(x, y, panel_w, panel_h, 12.0);
    s.fill();
    s.set_stroke_color(PANEL_BORDER);
    s.set_line_width(1.0);
    s.stroke();

    s.set_fill_color(PANEL_TITLE);
    s.set_font("bold 16px Inter");
    s.set_text_align(TextAlign::Left);
    s.fill_text(title, x + 20.0, y + 30.0);
    (x, y)
}

/// Greedy word wrap using the surface's text metrics. Returns the number of
/// lines emitted.
pub fn wrap_text(
    s: &mut dyn Surface,
    text: &str,
    x: f64,
    mut y: f64,
    max_width: f64,
    line_height: f64,
) -> usize {
    let mut lines = 0;
    let mut line = String::new();
    for (n, word) in text.split(' ').enumerate() {
        let candidate = format!("{}{} ", line, word);
        if s.measure_text(&candidate) > max_width && n > 0 {
            s.fill_text(&line, x, y);
            lines += 1;
            line = format!("{} ", word);
            y += line_height;
        } else {
            line = candidate;
        }
    }
    s.fill_text(&line, x, y);
    lines + 1
}

/// Shaft plus a filled head at (x2, y2).
pub fn draw_arrow(s: &mut dyn Surface, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) {
    let angle = (y2 - y1).atan2(x2 - x1);
    s.set_stroke_color(color);
    s.set_fill_color(color);
    s.set_line_width(2.0);
    s.stroke_line(x1, y1, x2, y2);

    s.begin_path();
    s.move_to(x2, y2);
    s.line_to(
        x2 - ARROW_HEAD_LEN * (angle - FRAC_PI_6).cos(),
        y2 - ARROW_HEAD_LEN * (angle - FRAC_PI_6).sin(),
    );
    s.line_to(
        x2 - ARROW_HEAD_LEN * (angle + FRAC_PI_6).cos(),
        y2 - ARROW_HEAD_LEN * (angle + FRAC_PI_6).sin(),
    );
    s.line_to(x2, y2);
    s.fill();
}

/// Filled and outlined rounded rectangle.
pub fn draw_button_frame(
    s: &mut dyn Surface,
    rect: [f64; 4],
    radius: f64,
    fill: &str,
    stroke: &str,
) {
    let [x, y, bw, bh] = rect;
    s.set_fill_color(fill);
    s.set_stroke_color(stroke);
    s.set_line_width(1.0);
    s.begin_path();
    s.round_rect(x, y, bw, bh, radius);
    s.fill();
    s.stroke();
}
