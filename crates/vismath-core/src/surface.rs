//! Abstract 2D drawing surface.
//!
//! Modes never talk to a concrete canvas. They issue immediate-mode path and
//! text commands against [`Surface`], which the web front-end implements over
//! a Canvas 2D context and tests implement with [`RecordingSurface`].

use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Radial gradient between two circles with ordered color stops.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner: (f64, f64, f64),
    pub outer: (f64, f64, f64),
    pub stops: Vec<(f64, String)>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(String),
    Radial(RadialGradient),
}

impl Paint {
    pub fn solid(color: &str) -> Self {
        Paint::Solid(color.to_string())
    }
}

pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill(&mut self, paint: &Paint);
    fn set_stroke(&mut self, paint: &Paint);
    fn set_line_width(&mut self, width: f64);
    /// Empty slice restores solid lines.
    fn set_line_dash(&mut self, segments: &[f64]);
    /// Zero blur disables the shadow.
    fn set_shadow(&mut self, color: &str, blur: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn measure_text(&mut self, text: &str) -> f64;

    fn set_fill_color(&mut self, color: &str) {
        self.set_fill(&Paint::solid(color));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.set_stroke(&Paint::solid(color));
    }

    /// Starts a new path holding a full circle.
    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.begin_path();
        self.arc(x, y, radius, 0.0, TAU);
    }

    /// Strokes a single segment as its own path.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.begin_path();
        self.move_to(x1, y1);
        self.line_to(x2, y2);
        self.stroke();
    }
}

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    ClearRect(f64, f64, f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Arc { x: f64, y: f64, radius: f64 },
    Rect(f64, f64, f64, f64),
    RoundRect(f64, f64, f64, f64),
    ClosePath,
    Fill,
    Stroke,
    FillStyle(Paint),
    StrokeStyle(Paint),
    LineWidth(f64),
    LineDash(Vec<f64>),
    Shadow(String, f64),
    Font(String),
    TextAlign(TextAlign),
    Text { text: String, x: f64, y: f64 },
}

/// Surface that records every call, for host-side tests.
#[derive(Debug)]
pub struct RecordingSurface {
    pub commands: Vec<Command>,
    /// Fixed advance per character used by `measure_text`.
    pub char_width: f64,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            char_width: 7.0,
        }
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    pub fn count(&self, pred: impl Fn(&Command) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Position of the first text command that contains `needle`.
    pub fn text_position(&self, needle: &str) -> Option<(f64, f64)> {
        self.commands.iter().find_map(|c| match c {
            Command::Text { text, x, y } if text.contains(needle) => Some((*x, *y)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(Command::ClearRect(x, y, w, h));
    }
    fn begin_path(&mut self) {
        self.commands.push(Command::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(Command::LineTo(x, y));
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, _start: f64, _end: f64) {
        self.commands.push(Command::Arc { x, y, radius });
    }
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(Command::Rect(x, y, w, h));
    }
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, _radius: f64) {
        self.commands.push(Command::RoundRect(x, y, w, h));
    }
    fn close_path(&mut self) {
        self.commands.push(Command::ClosePath);
    }
    fn fill(&mut self) {
        self.commands.push(Command::Fill);
    }
    fn stroke(&mut self) {
        self.commands.push(Command::Stroke);
    }
    fn set_fill(&mut self, paint: &Paint) {
        self.commands.push(Command::FillStyle(paint.clone()));
    }
    fn set_stroke(&mut self, paint: &Paint) {
        self.commands.push(Command::StrokeStyle(paint.clone()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.commands.push(Command::LineWidth(width));
    }
    fn set_line_dash(&mut self, segments: &[f64]) {
        self.commands.push(Command::LineDash(segments.to_vec()));
    }
    fn set_shadow(&mut self, color: &str, blur: f64) {
        self.commands.push(Command::Shadow(color.to_string(), blur));
    }
    fn set_font(&mut self, font: &str) {
        self.commands.push(Command::Font(font.to_string()));
    }
    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(Command::TextAlign(align));
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.commands.push(Command::Text {
            text: text.to_string(),
            x,
            y,
        });
    }
    fn measure_text(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }
}
