//! Canvas-drawn controls: a centered row of buttons and a horizontal slider.

use glam::DVec2;

/// A horizontally centered row of equal buttons, positioned in pixels from
/// the bottom of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonRow {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub gap: f64,
    /// Distance from the viewport bottom to the row's top edge.
    pub bottom_offset: f64,
}

impl ButtonRow {
    pub fn total_width(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.count as f64 * self.width + (self.count - 1) as f64 * self.gap
    }

    /// `[x, y, w, h]` of button `i` in a `w`×`h` viewport.
    pub fn rect(&self, i: usize, w: f64, h: f64) -> [f64; 4] {
        let start_x = (w - self.total_width()) / 2.0;
        [
            start_x + i as f64 * (self.width + self.gap),
            h - self.bottom_offset,
            self.width,
            self.height,
        ]
    }

    /// Index of the button under `px` (canvas pixels), edges inclusive.
    pub fn hit(&self, px: DVec2, w: f64, h: f64) -> Option<usize> {
        (0..self.count).find(|&i| {
            let [x, y, bw, bh] = self.rect(i, w, h);
            px.x >= x && px.x <= x + bw && px.y >= y && px.y <= y + bh
        })
    }
}

/// Slider track in normalized viewport units; `value` is in [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub label: &'static str,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Slider {
    /// Whether `p` lies on the track grown by `slop` on each side.
    pub fn contains(&self, p: DVec2, slop: DVec2) -> bool {
        p.x >= self.x - slop.x
            && p.x <= self.x + self.w + slop.x
            && p.y >= self.y - slop.y
            && p.y <= self.y + self.h + slop.y
    }

    /// Moves the thumb under horizontal position `x`; returns the new value.
    pub fn set_from_x(&mut self, x: f64) -> f64 {
        self.value = if self.w > 0.0 {
            ((x - self.x) / self.w).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.value
    }
}
