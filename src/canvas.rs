use vismath_core::surface::{Paint, Surface, TextAlign};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] over a browser Canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    /// Maps CSS pixels onto the device-pixel backing store.
    pub fn begin_frame(&self, device_pixel_ratio: f64) {
        _ = self
            .ctx
            .set_transform(device_pixel_ratio, 0.0, 0.0, device_pixel_ratio, 0.0, 0.0);
    }

    fn apply_paint(&self, paint: &Paint, fill: bool) {
        match paint {
            Paint::Solid(color) => {
                if fill {
                    self.ctx.set_fill_style_str(color);
                } else {
                    self.ctx.set_stroke_style_str(color);
                }
            }
            Paint::Radial(g) => {
                let (x0, y0, r0) = g.inner;
                let (x1, y1, r1) = g.outer;
                let Ok(gradient) = self.ctx.create_radial_gradient(x0, y0, r0, x1, y1, r1) else {
                    return;
                };
                for (offset, color) in &g.stops {
                    _ = gradient.add_color_stop(*offset as f32, color);
                }
                if fill {
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                } else {
                    self.ctx.set_stroke_style_canvas_gradient(&gradient);
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.ctx.arc(x, y, radius.max(0.0), start, end).ok();
    }
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.rect(x, y, w, h);
    }
    fn round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, radius: f64) {
        let r = radius.min(w.abs() / 2.0).min(h.abs() / 2.0).max(0.0);
        self.ctx.move_to(x + r, y);
        _ = self.ctx.arc_to(x + w, y, x + w, y + h, r);
        _ = self.ctx.arc_to(x + w, y + h, x, y + h, r);
        _ = self.ctx.arc_to(x, y + h, x, y, r);
        _ = self.ctx.arc_to(x, y, x + w, y, r);
        self.ctx.close_path();
    }
    fn close_path(&mut self) {
        self.ctx.close_path();
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }
    fn set_fill(&mut self, paint: &Paint) {
        self.apply_paint(paint, true);
    }
    fn set_stroke(&mut self, paint: &Paint) {
        self.apply_paint(paint, false);
    }
    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }
    fn set_line_dash(&mut self, segments: &[f64]) {
        let arr = js_sys::Array::new();
        for s in segments {
            arr.push(&JsValue::from_f64(*s));
        }
        _ = self.ctx.set_line_dash(&arr);
    }
    fn set_shadow(&mut self, color: &str, blur: f64) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur);
    }
    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }
    fn set_text_align(&mut self, align: TextAlign) {
        self.ctx.set_text_align(align.as_css());
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        _ = self.ctx.fill_text(text, x, y);
    }
    fn measure_text(&mut self, text: &str) -> f64 {
        self.ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
    }
}
