//! Fill, stroke, and rectangle operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::geometry::RectParams;
use crate::style::CanvasFillRule;
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Fill the current path using the non-zero winding rule.
    pub fn fill(&mut self) {
        log::debug!(target: "canvas", "fill");
        self.fill_with_rule(CanvasFillRule::NonZero);
    }

    /// Fill the current path with the specified fill rule.
    ///
    /// Open subpaths are closed implicitly. The path is kept for a later stroke.
    pub fn fill_with_rule(&mut self, fill_rule: CanvasFillRule) {
        log::debug!(target: "canvas", "fill_with_rule {:?}", fill_rule);
        let Some(path) = self.path_builder.clone().finish() else {
            return;
        };
        let paint = self.paint_for(self.state.fill_style);
        self.pixmap.fill_path(
            &path,
            &paint,
            fill_rule.into(),
            Transform::identity(),
            None,
        );
    }

    /// Stroke the current path with the current line style.
    pub fn stroke(&mut self) {
        log::debug!(target: "canvas", "stroke");
        let Some(path) = self.path_builder.clone().finish() else {
            return;
        };
        let stroke = tiny_skia::Stroke {
            width: self.state.line_width,
            line_cap: self.state.line_cap.into(),
            line_join: self.state.line_join.into(),
            miter_limit: self.state.miter_limit,
            dash: None,
        };
        let paint = self.paint_for(self.state.stroke_style);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Fill a rectangle.
    ///
    /// The current path is left untouched.
    pub fn fill_rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", params.x, params.y, params.width, params.height);
        let Some(rect) = device_rect(params) else {
            return;
        };
        let paint = self.paint_for(self.state.fill_style);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Stroke a rectangle.
    ///
    /// The current path is left untouched.
    pub fn stroke_rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "strokeRect {} {} {} {}", params.x, params.y, params.width, params.height);
        let Some(rect) = device_rect(params) else {
            return;
        };
        let path = tiny_skia::PathBuilder::from_rect(rect);
        let stroke = tiny_skia::Stroke {
            width: self.state.line_width,
            line_cap: self.state.line_cap.into(),
            line_join: self.state.line_join.into(),
            miter_limit: self.state.miter_limit,
            dash: None,
        };
        let paint = self.paint_for(self.state.stroke_style);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Clear a rectangle (set pixels to transparent black).
    pub fn clear_rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "clearRect {} {} {} {}", params.x, params.y, params.width, params.height);
        let Some(rect) = device_rect(params) else {
            return;
        };
        let paint = tiny_skia::Paint {
            blend_mode: tiny_skia::BlendMode::Clear,
            ..Default::default()
        };
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn paint_for(&self, color: tiny_skia::Color) -> tiny_skia::Paint<'static> {
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        let mut color = color;
        if self.state.global_alpha < 1.0 {
            color.set_alpha((color.alpha() * self.state.global_alpha).clamp(0.0, 1.0));
        }
        paint.set_color(color);
        paint
    }
}

/// Normalized rectangle; negative width or height grows toward the origin.
/// Empty or non-finite rectangles yield `None`.
fn device_rect(params: &RectParams) -> Option<tiny_skia::Rect> {
    let left = params.x.min(params.x + params.width);
    let top = params.y.min(params.y + params.height);
    tiny_skia::Rect::from_xywh(left, top, params.width.abs(), params.height.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LineCap;

    fn rect(x: f32, y: f32, width: f32, height: f32) -> RectParams {
        RectParams {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_fill_rect_pixels() {
        let mut ctx = Canvas2dContext::new(100, 100).unwrap();
        ctx.set_fill_style("#ff0000").unwrap();
        ctx.fill_rect(&rect(10.0, 10.0, 50.0, 50.0));

        assert_eq!(ctx.get_pixel(30, 30), Some([255, 0, 0, 255]));
        assert_eq!(ctx.get_pixel(5, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_rect_keeps_current_path() {
        let mut ctx = Canvas2dContext::new(20, 20).unwrap();
        ctx.begin_path();
        ctx.move_to(2.0, 3.0);
        ctx.fill_rect(&rect(0.0, 0.0, 5.0, 5.0));
        assert_eq!(ctx.current_point(), Some((2.0, 3.0)));
    }

    #[test]
    fn test_fill_rect_negative_size() {
        let mut ctx = Canvas2dContext::new(20, 20).unwrap();
        ctx.set_fill_style("#00f").unwrap();
        ctx.fill_rect(&rect(10.0, 10.0, -10.0, -10.0));
        assert_eq!(ctx.get_pixel(5, 5), Some([0, 0, 255, 255]));
        assert_eq!(ctx.get_pixel(15, 15), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_stroke_rect_pixels() {
        let mut ctx = Canvas2dContext::new(100, 100).unwrap();
        ctx.set_stroke_style("#0000ff").unwrap();
        ctx.set_line_width(2.0);
        ctx.stroke_rect(&rect(20.0, 20.0, 60.0, 60.0));

        let [_, _, b, a] = ctx.get_pixel(50, 20).unwrap();
        assert!(b > 200);
        assert!(a > 0);
        assert_eq!(ctx.get_pixel(50, 50), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_clear_rect() {
        let mut ctx = Canvas2dContext::new(40, 40).unwrap();
        ctx.set_fill_style("#0f0").unwrap();
        ctx.fill_rect(&rect(0.0, 0.0, 40.0, 40.0));
        ctx.clear_rect(&rect(10.0, 10.0, 10.0, 10.0));

        assert_eq!(ctx.get_pixel(15, 15), Some([0, 0, 0, 0]));
        assert_eq!(ctx.get_pixel(25, 25), Some([0, 255, 0, 255]));
    }

    #[test]
    fn test_butt_cap_stops_at_endpoint() {
        let mut ctx = Canvas2dContext::new(50, 50).unwrap();
        ctx.set_stroke_style("#0f0").unwrap();
        ctx.set_line_width(20.0);
        ctx.begin_path();
        ctx.move_to(25.0, 15.0);
        ctx.line_to(25.0, 35.0);
        ctx.stroke();

        assert_eq!(ctx.get_pixel(25, 20), Some([0, 255, 0, 255]));
        assert_eq!(ctx.get_pixel(25, 10), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_square_cap_extends_past_endpoint() {
        let mut ctx = Canvas2dContext::new(50, 50).unwrap();
        ctx.set_stroke_style("#0f0").unwrap();
        ctx.set_line_width(20.0);
        ctx.set_line_cap(LineCap::Square);
        ctx.begin_path();
        ctx.move_to(25.0, 15.0);
        ctx.line_to(25.0, 35.0);
        ctx.stroke();

        assert_eq!(ctx.get_pixel(25, 10), Some([0, 255, 0, 255]));
        assert_eq!(ctx.get_pixel(25, 44), Some([0, 255, 0, 255]));
        assert_eq!(ctx.get_pixel(25, 46), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_global_alpha_applies_to_fill() {
        let mut ctx = Canvas2dContext::new(10, 10).unwrap();
        ctx.set_fill_style("#000").unwrap();
        ctx.set_global_alpha(0.0);
        ctx.fill_rect(&rect(0.0, 0.0, 10.0, 10.0));
        assert_eq!(ctx.get_pixel(5, 5), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_fill_rule_nested_rects() {
        let nested = |ctx: &mut Canvas2dContext| {
            ctx.begin_path();
            ctx.rect(&rect(0.0, 0.0, 20.0, 20.0));
            ctx.rect(&rect(5.0, 5.0, 10.0, 10.0));
        };

        let mut ctx = Canvas2dContext::new(20, 20).unwrap();
        ctx.set_fill_style("#f00").unwrap();
        nested(&mut ctx);
        ctx.fill_with_rule(CanvasFillRule::EvenOdd);
        assert_eq!(ctx.get_pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(ctx.get_pixel(10, 10), Some([0, 0, 0, 0]));

        // Both rects wind the same way, so non-zero fills the hole too
        let mut ctx = Canvas2dContext::new(20, 20).unwrap();
        ctx.set_fill_style("#f00").unwrap();
        nested(&mut ctx);
        ctx.fill();
        assert_eq!(ctx.get_pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(ctx.get_pixel(10, 10), Some([255, 0, 0, 255]));
    }
}
