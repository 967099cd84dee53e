//! Path building operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::geometry::{ArcParams, RectParams};
use kurbo::PathEl;

impl Canvas2dContext {
    /// Begin a new path.
    pub fn begin_path(&mut self) {
        log::debug!(target: "canvas", "beginPath");
        self.path_builder = tiny_skia::PathBuilder::new();
        self.has_current_point = false;
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "moveTo {} {}", x, y);
        self.path_builder.move_to(x, y);
        self.current_x = x;
        self.current_y = y;
        self.subpath_start_x = x;
        self.subpath_start_y = y;
        self.has_current_point = true;
    }

    /// Draw a line to a point.
    ///
    /// Without a current point this behaves like `move_to`.
    pub fn line_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "lineTo {} {}", x, y);
        if !self.has_current_point {
            self.move_to(x, y);
            return;
        }
        self.path_builder.line_to(x, y);
        self.current_x = x;
        self.current_y = y;
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        log::debug!(target: "canvas", "closePath");
        if !self.has_current_point {
            return;
        }
        self.path_builder.close();
        self.current_x = self.subpath_start_x;
        self.current_y = self.subpath_start_y;
    }

    /// Add a closed rectangle subpath.
    pub fn rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "rect {} {} {} {}", params.x, params.y, params.width, params.height);
        let RectParams {
            x,
            y,
            width,
            height,
        } = *params;

        self.path_builder.move_to(x, y);
        self.path_builder.line_to(x + width, y);
        self.path_builder.line_to(x + width, y + height);
        self.path_builder.line_to(x, y + height);
        self.path_builder.close();

        self.current_x = x;
        self.current_y = y;
        self.subpath_start_x = x;
        self.subpath_start_y = y;
        self.has_current_point = true;
    }

    /// Add a circular arc to the path.
    ///
    /// The arc's start point is joined to the current point with a straight
    /// line, or opens a new subpath when there is no current point.
    /// A negative radius is an `IndexSize` error and leaves the path untouched.
    pub fn arc(&mut self, params: &ArcParams) -> Canvas2dResult<()> {
        log::debug!(
            target: "canvas",
            "arc {} {} r={} {}..{} anticlockwise={}",
            params.x, params.y, params.radius, params.start_angle, params.end_angle, params.anticlockwise
        );
        let finite = [
            params.x,
            params.y,
            params.radius,
            params.start_angle,
            params.end_angle,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Ok(());
        }
        if params.radius < 0.0 {
            return Err(Canvas2dError::IndexSize(format!(
                "arc radius {} is negative",
                params.radius
            )));
        }

        let (start, elements) = crate::arc::arc_elements(params);
        self.line_to(start.x as f32, start.y as f32);

        for el in elements {
            match el {
                PathEl::MoveTo(p) => self.move_to(p.x as f32, p.y as f32),
                PathEl::LineTo(p) => self.line_to(p.x as f32, p.y as f32),
                PathEl::QuadTo(c, p) => {
                    self.path_builder
                        .quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32);
                    self.current_x = p.x as f32;
                    self.current_y = p.y as f32;
                }
                PathEl::CurveTo(c1, c2, p) => {
                    self.path_builder.cubic_to(
                        c1.x as f32,
                        c1.y as f32,
                        c2.x as f32,
                        c2.y as f32,
                        p.x as f32,
                        p.y as f32,
                    );
                    self.current_x = p.x as f32;
                    self.current_y = p.y as f32;
                }
                PathEl::ClosePath => self.close_path(),
            }
        }
        Ok(())
    }

    /// Current point of the path, if any.
    pub fn current_point(&self) -> Option<(f32, f32)> {
        self.has_current_point
            .then_some((self.current_x, self.current_y))
    }
}
