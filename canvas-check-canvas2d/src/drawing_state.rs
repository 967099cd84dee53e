//! Drawing state that can be saved and restored.

use crate::style::{LineCap, LineJoin};

/// Drawing state that can be saved and restored.
#[derive(Debug, Clone)]
pub struct DrawingState {
    /// Current fill color.
    pub fill_style: tiny_skia::Color,
    /// Current stroke color.
    pub stroke_style: tiny_skia::Color,
    /// Current line width.
    pub line_width: f32,
    /// Current line cap style.
    pub line_cap: LineCap,
    /// Current line join style.
    pub line_join: LineJoin,
    /// Current miter limit.
    pub miter_limit: f32,
    /// Current global alpha.
    pub global_alpha: f32,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            // Default is opaque black
            fill_style: tiny_skia::Color::BLACK,
            stroke_style: tiny_skia::Color::BLACK,
            line_width: 1.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            miter_limit: 10.0,
            global_alpha: 1.0,
        }
    }
}
