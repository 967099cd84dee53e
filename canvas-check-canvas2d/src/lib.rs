//! Minimal Canvas 2D rendering surface built on `tiny-skia`.
//!
//! This crate implements the subset of the Canvas 2D API that pixel
//! conformance cases draw with: rectangles, straight and circular path
//! segments, fill and stroke with line caps and joins, and pixel readback.
//!
//! # Example
//!
//! ```rust
//! use canvas_check_canvas2d::{Canvas2dContext, LineCap, RectParams};
//!
//! let mut ctx = Canvas2dContext::new(100, 50)?;
//! ctx.set_fill_style("#0f0")?;
//! ctx.fill_rect(&RectParams { x: 0.0, y: 0.0, width: 100.0, height: 50.0 });
//! ctx.set_line_cap(LineCap::Round);
//! assert_eq!(ctx.get_pixel(10, 10), Some([0, 255, 0, 255]));
//! # Ok::<(), canvas_check_canvas2d::Canvas2dError>(())
//! ```

mod arc;
mod context;
mod drawing_state;
mod error;
mod geometry;
mod style;

// Re-export public API
pub use context::Canvas2dContext;
pub use drawing_state::DrawingState;
pub use error::{Canvas2dError, Canvas2dResult};
pub use geometry::{ArcParams, RectParams};
pub use style::{CanvasFillRule, LineCap, LineJoin};
