//! `2d.line.cap.*`: each scene hides red under a stroke whose cap must cover
//! it exactly, and paints green over a red stroke the cap must not exceed.
//!
//! All three draw on a 100x50 green canvas with `lineWidth = 20`. The left
//! half checks that the cap reaches far enough, the right half that it does
//! not reach too far.

use super::{samples_of, ConformanceCase, GREEN};
use canvas_check_canvas2d::{ArcParams, Canvas2dContext, Canvas2dResult, LineCap, RectParams};
use std::f32::consts::PI;

const WIDTH: u32 = 100;
const HEIGHT: u32 = 50;
const LINE_WIDTH: f32 = 20.0;

/// Offset applied to the round-cap reference shapes so samples avoid
/// anti-aliased edges.
const ROUND_CAP_TOLERANCE: f32 = 1.0;

fn rect(x: f32, y: f32, width: f32, height: f32) -> RectParams {
    RectParams {
        x,
        y,
        width,
        height,
    }
}

fn green_background(ctx: &mut Canvas2dContext) -> Canvas2dResult<()> {
    ctx.set_fill_style("#0f0")?;
    ctx.fill_rect(&rect(0.0, 0.0, WIDTH as f32, HEIGHT as f32));
    Ok(())
}

/// Vertical stroke from (x, 15) to (x, 35).
fn vertical_stroke(ctx: &mut Canvas2dContext, x: f32) {
    ctx.begin_path();
    ctx.move_to(x, 15.0);
    ctx.line_to(x, 35.0);
    ctx.stroke();
}

/// The outline a round-capped vertical stroke at `cx` would cover, with the
/// given cap radius.
fn capsule(ctx: &mut Canvas2dContext, cx: f32, radius: f32) -> Canvas2dResult<()> {
    ctx.begin_path();
    ctx.move_to(cx + radius, 15.0);
    ctx.arc(&ArcParams {
        x: cx,
        y: 15.0,
        radius,
        start_angle: 0.0,
        end_angle: PI,
        anticlockwise: true,
    })?;
    ctx.arc(&ArcParams {
        x: cx,
        y: 35.0,
        radius,
        start_angle: PI,
        end_angle: 0.0,
        anticlockwise: true,
    })?;
    Ok(())
}

/// `lineCap 'butt'` is rendered correctly.
pub fn butt() -> ConformanceCase {
    ConformanceCase {
        name: "2d.line.cap.butt",
        description: "lineCap 'butt' is rendered correctly",
        width: WIDTH,
        height: HEIGHT,
        draw: draw_butt,
        samples: samples_of(
            GREEN,
            &[
                (25, 14),
                (25, 15),
                (25, 16),
                (25, 34),
                (25, 35),
                (25, 36),
                (75, 14),
                (75, 15),
                (75, 16),
                (75, 34),
                (75, 35),
                (75, 36),
            ],
        ),
    }
}

fn draw_butt(ctx: &mut Canvas2dContext) -> Canvas2dResult<()> {
    green_background(ctx)?;
    ctx.set_line_cap(LineCap::Butt);
    ctx.set_line_width(LINE_WIDTH);

    ctx.set_fill_style("#f00")?;
    ctx.set_stroke_style("#0f0")?;
    ctx.fill_rect(&rect(15.0, 15.0, 20.0, 20.0));
    vertical_stroke(ctx, 25.0);

    ctx.set_fill_style("#0f0")?;
    ctx.set_stroke_style("#f00")?;
    vertical_stroke(ctx, 75.0);
    ctx.fill_rect(&rect(65.0, 15.0, 20.0, 20.0));
    Ok(())
}

/// `lineCap 'round'` is rendered correctly.
pub fn round() -> ConformanceCase {
    ConformanceCase {
        name: "2d.line.cap.round",
        description: "lineCap 'round' is rendered correctly",
        width: WIDTH,
        height: HEIGHT,
        draw: draw_round,
        samples: samples_of(
            GREEN,
            &[
                (17, 6),
                (25, 6),
                (32, 6),
                (17, 43),
                (25, 43),
                (32, 43),
                (67, 6),
                (75, 6),
                (82, 6),
                (67, 43),
                (75, 43),
                (82, 43),
            ],
        ),
    }
}

fn draw_round(ctx: &mut Canvas2dContext) -> Canvas2dResult<()> {
    draw_round_scene(ctx, LineCap::Round)
}

/// The round-cap scene, stroked with `cap`.
///
/// Only `LineCap::Round` passes the round case's samples; other caps are
/// useful to confirm that the samples catch a wrong cap.
pub fn draw_round_scene(ctx: &mut Canvas2dContext, cap: LineCap) -> Canvas2dResult<()> {
    green_background(ctx)?;
    ctx.set_line_cap(cap);
    ctx.set_line_width(LINE_WIDTH);
    let radius = LINE_WIDTH / 2.0;

    // Red capsule just inside the cap's reach, covered by a green stroke
    ctx.set_fill_style("#f00")?;
    ctx.set_stroke_style("#0f0")?;
    capsule(ctx, 25.0, radius - ROUND_CAP_TOLERANCE)?;
    ctx.fill();
    vertical_stroke(ctx, 25.0);

    // Red stroke covered by a green capsule just outside the cap's reach
    ctx.set_fill_style("#0f0")?;
    ctx.set_stroke_style("#f00")?;
    vertical_stroke(ctx, 75.0);
    capsule(ctx, 75.0, radius + ROUND_CAP_TOLERANCE)?;
    ctx.fill();
    Ok(())
}

/// `lineCap 'square'` is rendered correctly.
pub fn square() -> ConformanceCase {
    ConformanceCase {
        name: "2d.line.cap.square",
        description: "lineCap 'square' is rendered correctly",
        width: WIDTH,
        height: HEIGHT,
        draw: draw_square,
        samples: samples_of(
            GREEN,
            &[
                (25, 4),
                (25, 5),
                (25, 6),
                (25, 44),
                (25, 45),
                (25, 46),
                (75, 4),
                (75, 5),
                (75, 6),
                (75, 44),
                (75, 45),
                (75, 46),
            ],
        ),
    }
}

fn draw_square(ctx: &mut Canvas2dContext) -> Canvas2dResult<()> {
    green_background(ctx)?;
    ctx.set_line_cap(LineCap::Square);
    ctx.set_line_width(LINE_WIDTH);

    ctx.set_fill_style("#f00")?;
    ctx.set_stroke_style("#0f0")?;
    ctx.fill_rect(&rect(15.0, 5.0, 20.0, 40.0));
    vertical_stroke(ctx, 25.0);

    ctx.set_fill_style("#0f0")?;
    ctx.set_stroke_style("#f00")?;
    vertical_stroke(ctx, 75.0);
    ctx.fill_rect(&rect(65.0, 5.0, 20.0, 40.0));
    Ok(())
}
