//! Conformance cases: a scene to draw and the pixels it must produce.

pub mod line_cap;

use crate::assert::SampleRequest;
use crate::config::RunConfig;
use crate::surface::Rgba;
use canvas_check_canvas2d::{Canvas2dContext, Canvas2dResult};

/// Draws a case's scene onto a fresh canvas.
pub type DrawFn = fn(&mut Canvas2dContext) -> Canvas2dResult<()>;

/// Opaque green, the "pass" color of the generated canvas suite.
pub const GREEN: Rgba = Rgba::new(0, 255, 0, 255);

/// Opaque red, drawn wherever a correct implementation must paint over it.
pub const RED: Rgba = Rgba::new(255, 0, 0, 255);

#[derive(Debug, Clone)]
pub struct ConformanceCase {
    /// Dotted case name, e.g. `2d.line.cap.round`.
    pub name: &'static str,
    pub description: &'static str,
    pub width: u32,
    pub height: u32,
    pub draw: DrawFn,
    pub samples: Vec<SampleRequest>,
}

/// Every known case, in name order.
pub fn all() -> Vec<ConformanceCase> {
    let mut cases = vec![line_cap::butt(), line_cap::round(), line_cap::square()];
    cases.sort_by_key(|case| case.name);
    cases
}

/// Look up a case by exact name.
pub fn find(name: &str) -> Option<ConformanceCase> {
    all().into_iter().find(|case| case.name == name)
}

/// Cases selected by the configuration's filter.
pub fn select(config: &RunConfig) -> Vec<ConformanceCase> {
    all()
        .into_iter()
        .filter(|case| config.selects(case.name))
        .collect()
}

/// Exact samples that must all be `color`.
pub(crate) fn samples_of(color: Rgba, points: &[(i32, i32)]) -> Vec<SampleRequest> {
    points
        .iter()
        .map(|&(x, y)| SampleRequest::new(x, y, color))
        .collect()
}
