//! Circular arcs flattened to cubic bezier curves.
//!
//! tiny-skia has no arc primitive, so arcs are converted with `kurbo::Arc`.

use crate::geometry::ArcParams;
use kurbo::{PathEl, Point, Vec2};
use std::f64::consts::TAU;

/// Maximum distance between the true arc and its cubic approximation, in pixels.
const ARC_TOLERANCE: f64 = 0.01;

/// Angular extent of an arc following the Canvas 2D `arc()` rules.
///
/// A clockwise arc whose end angle is at least a full turn past its start is
/// a full circle; otherwise the difference is reduced into `[0, 2π)`.
/// Anticlockwise arcs mirror this and produce a negative sweep.
pub(crate) fn arc_sweep(start_angle: f64, end_angle: f64, anticlockwise: bool) -> f64 {
    if anticlockwise {
        let delta = start_angle - end_angle;
        if delta >= TAU {
            -TAU
        } else {
            -delta.rem_euclid(TAU)
        }
    } else {
        let delta = end_angle - start_angle;
        if delta >= TAU {
            TAU
        } else {
            delta.rem_euclid(TAU)
        }
    }
}

/// Start point of the arc and the curve elements that trace it.
///
/// The returned elements never contain a `MoveTo`; the caller decides whether
/// the start point opens a new subpath or is joined to the current point.
pub(crate) fn arc_elements(params: &ArcParams) -> (Point, Vec<PathEl>) {
    let center = Point::new(params.x as f64, params.y as f64);
    let radius = params.radius as f64;
    let start_angle = params.start_angle as f64;
    let sweep = arc_sweep(start_angle, params.end_angle as f64, params.anticlockwise);

    let start = center + Vec2::from_angle(start_angle) * radius;
    if radius == 0.0 || sweep == 0.0 {
        return (start, Vec::new());
    }

    let arc = kurbo::Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle: sweep,
        x_rotation: 0.0,
    };
    (start, arc.append_iter(ARC_TOLERANCE).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn end_point(elements: &[PathEl]) -> Point {
        match elements.last() {
            Some(PathEl::CurveTo(_, _, p)) | Some(PathEl::LineTo(p)) | Some(PathEl::QuadTo(_, p)) => {
                *p
            }
            other => panic!("unexpected final element {other:?}"),
        }
    }

    #[test]
    fn test_sweep_clockwise() {
        assert!((arc_sweep(0.0, PI, false) - PI).abs() < 1e-12);
        // Negative difference wraps around the long way
        assert!((arc_sweep(0.0, -PI / 2.0, false) - 1.5 * PI).abs() < 1e-12);
        assert_eq!(arc_sweep(0.0, 2.0 * PI, false), TAU);
        assert_eq!(arc_sweep(1.0, 1.0, false), 0.0);
    }

    #[test]
    fn test_sweep_anticlockwise() {
        assert!((arc_sweep(0.0, PI, true) + PI).abs() < 1e-12);
        assert!((arc_sweep(PI, 0.0, true) + PI).abs() < 1e-12);
        assert_eq!(arc_sweep(0.0, -3.0 * PI, true), -TAU);
    }

    #[test]
    fn test_anticlockwise_half_circle_passes_through_top() {
        // In y-down device space the anticlockwise arc from 0 to π bulges upward
        let params = ArcParams {
            x: 25.0,
            y: 15.0,
            radius: 10.0,
            start_angle: 0.0,
            end_angle: std::f32::consts::PI,
            anticlockwise: true,
        };
        let (start, elements) = arc_elements(&params);
        assert!((start.x - 35.0).abs() < 1e-6);
        assert!((start.y - 15.0).abs() < 1e-6);

        let end = end_point(&elements);
        assert!((end.x - 15.0).abs() < 1e-4);
        assert!((end.y - 15.0).abs() < 1e-4);

        let center = Point::new(25.0, 15.0);
        for el in &elements {
            if let PathEl::CurveTo(_, _, p) = el {
                assert!(p.y <= 15.0 + 1e-4, "segment end {p:?} below the center");
                assert!((p.distance(center) - 10.0).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_zero_radius_is_a_point() {
        let params = ArcParams {
            x: 5.0,
            y: 5.0,
            radius: 0.0,
            start_angle: 0.0,
            end_angle: 1.0,
            anticlockwise: false,
        };
        let (start, elements) = arc_elements(&params);
        assert_eq!(start, Point::new(5.0, 5.0));
        assert!(elements.is_empty());
    }
}
