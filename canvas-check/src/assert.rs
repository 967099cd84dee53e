//! Pixel assertions.
//!
//! Geometric tolerance belongs to the case author, who picks coordinates
//! away from anti-aliased edges. The default comparison is therefore exact.

use crate::error::AssertionError;
use crate::surface::{PixelSource, Rgba};
use serde::{Deserialize, Serialize};

/// Assert that the pixel at `(x, y)` is exactly `(r, g, b, a)`.
///
/// Fails with [`AssertionError::OutOfBounds`] before reading anything when
/// the coordinate is outside the surface, and with
/// [`AssertionError::PixelMismatch`] when any channel differs.
pub fn assert_pixel<S>(
    surface: &S,
    x: i32,
    y: i32,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> Result<(), AssertionError>
where
    S: PixelSource + ?Sized,
{
    assert_pixel_approx(surface, x, y, Rgba::new(r, g, b, a), 0)
}

/// Assert that every channel of the pixel at `(x, y)` is within `tolerance`
/// of `expected`.
pub fn assert_pixel_approx<S>(
    surface: &S,
    x: i32,
    y: i32,
    expected: Rgba,
    tolerance: u8,
) -> Result<(), AssertionError>
where
    S: PixelSource + ?Sized,
{
    let (width, height) = (surface.width(), surface.height());
    let in_bounds = x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height;
    if !in_bounds {
        return Err(AssertionError::OutOfBounds {
            x,
            y,
            width,
            height,
        });
    }

    let (x, y) = (x as u32, y as u32);
    let actual = surface.pixel(x, y);
    if actual.max_channel_difference(expected) > tolerance {
        log::debug!(target: "check", "pixel ({}, {}) = {}, expected {}", x, y, actual, expected);
        return Err(AssertionError::PixelMismatch {
            x,
            y,
            expected,
            actual,
        });
    }
    Ok(())
}

/// One pixel sample with its expected color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    pub x: i32,
    pub y: i32,
    pub expected: Rgba,
    /// Allowed per-channel difference; `0` means exact.
    #[serde(default)]
    pub tolerance: u8,
}

impl SampleRequest {
    pub const fn new(x: i32, y: i32, expected: Rgba) -> Self {
        Self {
            x,
            y,
            expected,
            tolerance: 0,
        }
    }

    pub const fn with_tolerance(self, tolerance: u8) -> Self {
        Self { tolerance, ..self }
    }

    /// Check this sample against `surface`.
    pub fn check<S>(&self, surface: &S) -> Result<(), AssertionError>
    where
        S: PixelSource + ?Sized,
    {
        assert_pixel_approx(surface, self.x, self.y, self.expected, self.tolerance)
    }
}
