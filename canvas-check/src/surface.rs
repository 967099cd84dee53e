//! Owned RGBA pixel surfaces and the read-only view the checker samples.

use crate::error::{CheckError, CheckResult};
use canvas_check_canvas2d::Canvas2dContext;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One non-premultiplied RGBA8 pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Largest absolute difference over the four channels.
    pub fn max_channel_difference(self, other: Rgba) -> u8 {
        self.to_array()
            .iter()
            .zip(other.to_array())
            .map(|(a, b)| a.abs_diff(b))
            .max()
            .unwrap_or(0)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.r, self.g, self.b, self.a)
    }
}

/// Read-only access to a rectangular grid of pixels.
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Read the pixel at `(x, y)`.
    ///
    /// Callers must keep `x < width()` and `y < height()`; implementations
    /// may panic otherwise. [`crate::assert_pixel`] checks bounds first.
    fn pixel(&self, x: u32, y: u32) -> Rgba;
}

/// An owned 2D grid of RGBA8 pixels, row-major, non-premultiplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Create a transparent black surface.
    pub fn new(width: u32, height: u32) -> CheckResult<Self> {
        Self::filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a surface where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgba) -> CheckResult<Self> {
        let len = buffer_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| CheckError::InvalidDimensions { width, height })?;
        for _ in 0..len / 4 {
            data.extend_from_slice(&color.to_array());
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing RGBA buffer of exactly `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> CheckResult<Self> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(CheckError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Snapshot the current contents of a canvas.
    pub fn from_canvas(ctx: &Canvas2dContext) -> Self {
        Self {
            width: ctx.width(),
            height: ctx.height(),
            data: ctx.image_data(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let idx = self.index(x, y)?;
        Some(Rgba::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ))
    }

    /// Overwrite one pixel. Returns `false` when `(x, y)` is out of bounds.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.data[idx..idx + 4].copy_from_slice(&color.to_array());
                true
            }
            None => false,
        }
    }

    /// Encode the surface as an RGBA8 PNG.
    pub fn to_png(&self) -> CheckResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.data)?;
        }
        Ok(buf)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

/// Byte length of a `width` x `height` RGBA buffer.
fn buffer_len(width: u32, height: u32) -> CheckResult<usize> {
    if width == 0 || height == 0 {
        return Err(CheckError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or(CheckError::InvalidDimensions { width, height })
}

impl PixelSource for Surface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Rgba::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }
}

/// Sample a live canvas without taking a snapshot.
impl PixelSource for Canvas2dContext {
    fn width(&self) -> u32 {
        Canvas2dContext::width(self)
    }

    fn height(&self) -> u32 {
        Canvas2dContext::height(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.get_pixel(x, y).map(Rgba::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_check_canvas2d::RectParams;

    #[test]
    fn test_filled_surface() {
        let green = Rgba::new(0, 255, 0, 255);
        let surface = Surface::filled(100, 50, green).unwrap();
        assert_eq!(surface.data().len(), 100 * 50 * 4);
        assert_eq!(surface.get_pixel(0, 0), Some(green));
        assert_eq!(surface.get_pixel(99, 49), Some(green));
        assert_eq!(surface.get_pixel(100, 0), None);
        assert_eq!(surface.get_pixel(0, 50), None);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(CheckError::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(Surface::from_rgba(10, 0, Vec::new()).is_err());
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        assert!(matches!(
            Surface::filled(u32::MAX, u32::MAX, Rgba::TRANSPARENT),
            Err(CheckError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Surface::new(u32::MAX, u32::MAX),
            Err(CheckError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Surface::from_rgba(u32::MAX, u32::MAX, vec![0; 16]),
            Err(CheckError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(matches!(
            Surface::from_rgba(2, 2, vec![0; 15]),
            Err(CheckError::BufferSize {
                expected: 16,
                actual: 15
            })
        ));
        let surface = Surface::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(surface.get_pixel(1, 0), Some(Rgba::new(5, 6, 7, 8)));
    }

    #[test]
    fn test_put_pixel() {
        let mut surface = Surface::new(3, 3).unwrap();
        let red = Rgba::new(255, 0, 0, 255);
        assert!(surface.put_pixel(2, 1, red));
        assert!(!surface.put_pixel(3, 1, red));
        assert_eq!(surface.pixel(2, 1), red);
        assert_eq!(surface.pixel(1, 1), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_snapshot_matches_canvas() {
        let mut ctx = Canvas2dContext::new(20, 10).unwrap();
        ctx.set_fill_style("#0f0").unwrap();
        ctx.fill_rect(&RectParams {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        });
        let surface = Surface::from_canvas(&ctx);
        assert_eq!(surface.width(), 20);
        assert_eq!(surface.height(), 10);
        for (x, y) in [(0, 0), (5, 5), (15, 5), (19, 9)] {
            assert_eq!(surface.pixel(x, y), PixelSource::pixel(&ctx, x, y));
        }
        assert_eq!(surface.pixel(5, 5), Rgba::new(0, 255, 0, 255));
    }

    #[test]
    fn test_rgba_display_and_difference() {
        let a = Rgba::new(0, 255, 0, 255);
        let b = Rgba::new(3, 250, 0, 255);
        assert_eq!(a.to_string(), "[0,255,0,255]");
        assert_eq!(a.max_channel_difference(b), 5);
        assert_eq!(a.max_channel_difference(a), 0);
    }
}
