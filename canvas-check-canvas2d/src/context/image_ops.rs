//! Pixel readback and PNG output operations for Canvas2dContext.

use super::{Canvas2dContext, MAX_DIMENSION};
use crate::error::{Canvas2dError, Canvas2dResult};

impl Canvas2dContext {
    /// Read one pixel as non-premultiplied RGBA.
    ///
    /// Returns `None` when `(x, y)` lies outside the canvas.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let data = self.pixmap.data();
        Some(unpremultiply([
            data[idx],
            data[idx + 1],
            data[idx + 2],
            data[idx + 3],
        ]))
    }

    /// The whole canvas as non-premultiplied RGBA, 4 bytes per pixel.
    pub fn image_data(&self) -> Vec<u8> {
        self.pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| unpremultiply([px[0], px[1], px[2], px[3]]))
            .collect()
    }

    /// Get image data for a region of the canvas.
    ///
    /// The result is non-premultiplied RGBA, 4 bytes per pixel. Pixels of the
    /// region that fall outside the canvas are transparent black. Regions
    /// wider or taller than the largest canvas are rejected.
    pub fn get_image_data(
        &self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Canvas2dResult<Vec<u8>> {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Canvas2dError::InvalidDimensions { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(Canvas2dError::InvalidDimensions { width, height })?;
        let mut data = vec![0u8; len];

        // Only the overlap with the canvas is copied
        for dy in 0..height {
            let Some(src_y) = y.checked_add_unsigned(dy) else {
                break;
            };
            if src_y < 0 {
                continue;
            }
            if src_y as u32 >= self.height {
                break;
            }
            for dx in 0..width {
                let Some(src_x) = x.checked_add_unsigned(dx) else {
                    break;
                };
                if src_x < 0 {
                    continue;
                }
                let Some(pixel) = self.get_pixel(src_x as u32, src_y as u32) else {
                    break;
                };
                let dst_idx = (dy as usize * width as usize + dx as usize) * 4;
                data[dst_idx..dst_idx + 4].copy_from_slice(&pixel);
            }
        }

        Ok(data)
    }

    /// Export canvas to PNG data.
    pub fn to_png(&self) -> Canvas2dResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            writer.write_image_data(&self.image_data())?;
        }
        Ok(buf)
    }
}

/// Convert a premultiplied RGBA pixel to straight alpha.
fn unpremultiply(pixel: [u8; 4]) -> [u8; 4] {
    let a = pixel[3];
    match a {
        0 => [0, 0, 0, 0],
        255 => pixel,
        _ => {
            let a32 = a as u32;
            let channel = |c: u8| ((c as u32 * 255 + a32 / 2) / a32).min(255) as u8;
            [channel(pixel[0]), channel(pixel[1]), channel(pixel[2]), a]
        }
    }
}
