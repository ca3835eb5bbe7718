use std::path::Path;

use crate::foundation::error::{GlassError, GlassResult};

pub use kurbo::{Size, Vec2};

/// One RGBA8 pixel, straight (not premultiplied) alpha.
pub type Rgba8 = [u8; 4];

/// A row-major RGBA8 pixel grid produced by one of the rasterizers.
///
/// Buffers are value objects: a rasterizer builds one, hands it over, and nothing mutates it
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl RasterBuffer {
    /// Allocate a `width x height` buffer with every pixel set to `fill`.
    pub fn filled(width: u32, height: u32, fill: Rgba8) -> Self {
        let px = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: fill.repeat(px),
        }
    }

    /// Read the pixel at `(x, y)`; `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        let idx = self.index_of(x, y)?;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.data.chunks_exact(4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Write a PNG file of this buffer.
    pub fn save_png(&self, path: &Path) -> GlassResult<()> {
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| GlassError::encode(format!("write png '{}': {e}", path.display())))
    }

    pub(crate) fn put(&mut self, x: u32, y: u32, px: Rgba8) {
        if let Some(idx) = self.index_of(x, y) {
            self.data[idx..idx + 4].copy_from_slice(&px);
        }
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
