//! Canonical RGBA pixel buffer.
//!
//! Every decoded texture lands in a `PixelBuffer`: 4 bytes per pixel in
//! `[r, g, b, a]` order, row-major, no padding. Buffers are always
//! zero-initialised, so codecs that only touch some channels (R8, R4)
//! leave the rest fully transparent black.

use zone_core::color;
use zone_core::Rect;

use crate::codec::TextureError;

/// Bytes needed for a `width` x `height` RGBA raster, if it fits in `usize`.
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)?.checked_mul(4)
}

/// CPU-side RGBA raster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    /// RGBA pixel data (width * height * 4 bytes).
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a cleared (transparent black) buffer.
    ///
    /// Panics if the buffer cannot be allocated; use [`PixelBuffer::try_new`]
    /// for dimensions taken from untrusted input.
    pub fn new(width: u32, height: u32) -> Self {
        let byte_count = byte_len(width, height).unwrap_or(usize::MAX);
        Self {
            width,
            height,
            data: vec![0u8; byte_count],
        }
    }

    /// Create a cleared buffer, failing if `width * height * 4` bytes
    /// overflow `usize`.
    pub fn try_new(width: u32, height: u32) -> Result<Self, TextureError> {
        let byte_count = byte_len(width, height).ok_or(TextureError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; byte_count],
        })
    }

    /// Wrap existing RGBA bytes. The length must be exactly `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, TextureError> {
        let expected = byte_len(width, height).ok_or(TextureError::TooLarge { width, height })?;
        if data.len() != expected {
            return Err(TextureError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Pixels viewed as `[r, g, b, a]` quads.
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(self.data.as_slice())
    }

    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        bytemuck::cast_slice_mut(self.data.as_mut_slice())
    }

    /// Packed colour at `(x, y)`, or `None` outside the buffer.
    pub fn color_at(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = y as usize * self.width as usize + x as usize;
        Some(u32::from_le_bytes(self.pixels()[index]))
    }

    /// Set the packed colour at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_color(&mut self, x: u32, y: u32, value: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.pixels_mut()[index] = value.to_le_bytes();
    }

    /// Whether the pixel at `(x, y)` has any non-zero channel.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.color_at(x, y).is_some_and(|c| c != color::CLEAR)
    }

    /// Replace every pixel equal to `from` with `to`. Returns how many
    /// pixels changed.
    pub fn recolor(&mut self, from: u32, to: u32) -> usize {
        let from = from.to_le_bytes();
        let to = to.to_le_bytes();
        let mut changed = 0;
        for pixel in self.pixels_mut() {
            if *pixel == from {
                *pixel = to;
                changed += 1;
            }
        }
        changed
    }

    /// Copy a sub-rectangle into a new buffer. The rectangle is clipped
    /// to the buffer bounds.
    pub fn crop(&self, rect: Rect) -> PixelBuffer {
        let x0 = rect.x.min(self.width);
        let y0 = rect.y.min(self.height);
        let x1 = rect.x.saturating_add(rect.width).min(self.width);
        let y1 = rect.y.saturating_add(rect.height).min(self.height);

        let mut out = PixelBuffer::new(x1 - x0, y1 - y0);
        let row_bytes = (x1 - x0) as usize * 4;
        for (dst_row, src_y) in (y0..y1).enumerate() {
            let src = (src_y as usize * self.width as usize + x0 as usize) * 4;
            let dst = dst_row * row_bytes;
            out.data[dst..dst + row_bytes].copy_from_slice(&self.data[src..src + row_bytes]);
        }
        out
    }

    /// Render as one text row per pixel row: `solid` for set pixels,
    /// `clear` for transparent black ones.
    pub fn to_ascii(&self, solid: char, clear: char) -> String {
        let mut out = String::with_capacity(self.pixel_count() + self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.is_set(x, y) { solid } else { clear });
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.as_bytes().len(), 4 * 3 * 4);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_ok());
        let err = PixelBuffer::from_rgba(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, TextureError::BufferSize { expected: 16, actual: 15 }));
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let err = PixelBuffer::try_new(u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, TextureError::TooLarge { width: u32::MAX, height: u32::MAX }));
        let err = PixelBuffer::from_rgba(u32::MAX, u32::MAX, Vec::new()).unwrap_err();
        assert!(matches!(err, TextureError::TooLarge { .. }));
        assert_eq!(PixelBuffer::try_new(3, 2).unwrap(), PixelBuffer::new(3, 2));
    }

    #[test]
    fn test_set_and_get_color() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set_color(1, 0, 0x4433_2211);
        assert_eq!(buffer.color_at(1, 0), Some(0x4433_2211));
        assert_eq!(buffer.pixels()[1], [0x11, 0x22, 0x33, 0x44]);
        assert_eq!(buffer.color_at(2, 0), None);
        // Out of bounds is a no-op.
        buffer.set_color(5, 5, color::WHITE);
        assert!(!buffer.is_set(0, 0));
        assert!(buffer.is_set(1, 0));
    }

    #[test]
    fn test_recolor_white() {
        let mut buffer = PixelBuffer::new(3, 1);
        buffer.set_color(0, 0, color::WHITE);
        buffer.set_color(2, 0, color::WHITE);
        let tint = color::rgb_to_color(128, 159, 255);
        assert_eq!(buffer.recolor(color::WHITE, tint), 2);
        assert_eq!(buffer.color_at(0, 0), Some(tint));
        assert_eq!(buffer.color_at(1, 0), Some(color::CLEAR));
    }

    #[test]
    fn test_crop_clips_to_bounds() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.set_color(2, 3, color::WHITE);
        let cropped = buffer.crop(Rect::new(2, 2, 4, 4));
        assert_eq!((cropped.width(), cropped.height()), (2, 2));
        assert!(cropped.is_set(0, 1));
        assert!(!cropped.is_set(1, 1));
    }

    #[test]
    fn test_to_ascii() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set_color(0, 0, color::WHITE);
        buffer.set_color(2, 1, color::WHITE);
        assert_eq!(buffer.to_ascii('#', '.'), "#..\n..#\n");
    }
}
