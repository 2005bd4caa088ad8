//! Pixel codecs: four densities behind one [`PixelCodec`] interface.
//!
//! ```text
//! format  bytes for n pixels   layout
//! RGBA8   4n                   r g b a, as-is
//! R8      n                    red channel only
//! R4      ceil(n/2)            pixel 2i in high nibble, 2i+1 in low nibble
//! M1      ceil(n/8)            bit b of byte i is pixel 8i+b (LSB-first)
//! ```
//!
//! Decoding validates the payload length against the declared pixel
//! count before touching the destination buffer. There is no partial or
//! best-effort decode.

use thiserror::Error;
use zone_core::color;
use zone_core::PixelFormat;

use crate::buffer::PixelBuffer;

#[derive(Error, Debug)]
pub enum TextureError {
    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(String),
    #[error("Payload length mismatch for {format} {width}x{height}: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        format: PixelFormat,
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
    #[error("Pixel buffer {width}x{height} does not fit in memory")]
    TooLarge { width: u32, height: u32 },
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Avatar must be 8x8, got {width}x{height}")]
    AvatarSize { width: u32, height: u32 },
    #[error("ASCII texture is empty")]
    EmptyAscii,
    #[error("ASCII texture row {row} has {actual} columns, expected {expected}")]
    RaggedAscii {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Encoder/decoder pair for one pixel format.
///
/// `pixels` is always the canonical RGBA view of a buffer. `decode_into`
/// may assume `data.len() == self.encoded_len(pixels.len())`; the free
/// functions in this module check that before calling it.
pub trait PixelCodec: Sync {
    fn format(&self) -> PixelFormat;

    /// Payload size in bytes for `pixel_count` pixels.
    fn encoded_len(&self, pixel_count: usize) -> usize;

    fn encode(&self, pixels: &[[u8; 4]]) -> Vec<u8>;

    fn decode_into(&self, data: &[u8], pixels: &mut [[u8; 4]]);
}

pub struct Rgba8Codec;
pub struct R8Codec;
pub struct R4Codec;
pub struct M1Codec;

impl PixelCodec for Rgba8Codec {
    fn format(&self) -> PixelFormat {
        PixelFormat::Rgba8
    }

    fn encoded_len(&self, pixel_count: usize) -> usize {
        pixel_count.saturating_mul(4)
    }

    fn encode(&self, pixels: &[[u8; 4]]) -> Vec<u8> {
        bytemuck::cast_slice::<[u8; 4], u8>(pixels).to_vec()
    }

    fn decode_into(&self, data: &[u8], pixels: &mut [[u8; 4]]) {
        bytemuck::cast_slice_mut::<[u8; 4], u8>(pixels).copy_from_slice(data);
    }
}

impl PixelCodec for R8Codec {
    fn format(&self) -> PixelFormat {
        PixelFormat::R8
    }

    fn encoded_len(&self, pixel_count: usize) -> usize {
        pixel_count
    }

    fn encode(&self, pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels.iter().map(|p| p[0]).collect()
    }

    /// Writes the red channel only. Green, blue and alpha keep whatever
    /// the destination held.
    fn decode_into(&self, data: &[u8], pixels: &mut [[u8; 4]]) {
        for (pixel, &red) in pixels.iter_mut().zip(data) {
            pixel[0] = red;
        }
    }
}

impl PixelCodec for R4Codec {
    fn format(&self) -> PixelFormat {
        PixelFormat::R4
    }

    fn encoded_len(&self, pixel_count: usize) -> usize {
        pixel_count.div_ceil(2)
    }

    fn encode(&self, pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels
            .chunks(2)
            .map(|pair| {
                let high = pair[0][0] >> 4;
                let low = pair.get(1).map_or(0, |p| p[0] >> 4);
                (high << 4) | low
            })
            .collect()
    }

    fn decode_into(&self, data: &[u8], pixels: &mut [[u8; 4]]) {
        for (pair, &byte) in pixels.chunks_mut(2).zip(data) {
            pair[0][0] = (byte >> 4) * 16;
            if let Some(second) = pair.get_mut(1) {
                second[0] = (byte & 0x0F) * 16;
            }
        }
    }
}

impl PixelCodec for M1Codec {
    fn format(&self) -> PixelFormat {
        PixelFormat::M1
    }

    fn encoded_len(&self, pixel_count: usize) -> usize {
        pixel_count.div_ceil(8)
    }

    fn encode(&self, pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels
            .chunks(8)
            .map(|octet| {
                octet.iter().enumerate().fold(0u8, |byte, (bit, pixel)| {
                    if u32::from_le_bytes(*pixel) != color::CLEAR {
                        byte | (1 << bit)
                    } else {
                        byte
                    }
                })
            })
            .collect()
    }

    fn decode_into(&self, data: &[u8], pixels: &mut [[u8; 4]]) {
        let on = color::WHITE.to_le_bytes();
        let off = color::CLEAR.to_le_bytes();
        for (octet, &byte) in pixels.chunks_mut(8).zip(data) {
            for (bit, pixel) in octet.iter_mut().enumerate() {
                *pixel = if (byte >> bit) & 1 == 1 { on } else { off };
            }
        }
    }
}

/// Codec for a format.
pub fn codec(format: PixelFormat) -> &'static dyn PixelCodec {
    match format {
        PixelFormat::Rgba8 => &Rgba8Codec,
        PixelFormat::R8 => &R8Codec,
        PixelFormat::R4 => &R4Codec,
        PixelFormat::M1 => &M1Codec,
    }
}

/// Look up a format by wire tag, failing on unknown tags.
pub fn parse_format(tag: &str) -> Result<PixelFormat, TextureError> {
    PixelFormat::from_tag(tag).ok_or_else(|| TextureError::UnsupportedFormat(tag.to_string()))
}

/// Encode a buffer into `format`'s byte layout.
pub fn encode(buffer: &PixelBuffer, format: PixelFormat) -> Vec<u8> {
    codec(format).encode(buffer.pixels())
}

/// Decode `data` into a freshly cleared `width` x `height` buffer.
pub fn decode(
    data: &[u8],
    format: PixelFormat,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, TextureError> {
    let codec = codec(format);
    let expected = (width as usize)
        .checked_mul(height as usize)
        .map_or(usize::MAX, |pixel_count| codec.encoded_len(pixel_count));
    if data.len() != expected {
        return Err(TextureError::LengthMismatch {
            format,
            width,
            height,
            expected,
            actual: data.len(),
        });
    }
    let mut buffer = PixelBuffer::try_new(width, height)?;
    codec.decode_into(data, buffer.pixels_mut());
    Ok(buffer)
}

/// Decode `data` into an existing buffer whose dimensions declare the
/// expected pixel count. Channels a format does not carry are left as
/// they were, so callers reusing a buffer should clear it first.
pub fn decode_into(
    data: &[u8],
    format: PixelFormat,
    buffer: &mut PixelBuffer,
) -> Result<(), TextureError> {
    let codec = codec(format);
    let expected = codec.encoded_len(buffer.pixel_count());
    if data.len() != expected {
        return Err(TextureError::LengthMismatch {
            format,
            width: buffer.width(),
            height: buffer.height(),
            expected,
            actual: data.len(),
        });
    }
    codec.decode_into(data, buffer.pixels_mut());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_from(width: u32, height: u32, colors: &[u32]) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        for (i, &c) in colors.iter().enumerate() {
            buffer.set_color(i as u32 % width, i as u32 / width, c);
        }
        buffer
    }

    #[test]
    fn test_encoded_lengths() {
        assert_eq!(codec(PixelFormat::Rgba8).encoded_len(10), 40);
        assert_eq!(codec(PixelFormat::R8).encoded_len(10), 10);
        assert_eq!(codec(PixelFormat::R4).encoded_len(10), 5);
        assert_eq!(codec(PixelFormat::R4).encoded_len(9), 5);
        assert_eq!(codec(PixelFormat::M1).encoded_len(64), 8);
        assert_eq!(codec(PixelFormat::M1).encoded_len(65), 9);
    }

    #[test]
    fn test_codec_reports_its_format() {
        for format in PixelFormat::ALL {
            assert_eq!(codec(format).format(), format);
        }
    }

    #[test]
    fn test_rgba8_roundtrip() {
        let buffer = buffer_from(2, 2, &[0x0403_0201, 0x0807_0605, 0xFFFF_FFFF, 0x8000_0080]);
        let data = encode(&buffer, PixelFormat::Rgba8);
        assert_eq!(&data[..4], &[1, 2, 3, 4]);
        let decoded = decode(&data, PixelFormat::Rgba8, 2, 2).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_r8_keeps_red_only() {
        let buffer = buffer_from(3, 1, &[0xFF00_00AA, 0x1234_5601, 0x0000_00FF]);
        let data = encode(&buffer, PixelFormat::R8);
        assert_eq!(data, vec![0xAA, 0x01, 0xFF]);

        let decoded = decode(&data, PixelFormat::R8, 3, 1).unwrap();
        assert_eq!(decoded.pixels(), &[[0xAA, 0, 0, 0], [0x01, 0, 0, 0], [0xFF, 0, 0, 0]]);
    }

    #[test]
    fn test_r8_decode_leaves_other_channels() {
        let mut buffer = buffer_from(2, 1, &[0xFFFF_FF00, 0xFFFF_FF00]);
        decode_into(&[7, 9], PixelFormat::R8, &mut buffer).unwrap();
        assert_eq!(buffer.pixels(), &[[7, 255, 255, 255], [9, 255, 255, 255]]);
    }

    #[test]
    fn test_r4_nibble_order() {
        // Red samples 0xF0 and 0x30 pack into 0xF3.
        let buffer = buffer_from(2, 1, &[0x0000_00F0, 0x0000_003F]);
        let data = encode(&buffer, PixelFormat::R4);
        assert_eq!(data, vec![0xF3]);

        let decoded = decode(&data, PixelFormat::R4, 2, 1).unwrap();
        assert_eq!(decoded.pixels()[0][0], 0xF0);
        assert_eq!(decoded.pixels()[1][0], 0x30);
    }

    #[test]
    fn test_r4_odd_pixel_count() {
        let buffer = buffer_from(3, 1, &[0x10, 0x20, 0x30]);
        let data = encode(&buffer, PixelFormat::R4);
        assert_eq!(data, vec![0x12, 0x30]);
        let decoded = decode(&data, PixelFormat::R4, 3, 1).unwrap();
        let reds: Vec<u8> = decoded.pixels().iter().map(|p| p[0]).collect();
        assert_eq!(reds, vec![0x10, 0x20, 0x30]);
    }

    #[test]
    fn test_m1_bit_order_alternating() {
        // Pixels 0, 2, 4, 6 opaque; 1, 3, 5, 7 transparent.
        let colors: Vec<u32> = (0..8)
            .map(|i| if i % 2 == 0 { color::WHITE } else { color::CLEAR })
            .collect();
        let buffer = buffer_from(8, 1, &colors);
        assert_eq!(encode(&buffer, PixelFormat::M1), vec![0b0101_0101]);
    }

    #[test]
    fn test_m1_first_pixel_is_bit_zero() {
        let decoded = decode(&[0b0000_0001], PixelFormat::M1, 8, 1).unwrap();
        assert_eq!(decoded.color_at(0, 0), Some(color::WHITE));
        for x in 1..8 {
            assert_eq!(decoded.color_at(x, 0), Some(color::CLEAR));
        }
    }

    #[test]
    fn test_m1_quantizes_then_stable() {
        let buffer = buffer_from(3, 2, &[0x0000_0001, 0, 0x8000_0000, 0, 0, 0x00FF_0000]);
        let once = decode(&encode(&buffer, PixelFormat::M1), PixelFormat::M1, 3, 2).unwrap();
        assert_eq!(once.color_at(0, 0), Some(color::WHITE));
        assert_eq!(once.color_at(2, 0), Some(color::WHITE));
        assert_eq!(once.color_at(2, 1), Some(color::WHITE));
        assert_eq!(once.color_at(1, 0), Some(color::CLEAR));

        let twice = decode(&encode(&once, PixelFormat::M1), PixelFormat::M1, 3, 2).unwrap();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_decode_rejects_short_payload() {
        let err = decode(&[0u8; 7], PixelFormat::M1, 8, 8).unwrap_err();
        match err {
            TextureError::LengthMismatch { expected, actual, .. } => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 7);
            }
            other => panic!("Expected LengthMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_long_payload() {
        assert!(decode(&[0u8; 5], PixelFormat::R8, 2, 2).is_err());
        assert!(decode(&[0u8; 17], PixelFormat::Rgba8, 2, 2).is_err());
    }

    #[test]
    fn test_decode_rejects_absurd_dimensions() {
        let err = decode(&[], PixelFormat::M1, u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, TextureError::LengthMismatch { actual: 0, .. }));

        let err = decode(&[0u8; 1], PixelFormat::M1, 1 << 22, 1 << 22).unwrap_err();
        match err {
            TextureError::LengthMismatch { expected, actual, .. } => {
                assert_eq!(expected, 1 << 41);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected LengthMismatch, got {other:?}"),
        }

        let err = decode(&[], PixelFormat::Rgba8, u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, TextureError::LengthMismatch { expected: usize::MAX, .. }));
    }

    #[test]
    fn test_failed_decode_leaves_buffer_untouched() {
        let mut buffer = buffer_from(2, 1, &[color::WHITE, color::WHITE]);
        let before = buffer.clone();
        assert!(decode_into(&[0, 0, 0], PixelFormat::R8, &mut buffer).is_err());
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("R4").unwrap(), PixelFormat::R4);
        let err = parse_format("BGR8").unwrap_err();
        assert!(matches!(err, TextureError::UnsupportedFormat(ref tag) if tag == "BGR8"));
    }
}
