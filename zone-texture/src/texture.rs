//! Transport form: `TextureData` records with base64 payloads, plus an
//! ASCII-art decoder for authoring small bitmaps inline.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use zone_core::{color, PixelFormat, TextureData};

use crate::buffer::PixelBuffer;
use crate::codec::{self, TextureError};

/// Encode a buffer and wrap it as a transportable record.
pub fn encode_texture(buffer: &PixelBuffer, format: PixelFormat) -> TextureData {
    let bytes = codec::encode(buffer, format);
    TextureData::new(
        format,
        buffer.width(),
        buffer.height(),
        BASE64_STANDARD.encode(bytes),
    )
}

/// Decode a record into a freshly cleared buffer.
pub fn decode_texture(texture: &TextureData) -> Result<PixelBuffer, TextureError> {
    let bytes = BASE64_STANDARD.decode(texture.data.as_bytes())?;
    codec::decode(&bytes, texture.format, texture.width, texture.height)
}

/// Decode ASCII art into a buffer: `solid` becomes opaque white, any
/// other character transparent. Surrounding whitespace is trimmed; width
/// comes from the first row, height from the row count.
pub fn decode_ascii_texture(ascii: &str, solid: char) -> Result<PixelBuffer, TextureError> {
    let rows: Vec<&str> = ascii
        .trim()
        .split('\n')
        .map(|row| row.strip_suffix('\r').unwrap_or(row))
        .collect();

    let width = rows.first().map_or(0, |row| row.chars().count());
    if width == 0 {
        return Err(TextureError::EmptyAscii);
    }

    let mut buffer = PixelBuffer::new(width as u32, rows.len() as u32);
    for (y, row) in rows.iter().enumerate() {
        let columns = row.chars().count();
        if columns != width {
            return Err(TextureError::RaggedAscii {
                row: y,
                expected: width,
                actual: columns,
            });
        }
        for (x, ch) in row.chars().enumerate() {
            if ch == solid {
                buffer.set_color(x as u32, y as u32, color::WHITE);
            }
        }
    }
    Ok(buffer)
}
