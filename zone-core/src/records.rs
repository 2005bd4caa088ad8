//! Wire records exchanged between peers and stored alongside assets.
//!
//! JSON shape (field names match the browser client):
//! ```text
//! { "_type": "texture", "format": "M1", "width": 8, "height": 8, "data": "<base64>" }
//! { "_type": "font", "format": "U", "name": "...", "charWidth": 6, "charHeight": 8,
//!   "index": [0, 1, ...], "atlas": { "_type": "texture", ... } }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Encoded pixel density of a texture payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 4 bytes per pixel, stored as-is.
    #[serde(rename = "RGBA8")]
    Rgba8,
    /// 1 byte per pixel, red channel only.
    R8,
    /// 4 bits per pixel, two pixels per byte, high nibble first.
    R4,
    /// 1 bit per pixel, LSB-first; on = opaque white, off = transparent.
    M1,
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 4] = [Self::Rgba8, Self::R8, Self::R4, Self::M1];

    /// Wire tag for this format.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Rgba8 => "RGBA8",
            Self::R8 => "R8",
            Self::R4 => "R4",
            Self::M1 => "M1",
        }
    }

    /// Look up a format by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.tag() == tag)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureKind {
    #[default]
    #[serde(rename = "texture")]
    Texture,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontKind {
    #[default]
    #[serde(rename = "font")]
    Font,
}

/// A texture payload in transport form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureData {
    #[serde(rename = "_type", alias = "kind", default)]
    pub kind: TextureKind,
    pub format: PixelFormat,
    pub width: u32,
    pub height: u32,
    /// Base64-encoded payload in `format`'s byte layout.
    pub data: String,
}

impl TextureData {
    pub fn new(format: PixelFormat, width: u32, height: u32, data: impl Into<String>) -> Self {
        Self {
            kind: TextureKind::Texture,
            format,
            width,
            height,
            data: data.into(),
        }
    }

    /// Number of pixels the payload describes.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Glyph arrangement within a font atlas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFormat {
    /// Fixed-size cells, row-major.
    #[default]
    #[serde(rename = "U")]
    Uniform,
}

/// A bitmap font in transport form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontData {
    #[serde(rename = "_type", alias = "kind", default)]
    pub kind: FontKind,
    #[serde(default)]
    pub format: FontFormat,
    pub name: String,
    pub char_width: u32,
    pub char_height: u32,
    /// Codepoints in atlas order.
    pub index: Vec<u32>,
    pub atlas: TextureData,
}
