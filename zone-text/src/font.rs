//! Bitmap fonts decoded from a uniform glyph grid.
//!
//! A `FontData` record carries an atlas texture and the ordered list of
//! codepoints it contains. Glyph `i` occupies cell `(i % cols, i / cols)`
//! of a grid with `cols = atlas.width / char_width` columns. Every glyph
//! advances by `char_width`; there is no kerning.

use rustc_hash::FxHashMap;
use thiserror::Error;
use zone_core::{FontData, FontFormat, Rect, Vec2};
use zone_texture::{decode_texture, PixelBuffer, TextureError};

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Font atlas error: {0}")]
    Texture(#[from] TextureError),
    #[error("Font char width must be non-zero")]
    ZeroCharWidth,
    #[error("Font record error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Placement of one glyph within its font's atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub codepoint: u32,
    /// Sub-rectangle of the atlas holding the glyph's pixels.
    pub sprite: Rect,
    /// Draw offset relative to the pen position.
    pub offset: Vec2,
    /// Horizontal advance in pixels.
    pub spacing: u32,
}

/// A decoded bitmap font.
#[derive(Clone, Debug)]
pub struct Font {
    pub name: String,
    pub line_height: u32,
    characters: FxHashMap<u32, GlyphMetrics>,
    atlas: PixelBuffer,
}

impl Font {
    /// The font used when none is supplied: no glyphs, zero line height.
    pub fn empty() -> Self {
        Self {
            name: String::from("empty"),
            line_height: 0,
            characters: FxHashMap::default(),
            atlas: PixelBuffer::new(0, 0),
        }
    }

    /// Assemble a font from already-decoded parts.
    pub fn from_glyphs(
        name: impl Into<String>,
        line_height: u32,
        atlas: PixelBuffer,
        glyphs: impl IntoIterator<Item = GlyphMetrics>,
    ) -> Self {
        Self {
            name: name.into(),
            line_height,
            characters: glyphs.into_iter().map(|g| (g.codepoint, g)).collect(),
            atlas,
        }
    }

    /// Decode a transport record. The atlas is decoded once and shared by
    /// every glyph.
    pub fn decode(data: &FontData) -> Result<Self, FontError> {
        match data.format {
            FontFormat::Uniform => decode_uniform(data),
        }
    }

    pub fn atlas(&self) -> &PixelBuffer {
        &self.atlas
    }

    pub fn glyph_count(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Metrics for `ch`, if the font maps it.
    pub fn glyph(&self, ch: char) -> Option<&GlyphMetrics> {
        self.characters.get(&(ch as u32))
    }

    /// Metrics for `ch`, or for `fallback` when `ch` is unmapped.
    pub fn glyph_or(&self, ch: char, fallback: char) -> Option<&GlyphMetrics> {
        self.glyph(ch).or_else(|| self.glyph(fallback))
    }

    /// Advance of `ch` (via `fallback` when unmapped); 0 when neither is mapped.
    pub fn advance(&self, ch: char, fallback: char) -> u32 {
        self.glyph_or(ch, fallback).map_or(0, |g| g.spacing)
    }

    /// Sum of advances across `text`.
    pub fn line_width(&self, text: &str, fallback: char) -> u32 {
        text.chars().map(|ch| self.advance(ch, fallback)).sum()
    }

    /// Copy of the atlas pixels under `ch`'s sprite.
    pub fn glyph_image(&self, ch: char) -> Option<PixelBuffer> {
        self.glyph(ch).map(|g| self.atlas.crop(g.sprite))
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::empty()
    }
}

/// Decode a font record into a [`Font`].
pub fn decode_font(data: &FontData) -> Result<Font, FontError> {
    Font::decode(data)
}

fn decode_uniform(data: &FontData) -> Result<Font, FontError> {
    if data.char_width == 0 {
        return Err(FontError::ZeroCharWidth);
    }

    let atlas = decode_texture(&data.atlas)?;
    let (width, height) = (data.char_width, data.char_height);
    let cols = (atlas.width() / width).max(1);

    let glyphs = data.index.iter().enumerate().map(|(i, &codepoint)| {
        let i = u32::try_from(i).unwrap_or(u32::MAX);
        let (col, row) = (i % cols, i / cols);
        GlyphMetrics {
            codepoint,
            // Cells past the u32 range pin to the edge; crop clips them empty.
            sprite: Rect::new(
                col.saturating_mul(width),
                row.saturating_mul(height),
                width,
                height,
            ),
            offset: Vec2::ZERO,
            spacing: width,
        }
    });
    let font = Font::from_glyphs(data.name.clone(), height, atlas, glyphs);

    log::debug!(
        "Decoded font '{}': {} glyphs, {}x{} cells, {} columns",
        font.name,
        font.glyph_count(),
        width,
        height,
        cols,
    );
    Ok(font)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zone_core::PixelFormat;
    use zone_texture::{decode_ascii_texture, encode_texture};

    /// 2 columns x 2 rows of 3x2 cells: "AB" on top, "C" bottom-left.
    fn grid_font_data() -> FontData {
        let atlas = decode_ascii_texture(
            "
#..##.
.#.#.#
#.....
#.....
",
            '#',
        )
        .unwrap();
        FontData {
            kind: Default::default(),
            format: FontFormat::Uniform,
            name: "grid".into(),
            char_width: 3,
            char_height: 2,
            index: vec!['A' as u32, 'B' as u32, 'C' as u32],
            atlas: encode_texture(&atlas, PixelFormat::M1),
        }
    }

    #[test]
    fn test_empty_font() {
        let font = Font::empty();
        assert_eq!(font.line_height, 0);
        assert!(font.is_empty());
        assert!(font.glyph('a').is_none());
        assert_eq!(font.advance('a', '?'), 0);
    }

    #[test]
    fn test_decode_grid_positions() {
        let font = decode_font(&grid_font_data()).unwrap();
        assert_eq!(font.name, "grid");
        assert_eq!(font.line_height, 2);
        assert_eq!(font.glyph_count(), 3);
        assert_eq!(font.glyph('A').unwrap().sprite, Rect::new(0, 0, 3, 2));
        assert_eq!(font.glyph('B').unwrap().sprite, Rect::new(3, 0, 3, 2));
        assert_eq!(font.glyph('C').unwrap().sprite, Rect::new(0, 2, 3, 2));
    }

    #[test]
    fn test_uniform_spacing_and_offset() {
        let font = decode_font(&grid_font_data()).unwrap();
        for ch in ['A', 'B', 'C'] {
            let glyph = font.glyph(ch).unwrap();
            assert_eq!(glyph.spacing, 3);
            assert_eq!(glyph.offset, Vec2::ZERO);
        }
    }

    #[test]
    fn test_glyph_image_slices_atlas() {
        let font = decode_font(&grid_font_data()).unwrap();
        let b = font.glyph_image('B').unwrap();
        assert_eq!(b.to_ascii('#', '.'), "##.\n#.#\n");
        let c = font.glyph_image('C').unwrap();
        assert_eq!(c.to_ascii('#', '.'), "#..\n#..\n");
    }

    #[test]
    fn test_fallback_lookup() {
        let font = decode_font(&grid_font_data()).unwrap();
        assert!(font.glyph('Z').is_none());
        assert_eq!(font.glyph_or('Z', 'C').unwrap().codepoint, 'C' as u32);
        assert!(font.glyph_or('Z', 'Y').is_none());
        assert_eq!(font.advance('Z', 'A'), 3);
        assert_eq!(font.line_width("ABZ", 'A'), 9);
        assert_eq!(font.line_width("ABZ", 'Y'), 6);
    }

    #[test]
    fn test_zero_char_width() {
        let mut data = grid_font_data();
        data.char_width = 0;
        assert!(matches!(decode_font(&data), Err(FontError::ZeroCharWidth)));
    }

    #[test]
    fn test_oversized_cells_saturate() {
        let data = FontData {
            kind: Default::default(),
            format: FontFormat::Uniform,
            name: "tall".into(),
            char_width: 1,
            char_height: 0x8000_0000,
            index: vec![0, 1, 2],
            atlas: encode_texture(&PixelBuffer::new(1, 1), PixelFormat::R8),
        };
        let font = decode_font(&data).unwrap();
        assert_eq!(font.glyph('\u{1}').unwrap().sprite.y, 0x8000_0000);
        assert_eq!(font.glyph('\u{2}').unwrap().sprite.y, u32::MAX);

        assert_eq!(font.glyph_image('\u{0}').unwrap().width(), 1);
        let clipped = font.glyph_image('\u{2}').unwrap();
        assert_eq!(clipped.as_bytes().len(), 0);
    }

    #[test]
    fn test_bad_atlas_propagates() {
        let mut data = grid_font_data();
        data.atlas.height = 40;
        assert!(matches!(
            decode_font(&data),
            Err(FontError::Texture(TextureError::LengthMismatch { .. }))
        ));
    }
}
