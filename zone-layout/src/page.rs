//! Positioned glyph records and pages.

use serde::Serialize;
use zone_core::{color, Rect, Vec2};
use zone_text::Font;

use crate::style::StyleState;

/// One laid-out glyph, ready for a rasterizer to blit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Glyph {
    /// Pen position on the page.
    pub position: Vec2,
    /// Atlas sub-rectangle to draw.
    pub sprite: Rect,
    /// Packed `0xAABBGGRR` tint.
    pub color: u32,
    /// Animation offset applied on top of `position`.
    pub offset: Vec2,
    pub hidden: bool,
    /// Style state in effect when the glyph was placed.
    pub styles: StyleState,
}

impl Glyph {
    pub fn new(position: Vec2, sprite: Rect, hidden: bool, styles: StyleState) -> Self {
        Self {
            position,
            sprite,
            color: color::DEFAULT_TINT,
            offset: Vec2::ZERO,
            hidden,
            styles,
        }
    }

    /// Final draw position: `position + offset`.
    pub fn draw_position(&self) -> Vec2 {
        Vec2::new(self.position.x + self.offset.x, self.position.y + self.offset.y)
    }
}

/// The glyphs of one page, in reading order.
pub type Page = Vec<Glyph>;

/// Pixel height of a page: the span of its line origins plus one line.
/// An empty page has height 0.
pub fn page_height(page: &[Glyph], font: &Font, line_spacing: u32) -> u32 {
    let mut ys = page.iter().map(|glyph| glyph.position.y);
    let Some(first) = ys.next() else {
        return 0;
    };
    let (min, max) = ys.fold((first, first), |(min, max), y| (min.min(y), max.max(y)));
    (max - min) as u32 + font.line_height + line_spacing
}
