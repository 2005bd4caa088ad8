//! # zone-core
//!
//! Shared types for the Zone bitmap text stack: pixel-space geometry,
//! packed colours, and the wire records (`TextureData`, `FontData`) that
//! carry atlases and avatars between peers.
//!
//! ## Modules
//!
//! - [`color`]: Packed `0xAABBGGRR` colour helpers and HSL conversion.
//! - [`records`]: Serde wire records for textures and fonts.

use serde::{Deserialize, Serialize};

pub mod color;
pub mod records;

pub use records::{FontData, FontFormat, PixelFormat, TextureData};

/// Integer 2D vector in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel-space rectangle, e.g. a sprite's region within an atlas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
}

impl Rect {
    pub const EMPTY: Rect = Rect { x: 0, y: 0, width: 0, height: 0 };

    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the pixel `(px, py)` lies inside the rectangle.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && py >= self.y
            && px < self.x.saturating_add(self.width)
            && py < self.y.saturating_add(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(6, 8, 6, 8);
        assert!(rect.contains(6, 8));
        assert!(rect.contains(11, 15));
        assert!(!rect.contains(12, 8));
        assert!(!rect.contains(5, 10));
    }

    #[test]
    fn test_rect_contains_near_max() {
        let rect = Rect::new(u32::MAX - 1, u32::MAX - 1, 10, 10);
        assert!(rect.contains(u32::MAX - 1, u32::MAX - 1));
        assert!(!rect.contains(u32::MAX, u32::MAX - 1));
        assert!(!rect.contains(0, 0));
    }

    #[test]
    fn test_rect_empty() {
        assert!(Rect::EMPTY.is_empty());
        assert!(Rect::new(0, 0, 4, 0).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_rect_serializes_short_names() {
        let json = serde_json::to_string(&Rect::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"x":1,"y":2,"w":3,"h":4}"#);
    }
}
