//! User avatars: 8x8 monochrome bitmaps shared as bare base64 M1 payloads.
//!
//! Peers send only the `data` string; width, height and format are
//! implied. Decoded avatars are kept in an LRU keyed by that string so a
//! room full of repeated avatars decodes each one once.

use std::num::NonZeroUsize;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use lru::LruCache;
use zone_core::PixelFormat;

use crate::buffer::PixelBuffer;
use crate::codec::{self, TextureError};
use crate::texture::{decode_ascii_texture, encode_texture};

/// Avatar edge length in pixels.
pub const AVATAR_SIZE: u32 = 8;

/// Character marking a solid pixel in avatar ASCII art.
pub const AVATAR_SOLID: char = '1';

/// Encode avatar art into its base64 M1 payload.
///
/// Rows are separated by any run of whitespace, so `"00011000 00011000 ..."`
/// typed on one line works. `'1'` is solid, anything else is clear.
pub fn encode_avatar(ascii: &str) -> Result<String, TextureError> {
    let art = ascii.split_whitespace().collect::<Vec<_>>().join("\n");
    let buffer = decode_ascii_texture(&art, AVATAR_SOLID)?;
    if buffer.width() != AVATAR_SIZE || buffer.height() != AVATAR_SIZE {
        return Err(TextureError::AvatarSize {
            width: buffer.width(),
            height: buffer.height(),
        });
    }
    Ok(encode_texture(&buffer, PixelFormat::M1).data)
}

/// Decode a base64 M1 avatar payload.
pub fn decode_avatar(data: &str) -> Result<PixelBuffer, TextureError> {
    let bytes = BASE64_STANDARD.decode(data.as_bytes())?;
    codec::decode(&bytes, PixelFormat::M1, AVATAR_SIZE, AVATAR_SIZE)
}

/// LRU of decoded avatars keyed by payload.
pub struct AvatarCache {
    entries: LruCache<String, PixelBuffer>,
}

impl Default for AvatarCache {
    fn default() -> Self {
        Self::new(256)
    }
}

impl AvatarCache {
    /// Create a cache holding at most `capacity` avatars (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, data: &str) -> bool {
        self.entries.contains(data)
    }

    /// Return the decoded avatar for `data`, decoding on first use.
    /// Payloads that fail to decode are not cached.
    pub fn get_or_decode(&mut self, data: &str) -> Result<&PixelBuffer, TextureError> {
        self.entries.try_get_or_insert(data.to_string(), || {
            decode_avatar(data).inspect_err(|e| log::warn!("Rejected avatar payload: {e}"))
        })
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
