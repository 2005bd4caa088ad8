//! # zone-texture
//!
//! Pixel codecs for Zone's bitmap assets. Glyph atlases and user avatars
//! travel as base64 byte blobs in one of four densities and are decoded
//! into a canonical RGBA [`PixelBuffer`].
//!
//! ## Architecture
//!
//! ```text
//! TextureData { format, width, height, data: base64 }
//!     │  base64 decode
//!     ▼
//! bytes ──► codec(format).decode_into ──► PixelBuffer (RGBA, 4 B/px)
//!                                              │
//! PixelBuffer ──► codec(format).encode ──► bytes ──► TextureData
//! ```
//!
//! - **`codec`**: `PixelCodec` trait and the RGBA8 / R8 / R4 / M1 codecs.
//! - **`buffer`**: `PixelBuffer`, the canonical raster.
//! - **`texture`**: Base64 transport and the ASCII-art decoder.
//! - **`avatar`**: 8x8 M1 avatars and their LRU cache.

pub mod avatar;
pub mod buffer;
pub mod codec;
pub mod texture;

// Re-exports for ergonomic use.
pub use avatar::{decode_avatar, encode_avatar, AvatarCache, AVATAR_SIZE};
pub use buffer::PixelBuffer;
pub use codec::{codec, decode, decode_into, encode, parse_format, PixelCodec, TextureError};
pub use texture::{decode_ascii_texture, decode_texture, encode_texture};
pub use zone_core::{PixelFormat, TextureData};
