//! Packed colours.
//!
//! A colour is a `u32` laid out as `0xAABBGGRR`, i.e. the little-endian
//! reading of an `[r, g, b, a]` pixel. This matches how RGBA pixel
//! buffers look when viewed as 32-bit words, so codecs can compare
//! whole pixels against these constants.

/// Fully opaque white.
pub const WHITE: u32 = 0xFFFF_FFFF;

/// Fully transparent black.
pub const CLEAR: u32 = 0x0000_0000;

/// Default glyph tint (white, alpha ignored by the tinting step).
pub const DEFAULT_TINT: u32 = 0x00FF_FFFF;

/// Pack channels into a colour.
pub fn rgba_to_color(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

/// Pack an opaque colour.
pub fn rgb_to_color(r: u8, g: u8, b: u8) -> u32 {
    rgba_to_color(r, g, b, 255)
}

/// Unpack a colour into `[r, g, b, a]`.
pub fn color_to_rgba(color: u32) -> [u8; 4] {
    color.to_le_bytes()
}

/// Format the RGB part of a colour as `#rrggbb`.
pub fn color_to_hex(color: u32) -> String {
    let [r, g, b, _] = color_to_rgba(color);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse `#rrggbb` (case-insensitive). Anything else yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Convert HSL (each component in `[0, 1]`) to RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };
    let to_byte = |v: f32| (v * 255.0).clamp(0.0, 255.0) as u8;
    [to_byte(r), to_byte(g), to_byte(b)]
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
