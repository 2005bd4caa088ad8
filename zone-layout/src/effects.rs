//! Per-frame glyph animation driven by style flags.
//!
//! | style      | effect                                       |
//! |------------|----------------------------------------------|
//! | `clr=#hex` | tint                                         |
//! | `shk`      | jitter of -1..=1 px on both axes             |
//! | `wvy`      | vertical wave, 3 px amplitude                |
//! | `rbw`      | cycling rainbow tint (overrides `clr`)       |

use std::hash::Hasher;

use rustc_hash::FxHasher;
use zone_core::{color, Vec2};

use crate::page::Glyph;
use crate::style::StyleValue;

/// Frames per second used to quantize `shk` jitter.
const SHAKE_RATE: f64 = 30.0;

/// Reveal every glyph and apply its animated styles at `elapsed` seconds.
/// The result depends only on the page and `elapsed`.
pub fn animate_page(page: &mut [Glyph], elapsed: f64) {
    let frame = (elapsed.max(0.0) * SHAKE_RATE) as u64;

    for (i, glyph) in page.iter_mut().enumerate() {
        glyph.hidden = false;

        if let Some(rgb) = glyph
            .styles
            .get("clr")
            .and_then(StyleValue::as_text)
            .and_then(color::hex_to_rgb)
        {
            glyph.color = color::rgb_to_color(rgb[0], rgb[1], rgb[2]);
        }
        if glyph.styles.contains_key("shk") {
            glyph.offset = shake_offset(i, frame);
        }
        if glyph.styles.contains_key("wvy") {
            glyph.offset.y = ((i as f64 + elapsed * 5.0).sin() * 3.0) as i32;
        }
        if glyph.styles.contains_key("rbw") {
            let hue = (elapsed / 0.6 - i as f64 / 8.0).sin().abs();
            let [r, g, b] = color::hsl_to_rgb(hue as f32, 1.0, 0.5);
            glyph.color = color::rgb_to_color(r, g, b);
        }
    }
}

fn shake_offset(index: usize, frame: u64) -> Vec2 {
    let mut hasher = FxHasher::default();
    hasher.write_usize(index);
    hasher.write_u64(frame);
    let hash = hasher.finish();
    let jitter = |bits: u64| (bits % 3) as i32 - 1;
    Vec2::new(jitter(hash), jitter(hash >> 32))
}
