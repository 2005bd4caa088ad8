//! Font registry for bundled bitmap fonts plus any registered at runtime.
//!
//! Fonts are decoded once on registration and looked up by
//! case-insensitive name. Lookups accept a comma-separated fallback
//! chain (`"custom, ascii_small"`); the first registered name wins.
//!
//! ## Architecture
//!
//! ```text
//! FontRegistry
//!   ├── fonts: FxHashMap<String, Font>   (lowercase name → decoded font)
//!   └── resolve("a, b, c") → Option<&Font>
//! ```

use std::time::Instant;

use rustc_hash::FxHashMap;
use zone_core::FontData;

use crate::font::{Font, FontError};

/// Name of the bundled 6x8 font.
pub const ASCII_SMALL: &str = "ascii_small";

const ASCII_SMALL_JSON: &str = include_str!("../assets/ascii-small.json");

/// The bundled 6x8 font record (codepoints 0–255, M1 atlas).
pub fn ascii_small_data() -> Result<FontData, FontError> {
    Ok(serde_json::from_str(ASCII_SMALL_JSON)?)
}

/// The bundled 6x8 font, decoded.
pub fn ascii_small() -> Result<Font, FontError> {
    Font::decode(&ascii_small_data()?)
}

/// Decoded fonts by name.
#[derive(Default)]
pub struct FontRegistry {
    fonts: FxHashMap<String, Font>,
}

impl FontRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the bundled fonts.
    pub fn with_bundled() -> Result<Self, FontError> {
        let mut registry = Self::new();
        registry.register(&ascii_small_data()?)?;
        Ok(registry)
    }

    /// Decode and register a font record under its own name.
    pub fn register(&mut self, data: &FontData) -> Result<&Font, FontError> {
        let start = Instant::now();
        let font = Font::decode(data)?;
        log::info!(
            "FontRegistry: registered '{}' ({} glyphs, {:.1}ms)",
            data.name,
            font.glyph_count(),
            start.elapsed().as_secs_f64() * 1000.0,
        );
        Ok(self.register_as(&data.name, font))
    }

    /// Register an already-decoded font under `name`, replacing any
    /// previous font of that name.
    pub fn register_as(&mut self, name: &str, font: Font) -> &Font {
        let key = name.trim().to_lowercase();
        self.fonts.insert(key.clone(), font);
        &self.fonts[&key]
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fonts.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn get(&self, name: &str) -> Option<&Font> {
        self.fonts.get(&name.trim().to_lowercase())
    }

    /// Walk a comma-separated fallback chain and return the first
    /// registered font.
    pub fn resolve(&self, chain: &str) -> Option<&Font> {
        chain
            .split(',')
            .map(|name| name.trim().trim_matches('"').trim_matches('\''))
            .filter(|name| !name.is_empty())
            .find_map(|name| self.get(name))
    }
}
