//! # zone-text
//!
//! Bitmap fonts and chat script parsing for Zone. Scripts are plain text
//! with `{...}` markup; they are tokenized, expanded into layout commands,
//! and measured against a decoded bitmap font.
//!
//! ## Architecture
//!
//! ```text
//! FontData (JSON) ──► Font::decode ──► Font { glyph metrics, atlas }
//!
//! script ──► parse_fakedown ──► tokenize ──► tokens_to_commands ──► Vec<Command>
//! ```
//!
//! - **`font`**: Uniform-grid font decoding and glyph lookups.
//! - **`fonts`**: The bundled `ascii_small` font and the font registry.
//! - **`script`**: Markup tokenizer.
//! - **`command`**: Glyph / style / break commands.
//! - **`fakedown`**: `##shk##`, `~~wvy~~`, `==rbw==` shorthand.

pub mod command;
pub mod fakedown;
pub mod font;
pub mod fonts;
pub mod script;

// Re-exports for ergonomic use.
pub use command::{script_to_commands, tokens_to_commands, BreakTarget, Command};
pub use fakedown::{fakedown_to_tag, parse_fakedown};
pub use font::{decode_font, Font, FontError, GlyphMetrics};
pub use fonts::{ascii_small, ascii_small_data, FontRegistry, ASCII_SMALL};
pub use script::{tokenize, Token, TokenKind};
