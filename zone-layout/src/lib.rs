//! # zone-layout
//!
//! Page layout for Zone chat scripts. Turns layout commands into pages of
//! positioned, styled glyph records for a bitmap rasterizer.
//!
//! ## Architecture
//!
//! ```text
//! script ──► zone_text::script_to_commands ──► Vec<Command>
//!                                                 │
//!                        TextLayout (font, LayoutConfig, StyleHandler)
//!                                                 │  break_long_spans
//!                                                 │  line / page breaking
//!                                                 ▼
//!                                  Vec<Page>  (Page = Vec<Glyph>)
//!                                                 │
//!                                  effects::animate_page (per frame)
//! ```
//!
//! - **`engine`**: `TextLayout` and `LayoutConfig`.
//! - **`style`**: Style state map and directive interpreters.
//! - **`page`**: Glyph records and page metrics.
//! - **`effects`**: `clr` / `shk` / `wvy` / `rbw` animation.

pub mod effects;
pub mod engine;
pub mod page;
pub mod style;

// Re-exports for ergonomic use.
pub use effects::animate_page;
pub use engine::{script_to_pages, LayoutConfig, TextLayout};
pub use page::{page_height, Glyph, Page};
pub use style::{DefaultStyleHandler, StyleHandler, StyleState, StyleValue};
