/// Glyph data, lookup table and banner rendering for oopsbanner.
///
/// This crate holds everything the binary needs to turn a word into a
/// 7-row ASCII-art banner: the hardcoded glyphs, the read-only glyph table,
/// the renderer and the configuration loader.

pub mod banner;
pub mod config;
pub mod error;
pub mod glyph;
pub mod table;

pub use banner::{Banner, render};
pub use config::BannerConfig;
pub use error::CoreError;
pub use glyph::{GLYPH_HEIGHT, Glyph};
pub use table::GlyphTable;
