use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Two glyphs were registered for the same character.
    #[error("Glyphe en double pour '{character}'")]
    DuplicateGlyph {
        /// Character that already had a glyph.
        character: char,
    },
}
