/// Nombre de lignes d'un glyphe. Fixe pour tout l'alphabet.
pub const GLYPH_HEIGHT: usize = 7;

/// Motif de la lettre `O`, une chaîne par ligne.
pub const PATTERN_O: [&str; GLYPH_HEIGHT] = [
    "  *** ", " * * ", " * * ", " * * ", " * * ", " * * ", "  *** ",
];

/// Motif de la lettre `P`.
pub const PATTERN_P: [&str; GLYPH_HEIGHT] = [
    " **** ", " * * ", " * * ", " **** ", " * ", " * ", " * ",
];

/// Motif de la lettre `S`.
pub const PATTERN_S: [&str; GLYPH_HEIGHT] = [
    "  **** ", " * ", " * ", "  *** ", "     * ", "     * ", " **** ",
];

/// Pixel allumé dans un motif.
pub const PIXEL: char = '*';

/// A single character drawn as exactly [`GLYPH_HEIGHT`] rows of spaces and
/// asterisks.
///
/// The row count is part of the type, so a glyph can never be short a row.
/// Row widths are whatever the pattern says; they are not padded.
///
/// # Example
/// ```
/// use ob_core::glyph::{Glyph, PATTERN_O};
/// let o = Glyph::new('O', PATTERN_O);
/// assert_eq!(o.line(0), Some("  *** "));
/// assert_eq!(o.line(7), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    character: char,
    rows: [&'static str; GLYPH_HEIGHT],
}

impl Glyph {
    #[must_use]
    pub const fn new(character: char, rows: [&'static str; GLYPH_HEIGHT]) -> Self {
        Self { character, rows }
    }

    /// Character this glyph draws.
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    /// All rows, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[&'static str; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Row `index`, or `None` past the last row.
    #[inline]
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&'static str> {
        self.rows.get(index).copied()
    }

    /// Largeur du glyphe en caractères (ligne la plus longue).
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// The three letters the banner knows how to draw.
pub const ALPHABET: [Glyph; 3] = [
    Glyph::new('O', PATTERN_O),
    Glyph::new('P', PATTERN_P),
    Glyph::new('S', PATTERN_S),
];
