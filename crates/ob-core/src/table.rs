use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::banner::{Banner, render};
use crate::error::CoreError;
use crate::glyph::{ALPHABET, Glyph};

/// Table standard, construite une seule fois au premier accès puis partagée
/// en lecture seule par tous les threads.
static STANDARD: LazyLock<GlyphTable> = LazyLock::new(|| GlyphTable {
    glyphs: ALPHABET.iter().map(|g| (g.character(), *g)).collect(),
});

/// Read-only mapping from character to [`Glyph`].
///
/// Keys are unique and iteration is ordered by character, so two tables
/// built from the same glyphs always behave identically.
///
/// # Example
/// ```
/// use ob_core::GlyphTable;
/// let table = GlyphTable::standard();
/// assert!(table.contains('O'));
/// assert!(!table.contains('X'));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: BTreeMap<char, Glyph>,
}

impl GlyphTable {
    /// The process-wide table holding `O`, `P` and `S`.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Construit une table à partir d'une liste de glyphes.
    ///
    /// # Errors
    /// Returns [`CoreError::DuplicateGlyph`] if two glyphs share a character.
    ///
    /// # Example
    /// ```
    /// use ob_core::GlyphTable;
    /// use ob_core::glyph::{Glyph, PATTERN_O};
    /// let o = Glyph::new('O', PATTERN_O);
    /// assert!(GlyphTable::from_glyphs([o]).is_ok());
    /// assert!(GlyphTable::from_glyphs([o, o]).is_err());
    /// ```
    pub fn from_glyphs<I>(glyphs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = Glyph>,
    {
        let mut map = BTreeMap::new();
        for glyph in glyphs {
            let character = glyph.character();
            if map.insert(character, glyph).is_some() {
                return Err(CoreError::DuplicateGlyph { character });
            }
        }
        Ok(Self { glyphs: map })
    }

    #[inline]
    #[must_use]
    pub fn get(&self, character: char) -> Option<&Glyph> {
        self.glyphs.get(&character)
    }

    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.glyphs.contains_key(&character)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphes dans l'ordre des caractères.
    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.values()
    }

    /// Method form of [`render`].
    #[must_use]
    pub fn render(&self, word: &str) -> Banner {
        render(word, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::{PATTERN_O, PATTERN_S};

    #[test]
    fn standard_holds_exactly_ops() {
        let table = GlyphTable::standard();
        assert_eq!(table.len(), 3);
        let keys: Vec<char> = table.iter().map(Glyph::character).collect();
        assert_eq!(keys, vec!['O', 'P', 'S']);
    }

    #[test]
    fn standard_is_shared() {
        assert!(std::ptr::eq(GlyphTable::standard(), GlyphTable::standard()));
    }

    #[test]
    fn duplicate_glyph_is_rejected() {
        let err = GlyphTable::from_glyphs([
            Glyph::new('S', PATTERN_S),
            Glyph::new('O', PATTERN_O),
            Glyph::new('S', PATTERN_S),
        ])
        .unwrap_err();
        assert_eq!(err, CoreError::DuplicateGlyph { character: 'S' });
    }

    #[test]
    fn empty_table_knows_nothing() {
        let table = GlyphTable::from_glyphs(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.get('O').is_none());
    }

    #[test]
    fn table_get_does_not_fold_case() {
        let table = GlyphTable::standard();
        assert!(table.get('O').is_some());
        assert!(table.get('o').is_none());
    }
}
