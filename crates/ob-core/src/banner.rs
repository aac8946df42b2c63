use std::fmt;

use crate::glyph::{GLYPH_HEIGHT, Glyph, PIXEL};
use crate::table::GlyphTable;

/// Bannière rendue : exactement [`GLYPH_HEIGHT`] lignes.
///
/// Chaque ligne est la concaténation, dans l'ordre du mot, de la ligne
/// correspondante de chaque glyphe.
///
/// # Example
/// ```
/// use ob_core::{GlyphTable, render};
/// let banner = render("OOPS", GlyphTable::standard());
/// assert_eq!(banner.rows().len(), 7);
/// assert_eq!(banner.row(0), Some("  ***   ***  ****   **** "));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Banner {
    rows: [String; GLYPH_HEIGHT],
}

impl Banner {
    #[must_use]
    pub fn rows(&self) -> &[String; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Row `index`, or `None` past the last row.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }

    /// Longest row, in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Redraw every pixel with `ink`. Spaces are left alone.
    ///
    /// # Example
    /// ```
    /// use ob_core::{GlyphTable, render};
    /// let banner = render("O", GlyphTable::standard()).with_ink('#');
    /// assert_eq!(banner.row(0), Some("  ### "));
    /// ```
    #[must_use]
    pub fn with_ink(&self, ink: char) -> Self {
        if ink == PIXEL {
            return self.clone();
        }
        Self {
            rows: std::array::from_fn(|i| {
                self.rows[i]
                    .chars()
                    .map(|c| if c == PIXEL { ink } else { c })
                    .collect()
            }),
        }
    }
}

impl fmt::Display for Banner {
    /// Une ligne par rangée, chacune terminée par `\n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Render `word` as a banner using the glyphs in `table`.
///
/// Lookup is case-insensitive: every character is uppercased before it is
/// looked up. Characters missing from the table contribute nothing to any
/// row. Never fails.
///
/// # Example
/// ```
/// use ob_core::{GlyphTable, render};
/// let table = GlyphTable::standard();
/// assert_eq!(render("oops", table), render("OOPS", table));
/// assert_eq!(render("OXO", table), render("OO", table));
/// ```
#[must_use]
pub fn render(word: &str, table: &GlyphTable) -> Banner {
    let glyphs: Vec<&Glyph> = word
        .chars()
        .flat_map(char::to_uppercase)
        .filter_map(|c| table.get(c))
        .collect();

    Banner {
        rows: std::array::from_fn(|i| glyphs.iter().map(|g| g.rows()[i]).collect()),
    }
}
