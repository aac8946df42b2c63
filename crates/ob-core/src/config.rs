use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CoreError;
use crate::glyph::PIXEL;

/// Mot affiché quand rien d'autre n'est demandé.
pub const DEFAULT_WORD: &str = "OOPS";

/// Configuration de la bannière.
///
/// Lisible depuis TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use ob_core::config::BannerConfig;
/// let config = BannerConfig::default();
/// assert_eq!(config.word, "OOPS");
/// assert_eq!(config.ink, '*');
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BannerConfig {
    /// Mot à rendre.
    pub word: String,
    /// Caractère utilisé pour dessiner les pixels.
    pub ink: char,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            word: DEFAULT_WORD.to_string(),
            ink: PIXEL,
        }
    }
}

impl BannerConfig {
    /// Check values a TOML file or the command line may have set.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `ink` would be invisible.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.ink.is_whitespace() || self.ink.is_control() {
            return Err(CoreError::Config(format!(
                "encre invisible : {:?}",
                self.ink
            )));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    banner: Option<BannerSection>,
}

#[derive(Deserialize)]
struct BannerSection {
    word: Option<String>,
    ink: Option<char>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if the merged
/// configuration fails [`BannerConfig::validate`].
///
/// # Example
/// ```no_run
/// use ob_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<BannerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = BannerConfig::default();

    if let Some(b) = file.banner {
        if let Some(v) = b.word {
            config.word = v;
        }
        if let Some(v) = b.ink {
            config.ink = v;
        }
    }

    config
        .validate()
        .with_context(|| format!("Valeur rejetée dans {}", path.display()))?;

    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}
