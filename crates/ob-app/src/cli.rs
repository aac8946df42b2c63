use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ob_core::BannerConfig;

/// oopsbanner — affiche un mot en lettres ASCII-art de 7 lignes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Mot à afficher. Défaut : "OOPS".
    pub word: Option<String>,

    /// Fichier de configuration TOML. Aucun fichier n'est lu sans cette option.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Caractère utilisé pour dessiner les pixels.
    #[arg(long)]
    pub ink: Option<char>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Build the final config: defaults, then `--config` if given, then the
    /// command-line overrides.
    ///
    /// # Errors
    /// Returns an error if an explicit config file cannot be loaded or if the
    /// resulting config is invalid.
    pub fn resolve_config(&self) -> Result<BannerConfig> {
        let mut config = if let Some(ref path) = self.config {
            log::info!("Config : {}", path.display());
            ob_core::config::load_config(path)?
        } else {
            log::debug!("Pas de --config, utilisation des défauts.");
            BannerConfig::default()
        };
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    /// Apply command-line overrides on top of a loaded config.
    ///
    /// # Errors
    /// Returns an error if the resulting config is invalid.
    pub fn apply_overrides(&self, config: &mut BannerConfig) -> Result<()> {
        if let Some(ref word) = self.word {
            config.word.clone_from(word);
        }
        if let Some(ink) = self.ink {
            config.ink = ink;
        }
        config.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use ob_core::config::DEFAULT_WORD;

    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("banner.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn no_arguments_means_defaults() {
        let cli = Cli::try_parse_from(["oopsbanner"]).unwrap();
        assert!(cli.word.is_none());
        assert!(cli.ink.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.resolve_config().unwrap(), BannerConfig::default());
    }

    #[test]
    fn bare_run_ignores_config_in_working_dir() {
        // Un config/default.toml cassé ou différent dans le répertoire courant
        // ne doit jamais être lu sans --config.
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("config")).unwrap();
        std::fs::write(dir.path().join("config/default.toml"), "not = [valid").unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let resolved = Cli::try_parse_from(["oopsbanner"])
            .unwrap()
            .resolve_config();
        std::env::set_current_dir(previous).unwrap();

        let config = resolved.unwrap();
        assert_eq!(config.word, DEFAULT_WORD);
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[banner]\nword = \"SOS\"\nink = \"@\"\n");
        let cli = Cli::try_parse_from(["oopsbanner", "-c", path.to_str().unwrap()]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.word, "SOS");
        assert_eq!(config.ink, '@');
    }

    #[test]
    fn command_line_beats_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[banner]\nword = \"SOS\"\nink = \"@\"\n");
        let cli = Cli::try_parse_from([
            "oopsbanner",
            "pop",
            "--config",
            path.to_str().unwrap(),
            "--ink",
            "#",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.word, "pop");
        assert_eq!(config.ink, '#');
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let cli = Cli::try_parse_from(["oopsbanner", "-c", missing.to_str().unwrap()]).unwrap();
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn explicit_broken_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "not = [valid");
        let cli = Cli::try_parse_from(["oopsbanner", "-c", path.to_str().unwrap()]).unwrap();
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn word_and_ink_override_config() {
        let cli = Cli::try_parse_from(["oopsbanner", "sos", "--ink", "#"]).unwrap();
        let mut config = BannerConfig::default();
        cli.apply_overrides(&mut config).unwrap();
        assert_eq!(config.word, "sos");
        assert_eq!(config.ink, '#');
    }

    #[test]
    fn multi_char_ink_is_refused_by_parser() {
        assert!(Cli::try_parse_from(["oopsbanner", "--ink", "##"]).is_err());
    }

    #[test]
    fn blank_ink_is_refused_on_apply() {
        let cli = Cli::try_parse_from(["oopsbanner", "--ink", " "]).unwrap();
        let mut config = BannerConfig::default();
        assert!(cli.apply_overrides(&mut config).is_err());
    }
}
