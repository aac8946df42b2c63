use anyhow::Result;
use clap::Parser;
use ob_core::GlyphTable;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre la config (défauts < --config < arguments)
    let config = cli.resolve_config()?;

    // 4. Rendre et afficher
    let banner = GlyphTable::standard()
        .render(&config.word)
        .with_ink(config.ink);
    log::debug!(
        "Bannière '{}' : {} colonnes × {} lignes",
        config.word,
        banner.width(),
        banner.rows().len()
    );
    print!("{banner}");

    Ok(())
}
