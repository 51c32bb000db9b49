//! kanamemo terminal host
//!
//! Deals a grid and reads moves from stdin:
//! - `<number>`: reveal the tile in that slot
//! - `n`: deal a new round
//! - `q`: quit
//!
//! Usage: `kanamemo [COLLECTION_DIR]`. Without a directory the bundled
//! hiragana collection is used. Grid size, match size, seed and collection
//! name come from `KANAMEMO_*` environment variables.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use kanamemo::{
    builtin_source, DirectorySource, Game, GameConfig, RevealOutcome, TextRenderer, TileId,
};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::default()
        .apply_env()
        .context("invalid KANAMEMO_* setting")?;

    let mut game = match std::env::args().nth(1) {
        Some(dir) => Game::from_config(&config, &DirectorySource::new(dir), TextRenderer::new()),
        None => Game::from_config(&config, &builtin_source()?, TextRenderer::new()),
    }
    .with_context(|| format!("could not start a game with collection {:?}", config.collection))?;

    info!(seed = game.seed(), "kanamemo ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_frame(&mut stdout, &game)?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "n" | "new" => {
                if let Err(e) = game.new_round() {
                    warn!(error = %e, "could not deal a new round");
                }
            }
            other => match other.parse::<usize>() {
                Ok(slot) => match game.reveal(TileId(slot)) {
                    Ok(outcome) => describe(&mut stdout, &game, TileId(slot), &outcome)?,
                    Err(e) => writeln!(stdout, "{e}")?,
                },
                Err(_) => writeln!(stdout, "type a slot number, 'n' for a new round or 'q' to quit")?,
            },
        }

        print_frame(&mut stdout, &game)?;
        if game.is_complete() {
            writeln!(stdout, "All matched! 'n' for a new round, 'q' to quit.")?;
        }
    }

    Ok(())
}

fn print_frame(out: &mut impl Write, game: &Game<TextRenderer>) -> io::Result<()> {
    writeln!(out, "\nround {}, {} tiles left", game.round(), game.unmatched_count())?;
    write!(out, "{}", game.renderer().frame())?;
    out.flush()
}

fn describe(
    out: &mut impl Write,
    game: &Game<TextRenderer>,
    clicked: TileId,
    outcome: &RevealOutcome,
) -> io::Result<()> {
    let symbols = |tiles: &[TileId]| -> String {
        tiles
            .iter()
            .filter_map(|&id| game.tile(id))
            .map(|t| t.symbol().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    match outcome {
        RevealOutcome::Ignored => match game.tile(clicked) {
            Some(tile) if tile.is_matched() => writeln!(out, "that tile is already matched"),
            _ => writeln!(out, "that tile is already face up"),
        },
        RevealOutcome::Pending { .. } => Ok(()),
        RevealOutcome::Matched { tiles, .. } => writeln!(out, "match: {}", symbols(tiles.as_slice())),
        RevealOutcome::Mismatched { tiles } => writeln!(out, "no match: {}", symbols(tiles.as_slice())),
    }
}
