use anyhow::{Context, Result};
use tracing::info;

use rookery_engine::AlgorithmKind;
use rookery_game::{Game, GameMode, GameParameters, TurnOutcome};

/// Plies played when no limit is given.
const DEFAULT_PLIES: u32 = 200;

/// Usage: `rookery [algorithm] [depth] [plies] [seed]`.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let defaults = GameParameters::default();

    let algorithm = match args.first() {
        Some(name) => name.parse::<AlgorithmKind>()?,
        None => defaults.algorithm,
    };
    let depth = match args.get(1) {
        Some(value) => value.parse().with_context(|| format!("invalid depth: {value}"))?,
        None => defaults.depth,
    };
    let plies: u32 = match args.get(2) {
        Some(value) => value.parse().with_context(|| format!("invalid ply limit: {value}"))?,
        None => DEFAULT_PLIES,
    };
    let seed = match args.get(3) {
        Some(value) => value.parse().with_context(|| format!("invalid seed: {value}"))?,
        None => defaults.seed,
    };

    let params = GameParameters {
        algorithm,
        depth,
        mode: GameMode::SelfPlay,
        seed,
    };
    info!(%algorithm, depth, plies, seed, "rookery self-play starting");

    let mut game = Game::new(params);
    while game.plies() < plies {
        match game.update().context("self-play turn failed")? {
            TurnOutcome::Moved { .. } => {}
            TurnOutcome::Checkmate { winner } => {
                println!("checkmate, {winner} wins");
                break;
            }
            TurnOutcome::Stalemate => {
                println!("stalemate");
                break;
            }
            TurnOutcome::Interrupted | TurnOutcome::NoMove => break,
        }
    }

    println!("{}", game.board().pretty());
    info!(plies = game.plies(), status = ?game.status(), "rookery self-play finished");
    Ok(())
}
