//! Plays one engine-vs-engine game and prints it as PGN.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --white-depth 3 --black-random --seed 7`

use clap::Parser;
use log::info;

use damson_chess::engines::engine_minimax::MinimaxEngine;
use damson_chess::engines::engine_random::RandomEngine;
use damson_chess::engines::engine_trait::Engine;
use damson_chess::game_state::chess_types::Position;
use damson_chess::search::minimax::SearchConfig;
use damson_chess::utils::engine_match_harness::{play_engine_match_from_position, MatchConfig};
use damson_chess::utils::pgn::write_pgn;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth of the white minimax engine
    #[arg(long, default_value_t = 3)]
    white_depth: u8,

    /// Search depth of the black minimax engine
    #[arg(long, default_value_t = 2)]
    black_depth: u8,

    /// Play white with the random-move engine instead
    #[arg(long)]
    white_random: bool,

    /// Play black with the random-move engine instead
    #[arg(long)]
    black_random: bool,

    /// Seed for random-move engines
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Start position (defaults to the standard one)
    #[arg(long)]
    fen: Option<String>,

    /// Stop the game after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: u16,
}

fn player(random: bool, depth: u8, seed: u64) -> Box<dyn Engine> {
    if random {
        Box::new(RandomEngine::seeded(seed))
    } else {
        Box::new(MinimaxEngine::new(SearchConfig { depth }))
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    )
    .init();

    let args = Args::parse();
    let start = match &args.fen {
        Some(fen) => Position::from_fen(fen).map_err(|e| e.to_string())?,
        None => Position::new_game(),
    };

    let mut white = player(args.white_random, args.white_depth, args.seed);
    let mut black = player(args.black_random, args.black_depth, args.seed.wrapping_add(1));
    info!("{} (white) vs {} (black)", white.name(), black.name());

    let result = play_engine_match_from_position(
        white.as_mut(),
        black.as_mut(),
        start,
        &MatchConfig {
            max_plies: args.max_plies,
            ..MatchConfig::default()
        },
    )
    .map_err(|e| e.to_string())?;

    info!(
        "{:?} after {} plies, white {:.3} ms, black {:.3} ms",
        result.outcome,
        result.record.len(),
        result.white_total_time_ns as f64 / 1_000_000.0,
        result.black_total_time_ns as f64 / 1_000_000.0
    );

    let pgn =
        write_pgn(&result.record, result.outcome.result_token()).map_err(|e| e.to_string())?;
    print!("{pgn}");
    Ok(())
}
