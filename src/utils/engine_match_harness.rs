//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from a given
//! position, records every move in a `GameRecord` and reports how the game
//! ended. Every move an engine returns is checked against the legal moves.

use std::time::Instant;

use log::debug;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::*;
use crate::game_state::game_record::GameRecord;
use crate::game_state::position::EndOfGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawFiftyMoveRule,
    DrawMaxPlies,
}

impl MatchOutcome {
    /// PGN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinCheckmate => "1-0",
            MatchOutcome::BlackWinCheckmate => "0-1",
            MatchOutcome::DrawStalemate | MatchOutcome::DrawFiftyMoveRule => "1/2-1/2",
            MatchOutcome::DrawMaxPlies => "*",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub record: GameRecord,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

/// Play one engine-vs-engine game from the standard start position.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, ChessErrors> {
    play_engine_match_from_position(engine_white, engine_black, Position::new_game(), config)
}

/// Play one engine-vs-engine game from a caller-provided position.
pub fn play_engine_match_from_position(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    start: Position,
    config: &MatchConfig,
) -> Result<MatchResult, ChessErrors> {
    engine_white.new_game();
    engine_black.new_game();

    let mut record = GameRecord::new(start);
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        let position = record.current_position().clone();
        if let Some(end) = position.end_of_game() {
            let outcome = match end {
                EndOfGame::Checkmate => match position.color_to_move() {
                    Color::Light => MatchOutcome::BlackWinCheckmate,
                    Color::Dark => MatchOutcome::WhiteWinCheckmate,
                },
                EndOfGame::Stalemate => MatchOutcome::DrawStalemate,
                EndOfGame::FiftyMoveRule => MatchOutcome::DrawFiftyMoveRule,
            };
            debug!(
                "{} vs {}: {outcome:?} after {} plies",
                engine_white.name(),
                engine_black.name(),
                record.len()
            );
            return Ok(MatchResult {
                outcome,
                record,
                white_total_time_ns,
                black_total_time_ns,
            });
        }

        let mover = position.color_to_move();
        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_white.choose_move(&position, &config.go_params)?,
            Color::Dark => engine_black.choose_move(&position, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();
        match mover {
            Color::Light => white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns),
            Color::Dark => black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns),
        }

        let chosen = out.best_move.ok_or_else(|| {
            ChessErrors::UnknownMove(format!("engine returned no move in {}", position.to_fen()))
        })?;
        record.play(chosen)?;
    }

    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        record,
        white_total_time_ns,
        black_total_time_ns,
    })
}
