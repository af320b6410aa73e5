//! Engine abstraction shared by the worker, self-play and fuzz tests.
//!
//! Defines common input parameters and output payloads so different move
//! choosers can be swapped behind a single trait interface.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Position;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    /// White-positive score of `best_move`, when the engine computes one.
    pub evaluation: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors>;
}
