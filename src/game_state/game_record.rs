//! Move history of one game.
//!
//! Keeps the initial position and every played move; each move already holds
//! the position it produced, so any historical position (and the notation of
//! any historical move) is available without replaying.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::position::EndOfGame;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic_notation::{find_move_by_san, notation_for_move};
use crate::utils::long_algebraic::find_move_by_long_algebraic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    initial: Position,
    moves: Vec<ChessMove>,
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new(Position::new_game())
    }
}

impl GameRecord {
    pub fn new(initial: Position) -> Self {
        Self {
            initial,
            moves: Vec::new(),
        }
    }

    #[inline]
    pub fn initial_position(&self) -> &Position {
        &self.initial
    }

    #[inline]
    pub fn moves(&self) -> &[ChessMove] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn current_position(&self) -> &Position {
        self.moves
            .last()
            .map_or(&self.initial, ChessMove::resulting_position)
    }

    /// Position in which move `index` was played.
    pub fn position_before(&self, index: usize) -> Result<&Position, ChessErrors> {
        match index {
            0 if !self.moves.is_empty() => Ok(&self.initial),
            _ if index < self.moves.len() => Ok(self.moves[index - 1].resulting_position()),
            _ => Err(ChessErrors::MoveIndexOutOfRange(index)),
        }
    }

    /// Appends a move generated from the current position.
    pub fn play(&mut self, chess_move: ChessMove) -> Result<&ChessMove, ChessErrors> {
        if !self.current_position().possible_moves().contains(&chess_move) {
            return Err(ChessErrors::UnknownMove(chess_move.to_long_algebraic()));
        }
        self.moves.push(chess_move);
        self.last_move()
    }

    pub fn play_san(&mut self, san: &str) -> Result<&ChessMove, ChessErrors> {
        let chess_move = find_move_by_san(self.current_position(), san)?;
        self.moves.push(chess_move);
        self.last_move()
    }

    pub fn play_long_algebraic(&mut self, text: &str) -> Result<&ChessMove, ChessErrors> {
        let chess_move = find_move_by_long_algebraic(self.current_position(), text)?;
        self.moves.push(chess_move);
        self.last_move()
    }

    fn last_move(&self) -> Result<&ChessMove, ChessErrors> {
        self.moves
            .last()
            .ok_or(ChessErrors::MoveIndexOutOfRange(0))
    }

    /// SAN of move `index`, computed against the position it was played in.
    pub fn notation_for(&self, index: usize) -> Result<String, ChessErrors> {
        let before = self.position_before(index)?;
        Ok(notation_for_move(before, &self.moves[index]))
    }

    pub fn notations(&self) -> Result<Vec<String>, ChessErrors> {
        (0..self.moves.len())
            .map(|index| self.notation_for(index))
            .collect()
    }

    #[inline]
    pub fn end_of_game(&self) -> Option<EndOfGame> {
        self.current_position().end_of_game()
    }
}
