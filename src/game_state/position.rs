//! Immutable board position.
//!
//! `Position` is the central model of the crate: a 64-slot piece array plus
//! side to move, castling rights, en-passant target and the fifty-move
//! counter. A position is never changed once built; every move produces a new
//! one through [`Position::child`] inside move generation.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{FIFTY_MOVE_LIMIT, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::move_generation::attack_table::AttackTable;
use crate::move_generation::legal_move_generator::{generate_possible_moves, legal_moves_from};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_position;

/// Why a position has no legal continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfGame {
    Checkmate,
    Stalemate,
    /// Move generation is suppressed once the fifty-move counter saturates.
    FiftyMoveRule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) squares: [Option<Piece>; 64],
    pub(crate) color_to_move: Color,
    pub(crate) can_castle: [CastlingRights; 2],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) fifty_move_counter: u16,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Board with no pieces, light to move and no rights.
    pub(crate) fn empty() -> Self {
        Self {
            squares: [None; 64],
            color_to_move: Color::Light,
            can_castle: [CastlingRights::NONE; 2],
            en_passant_target: None,
            fifty_move_counter: 0,
        }
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Copy used as the starting point of a move: side switched, en-passant
    /// target cleared, everything else shared with the parent.
    pub(crate) fn child(&self) -> Self {
        Self {
            squares: self.squares,
            color_to_move: self.color_to_move.opposite(),
            can_castle: self.can_castle,
            en_passant_target: None,
            fifty_move_counter: self.fifty_move_counter,
        }
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Read-only view of the whole board, indexed by square number.
    #[inline]
    pub fn squares(&self) -> &[Option<Piece>; 64] {
        &self.squares
    }

    #[inline]
    pub fn color_to_move(&self) -> Color {
        self.color_to_move
    }

    #[inline]
    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.can_castle[color.index()]
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn fifty_move_counter(&self) -> u16 {
        self.fifty_move_counter
    }

    /// Linear scan for the king of `color`.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        (0..64u8).find(|&square| {
            self.piece_at(square) == Some(Piece::new(PieceKind::King, color))
        })
    }

    /// Squares controlled by the side not to move, its pins against the side
    /// to move and the pieces giving check.
    pub fn create_opponent_attack_table(&self) -> AttackTable {
        AttackTable::build(self, self.color_to_move.opposite())
    }

    /// All legal moves, in square order 0..63 of the moving pieces.
    pub fn possible_moves(&self) -> Vec<ChessMove> {
        generate_possible_moves(self)
    }

    /// Legal moves of the piece on `square` (empty for foreign or empty squares).
    pub fn moves_from(&self, square: Square) -> Vec<ChessMove> {
        legal_moves_from(self, square)
    }

    /// Whether the side to move is in check. A precomputed opponent attack
    /// table may be supplied to avoid rebuilding it.
    pub fn is_in_check(&self, attack_table: Option<&AttackTable>) -> bool {
        let Some(king) = self.king_square(self.color_to_move) else {
            return false;
        };
        match attack_table {
            Some(table) => table.is_attacked(king),
            None => self.create_opponent_attack_table().is_attacked(king),
        }
    }

    #[inline]
    pub(crate) fn fifty_move_saturated(&self) -> bool {
        self.fifty_move_counter.saturating_add(1) >= FIFTY_MOVE_LIMIT
    }

    pub fn end_of_game(&self) -> Option<EndOfGame> {
        self.end_of_game_with(&self.possible_moves())
    }

    /// Game-end classification given the already generated legal moves.
    /// Mate outranks a saturated fifty-move counter.
    pub fn end_of_game_with(&self, moves: &[ChessMove]) -> Option<EndOfGame> {
        if !moves.is_empty() {
            return None;
        }
        if self.is_in_check(None) {
            Some(EndOfGame::Checkmate)
        } else if self.fifty_move_saturated() {
            Some(EndOfGame::FiftyMoveRule)
        } else {
            Some(EndOfGame::Stalemate)
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_position(self))
    }
}
