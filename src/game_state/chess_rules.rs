//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN and the fifty-move limit used by move generation.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-moves without a pawn move or capture after which no further move is generated.
pub const FIFTY_MOVE_LIMIT: u16 = 100;

/// File index of the king's starting square.
pub const KING_HOME_FILE: i8 = 4;
/// File index of the queen-side rook's starting square.
pub const QUEEN_SIDE_ROOK_FILE: i8 = 0;
/// File index of the king-side rook's starting square.
pub const KING_SIDE_ROOK_FILE: i8 = 7;
