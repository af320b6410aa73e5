//! Rook moves and the castling bookkeeping tied to rooks.

use crate::game_state::chess_rules::{KING_SIDE_ROOK_FILE, QUEEN_SIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::game_state::square::square_at;
use crate::move_generation::legal_move_shared::{generate_sliding_moves, MoveGenContext};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_rook_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<ChessMove>) {
    let color = ctx.mover();
    generate_sliding_moves(
        ctx,
        from,
        &ORTHOGONAL_DIRECTIONS,
        |next| revoke_rook_castling(next, color, from),
        out,
    );
}

/// Clears the castling right of `color` tied to `square` when that square is
/// one of its rook corners. Used both when the rook leaves and when it is
/// captured there.
pub fn revoke_rook_castling(position: &mut Position, color: Color, square: Square) {
    let rank = color.home_rank() as i8;
    let rights = &mut position.can_castle[color.index()];
    if square_at(QUEEN_SIDE_ROOK_FILE, rank) == Some(square) {
        rights.queen_side = false;
    } else if square_at(KING_SIDE_ROOK_FILE, rank) == Some(square) {
        rights.king_side = false;
    }
}
