use crate::game_state::chess_types::{Square, DIAGONAL_DIRECTIONS};
use crate::move_generation::legal_move_shared::{generate_sliding_moves, MoveGenContext};
use crate::moves::move_descriptions::ChessMove;

pub fn generate_bishop_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<ChessMove>) {
    generate_sliding_moves(ctx, from, &DIAGONAL_DIRECTIONS, |_| {}, out);
}
