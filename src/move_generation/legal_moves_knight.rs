use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::{generate_step_moves, MoveGenContext};
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_knight_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<ChessMove>) {
    generate_step_moves(ctx, from, knight_attacks(from), |_| {}, out);
}
