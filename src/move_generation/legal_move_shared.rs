//! State shared by the per-piece generators.

use crate::game_state::chess_types::*;
use crate::move_generation::attack_table::AttackTable;
use crate::move_generation::legal_move_apply::create_move;
use crate::moves::move_descriptions::{ChessMove, MoveKind};
use crate::moves::sliding_moves::ray_squares;

/// One position's generation context: the position, the opponent attack
/// table built for it and the mover's king square.
pub struct MoveGenContext<'a> {
    pub position: &'a Position,
    pub attack_table: &'a AttackTable,
    pub king_square: Option<Square>,
}

impl<'a> MoveGenContext<'a> {
    pub fn new(position: &'a Position, attack_table: &'a AttackTable) -> Self {
        Self {
            position,
            attack_table,
            king_square: position.king_square(position.color_to_move()),
        }
    }

    #[inline]
    pub fn mover(&self) -> Color {
        self.position.color_to_move()
    }

    /// Whether `square` holds a piece of the side to move.
    #[inline]
    pub fn is_own(&self, square: Square) -> bool {
        self.position
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.mover())
    }

    /// Whether `square` holds a piece of the side not to move.
    #[inline]
    pub fn is_enemy(&self, square: Square) -> bool {
        self.position
            .piece_at(square)
            .is_some_and(|piece| piece.color != self.mover())
    }
}

/// Emits one move per step target not occupied by an own piece.
pub fn generate_step_moves<F>(
    ctx: &MoveGenContext<'_>,
    from: Square,
    targets: u64,
    after_move: F,
    out: &mut Vec<ChessMove>,
) where
    F: Fn(&mut Position),
{
    let mut bits = targets;
    while bits != 0 {
        let to = bits.trailing_zeros() as Square;
        bits &= bits - 1;
        if ctx.is_own(to) {
            continue;
        }
        if let Some(chess_move) = create_move(ctx, from, to, MoveKind::Normal, &after_move) {
            out.push(chess_move);
        }
    }
}

/// Walks each direction one step at a time; the first occupied square ends
/// the ray and is emitted only when it holds an enemy piece.
pub fn generate_sliding_moves<F>(
    ctx: &MoveGenContext<'_>,
    from: Square,
    directions: &[Offset],
    after_move: F,
    out: &mut Vec<ChessMove>,
) where
    F: Fn(&mut Position),
{
    for &direction in directions {
        for to in ray_squares(ctx.position, from, direction) {
            if ctx.is_own(to) {
                break;
            }
            if let Some(chess_move) = create_move(ctx, from, to, MoveKind::Normal, &after_move) {
                out.push(chess_move);
            }
        }
    }
}
