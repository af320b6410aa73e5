//! Full legal move generation pipeline.
//!
//! One opponent attack table per position, then every own piece in square
//! order 0..63. That order is the canonical move order the search and the
//! notation rely on.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;

pub fn generate_possible_moves(position: &Position) -> Vec<ChessMove> {
    let attack_table = position.create_opponent_attack_table();
    let ctx = MoveGenContext::new(position, &attack_table);

    let mut out = Vec::with_capacity(48);
    for square in 0..64u8 {
        generate_square_moves(&ctx, square, &mut out);
    }
    out
}

/// Legal moves of the single piece on `square`.
pub fn legal_moves_from(position: &Position, square: Square) -> Vec<ChessMove> {
    let attack_table = position.create_opponent_attack_table();
    let ctx = MoveGenContext::new(position, &attack_table);

    let mut out = Vec::new();
    generate_square_moves(&ctx, square, &mut out);
    out
}

fn generate_square_moves(ctx: &MoveGenContext<'_>, square: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = ctx.position.piece_at(square) else {
        return;
    };
    if piece.color != ctx.mover() {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(ctx, square, out),
        PieceKind::Knight => generate_knight_moves(ctx, square, out),
        PieceKind::Bishop => generate_bishop_moves(ctx, square, out),
        PieceKind::Rook => generate_rook_moves(ctx, square, out),
        PieceKind::Queen => generate_queen_moves(ctx, square, out),
        PieceKind::King => generate_king_moves(ctx, square, out),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    use super::{generate_possible_moves, legal_moves_from};
    use crate::game_state::chess_types::{PieceKind, Position};
    use crate::move_generation::attack_table::AttackTable;

    #[test]
    fn moves_come_in_square_order() {
        let moves = generate_possible_moves(&Position::new_game());
        let starts: Vec<u8> = moves.iter().map(|m| m.start_square()).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
        // b1 knight comes before the pawns on rank 2.
        assert_eq!(moves[0].piece().kind, PieceKind::Knight);
    }

    #[test]
    fn per_square_moves_match_full_generation() {
        let position = Position::new_game();
        assert_eq!(legal_moves_from(&position, 1).len(), 2);
        assert_eq!(legal_moves_from(&position, 12).len(), 2);
        assert!(legal_moves_from(&position, 52).is_empty());
        assert!(legal_moves_from(&position, 35).is_empty());
    }

    #[test]
    fn random_games_never_leave_the_mover_in_check() {
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for _game in 0..12 {
            let mut position = Position::new_game();
            for _ply in 0..120 {
                let moves = position.possible_moves();
                for chess_move in &moves {
                    let after = chess_move.resulting_position();
                    let mover = position.color_to_move();
                    let king = after
                        .king_square(mover)
                        .expect("mover's king should stay on the board");
                    let table = AttackTable::build(after, mover.opposite());
                    assert!(
                        !table.is_attacked(king),
                        "{} leaves the king attacked in {}",
                        chess_move.to_long_algebraic(),
                        position.to_fen()
                    );
                    assert_eq!(after.color_to_move(), mover.opposite());
                }

                let Some(next) = moves.choose(&mut rng) else {
                    break;
                };
                position = next.resulting_position().clone();
            }
        }
    }
}
