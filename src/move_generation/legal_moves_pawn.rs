//! Pawn pushes, captures, en passant and promotion.
//!
//! Promotion always produces a queen.

use crate::game_state::chess_types::*;
use crate::game_state::square::{add_offset, rank_of};
use crate::move_generation::legal_move_apply::create_move;
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

pub fn generate_pawn_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<ChessMove>) {
    let position = ctx.position;
    let color = ctx.mover();
    let direction = color.pawn_direction();

    if let Some(one) = add_offset(from, (0, direction)) {
        if position.piece_at(one).is_none() {
            push_pawn_move(ctx, from, one, out);

            if rank_of(from) == start_rank(color) {
                if let Some(two) = add_offset(one, (0, direction)) {
                    if position.piece_at(two).is_none() {
                        out.extend(create_move(ctx, from, two, MoveKind::Normal, |next| {
                            next.en_passant_target = Some(one)
                        }));
                    }
                }
            }
        }
    }

    for file_step in [-1, 1] {
        let Some(target) = add_offset(from, (file_step, direction)) else {
            continue;
        };
        if ctx.is_enemy(target) || position.en_passant_target() == Some(target) {
            push_pawn_move(ctx, from, target, out);
        }
    }
}

const fn start_rank(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

const fn promotion_rank(color: Color) -> i8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

fn push_pawn_move(ctx: &MoveGenContext<'_>, from: Square, to: Square, out: &mut Vec<ChessMove>) {
    let color = ctx.mover();
    let chess_move = if rank_of(to) == promotion_rank(color) {
        create_move(ctx, from, to, MoveKind::Promotion, move |next| {
            next.set_piece(to, Some(Piece::new(PieceKind::Queen, color)))
        })
    } else {
        create_move(ctx, from, to, MoveKind::Normal, |_| {})
    };
    out.extend(chess_move);
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{PieceKind, Position};
    use crate::moves::move_descriptions::MoveKind;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let position = Position::new_game();
        let e4 = position
            .possible_moves()
            .into_iter()
            .find(|m| m.start_square() == sq("e2") && m.end_square() == sq("e4"))
            .expect("e2e4 should be legal");
        assert_eq!(e4.kind(), MoveKind::Normal);
        assert_eq!(e4.resulting_position().en_passant_target(), Some(sq("e3")));

        let reply = e4
            .resulting_position()
            .possible_moves()
            .into_iter()
            .find(|m| m.piece().kind == PieceKind::Knight)
            .expect("black should have a knight move");
        assert_eq!(reply.resulting_position().en_passant_target(), None);
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let position =
            Position::from_fen("4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 0").expect("FEN should parse");
        assert!(position
            .possible_moves()
            .iter()
            .all(|m| m.piece().kind != PieceKind::Pawn));
    }

    #[test]
    fn black_pawn_captures_toward_rank_one() {
        let position =
            Position::from_fen("4k3/8/8/3p4/2P1P3/8/8/4K3 b - - 0 0").expect("FEN should parse");
        let captures: Vec<u8> = position
            .possible_moves()
            .iter()
            .filter(|m| m.kind() == MoveKind::Capture)
            .map(|m| m.end_square())
            .collect();
        assert_eq!(captures, vec![sq("c4"), sq("e4")]);
    }
}
