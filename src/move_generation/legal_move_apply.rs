//! The single chokepoint from a candidate (start, end) pair to a validated
//! [`ChessMove`].

use crate::game_state::chess_rules::FIFTY_MOVE_LIMIT;
use crate::game_state::chess_types::*;
use crate::game_state::square::{add_offset, file_of};
use crate::move_generation::legal_move_checks::{
    en_passant_exposes_king, king_move_is_safe, non_king_move_is_safe,
};
use crate::move_generation::legal_move_shared::MoveGenContext;
use crate::move_generation::legal_moves_rook::revoke_rook_castling;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

/// Builds the position after moving the piece on `from` to `to` and keeps it
/// only if it is legal.
///
/// `kind` is the generator's hint (normal, promotion or castle); captures are
/// detected here. `after_move` runs once the piece stands on `to` and applies
/// the piece-specific side effects: en-passant target, promotion, castling
/// rights and the castling rook.
pub fn create_move<F>(
    ctx: &MoveGenContext<'_>,
    from: Square,
    to: Square,
    kind: MoveKind,
    after_move: F,
) -> Option<ChessMove>
where
    F: FnOnce(&mut Position),
{
    let position = ctx.position;
    let piece = position.piece_at(from)?;
    let mut kind = kind;

    let mut en_passant_victim = None;
    if piece.kind == PieceKind::Pawn
        && position.en_passant_target() == Some(to)
        && file_of(from) != file_of(to)
    {
        let captured = add_offset(to, (0, -piece.color.pawn_direction()))?;
        if position.piece_at(captured) != Some(Piece::new(PieceKind::Pawn, piece.color.opposite()))
        {
            return None;
        }
        if let Some(king) = ctx.king_square {
            if en_passant_exposes_king(position, king, from, captured, to) {
                return None;
            }
        }
        kind = kind.with_capture();
        en_passant_victim = Some(captured);
    }

    let mut next = position.child();

    if let Some(target) = position.piece_at(to) {
        if target.color == piece.color {
            return None;
        }
        on_captured(&mut next, target, to);
        kind = kind.with_capture();
    }
    if let Some(captured) = en_passant_victim {
        next.set_piece(captured, None);
    }

    next.set_piece(from, None);
    next.set_piece(to, Some(piece));
    after_move(&mut next);

    let safe = if piece.kind == PieceKind::King {
        king_move_is_safe(position, ctx.attack_table, from, to)
    } else {
        non_king_move_is_safe(position, &next, ctx.attack_table, ctx.king_square, from, to)
    };
    if !safe {
        return None;
    }

    let counter = position.fifty_move_counter().saturating_add(1);
    if counter >= FIFTY_MOVE_LIMIT {
        return None;
    }
    next.fifty_move_counter = if piece.kind == PieceKind::Pawn || kind.is_capture() {
        0
    } else {
        counter
    };

    Some(ChessMove {
        piece,
        start_square: from,
        end_square: to,
        resulting_position: next,
        kind,
    })
}

/// Side effects of a piece being taken off the board.
fn on_captured(next: &mut Position, captured: Piece, square: Square) {
    if captured.kind == PieceKind::Rook {
        revoke_rook_castling(next, captured.color, square);
    }
}
