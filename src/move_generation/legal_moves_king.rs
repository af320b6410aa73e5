//! King steps and castling.

use crate::game_state::chess_rules::{KING_HOME_FILE, KING_SIDE_ROOK_FILE, QUEEN_SIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::game_state::square::square_at;
use crate::move_generation::legal_move_apply::create_move;
use crate::move_generation::legal_move_shared::{generate_step_moves, MoveGenContext};
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

/// Files involved in one castling direction.
struct CastleLane {
    kind: MoveKind,
    rook_file: i8,
    /// Must be empty.
    between_files: &'static [i8],
    /// Crossed or reached by the king; must not be attacked.
    king_path_files: &'static [i8],
    king_to_file: i8,
    rook_to_file: i8,
}

const SHORT_CASTLE: CastleLane = CastleLane {
    kind: MoveKind::ShortCastle,
    rook_file: KING_SIDE_ROOK_FILE,
    between_files: &[5, 6],
    king_path_files: &[5, 6],
    king_to_file: 6,
    rook_to_file: 5,
};

const LONG_CASTLE: CastleLane = CastleLane {
    kind: MoveKind::LongCastle,
    rook_file: QUEEN_SIDE_ROOK_FILE,
    between_files: &[1, 2, 3],
    king_path_files: &[3, 2],
    king_to_file: 2,
    rook_to_file: 3,
};

pub fn generate_king_moves(ctx: &MoveGenContext<'_>, from: Square, out: &mut Vec<ChessMove>) {
    let color = ctx.mover();
    generate_step_moves(
        ctx,
        from,
        king_attacks(from),
        move |next| next.can_castle[color.index()] = CastlingRights::NONE,
        out,
    );

    let rank = color.home_rank() as i8;
    if square_at(KING_HOME_FILE, rank) != Some(from) || !ctx.attack_table.king_attackers().is_empty()
    {
        return;
    }

    let rights = ctx.position.castling_rights(color);
    if rights.king_side {
        out.extend(try_castle(ctx, from, rank, &SHORT_CASTLE));
    }
    if rights.queen_side {
        out.extend(try_castle(ctx, from, rank, &LONG_CASTLE));
    }
}

fn try_castle(
    ctx: &MoveGenContext<'_>,
    from: Square,
    rank: i8,
    lane: &CastleLane,
) -> Option<ChessMove> {
    let color = ctx.mover();
    let position = ctx.position;

    let rook_from = square_at(lane.rook_file, rank)?;
    if position.piece_at(rook_from) != Some(Piece::new(PieceKind::Rook, color)) {
        return None;
    }

    for &file in lane.between_files {
        if position.piece_at(square_at(file, rank)?).is_some() {
            return None;
        }
    }
    for &file in lane.king_path_files {
        if ctx.attack_table.is_attacked(square_at(file, rank)?) {
            return None;
        }
    }

    let king_to = square_at(lane.king_to_file, rank)?;
    let rook_to = square_at(lane.rook_to_file, rank)?;
    create_move(ctx, from, king_to, lane.kind, move |next| {
        next.set_piece(rook_from, None);
        next.set_piece(rook_to, Some(Piece::new(PieceKind::Rook, color)));
        next.can_castle[color.index()] = CastlingRights::NONE;
    })
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::moves::move_descriptions::MoveKind;

    #[test]
    fn long_castle_only_needs_b_file_empty_not_safe() {
        // b8 rook attacks b1, which the king never crosses.
        let position =
            Position::from_fen("1r5k/8/8/8/8/8/8/R3K3 w Q - 0 0").expect("FEN should parse");
        let castle = position
            .possible_moves()
            .into_iter()
            .find(|m| m.kind() == MoveKind::LongCastle)
            .expect("long castle should be legal");
        assert_eq!(castle.resulting_position().to_fen(), "1r5k/8/8/8/8/8/8/2KR4 b - - 0 0");
    }

    #[test]
    fn no_castling_out_of_check_or_without_rook() {
        let in_check =
            Position::from_fen("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 0").expect("FEN should parse");
        assert!(in_check.possible_moves().iter().all(|m| !m.kind().is_castle()));

        let no_rook = Position::from_fen("7k/8/8/8/8/8/8/4K2R w KQ - 0 0").expect("FEN should parse");
        let kinds: Vec<MoveKind> = no_rook.possible_moves().iter().map(|m| m.kind()).collect();
        assert!(kinds.contains(&MoveKind::ShortCastle));
        assert!(!kinds.contains(&MoveKind::LongCastle));
    }

    #[test]
    fn king_step_clears_both_rights() {
        let position =
            Position::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 0").expect("FEN should parse");
        let step = position
            .possible_moves()
            .into_iter()
            .find(|m| m.kind() == MoveKind::Normal && m.piece().kind == PieceKind::King)
            .expect("king should have a step");
        let rights = step.resulting_position().castling_rights(Color::Light);
        assert!(!rights.king_side && !rights.queen_side);
    }
}
