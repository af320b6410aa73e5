//! Check-legality filter.
//!
//! Every test here works from the attack table of the position *before* the
//! candidate move; the resulting position is only consulted to see whether a
//! checking piece was removed.

use crate::game_state::chess_types::*;
use crate::game_state::square::{add_offset, axis_direction, cross_product, delta, is_between};
use crate::move_generation::attack_table::AttackTable;

/// A king may not land on an attacked square, nor step back along the ray of
/// a slider that is checking it (that square is shadowed by the king itself).
pub fn king_move_is_safe(
    position: &Position,
    attack_table: &AttackTable,
    from: Square,
    to: Square,
) -> bool {
    if attack_table.is_attacked(to) {
        return false;
    }

    attack_table.king_attackers().iter().all(|&attacker| {
        let sliding = position
            .piece_at(attacker)
            .is_some_and(|piece| piece.kind.is_sliding());
        if !sliding {
            return true;
        }
        match axis_direction(attacker, from) {
            Some(direction) => add_offset(from, direction) != Some(to),
            None => true,
        }
    })
}

/// Pins, double checks and single checks for every non-king move.
pub fn non_king_move_is_safe(
    before: &Position,
    after: &Position,
    attack_table: &AttackTable,
    king_square: Option<Square>,
    from: Square,
    to: Square,
) -> bool {
    if let Some(axis) = attack_table.pin_axis(from) {
        if cross_product(axis, delta(from, to)) != 0 {
            return false;
        }
    }

    match attack_table.king_attackers() {
        [] => true,
        [attacker] => {
            let captured = after.piece_at(*attacker) != before.piece_at(*attacker);
            let blocked = king_square.is_some_and(|king| is_between(*attacker, to, king));
            captured || blocked
        }
        _ => false,
    }
}

/// Whether an en-passant capture uncovers an attack on the mover's king.
///
/// Both the capturing pawn (`from`) and the captured pawn are removed from
/// the board, the destination is treated as occupied, and the line from the
/// king through each vacated square is scanned for an enemy slider moving
/// along that line.
pub fn en_passant_exposes_king(
    position: &Position,
    king: Square,
    from: Square,
    captured: Square,
    to: Square,
) -> bool {
    let Some(mover) = position.piece_at(from).map(|piece| piece.color) else {
        return false;
    };

    [from, captured].into_iter().any(|vacated| {
        let Some(axis) = axis_direction(king, vacated) else {
            return false;
        };

        let mut current = king;
        while let Some(next) = add_offset(current, axis) {
            if next == to {
                return false;
            }
            current = next;
            if next == from || next == captured {
                continue;
            }
            if let Some(piece) = position.piece_at(next) {
                return piece.color != mover && piece.kind.slides_along(axis);
            }
        }
        false
    })
}

#[cfg(test)]
mod tests {
    use super::en_passant_exposes_king;
    use crate::game_state::chess_types::Position;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn rank_pin_through_both_pawns_is_detected() {
        let position =
            Position::from_fen("8/8/8/8/k1PpQ3/8/8/K7 b - c3 0 0").expect("FEN should parse");
        assert!(en_passant_exposes_king(
            &position,
            sq("a4"),
            sq("d4"),
            sq("c4"),
            sq("c3")
        ));
    }

    #[test]
    fn diagonal_through_captured_pawn_is_detected() {
        // Removing the d5 pawn opens the b7-f3 diagonal.
        let position =
            Position::from_fen("7k/1b6/8/3pP3/8/5K2/8/8 w - d6 0 0").expect("FEN should parse");
        assert!(en_passant_exposes_king(
            &position,
            sq("f3"),
            sq("e5"),
            sq("d5"),
            sq("d6")
        ));
    }

    #[test]
    fn destination_blocks_the_line() {
        // The capturing pawn lands on d6, still shielding d1 from the d8 rook.
        let position =
            Position::from_fen("3r3k/8/8/3pP3/8/8/8/3K4 w - d6 0 0").expect("FEN should parse");
        assert!(!en_passant_exposes_king(
            &position,
            sq("d1"),
            sq("e5"),
            sq("d5"),
            sq("d6")
        ));
    }

    #[test]
    fn unrelated_geometry_is_legal() {
        let position =
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 0").expect("FEN should parse");
        assert!(!en_passant_exposes_king(
            &position,
            sq("e1"),
            sq("e5"),
            sq("d5"),
            sq("d6")
        ));
    }
}
