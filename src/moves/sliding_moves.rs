//! Bishop, rook and queen attack contribution.
//!
//! Each ray marks squares up to and including the first occupied one. A ray
//! that meets the defending king records a check and marks nothing beyond it
//! (the king's retreat along the ray is handled by the legality filter). A
//! ray whose first blocker is another defending piece, with the defending king
//! as the next occupied square, records a pin.

use crate::game_state::chess_types::*;
use crate::game_state::square::add_offset;
use crate::move_generation::attack_table::{AttackTable, Pin};

pub fn contribute_sliding_attacks(
    position: &Position,
    from: Square,
    piece: Piece,
    table: &mut AttackTable,
) {
    let defender = piece.color.opposite();

    for &direction in piece.kind.directions() {
        let mut current = from;
        while let Some(next) = add_offset(current, direction) {
            table.mark_attacked(next);

            let Some(blocker) = position.piece_at(next) else {
                current = next;
                continue;
            };

            if blocker.color == defender {
                if blocker.kind == PieceKind::King {
                    table.add_king_attacker(from);
                } else if table.defender_king().is_some()
                    && first_occupied_beyond(position, next, direction) == table.defender_king()
                {
                    table.add_pin(Pin {
                        square: next,
                        axis: direction,
                    });
                }
            }
            break;
        }
    }
}

/// Squares reachable from `from` along `direction` before (and including) the
/// first occupied square.
pub fn ray_squares(position: &Position, from: Square, direction: Offset) -> Vec<Square> {
    let mut out = Vec::with_capacity(7);
    let mut current = from;
    while let Some(next) = add_offset(current, direction) {
        out.push(next);
        if position.piece_at(next).is_some() {
            break;
        }
        current = next;
    }
    out
}

fn first_occupied_beyond(position: &Position, from: Square, direction: Offset) -> Option<Square> {
    ray_squares(position, from, direction)
        .last()
        .copied()
        .filter(|&square| position.piece_at(square).is_some())
}

#[cfg(test)]
mod tests {
    use super::ray_squares;
    use crate::game_state::chess_types::Position;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn ray_stops_on_first_blocker_inclusive() {
        let position = Position::new_game();
        assert_eq!(ray_squares(&position, sq("a1"), (0, 1)), vec![sq("a2")]);

        let open = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 0").expect("FEN should parse");
        assert_eq!(
            ray_squares(&open, sq("a1"), (1, 0)),
            vec![sq("b1"), sq("c1"), sq("d1"), sq("e1")]
        );
        assert_eq!(ray_squares(&open, sq("a1"), (-1, 0)), Vec::<u8>::new());
        assert_eq!(ray_squares(&open, sq("a1"), (0, 1)).len(), 7);
    }
}
