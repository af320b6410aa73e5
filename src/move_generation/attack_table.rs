//! Opponent attack table.
//!
//! Built once per position for the side that is *not* to move and consulted
//! by every candidate move: which squares that side controls, which defending
//! pieces are pinned against their king, and which pieces give check.

use crate::game_state::chess_types::*;
use crate::moves::king_moves::contribute_king_attacks;
use crate::moves::knight_moves::contribute_knight_attacks;
use crate::moves::pawn_moves::contribute_pawn_attacks;
use crate::moves::sliding_moves::contribute_sliding_attacks;

/// A defending piece that may only move along `axis`, the ray direction of
/// the slider pinning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub square: Square,
    pub axis: Offset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackTable {
    pub(crate) attacked_squares: [bool; 64],
    pub(crate) pinned_pieces: Vec<Pin>,
    pub(crate) king_attackers: Vec<Square>,
    defender_king: Option<Square>,
}

impl AttackTable {
    fn empty(defender_king: Option<Square>) -> Self {
        Self {
            attacked_squares: [false; 64],
            pinned_pieces: Vec::new(),
            king_attackers: Vec::new(),
            defender_king,
        }
    }

    /// Accumulates the contribution of every `attacker` piece, in square order.
    pub fn build(position: &Position, attacker: Color) -> Self {
        let mut table = Self::empty(position.king_square(attacker.opposite()));

        for square in 0..64u8 {
            let Some(piece) = position.piece_at(square) else {
                continue;
            };
            if piece.color != attacker {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => contribute_pawn_attacks(square, piece.color, &mut table),
                PieceKind::Knight => contribute_knight_attacks(square, &mut table),
                PieceKind::King => contribute_king_attacks(square, &mut table),
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    contribute_sliding_attacks(position, square, piece, &mut table)
                }
            }
        }

        table
    }

    #[inline]
    pub fn is_attacked(&self, square: Square) -> bool {
        self.attacked_squares[square as usize]
    }

    #[inline]
    pub fn attacked_squares(&self) -> &[bool; 64] {
        &self.attacked_squares
    }

    #[inline]
    pub fn pinned_pieces(&self) -> &[Pin] {
        &self.pinned_pieces
    }

    /// Squares of the pieces currently checking the defending king.
    #[inline]
    pub fn king_attackers(&self) -> &[Square] {
        &self.king_attackers
    }

    pub fn pin_axis(&self, square: Square) -> Option<Offset> {
        self.pinned_pieces
            .iter()
            .find(|pin| pin.square == square)
            .map(|pin| pin.axis)
    }

    #[inline]
    pub(crate) fn defender_king(&self) -> Option<Square> {
        self.defender_king
    }

    #[inline]
    pub(crate) fn mark_attacked(&mut self, square: Square) {
        self.attacked_squares[square as usize] = true;
    }

    #[inline]
    pub(crate) fn add_king_attacker(&mut self, square: Square) {
        self.king_attackers.push(square);
    }

    #[inline]
    pub(crate) fn add_pin(&mut self, pin: Pin) {
        self.pinned_pieces.push(pin);
    }

    /// Marks every square in `targets` (a bitmask) as attacked from `from`,
    /// recording a check when the defending king is among them.
    pub(crate) fn add_step_attacks(&mut self, from: Square, targets: u64) {
        let mut bits = targets;
        while bits != 0 {
            let target = bits.trailing_zeros() as Square;
            self.mark_attacked(target);
            if Some(target) == self.defender_king {
                self.add_king_attacker(from);
            }
            bits &= bits - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AttackTable, Pin};
    use crate::game_state::chess_types::{Color, Position};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> u8 {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn start_position_black_controls_ranks_six_to_eight() {
        let position = Position::new_game();
        let table = position.create_opponent_attack_table();

        assert!(table.is_attacked(sq("a6")));
        assert!(table.is_attacked(sq("h6")));
        assert!(table.is_attacked(sq("f6")));
        assert!(!table.is_attacked(sq("e5")));
        assert!(table.king_attackers().is_empty());
        assert!(table.pinned_pieces().is_empty());
    }

    #[test]
    fn blocker_in_front_of_king_is_pinned_along_the_ray() {
        let position =
            Position::from_fen("k7/8/8/n7/8/8/R7/K7 b - - 0 0").expect("FEN should parse");
        let table = position.create_opponent_attack_table();

        assert_eq!(table.pinned_pieces(), &[Pin { square: sq("a5"), axis: (0, 1) }]);
        assert_eq!(table.pin_axis(sq("a5")), Some((0, 1)));
        // The ray stops on the pinned knight.
        assert!(table.is_attacked(sq("a5")));
        assert!(!table.is_attacked(sq("a6")));
    }

    #[test]
    fn two_defenders_on_a_ray_are_not_pinned() {
        let position =
            Position::from_fen("k7/n7/8/n7/8/8/R7/K7 b - - 0 0").expect("FEN should parse");
        let table = position.create_opponent_attack_table();
        assert!(table.pinned_pieces().is_empty());
    }

    #[test]
    fn no_pins_without_a_defending_king() {
        // The a5 knight's ray runs off the board behind it.
        let position =
            Position::from_fen("8/8/8/n7/8/8/R7/K7 b - - 0 0").expect("FEN should parse");
        let table = position.create_opponent_attack_table();
        assert!(table.pinned_pieces().is_empty());
        assert_eq!(position.moves_from(sq("a5")).len(), 4);
    }

    #[test]
    fn checking_slider_stops_at_the_king() {
        let position =
            Position::from_fen("r1K5/8/8/8/8/8/8/7k w - - 0 0").expect("FEN should parse");
        let table = AttackTable::build(&position, Color::Dark);

        assert_eq!(table.king_attackers(), &[sq("a8")]);
        assert!(table.is_attacked(sq("b8")));
        assert!(table.is_attacked(sq("c8")));
        assert!(!table.is_attacked(sq("d8")));
    }

    #[test]
    fn pawn_and_knight_checks_are_recorded() {
        let position =
            Position::from_fen("7k/8/8/8/3p2n1/4K3/8/8 w - - 0 0").expect("FEN should parse");
        let table = position.create_opponent_attack_table();
        assert_eq!(table.king_attackers(), &[sq("d4"), sq("g4")]);
        assert!(position.is_in_check(Some(&table)));
    }
}
