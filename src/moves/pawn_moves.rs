//! Pawn attack contribution.
//!
//! Pawns attack their two forward diagonals whether or not anything stands
//! there; pushes are never attacks.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::square::step_target_table;
use crate::move_generation::attack_table::AttackTable;

pub const LIGHT_PAWN_ATTACKS: [u64; 64] = step_target_table(&[(-1, 1), (1, 1)]);
pub const DARK_PAWN_ATTACKS: [u64; 64] = step_target_table(&[(-1, -1), (1, -1)]);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_ATTACKS[square as usize],
        Color::Dark => DARK_PAWN_ATTACKS[square as usize],
    }
}

#[inline]
pub fn contribute_pawn_attacks(from: Square, color: Color, table: &mut AttackTable) {
    table.add_step_attacks(from, pawn_attacks(color, from));
}
