//! Knight attack contribution.

use crate::game_state::chess_types::{Square, KNIGHT_JUMPS};
use crate::game_state::square::step_target_table;
use crate::move_generation::attack_table::AttackTable;

pub const KNIGHT_ATTACKS: [u64; 64] = step_target_table(&KNIGHT_JUMPS);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub fn contribute_knight_attacks(from: Square, table: &mut AttackTable) {
    table.add_step_attacks(from, knight_attacks(from));
}
