//! King attack contribution.

use crate::game_state::chess_types::{Square, ALL_DIRECTIONS};
use crate::game_state::square::step_target_table;
use crate::move_generation::attack_table::AttackTable;

pub const KING_ATTACKS: [u64; 64] = step_target_table(&ALL_DIRECTIONS);

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square as usize]
}

#[inline]
pub fn contribute_king_attacks(from: Square, table: &mut AttackTable) {
    table.add_step_attacks(from, king_attacks(from));
}

#[cfg(test)]
mod tests {
    use super::king_attacks;

    #[test]
    fn king_attacks_count_by_region() {
        assert_eq!(king_attacks(0).count_ones(), 3);
        assert_eq!(king_attacks(4).count_ones(), 5);
        assert_eq!(king_attacks(27).count_ones(), 8);
    }
}
