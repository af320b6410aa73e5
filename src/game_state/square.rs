//! Square arithmetic on the 0..64 board index.
//!
//! Every routine here treats the board edge as an ordinary "no candidate"
//! result: offsets that leave the board or wrap across the a/h files return
//! `None`.

use crate::game_state::chess_types::{Offset, Square};

#[inline]
pub const fn file_of(square: Square) -> i8 {
    (square % 8) as i8
}

#[inline]
pub const fn rank_of(square: Square) -> i8 {
    (square / 8) as i8
}

#[inline]
pub const fn square_at(file: i8, rank: i8) -> Option<Square> {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        None
    } else {
        Some((rank * 8 + file) as Square)
    }
}

/// Moves `square` by `(d_file, d_rank)`.
///
/// Rejects both results outside `0..64` and deltas that would cross the a/h
/// file boundary.
#[inline]
pub const fn add_offset(square: Square, offset: Offset) -> Option<Square> {
    square_at(file_of(square) + offset.0, rank_of(square) + offset.1)
}

/// Per-square bitmask of the squares one step away along each offset.
pub const fn step_target_table(offsets: &[Offset]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let mut i = 0usize;
        while i < offsets.len() {
            if let Some(target) = add_offset(sq as Square, offsets[i]) {
                table[sq] |= 1u64 << target;
            }
            i += 1;
        }
        sq += 1;
    }

    table
}

/// `(d_file, d_rank)` between two squares.
#[inline]
pub fn delta(from: Square, to: Square) -> Offset {
    (file_of(to) - file_of(from), rank_of(to) - rank_of(from))
}

/// Unit step from `from` towards `to` when both lie on one file, rank or
/// diagonal; `None` for equal squares or squares off any straight line.
pub fn axis_direction(from: Square, to: Square) -> Option<Offset> {
    let (df, dr) = delta(from, to);
    if df == 0 && dr == 0 {
        return None;
    }
    if df == 0 || dr == 0 || df.abs() == dr.abs() {
        Some((df.signum(), dr.signum()))
    } else {
        None
    }
}

/// Zero when the two deltas are collinear.
#[inline]
pub fn cross_product(a: Offset, b: Offset) -> i32 {
    i32::from(a.0) * i32::from(b.1) - i32::from(a.1) * i32::from(b.0)
}

/// Whether `mid` lies strictly between `a` and `b` on a straight ray.
pub fn is_between(a: Square, mid: Square, b: Square) -> bool {
    let Some(step) = axis_direction(a, b) else {
        return false;
    };
    let mut current = a;
    while let Some(next) = add_offset(current, step) {
        if next == b {
            return false;
        }
        if next == mid {
            return true;
        }
        current = next;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_reject_file_wrap_and_board_edges() {
        // h1 + one file right would be a2 with naive index math.
        assert_eq!(add_offset(7, (1, 0)), None);
        assert_eq!(add_offset(0, (-1, 0)), None);
        assert_eq!(add_offset(63, (0, 1)), None);
        assert_eq!(add_offset(0, (1, 2)), Some(17));
    }

    #[test]
    fn axis_direction_only_for_straight_lines() {
        assert_eq!(axis_direction(0, 63), Some((1, 1)));
        assert_eq!(axis_direction(28, 24), Some((-1, 0)));
        assert_eq!(axis_direction(4, 60), Some((0, 1)));
        assert_eq!(axis_direction(1, 18), None);
        assert_eq!(axis_direction(9, 9), None);
    }

    #[test]
    fn between_is_strict_and_ray_bound() {
        // a1 .. d4 along the long diagonal.
        assert!(is_between(0, 9, 27));
        assert!(is_between(0, 18, 27));
        assert!(!is_between(0, 27, 27));
        assert!(!is_between(0, 36, 27));
        // knight geometry has no segment.
        assert!(!is_between(1, 9, 18));
    }

    #[test]
    fn step_tables_respect_edges() {
        let table = step_target_table(&[(1, 2), (2, 1)]);
        assert_eq!(table[0], (1u64 << 17) | (1u64 << 10));
        assert_eq!(table[63], 0);
    }

    #[test]
    fn cross_product_detects_collinearity() {
        assert_eq!(cross_product((0, 1), (0, -3)), 0);
        assert_eq!(cross_product((1, 1), (2, 2)), 0);
        assert_ne!(cross_product((1, 0), (1, 1)), 0);
    }
}
