//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square indices reused by FEN, SAN, PGN and the worker boundary.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// File letter (`a`..`h`) of a square.
#[inline]
pub fn file_char(square: Square) -> char {
    char::from(b'a' + square % 8)
}

/// Rank digit (`1`..`8`) of a square.
#[inline]
pub fn rank_char(square: Square) -> char {
    char::from(b'1' + square / 8)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    debug_assert!(square < 64, "square index out of bounds: {square}");
    format!("{}{}", file_char(square), rank_char(square))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};

    #[test]
    fn every_square_round_trips() {
        for square in 0..64u8 {
            let text = square_to_algebraic(square);
            assert_eq!(algebraic_to_square(&text).expect("square should parse"), square);
        }
        assert_eq!(square_to_algebraic(0), "a1");
        assert_eq!(square_to_algebraic(63), "h8");
        assert_eq!(algebraic_to_square("e4").expect("e4 should parse"), 28);
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "e", "i1", "a9", "e44", "E4"] {
            assert!(algebraic_to_square(bad).is_err(), "{bad} should not parse");
        }
    }
}
