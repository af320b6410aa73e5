//! Core piece and board vocabulary.
//!
//! Piece kinds form a closed enum; the per-kind contract (sliding-ness and
//! step directions) is data-driven so the generator can switch on the enum
//! instead of dispatching through trait objects.

use serde::{Deserialize, Serialize};

pub use crate::game_state::position::Position;

/// Board square index (`0..=63`, `0 == a1`, `63 == h8`).
pub type Square = u8;

/// A `(d_file, d_rank)` step on the board.
pub type Offset = (i8, i8);

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "white")]
    Light,
    #[serde(rename = "black")]
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Rank delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Rank index pieces of this color start on (kings, rooks).
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }
}

pub const ORTHOGONAL_DIRECTIONS: [Offset; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [Offset; 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
pub const KNIGHT_JUMPS: [Offset; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Bishops, rooks and queens attack along rays until blocked.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Step directions. Sliders repeat a step until blocked, the king and the
    /// knight take it once. Pawns move by their own rules and have none.
    pub const fn directions(self) -> &'static [Offset] {
        match self {
            PieceKind::Pawn => &[],
            PieceKind::Knight => &KNIGHT_JUMPS,
            PieceKind::Bishop => &DIAGONAL_DIRECTIONS,
            PieceKind::Rook => &ORTHOGONAL_DIRECTIONS,
            PieceKind::Queen | PieceKind::King => &ALL_DIRECTIONS,
        }
    }

    /// Whether a slider of this kind moves along the given unit axis.
    pub fn slides_along(self, axis: Offset) -> bool {
        let diagonal = axis.0 != 0 && axis.1 != 0;
        match self {
            PieceKind::Rook => !diagonal,
            PieceKind::Bishop => diagonal,
            PieceKind::Queen => true,
            _ => false,
        }
    }

    /// Upper-case SAN / FEN letter (pawns have none in SAN but `P` in FEN).
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// An immutable colored piece. Pieces carry no back-reference to a board, so
/// historical positions may share them freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Self { kind, color })
    }

    pub fn fen_char(self) -> char {
        match self.color {
            Color::Light => self.kind.letter(),
            Color::Dark => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

/// Castling rights for one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub queen_side: bool,
    pub king_side: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        queen_side: false,
        king_side: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_chars_round_trip_for_every_piece() {
        for ch in "pnbrqkPNBRQK".chars() {
            let piece = Piece::from_fen_char(ch).expect("piece letter should parse");
            assert_eq!(piece.fen_char(), ch);
        }
        assert!(Piece::from_fen_char('x').is_none());
    }

    #[test]
    fn slider_axes_match_movement_type() {
        assert!(PieceKind::Rook.slides_along((1, 0)));
        assert!(!PieceKind::Rook.slides_along((1, 1)));
        assert!(PieceKind::Bishop.slides_along((-1, 1)));
        assert!(!PieceKind::Bishop.slides_along((0, -1)));
        assert!(PieceKind::Queen.slides_along((0, 1)));
        assert!(!PieceKind::Knight.slides_along((0, 1)));
        assert!(PieceKind::Queen.is_sliding());
        assert!(!PieceKind::King.is_sliding());
    }
}
