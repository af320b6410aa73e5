//! Legal move records.
//!
//! A `ChessMove` is produced only by move generation and always carries the
//! position it leads to, so callers never re-apply moves themselves.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveKind {
    Normal,
    Capture,
    Promotion,
    CapturePromotion,
    ShortCastle,
    LongCastle,
}

impl MoveKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::CapturePromotion)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveKind::Promotion | MoveKind::CapturePromotion)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::ShortCastle | MoveKind::LongCastle)
    }

    /// The same move kind once a capture has been detected.
    #[inline]
    pub const fn with_capture(self) -> Self {
        match self {
            MoveKind::Promotion | MoveKind::CapturePromotion => MoveKind::CapturePromotion,
            _ => MoveKind::Capture,
        }
    }
}

/// Immutable record of a legal transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMove {
    pub(crate) piece: Piece,
    pub(crate) start_square: Square,
    pub(crate) end_square: Square,
    pub(crate) resulting_position: Position,
    pub(crate) kind: MoveKind,
}

impl ChessMove {
    /// The piece as it stood on the start square (a pawn for promotions).
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn start_square(&self) -> Square {
        self.start_square
    }

    #[inline]
    pub fn end_square(&self) -> Square {
        self.end_square
    }

    #[inline]
    pub fn resulting_position(&self) -> &Position {
        &self.resulting_position
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Piece standing on the end square after the move.
    pub fn promoted_to(&self) -> Option<PieceKind> {
        if self.kind.is_promotion() {
            self.resulting_position
                .piece_at(self.end_square)
                .map(|piece| piece.kind)
        } else {
            None
        }
    }

    /// Coordinate form such as `e7e8q`, used in logs and tests.
    pub fn to_long_algebraic(&self) -> String {
        let mut out = format!(
            "{}{}",
            square_to_algebraic(self.start_square),
            square_to_algebraic(self.end_square)
        );
        if let Some(kind) = self.promoted_to() {
            out.push(kind.letter().to_ascii_lowercase());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::MoveKind;

    #[test]
    fn capture_upgrade_keeps_promotion() {
        assert_eq!(MoveKind::Normal.with_capture(), MoveKind::Capture);
        assert_eq!(MoveKind::Promotion.with_capture(), MoveKind::CapturePromotion);
        assert!(MoveKind::CapturePromotion.is_capture());
        assert!(MoveKind::LongCastle.is_castle());
    }
}
