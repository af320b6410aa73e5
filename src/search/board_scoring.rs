//! Pluggable board evaluation.
//!
//! Search delegates static scoring to [`BoardScorer`], so alternate
//! heuristics can be swapped without touching the search code.

use crate::game_state::chess_types::*;
use crate::tables::piece_square_tables::{
    read, BISHOPS, KING_END, KING_START, KNIGHTS, PAWNS, PAWNS_END, QUEENS, ROOKS,
};

/// Base of every checkmate score; the remaining depth is added on top.
pub const MATE_SCORE: i32 = 1_000_000;

/// Opponent non-pawn material (two rooks, a bishop and a knight) at which the
/// endgame tables start to blend in.
pub const ENDGAME_MATERIAL_START: i32 =
    2 * piece_value(PieceKind::Rook) + piece_value(PieceKind::Bishop) + piece_value(PieceKind::Knight);

pub trait BoardScorer: Send + Sync {
    /// Static score, positive when white is better.
    fn score(&self, position: &Position) -> i32;
}

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 320,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// Material plus piece-square bonuses, with king and pawn tables tapered
/// towards their endgame versions as the opponent runs out of pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareEvaluator;

impl PieceSquareEvaluator {
    pub fn run(&self, position: &Position) -> i32 {
        let endgame_weights = [
            endgame_weight(position, Color::Light),
            endgame_weight(position, Color::Dark),
        ];

        let mut score = 0i32;
        for square in 0..64u8 {
            let Some(piece) = position.piece_at(square) else {
                continue;
            };
            let value = piece_value(piece.kind)
                + positional_value(piece, square, endgame_weights[piece.color.index()]);
            match piece.color {
                Color::Light => score += value,
                Color::Dark => score -= value,
            }
        }
        score
    }
}

impl BoardScorer for PieceSquareEvaluator {
    fn score(&self, position: &Position) -> i32 {
        self.run(position)
    }
}

/// 0.0 with a full opposing army, 1.0 once the opponent's non-pawn material
/// reaches zero.
pub fn endgame_weight(position: &Position, color: Color) -> f64 {
    let opponent = color.opposite();
    let material: i32 = position
        .squares()
        .iter()
        .flatten()
        .filter(|piece| piece.color == opponent && piece.kind != PieceKind::Pawn)
        .map(|piece| piece_value(piece.kind))
        .sum();

    1.0 - (f64::from(material) / f64::from(ENDGAME_MATERIAL_START)).min(1.0)
}

fn positional_value(piece: Piece, square: Square, endgame_weight: f64) -> i32 {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => lerp(
            read(&PAWNS, color, square),
            read(&PAWNS_END, color, square),
            endgame_weight,
        ),
        PieceKind::King => lerp(
            read(&KING_START, color, square),
            read(&KING_END, color, square),
            endgame_weight,
        ),
        PieceKind::Knight => read(&KNIGHTS, color, square),
        PieceKind::Bishop => read(&BISHOPS, color, square),
        PieceKind::Rook => read(&ROOKS, color, square),
        PieceKind::Queen => read(&QUEENS, color, square),
    }
}

#[inline]
fn lerp(start: i32, end: i32, weight: f64) -> i32 {
    (f64::from(start) + f64::from(end - start) * weight).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(PieceSquareEvaluator.run(&Position::new_game()), 0);
    }

    #[test]
    fn endgame_material_threshold() {
        assert_eq!(ENDGAME_MATERIAL_START, 1620);
        assert_eq!(endgame_weight(&Position::new_game(), Color::Light), 0.0);

        let bare = Position::from_fen("4k3/pppppppp/8/8/8/8/8/4K3 w - - 0 0").expect("FEN should parse");
        assert_eq!(endgame_weight(&bare, Color::Light), 1.0);
        assert_eq!(endgame_weight(&bare, Color::Dark), 1.0);

        // One rook left: 1 - 500/1620.
        let rook = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 0").expect("FEN should parse");
        let weight = endgame_weight(&rook, Color::Dark);
        assert!((weight - (1.0 - 500.0 / 1620.0)).abs() < 1e-9);
    }

    #[test]
    fn extra_material_is_white_positive() {
        let white_up = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 0").expect("FEN should parse");
        let black_up = Position::from_fen("q3k3/8/8/8/8/8/8/4K3 w - - 0 0").expect("FEN should parse");
        assert!(PieceSquareEvaluator.run(&white_up) > 800);
        assert!(PieceSquareEvaluator.run(&black_up) < -800);
        assert_eq!(
            PieceSquareEvaluator.run(&white_up),
            -PieceSquareEvaluator.run(&black_up)
        );
    }

    #[test]
    fn bare_kings_use_endgame_table() {
        // Both weights are 1.0, so kings read KING_END: e1/e8 are -30 each.
        let kings = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 0").expect("FEN should parse");
        assert_eq!(PieceSquareEvaluator.run(&kings), 0);

        let centralized =
            Position::from_fen("4k3/8/8/8/3K4/8/8/8 w - - 0 0").expect("FEN should parse");
        // d4 reads 40 for white, e8 reads -30 for black.
        assert_eq!(PieceSquareEvaluator.run(&centralized), 70);
    }
}
