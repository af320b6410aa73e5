//! Coordinate move input such as `e2e4` or `e7e8q`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::algebraic_to_square;

/// The legal move of `position` written in coordinate form.
pub fn find_move_by_long_algebraic(
    position: &Position,
    long_algebraic: &str,
) -> Result<ChessMove, ChessErrors> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::UnknownMove(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text.as_bytes().get(4) {
        None => None,
        Some(b'q') | Some(b'Q') => Some(PieceKind::Queen),
        Some(_) => return Err(ChessErrors::UnknownMove(long_algebraic.to_owned())),
    };

    position
        .moves_from(from)
        .into_iter()
        .find(|chess_move| chess_move.end_square() == to && chess_move.promoted_to() == promotion)
        .ok_or_else(|| ChessErrors::UnknownMove(long_algebraic.to_owned()))
}
