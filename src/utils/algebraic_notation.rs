//! Standard algebraic notation (SAN) for generated moves.
//!
//! Notation is always derived from the position *before* the move, whose
//! legal moves decide the disambiguation, and the position after it, which
//! decides the trailing check, mate or draw glyph.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::position::EndOfGame;
use crate::moves::move_descriptions::{ChessMove, MoveKind};
use crate::utils::algebraic::{file_char, rank_char, square_to_algebraic};

/// Glyph appended after a move that ends the game in a draw.
pub const DRAW_SUFFIX: &str = " ½-½";

pub fn notation_for_move(position_before: &Position, chess_move: &ChessMove) -> String {
    notation_among(&position_before.possible_moves(), chess_move)
}

/// Same as [`notation_for_move`] with the legal moves of the position before
/// already generated.
pub fn notation_among(legal_moves: &[ChessMove], chess_move: &ChessMove) -> String {
    let mut out = String::new();
    let kind = chess_move.kind();

    match kind {
        MoveKind::ShortCastle => out.push_str("O-O"),
        MoveKind::LongCastle => out.push_str("O-O-O"),
        _ => {
            let piece = chess_move.piece();
            if piece.kind == PieceKind::Pawn {
                if kind.is_capture() {
                    out.push(file_char(chess_move.start_square()));
                }
            } else {
                out.push(piece.kind.letter());
                out.push_str(&disambiguation(legal_moves, chess_move));
            }

            if kind.is_capture() {
                out.push('x');
            }
            out.push_str(&square_to_algebraic(chess_move.end_square()));

            if let Some(promoted) = chess_move.promoted_to() {
                out.push('=');
                out.push(promoted.letter());
            }
        }
    }

    out.push_str(outcome_suffix(chess_move.resulting_position()));
    out
}

/// Origin file, else origin rank, else the full origin square, whichever is
/// the first to single the move out among same-kind moves to the same square.
fn disambiguation(legal_moves: &[ChessMove], chess_move: &ChessMove) -> String {
    let from = chess_move.start_square();
    let rivals: Vec<Square> = legal_moves
        .iter()
        .filter(|other| {
            other.piece().kind == chess_move.piece().kind
                && other.end_square() == chess_move.end_square()
                && other.start_square() != from
        })
        .map(ChessMove::start_square)
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if rivals.iter().all(|&rival| file_char(rival) != file_char(from)) {
        file_char(from).to_string()
    } else if rivals.iter().all(|&rival| rank_char(rival) != rank_char(from)) {
        rank_char(from).to_string()
    } else {
        square_to_algebraic(from)
    }
}

fn outcome_suffix(after: &Position) -> &'static str {
    match after.end_of_game() {
        Some(EndOfGame::Checkmate) => "#",
        Some(EndOfGame::Stalemate | EndOfGame::FiftyMoveRule) => DRAW_SUFFIX,
        None if after.is_in_check(None) => "+",
        None => "",
    }
}

/// The legal move of `position` written as `san`.
///
/// Check, mate and draw glyphs, annotation marks (`!`, `?`), a missing `=`
/// before the promotion piece and zero-style castling (`0-0`) are tolerated.
pub fn find_move_by_san(position: &Position, san: &str) -> Result<ChessMove, ChessErrors> {
    let wanted = normalize_san(san);
    if wanted.is_empty() {
        return Err(ChessErrors::UnknownMove(san.to_owned()));
    }

    let legal_moves = position.possible_moves();
    legal_moves
        .iter()
        .find(|chess_move| normalize_san(&notation_among(&legal_moves, chess_move)) == wanted)
        .cloned()
        .ok_or_else(|| ChessErrors::UnknownMove(san.to_owned()))
}

fn normalize_san(san: &str) -> String {
    san.trim()
        .trim_end_matches(DRAW_SUFFIX.trim_start())
        .trim_end()
        .chars()
        .filter(|ch| !matches!(ch, '+' | '#' | '!' | '?' | '='))
        .map(|ch| if ch == '0' { 'O' } else { ch })
        .collect()
}
