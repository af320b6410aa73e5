//! FEN-to-Position parser.
//!
//! Reads placement, side to move, castling rights and en-passant target. The
//! halfmove clock seeds the fifty-move counter when present; the fullmove
//! number is checked for shape and otherwise ignored.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Position, ChessErrors> {
    let invalid = |reason: &str| ChessErrors::InvalidFenString(format!("{reason}: {fen}"));
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("Missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("Missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("Missing castling rights"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| invalid("Missing en-passant square"))?;
    let halfmove_part = parts.next();
    let fullmove_part = parts.next();

    if parts.next().is_some() {
        return Err(invalid("FEN has extra trailing fields"));
    }

    let mut position = Position::empty();

    parse_board(board_part, &mut position)?;
    position.color_to_move = parse_side_to_move(side_part)?;
    position.can_castle = parse_castling_rights(castling_part)?;
    position.en_passant_target = parse_en_passant_square(en_passant_part)?;

    if let Some(halfmove_part) = halfmove_part {
        position.fifty_move_counter = halfmove_part
            .parse::<u16>()
            .map_err(|_| invalid("Invalid halfmove clock"))?;
    }
    if let Some(fullmove_part) = fullmove_part {
        fullmove_part
            .parse::<u16>()
            .map_err(|_| invalid("Invalid fullmove number"))?;
    }

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenString(format!(
            "Board layout must contain 8 ranks: {board_part}"
        )));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenString(format!(
                        "Invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                if file > 8 {
                    break;
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or(ChessErrors::InvalidPieceLetter(ch))?;

            if file >= 8 {
                return Err(ChessErrors::InvalidFenString(format!(
                    "Board rank has too many files: {rank_str}"
                )));
            }

            position.set_piece(board_rank * 8 + file, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFenString(format!(
                "Board rank does not sum to 8 files: {rank_str}"
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ChessErrors::InvalidFenString(format!(
            "Invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<[CastlingRights; 2], ChessErrors> {
    let mut rights = [CastlingRights::NONE; 2];
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights[Color::Light.index()].king_side = true,
            'Q' => rights[Color::Light.index()].queen_side = true,
            'k' => rights[Color::Dark.index()].king_side = true,
            'q' => rights[Color::Dark.index()].queen_side = true,
            _ => {
                return Err(ChessErrors::InvalidFenString(format!(
                    "Invalid castling rights character: {ch}"
                )))
            }
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| {
            ChessErrors::InvalidFenString(format!("Invalid en-passant square: {en_passant_part}"))
        })
}
