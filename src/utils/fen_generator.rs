//! Position-to-FEN writer.
//!
//! Counters are not tracked across games, so the last two fields are always
//! written as `0 0`.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.color_to_move() {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(position);
    let en_passant = position
        .en_passant_target()
        .map_or_else(|| "-".to_owned(), square_to_algebraic);

    format!("{board} {side_to_move} {castling} {en_passant} 0 0")
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.piece_at(rank * 8 + file) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(position: &Position) -> String {
    let mut out = String::new();
    let light = position.castling_rights(Color::Light);
    let dark = position.castling_rights(Color::Dark);

    if light.king_side {
        out.push('K');
    }
    if light.queen_side {
        out.push('Q');
    }
    if dark.king_side {
        out.push('k');
    }
    if dark.queen_side {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
