//! PGN read/write utilities for game history interchange.
//!
//! Writes a [`GameRecord`] as headers plus SAN movetext and replays PGN
//! movetext (SAN, or coordinate moves as a fallback) back into a record.

use std::collections::BTreeMap;

use chrono::Local;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::game_record::GameRecord;
use crate::game_state::position::EndOfGame;
use crate::utils::algebraic_notation::{find_move_by_san, DRAW_SUFFIX};
use crate::utils::long_algebraic::find_move_by_long_algebraic;

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub record: GameRecord,
    pub result: String,
}

/// PGN result token for the record's current position.
pub fn game_result(record: &GameRecord) -> &'static str {
    match record.end_of_game() {
        Some(EndOfGame::Checkmate) => match record.current_position().color_to_move() {
            Color::Light => "0-1",
            Color::Dark => "1-0",
        },
        Some(EndOfGame::Stalemate | EndOfGame::FiftyMoveRule) => "1/2-1/2",
        None => "*",
    }
}

pub fn write_pgn(record: &GameRecord, result: &str) -> Result<String, ChessErrors> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Damson Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    if *record.initial_position() != Position::new_game() {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), record.initial_position().to_fen());
    }

    write_pgn_with_headers(record, &headers)
}

pub fn write_pgn_with_headers(
    record: &GameRecord,
    headers: &BTreeMap<String, String>,
) -> Result<String, ChessErrors> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let black_starts = record.initial_position().color_to_move() == Color::Dark;
    let mut movetext_parts = Vec::<String>::with_capacity(record.len() + 1);
    for (index, san) in record.notations()?.into_iter().enumerate() {
        let san = san.trim_end_matches(DRAW_SUFFIX).to_owned();
        let ply = index + usize::from(black_starts);
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, san));
        } else if index == 0 {
            movetext_parts.push(format!("{}... {}", (ply / 2) + 1, san));
        } else {
            movetext_parts.push(san);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

pub fn read_pgn(pgn: &str) -> Result<PgnGame, ChessErrors> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let initial = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers.get("FEN").ok_or_else(|| {
            ChessErrors::InvalidPgn("SetUp=1 is present but FEN header is missing".to_owned())
        })?;
        Position::from_fen(fen)?
    } else {
        Position::new_game()
    };

    let mut record = GameRecord::new(initial);
    let mut result = "*".to_owned();

    let movetext = strip_pgn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) || is_draw_glyph(token) {
            continue;
        }

        let cleaned = trim_annotation_suffix(strip_move_number_prefix(token));
        if is_result_token(cleaned) {
            result = normalize_result(cleaned).to_owned();
            break;
        }

        let position = record.current_position();
        let chess_move = find_move_by_san(position, cleaned)
            .or_else(|_| find_move_by_long_algebraic(position, cleaned))
            .map_err(|_| {
                ChessErrors::InvalidPgn(format!(
                    "Illegal or unreadable move '{token}' after {} plies",
                    record.len()
                ))
            })?;
        record.play(chess_move)?;
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame {
        headers,
        record,
        result,
    })
}

/// `12.Nf3` style tokens carry their move number without a space.
fn strip_move_number_prefix(token: &str) -> &str {
    match token.rfind('.') {
        Some(dot) if token[..dot].chars().all(|c| c.is_ascii_digit() || c == '.') => {
            &token[dot + 1..]
        }
        _ => token,
    }
}

fn parse_header_line(line: &str) -> Result<(String, String), ChessErrors> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(ChessErrors::InvalidPgn(format!("Invalid header line: {line}")));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidPgn(format!("Invalid header key: {line}")))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| ChessErrors::InvalidPgn(format!("Invalid header value: {line}")))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(ChessErrors::InvalidPgn(format!(
            "Invalid quoted header value: {line}"
        )));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn strip_pgn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    if token.ends_with('.') {
        return token
            .trim_end_matches('.')
            .chars()
            .all(|c| c.is_ascii_digit());
    }
    if token.contains("...") {
        let head = token.split("...").next().unwrap_or_default();
        return !head.is_empty() && head.chars().all(|c| c.is_ascii_digit());
    }
    false
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

/// The draw glyph SAN appends after a drawing move.
fn is_draw_glyph(token: &str) -> bool {
    token == DRAW_SUFFIX.trim_start()
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{game_result, read_pgn, write_pgn, write_pgn_with_headers};
    use std::collections::BTreeMap;

    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Position;
    use crate::game_state::game_record::GameRecord;

    #[test]
    fn pgn_round_trip_start_position_history() {
        let mut record = GameRecord::default();
        for lan in ["e2e4", "e7e5", "g1f3", "b8c6"] {
            record.play_long_algebraic(lan).expect("move should be legal");
        }

        let pgn = write_pgn(&record, "*").expect("PGN should write");
        assert!(pgn.contains("1. e4 e5 2. Nf3 Nc6 *"));
        assert!(pgn.contains("[Date \""));
        assert!(!pgn.contains("[FEN"));

        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.record, record);
        assert_eq!(parsed.result, "*");
    }

    #[test]
    fn pgn_round_trip_custom_fen_setup() {
        let initial =
            Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 b - - 0 0").expect("FEN should parse");
        let mut record = GameRecord::new(initial.clone());
        record.play_san("Kd7").expect("Kd7 should be legal");
        record.play_san("e4").expect("e4 should be legal");

        let mut headers = BTreeMap::<String, String>::new();
        headers.insert("Event".to_owned(), "Custom".to_owned());
        headers.insert("Result".to_owned(), "1-0".to_owned());
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial.to_fen());

        let pgn = write_pgn_with_headers(&record, &headers).expect("PGN should write");
        assert!(pgn.contains("1... Kd7 2. e4 1-0"));

        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.record.initial_position(), &initial);
        assert_eq!(parsed.record, record);
        assert_eq!(parsed.result, "1-0");
    }

    #[test]
    fn reads_compact_movetext_with_comments() {
        let pgn = "[Event \"Test\"]\n\n1.f3 {weak} e5 2.g4?? (2.e4) Qh4# 0-1\n";
        let parsed = read_pgn(pgn).expect("PGN should parse");
        assert_eq!(parsed.record.len(), 4);
        assert_eq!(parsed.result, "0-1");
        assert_eq!(game_result(&parsed.record), "0-1");
    }

    #[test]
    fn mate_on_a_saturated_counter_is_a_win() {
        let initial = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 98 80")
            .expect("FEN should parse");
        let mut record = GameRecord::new(initial);
        record.play_san("Ra8#").expect("Ra8 should be legal");
        assert_eq!(game_result(&record), "1-0");
    }

    #[test]
    fn illegal_moves_are_reported() {
        let err = read_pgn("1. e4 e4 *").expect_err("second e4 is illegal");
        assert!(matches!(err, ChessErrors::InvalidPgn(_)));
    }
}
