//! Errors used throughout the chess core.
//!
//! This module defines the canonical error type returned by position parsing,
//! notation handling, game-record replay and the search worker boundary. The
//! enum `ChessErrors` is used as the single error type across the crate to
//! simplify propagation and matching. Each variant carries the offending input
//! where that helps diagnostics.
//!
//! Usage guidelines:
//! - Functions return `Result<..., ChessErrors>` for expected failure modes
//!   (malformed FEN, unknown SAN token, bad worker request).
//! - Off-board square arithmetic is never an error; those routines return
//!   `Option` and treat the board edge as "no candidate".
//! - The move generator and the search have no error states.

use std::error::Error;
use std::fmt;

/// Unified error type for the chess core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A piece-placement letter outside `pnbrqkPNBRQK` was found in a FEN.
    ///
    /// This is a hard failure: untrusted callers are expected to validate
    /// their input before handing it to the core.
    InvalidPieceLetter(char),

    /// The FEN string is structurally malformed (missing fields, ranks that
    /// do not sum to eight files, unknown side/castling/en-passant token).
    InvalidFenString(String),

    /// A coordinate string such as `"e4"` could not be parsed.
    InvalidAlgebraicString(String),

    /// A move-history index past the end of the recorded moves.
    MoveIndexOutOfRange(usize),

    /// A SAN token did not match any legal move in the current position.
    UnknownMove(String),

    /// The PGN text could not be read (bad header line, missing FEN header).
    InvalidPgn(String),

    /// A worker request could not be decoded or encoded.
    InvalidSearchRequest(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidPieceLetter(ch) => write!(f, "invalid piece letter '{ch}'"),
            ChessErrors::InvalidFenString(msg) => write!(f, "invalid FEN string: {msg}"),
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic square: {s}"),
            ChessErrors::MoveIndexOutOfRange(index) => {
                write!(f, "move index {index} is out of range")
            }
            ChessErrors::UnknownMove(token) => write!(f, "no legal move matches '{token}'"),
            ChessErrors::InvalidPgn(msg) => write!(f, "invalid PGN: {msg}"),
            ChessErrors::InvalidSearchRequest(msg) => write!(f, "invalid search request: {msg}"),
        }
    }
}

impl Error for ChessErrors {}
