//! Plain-data search boundary.
//!
//! A request names a position by FEN and a search depth; the response is
//! either `null` (the side to move has no legal move) or the chosen move with
//! its white-positive evaluation. Field names follow the JSON shape used by
//! the browser front end.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{ChessMove, MoveKind};
use crate::search::board_scoring::PieceSquareEvaluator;
use crate::search::minimax::{BestMove, Bot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "positionFEN")]
    pub position_fen: String,
    pub depth: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePayload {
    pub piece_data: Piece,
    pub start_square: Square,
    pub end_square: Square,
    #[serde(rename = "resultingPositionFEN")]
    pub resulting_position_fen: String,
    pub kind: MoveKind,
}

impl From<&ChessMove> for MovePayload {
    fn from(chess_move: &ChessMove) -> Self {
        Self {
            piece_data: chess_move.piece(),
            start_square: chess_move.start_square(),
            end_square: chess_move.end_square(),
            resulting_position_fen: chess_move.resulting_position().to_fen(),
            kind: chess_move.kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "move")]
    pub chess_move: MovePayload,
    pub evaluation: i32,
}

impl From<&BestMove> for SearchResult {
    fn from(best: &BestMove) -> Self {
        Self {
            chess_move: MovePayload::from(&best.chess_move),
            evaluation: best.evaluation,
        }
    }
}

/// `None` serializes as `null`.
pub type SearchResponse = Option<SearchResult>;

/// Runs the requested search with the default evaluator.
pub fn handle_search_request(request: &SearchRequest) -> Result<SearchResponse, ChessErrors> {
    let position = Position::from_fen(&request.position_fen)?;
    trace!("searching {} to depth {}", request.position_fen, request.depth);

    let best = Bot::new(PieceSquareEvaluator).run(&position, request.depth);
    Ok(best.as_ref().map(SearchResult::from))
}

pub fn parse_search_request(json: &str) -> Result<SearchRequest, ChessErrors> {
    serde_json::from_str(json).map_err(|e| ChessErrors::InvalidSearchRequest(e.to_string()))
}

pub fn encode_search_response(response: &SearchResponse) -> Result<String, ChessErrors> {
    serde_json::to_string(response).map_err(|e| ChessErrors::InvalidSearchRequest(e.to_string()))
}

/// One JSON request in, one JSON response out.
pub fn handle_search_json(json: &str) -> Result<String, ChessErrors> {
    let request = parse_search_request(json)?;
    let response = handle_search_request(&request)?;
    encode_search_response(&response)
}

#[cfg(test)]
mod tests {
    use super::{handle_search_json, handle_search_request, parse_search_request, SearchRequest};
    use crate::chess_errors::ChessErrors;
    use serde_json::{json, Value};

    #[test]
    fn request_uses_front_end_field_names() {
        let request = parse_search_request(
            r#"{"positionFEN": "8/8/8/8/8/8/8/K6k w - - 0 0", "depth": 2}"#,
        )
        .expect("request should decode");
        assert_eq!(
            request,
            SearchRequest {
                position_fen: "8/8/8/8/8/8/8/K6k w - - 0 0".to_owned(),
                depth: 2,
            }
        );
    }

    #[test]
    fn response_json_shape() {
        let out = handle_search_json(
            r#"{"positionFEN": "7k/8/8/3q4/8/8/8/K2R4 w - - 0 0", "depth": 1}"#,
        )
        .expect("search should run");
        let value: Value = serde_json::from_str(&out).expect("response is JSON");

        let chess_move = &value["move"];
        assert_eq!(chess_move["pieceData"], json!({"kind": "rook", "color": "white"}));
        assert_eq!(chess_move["startSquare"], json!(3));
        assert_eq!(chess_move["endSquare"], json!(35));
        assert_eq!(chess_move["kind"], json!("capture"));
        assert_eq!(
            chess_move["resultingPositionFEN"],
            json!("7k/8/8/3R4/8/8/8/K7 b - - 0 0")
        );
        assert!(value["evaluation"].as_i64().expect("evaluation is a number") > 0);
    }

    #[test]
    fn promotion_kind_is_camel_case() {
        let request = SearchRequest {
            position_fen: "1n5k/P7/8/8/8/8/8/K7 w - - 0 0".to_owned(),
            depth: 1,
        };
        let response = handle_search_request(&request)
            .expect("search should run")
            .expect("white has moves");
        let value = serde_json::to_value(&response).expect("response serializes");
        assert_eq!(value["move"]["kind"], json!("capturePromotion"));
        assert_eq!(value["move"]["pieceData"]["kind"], json!("pawn"));
    }

    #[test]
    fn no_legal_move_is_null() {
        let out = handle_search_json(
            r#"{"positionFEN": "r1K5/r7/8/8/8/8/8/7k w - - 0 0", "depth": 2}"#,
        )
        .expect("search should run");
        assert_eq!(out, "null");
    }

    #[test]
    fn malformed_requests_are_rejected() {
        assert!(matches!(
            handle_search_json(r#"{"fen": "x"}"#),
            Err(ChessErrors::InvalidSearchRequest(_))
        ));
        assert!(matches!(
            handle_search_json(r#"{"positionFEN": "8/8 w - -", "depth": 1}"#),
            Err(ChessErrors::InvalidFenString(_))
        ));
    }
}
