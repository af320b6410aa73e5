//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White-to-move nodes maximize and black-to-move nodes minimize a
//! white-positive score. There is no move ordering, transposition table or
//! quiescence search; moves are tried in generation order and ties keep the
//! earlier move.

use log::debug;

use crate::game_state::chess_types::*;
use crate::game_state::position::EndOfGame;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::{BoardScorer, PieceSquareEvaluator, MATE_SCORE};

const INFINITY: i32 = MATE_SCORE * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

/// The chosen root move and its white-positive score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMove {
    pub chess_move: ChessMove,
    pub evaluation: i32,
}

#[derive(Debug, Clone, Default)]
pub struct Bot<S = PieceSquareEvaluator> {
    scorer: S,
}

impl<S: BoardScorer> Bot<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Best root move for the side to move, or `None` when it has no legal
    /// move. Root children are searched at `depth - 1`.
    pub fn run(&self, position: &Position, depth: u8) -> Option<BestMove> {
        let maximizing = position.color_to_move() == Color::Light;
        let child_depth = depth.saturating_sub(1);
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut nodes = 0u64;
        let mut best: Option<BestMove> = None;

        for chess_move in position.possible_moves() {
            let evaluation = self.minimax(
                chess_move.resulting_position(),
                child_depth,
                alpha,
                beta,
                &mut nodes,
            );
            debug!("{} scored {evaluation}", chess_move.to_long_algebraic());

            let improves = best.as_ref().map_or(true, |current| {
                if maximizing {
                    evaluation > current.evaluation
                } else {
                    evaluation < current.evaluation
                }
            });
            if maximizing {
                alpha = alpha.max(evaluation);
            } else {
                beta = beta.min(evaluation);
            }
            if improves {
                best = Some(BestMove {
                    chess_move,
                    evaluation,
                });
            }
        }

        debug!(
            "depth {depth} searched {nodes} nodes, best {:?}",
            best.as_ref()
                .map(|b| (b.chess_move.to_long_algebraic(), b.evaluation))
        );
        best
    }

    #[inline]
    pub fn run_with_config(&self, position: &Position, config: SearchConfig) -> Option<BestMove> {
        self.run(position, config.depth)
    }

    fn minimax(
        &self,
        position: &Position,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        let moves = position.possible_moves();
        if let Some(end) = position.end_of_game_with(&moves) {
            return match end {
                EndOfGame::Checkmate => mate_score(position.color_to_move(), depth),
                EndOfGame::Stalemate | EndOfGame::FiftyMoveRule => 0,
            };
        }
        if depth == 0 {
            return self.scorer.score(position);
        }

        if position.color_to_move() == Color::Light {
            let mut best = -INFINITY;
            for chess_move in &moves {
                let score =
                    self.minimax(chess_move.resulting_position(), depth - 1, alpha, beta, nodes);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = INFINITY;
            for chess_move in &moves {
                let score =
                    self.minimax(chess_move.resulting_position(), depth - 1, alpha, beta, nodes);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Mates found with more depth left are shallower and score further from zero.
#[inline]
fn mate_score(mated: Color, remaining_depth: u8) -> i32 {
    let magnitude = MATE_SCORE + i32::from(remaining_depth);
    match mated {
        Color::Dark => magnitude,
        Color::Light => -magnitude,
    }
}
