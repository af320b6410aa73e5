//! Engine wrapper around the fixed-depth minimax bot.

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Position;
use crate::search::board_scoring::{BoardScorer, PieceSquareEvaluator};
use crate::search::minimax::{Bot, SearchConfig};

pub struct MinimaxEngine<S = PieceSquareEvaluator> {
    bot: Bot<S>,
    config: SearchConfig,
}

impl MinimaxEngine<PieceSquareEvaluator> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(PieceSquareEvaluator, config)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self {
            bot: Bot::new(scorer),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Damson Minimax"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let depth = params.depth.unwrap_or(self.config.depth);

        let mut out = EngineOutput::default();
        if let Some(best) = self.bot.run(position, depth) {
            out.info_lines.push(format!(
                "info depth {depth} score cp {} pv {}",
                best.evaluation,
                best.chess_move.to_long_algebraic()
            ));
            out.evaluation = Some(best.evaluation);
            out.best_move = Some(best.chess_move);
        } else {
            out.info_lines
                .push(format!("info depth {depth} string no_legal_moves"));
        }

        Ok(out)
    }
}
