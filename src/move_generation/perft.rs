//! Perft node counting for move-generator validation.

use std::thread;

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// Leaf statistics in the usual perft breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn leaf(parent: &Position, chess_move: &ChessMove) -> Self {
        let kind = chess_move.kind();
        let after = chess_move.resulting_position();
        let en_passant = kind.is_capture() && parent.piece_at(chess_move.end_square()).is_none();
        let check = after.is_in_check(None);

        PerftCounts {
            nodes: 1,
            captures: usize::from(kind.is_capture()),
            en_passant: usize::from(en_passant),
            castles: usize::from(kind.is_castle()),
            promotions: usize::from(kind.is_promotion()),
            checks: usize::from(check),
            checkmates: usize::from(check && after.possible_moves().is_empty()),
        }
    }
}

/// Plain node count, without the leaf breakdown.
pub fn perft_nodes(position: &Position, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    let moves = position.possible_moves();
    if depth == 1 {
        return moves.len();
    }
    moves
        .iter()
        .map(|chess_move| perft_nodes(chess_move.resulting_position(), depth - 1))
        .sum()
}

pub fn perft(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for chess_move in position.possible_moves() {
        perft_recurse(position, &chess_move, depth - 1, &mut total);
    }
    total
}

/// Same counts as [`perft`], with one scoped thread per root move.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(position, 0);
    }

    let root_moves = position.possible_moves();
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|chess_move| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(position, chess_move, depth - 1, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        total
    })
}

fn perft_recurse(parent: &Position, chess_move: &ChessMove, remaining: u8, counts: &mut PerftCounts) {
    if remaining == 0 {
        counts.merge(PerftCounts::leaf(parent, chess_move));
        return;
    }

    let position = chess_move.resulting_position();
    for child in position.possible_moves() {
        perft_recurse(position, &child, remaining - 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0";
    const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&Position::new_game(), 0);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_node_counts() {
        let position = Position::new_game();
        assert_eq!(perft_nodes(&position, 1), 20);
        assert_eq!(perft_nodes(&position, 2), 400);
        assert_eq!(perft_nodes(&position, 3), 8_902);
    }

    #[test]
    fn start_position_depth_three_breakdown() {
        let counts = perft(&Position::new_game(), 3);
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8_902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_counts() {
        let position = Position::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");
        let one = perft(&position, 1);
        assert_eq!(one.nodes, 48);
        assert_eq!(one.captures, 8);
        assert_eq!(one.castles, 2);

        let two = perft(&position, 2);
        assert_eq!(two.nodes, 2_039);
        assert_eq!(two.captures, 351);
        assert_eq!(two.en_passant, 1);
        assert_eq!(two.castles, 91);
        assert_eq!(two.checks, 3);
    }

    #[test]
    fn position_three_counts() {
        let position = Position::from_fen(POSITION_3_FEN).expect("position 3 FEN should parse");
        assert_eq!(perft_nodes(&position, 1), 14);
        assert_eq!(perft_nodes(&position, 2), 191);

        let three = perft(&position, 3);
        assert_eq!(three.nodes, 2_812);
        assert_eq!(three.captures, 209);
        assert_eq!(three.en_passant, 2);
        assert_eq!(three.checks, 267);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let position = Position::from_fen(KIWIPETE_FEN).expect("kiwipete FEN should parse");
        assert_eq!(perft_multi_threaded(&position, 2), perft(&position, 2));
    }
}
