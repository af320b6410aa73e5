use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use damson_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use damson_chess::game_state::chess_types::Position;
use damson_chess::search::board_scoring::PieceSquareEvaluator;
use damson_chess::search::minimax::Bot;

const CASES: &[(&str, &str, u8)] = &[
    ("start", STARTING_POSITION_FEN, 3),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 0",
        2,
    ),
    ("rook_endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 4),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let bot = Bot::new(PieceSquareEvaluator);
    for (name, fen, depth) in CASES {
        let position = Position::from_fen(fen).expect("benchmark FEN should parse");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{name}_d{depth}")),
            &position,
            |b, position| {
                b.iter(|| {
                    let best = bot.run(black_box(position), black_box(*depth));
                    black_box(best.map(|found| found.evaluation))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
