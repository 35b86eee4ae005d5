use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_bots::move_generation::perft::{perft, perft_divide, PerftCounts};
use chess_bots::Board;

struct PerftPosition {
    name: &'static str,
    fen: &'static str,
    depth: u8,
    nodes: u64,
    captures: u64,
    castles: u64,
}

const POSITIONS: &[PerftPosition] = &[
    PerftPosition {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depth: 3,
        nodes: 8902,
        captures: 34,
        castles: 0,
    },
    PerftPosition {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depth: 2,
        nodes: 2039,
        captures: 351,
        castles: 91,
    },
    PerftPosition {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depth: 3,
        nodes: 2812,
        captures: 209,
        castles: 0,
    },
];

fn check_breakdown(position: &PerftPosition, counts: &PerftCounts) {
    assert_eq!(counts.nodes, position.nodes, "{} nodes", position.name);
    assert_eq!(counts.captures, position.captures, "{} captures", position.name);
    assert_eq!(counts.castles, position.castles, "{} castles", position.name);
}

fn bench_perft_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_counts");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    for position in POSITIONS {
        let board = Board::from_fen(position.fen).expect("benchmark FEN should parse");
        let counts = perft(&board, position.depth).expect("perft should run");
        check_breakdown(position, &counts);

        group.throughput(Throughput::Elements(position.nodes));
        let id = format!("{}_d{}", position.name, position.depth);
        group.bench_with_input(BenchmarkId::from_parameter(id), &board, |b, board| {
            b.iter(|| {
                perft(black_box(board), black_box(position.depth))
                    .expect("perft should run")
                    .nodes
            });
        });
    }

    group.finish();
}

fn bench_perft_divide(c: &mut Criterion) {
    let board = Board::new_game();
    let split = perft_divide(&board, 3).expect("divide should run");
    assert_eq!(split.len(), 20);
    assert_eq!(split.iter().map(|(_, nodes)| nodes).sum::<u64>(), 8902);

    c.bench_function("perft_divide_startpos_d3", |b| {
        b.iter(|| perft_divide(black_box(&board), 3).expect("divide should run"));
    });
}

criterion_group!(perft_benches, bench_perft_counts, bench_perft_divide);
criterion_main!(perft_benches);
