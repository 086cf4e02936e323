use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_rules::game_state::board::Board;
use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::game_state::game::Game;
use plum_rules::move_generation::legal_move_generator::legal_moves;
use plum_rules::move_generation::perft::perft;
use plum_rules::utils::pgn::replay_movetext;

/// Reference node counts per depth, starting at depth 1.
const POSITIONS: &[(&str, &str, &[usize])] = &[
    ("start", STARTING_POSITION_FEN, &[20, 400, 8902, 197_281]),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[48, 2039, 97_862],
    ),
    (
        "rook_endgame",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[14, 191, 2812, 43_238],
    ),
];

const CENTURY: &str = "1.Nf3 Nf6 2.c4 g6 3.Nc3 Bg7 4.d4 O-O 5.Bf4 d5 6.Qb3 dxc4 \
7.Qxc4 c6 8.e4 Nbd7 9.Rd1 Nb6 10.Qc5 Bg4 11.Bg5 Na4 12.Qa3 Nxc3 13.bxc3 Nxe4 \
14.Bxe7 Qb6 15.Bc4 Nxc3 16.Bc5 Rfe8+ 17.Kf1 Be6 18.Bxb6 Bxc4+ 19.Kg1 Ne2+ \
20.Kf1 Nxd4+ 21.Kg1 Ne2+ 22.Kf1 Nc3+ 23.Kg1 axb6 24.Qb4 Ra4 25.Qxb6 Nxd1 \
26.h3 Rxa2 27.Kh2 Nxf2 28.Re1 Rxe1 29.Qd8+ Bf8 30.Nxe1 Bd5 31.Nf3 Ne4 \
32.Qb8 b5 33.h4 h5 34.Ne5 Kg7 35.Kg1 Bc5+ 36.Kf1 Ng3+ 37.Ke1 Bb4+ 38.Kd1 Bb3+ \
39.Kc1 Ne2+ 40.Kb1 Nc3+ 41.Kc1 Rc2# 0-1";

/// `PLUM_BENCH_SUITE=standard` runs every listed depth; otherwise the two shallowest.
fn max_depth() -> usize {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(suite) if suite.eq_ignore_ascii_case("standard") => usize::MAX,
        _ => 2,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(10);

    for (name, fen, counts) in POSITIONS {
        let board = Board::from_fen(fen).expect("benchmark FEN parses");
        for (depth, &nodes) in (1u8..).zip(counts.iter().take(max_depth())) {
            let counted = perft(&board, depth).expect("perft runs");
            assert_eq!(counted.nodes, nodes, "{name} depth {depth}");

            group.throughput(Throughput::Elements(nodes as u64));
            group.bench_with_input(BenchmarkId::new(*name, depth), &depth, |b, &depth| {
                b.iter(|| perft(black_box(&board), depth).map(|counts| counts.nodes))
            });
        }
    }
    group.finish();
}

fn bench_notation(c: &mut Criterion) {
    let mut group = c.benchmark_group("notation");
    group.sample_size(10);

    group.throughput(Throughput::Elements(82));
    group.bench_function("replay_game_of_the_century", |b| {
        b.iter(|| {
            let mut game = Game::new();
            replay_movetext(&mut game, black_box(CENTURY)).expect("game replays");
            game
        })
    });

    let board = Board::from_fen(POSITIONS[1].1).expect("benchmark FEN parses");
    group.bench_function("legal_moves_kiwipete", |b| {
        b.iter(|| legal_moves(black_box(&board)).len())
    });
    group.finish();
}

criterion_group!(benches, bench_perft, bench_notation);
criterion_main!(benches);
