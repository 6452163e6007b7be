use criterion::{black_box, criterion_group, criterion_main, Criterion};
use chess_opponent::agent::get_best_move;
use chess_opponent::config::SearchConfig;
use chess_opponent::game_repr::{Color, Game, GameState};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft_depth_4(c: &mut Criterion) {
    let game = Game::default();
    c.bench_function("perft depth 4", |b| {
        b.iter(|| black_box(game.perft(4)))
    });
}

fn bench_perft_kiwipete_3(c: &mut Criterion) {
    let game = Game::from_fen(KIWIPETE, Default::default()).unwrap();
    c.bench_function("perft kiwipete depth 3", |b| {
        b.iter(|| black_box(game.perft(3)))
    });
}

fn bench_search_depth_3(c: &mut Criterion) {
    let state = GameState::new(Default::default());
    let config = SearchConfig::exact(3);
    c.bench_function("search depth 3", |b| {
        b.iter(|| black_box(get_best_move(&state, Color::White, &config).unwrap()))
    });
}

criterion_group!(benches, bench_perft_depth_4, bench_perft_kiwipete_3, bench_search_depth_3);
criterion_main!(benches);
