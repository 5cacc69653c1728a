use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minefield_core::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const TIERS: [(&str, GameConfig); 3] = [
    ("beginner", GameConfig::BEGINNER),
    ("intermediate", GameConfig::INTERMEDIATE),
    ("expert", GameConfig::EXPERT),
];

fn bench_generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in TIERS {
        let mut rng = SmallRng::seed_from_u64(0xd7);
        group.bench_function(format!("shuffle/{name}"), |b| {
            b.iter(|| ShuffleGenerator.generate(black_box(config), &mut rng))
        });

        let mut rng = SmallRng::seed_from_u64(0xd7);
        group.bench_function(format!("rejection/{name}"), |b| {
            b.iter(|| RejectionGenerator.generate(black_box(config), &mut rng))
        });
    }
    group.finish();
}

fn bench_flood_reveal(c: &mut Criterion) {
    // single mine in a corner, so one reveal opens the whole board
    let board = Board::from_mine_coords((255, 255), &[(0, 0)]).expect("valid layout");

    c.bench_function("flood_reveal/255x255", |b| {
        b.iter(|| {
            let mut game = Game::from_board(board.clone(), 0);
            game.reveal_at(black_box((254, 254)))
        })
    });
}

criterion_group!(benches, bench_generators, bench_flood_reveal);
criterion_main!(benches);
