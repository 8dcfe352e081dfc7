//! Round and game throughput with built-in policies.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tarneeb41::{
    resolve_trick, Card, GameRng, HighestScore, RulesConfig, SeatMap, SeatPolicies, Suit, Table,
};

fn random_table(seed: u64) -> Table {
    let mut rng = GameRng::new(seed).for_context("policies");
    let policies = SeatMap::new(|_| SeatPolicies::random(&mut rng));
    Table::new(RulesConfig::default(), policies, seed).expect("default config is valid")
}

fn heuristic_table(seed: u64) -> Table {
    let policies = SeatMap::new(|_| SeatPolicies::heuristic());
    Table::new(RulesConfig::default(), policies, seed).expect("default config is valid")
}

fn bench_resolve_trick(c: &mut Criterion) {
    let cards: Vec<Card> = ["Kh", "Ac", "2s", "Ah"]
        .iter()
        .map(|s| s.parse().expect("valid card"))
        .collect();
    c.bench_function("resolve_trick", |b| {
        b.iter(|| resolve_trick(black_box(&cards), black_box(Suit::Spades)))
    });
}

fn bench_round(c: &mut Criterion) {
    let mut table = random_table(1);
    c.bench_function("round_random", |b| {
        b.iter(|| {
            table.new_game();
            black_box(table.play_round().expect("round completes"))
        })
    });

    let mut table = heuristic_table(2);
    c.bench_function("round_heuristic", |b| {
        b.iter(|| {
            table.new_game();
            black_box(table.play_round().expect("round completes"))
        })
    });
}

fn bench_game(c: &mut Criterion) {
    let mut table = heuristic_table(3);
    c.bench_function("game_heuristic", |b| {
        b.iter(|| black_box(table.play_game_with(&mut HighestScore).ok()))
    });
}

criterion_group!(benches, bench_resolve_trick, bench_round, bench_game);
criterion_main!(benches);
