use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nickbot::infrastructure::random::{SeededRandom, ThreadRandom};
use nickbot::{choose_strategy, StrategySampler, StrategyTable};

fn bench_choose(c: &mut Criterion) {
    let table = StrategyTable::default();

    let thread_sampler = StrategySampler::new(&table, ThreadRandom);
    c.bench_function("choose_thread_random", |b| {
        b.iter(|| black_box(thread_sampler.choose()));
    });

    let seeded_sampler = StrategySampler::new(&table, SeededRandom::new(42));
    c.bench_function("choose_seeded_mutex", |b| {
        b.iter(|| black_box(seeded_sampler.choose()));
    });

    c.bench_function("choose_strategy_global", |b| {
        b.iter(|| black_box(choose_strategy()));
    });
}

fn bench_lookup(c: &mut Criterion) {
    let table = StrategyTable::default();
    c.bench_function("lookup_all_outcomes", |b| {
        b.iter(|| {
            for outcome in 0..100u8 {
                black_box(table.lookup(black_box(outcome)));
            }
        });
    });
}

criterion_group!(benches, bench_choose, bench_lookup);
criterion_main!(benches);
