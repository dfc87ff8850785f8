use change::{greedy::sorted_descending, solve_exact, solve_greedy, Preset};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin_change");

    for preset in Preset::ALL {
        let coins = preset.coins();
        let descending = sorted_descending(coins);
        for amount in [343, 10_000, 100_000] {
            group.bench_with_input(
                BenchmarkId::new(format!("exact/{preset}"), amount),
                &amount,
                |b, &amount| b.iter(|| solve_exact(black_box(coins), black_box(amount))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("greedy/{preset}"), amount),
                &amount,
                |b, &amount| b.iter(|| solve_greedy(black_box(&descending), black_box(amount))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
