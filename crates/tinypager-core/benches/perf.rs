use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tinypager_core::{compute_range, describe, PaginationConfig};

fn bench_compute_range(c: &mut Criterion) {
    c.bench_function("compute_range_sweep_1000", |b| {
        b.iter(|| {
            for current in 1..=1000 {
                let _ = black_box(compute_range(black_box(current), 1000, 7, 2));
            }
        })
    });
}

fn bench_describe(c: &mut Criterion) {
    let configs: Vec<PaginationConfig> = (1..=200)
        .map(|current| PaginationConfig::new(current, 200, 9, 2))
        .collect();

    c.bench_function("describe_sweep_200", |b| {
        b.iter(|| {
            for config in &configs {
                let _ = black_box(describe(black_box(config)));
            }
        })
    });
}

criterion_group!(benches, bench_compute_range, bench_describe);
criterion_main!(benches);
