use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use spigot::Generator;

const DRAWS: usize = 10_000;

fn ranged_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    group.throughput(Throughput::Elements(DRAWS as u64));

    group.bench_function("u32/full_span", |b| {
        let mut g = Generator::from_seed(1);
        b.iter(|| {
            for _ in 0..DRAWS {
                black_box(g.next::<u32>().unwrap());
            }
        });
    });

    group.bench_function("u32/power_of_two", |b| {
        let mut g = Generator::from_seed(1);
        b.iter(|| {
            for _ in 0..DRAWS {
                black_box(g.next_below::<u32>(1 << 20).unwrap());
            }
        });
    });

    group.bench_function("u32/odd_range", |b| {
        let mut g = Generator::from_seed(1);
        b.iter(|| {
            for _ in 0..DRAWS {
                black_box(g.next_below::<u32>(1_000_003).unwrap());
            }
        });
    });

    // range just over half the span: the worst case for the rejection loop
    group.bench_function("u32/rejection_worst_case", |b| {
        let mut g = Generator::from_seed(1);
        b.iter(|| {
            for _ in 0..DRAWS {
                black_box(g.next_below::<u32>((1u32 << 31) + 1).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, ranged_sampling);
criterion_main!(benches);
