use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use vose::{AliasSampler, SharedSource, WeightedList};

fn gen_weights(n: usize) -> Vec<f64> {
    let mut rng = Pcg64::seed_from_u64(777);
    (0..n).map(|_| 0.1 + rng.random::<f64>()).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_build");
    for &n in &[2usize, 8, 64, 1024, 65_536] {
        let weights = gen_weights(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("new_n={n}"), |b| {
            b.iter(|| black_box(AliasSampler::new(black_box(&weights))).unwrap());
        });
    }
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("alias_sample");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[2usize, 64, 1024, 65_536] {
        let weights = gen_weights(n);
        let sampler = AliasSampler::new(&weights).unwrap();
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));

        group.bench_function(format!("owned_rng_n={n}"), |b| {
            b.iter_batched_ref(
                || Pcg64::seed_from_u64(999),
                |rng| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= sampler.sample_index(rng);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("shared_rng_n={n}"), |b| {
            b.iter_batched_ref(
                || SharedSource::new(Pcg64::seed_from_u64(1001)),
                |source| {
                    let mut s = 0usize;
                    for _ in 0..DRAWS_PER_ITER {
                        s ^= sampler.sample_index(source);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let pairs: Vec<(usize, f64)> = gen_weights(1024).into_iter().enumerate().collect();
    let list = WeightedList::from_pairs(pairs).unwrap();
    c.bench_function("weighted_list_sample_n=1024", |b| {
        b.iter_batched_ref(
            || Pcg64::seed_from_u64(4),
            |rng| black_box(*list.sample(rng)),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(sampling, bench_build, bench_sample, bench_list);
criterion_main!(sampling);
