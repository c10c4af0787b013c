use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use editdist::{levenshtein_distance, levenshtein_distance_bytes, EditDistance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_word(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("edit_distance");

    for &len in &[8usize, 64, 512] {
        let a = random_word(&mut rng, len);
        let b = random_word(&mut rng, len);

        group.bench_with_input(BenchmarkId::new("chars", len), &len, |bench, _| {
            bench.iter(|| levenshtein_distance(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("bytes", len), &len, |bench, _| {
            bench.iter(|| levenshtein_distance_bytes(black_box(a.as_bytes()), black_box(b.as_bytes())))
        });
        group.bench_with_input(BenchmarkId::new("reused", len), &len, |bench, _| {
            let mut calc = EditDistance::new();
            bench.iter(|| calc.distance(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_edit_distance);
criterion_main!(benches);
