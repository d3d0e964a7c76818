use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lcs_all::{backtrack_one, lcs_length, LcsTable};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn bench_table_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let len = 2048;
    let s = random_dna(&mut rng, len);
    let t = random_dna(&mut rng, len);
    let table = LcsTable::build(&s, &t);

    let mut group = c.benchmark_group("table_ops");
    group.bench_function("build_table", |b| {
        b.iter(|| black_box(LcsTable::build(black_box(&s), black_box(&t)).lcs_len()))
    });
    group.bench_function("rolling_length", |b| {
        b.iter(|| black_box(lcs_length(black_box(&s), black_box(&t))))
    });
    group.bench_function("backtrack_one", |b| {
        b.iter(|| black_box(backtrack_one(&table, &s, &t).len()))
    });
    group.finish();
}

criterion_group!(benches, bench_table_ops);
criterion_main!(benches);
