//! Codec and identifier benchmarks.

use cosmogo_core::{base36, ConstraintErrorTranslator, Engine, IdentifierGenerator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

fn bench_base36(c: &mut Criterion) {
    let mut group = c.benchmark_group("base36");

    group.bench_function("encode_u64_max", |b| {
        b.iter(|| black_box(base36::encode(black_box(u64::MAX as u128))));
    });

    let encoded = base36::encode(u64::MAX as u128);
    group.bench_function("decode_u64_max", |b| {
        b.iter(|| black_box(base36::decode(black_box(&encoded)).unwrap()));
    });

    group.finish();
}

fn bench_identifier(c: &mut Criterion) {
    let generator = IdentifierGenerator::default();

    c.bench_function("identifier/generate_thread_rng", |b| {
        b.iter(|| black_box(generator.generate()));
    });

    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("identifier/generate_std_rng", |b| {
        b.iter(|| black_box(generator.generate_with(&mut rng)));
    });
}

fn bench_translate(c: &mut Criterion) {
    let translator =
        ConstraintErrorTranslator::new(Engine::Postgresql).with_message("email", "taken");

    c.bench_function("constraint/translate_postgresql", |b| {
        b.iter(|| {
            black_box(translator.translate(black_box("Key (email)=(a@b.com) already exists.")))
        });
    });
}

criterion_group!(benches, bench_base36, bench_identifier, bench_translate);
criterion_main!(benches);
