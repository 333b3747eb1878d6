use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pointbuy::rules::CostTable;
use pointbuy::spread::SpreadEngine;

fn bench_cold_enumeration(c: &mut Criterion) {
    let table = CostTable::standard();
    c.bench_function("spreads_of 6x27 cold", |b| {
        b.iter(|| {
            let mut engine = SpreadEngine::new(&table);
            engine.spreads_of(black_box(6), black_box(27))
        })
    });
}

fn bench_warm_enumeration(c: &mut Criterion) {
    let table = CostTable::standard();
    let mut engine = SpreadEngine::new(&table);
    engine.spreads_of(6, 27);
    c.bench_function("spreads_of 6x27 warm", |b| {
        b.iter(|| engine.spreads_of(black_box(6), black_box(27)))
    });
}

criterion_group!(benches, bench_cold_enumeration, bench_warm_enumeration);
criterion_main!(benches);
