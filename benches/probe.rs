use criterion::{black_box, criterion_group, criterion_main, Criterion};
use probestore::{
    DoubleHashingTable, LinearProbingTable, ProbeTable, QuadraticProbingTable, Strategy,
    DEFAULT_CAPACITY,
};
use probestore::components::table::hashing::HashFn;

/// Table filled with `count` pseudo random keys.
fn filled<H: HashFn>(count: usize) -> ProbeTable<i32, i32, H> {
    let mut table = ProbeTable::with_capacity(DEFAULT_CAPACITY).unwrap();
    for k in make_keys().take(count) {
        let _ = table.put(k, k);
    }
    table
}

fn benchme(c: &mut Criterion) {
    c.bench_function("linear get hit", |b| {
        let table: LinearProbingTable<i32, i32> = filled(180);
        let key = make_keys().nth(150).unwrap();
        b.iter(|| {
            let _ = table.get(black_box(&key));
        });
    });

    c.bench_function("quadratic get hit", |b| {
        let table: QuadraticProbingTable<i32, i32> = filled(150);
        let key = make_keys().nth(120).unwrap();
        b.iter(|| {
            let _ = table.get(black_box(&key));
        });
    });

    c.bench_function("double hashing get miss", |b| {
        let table: DoubleHashingTable<i32, i32> = filled(180);
        b.iter(|| {
            let _ = table.get(black_box(&-1));
        });
    });

    c.bench_function("linear put full table", |b| {
        let mut table: LinearProbingTable<i32, i32> = ProbeTable::with_capacity(DEFAULT_CAPACITY).unwrap();
        for k in 0..DEFAULT_CAPACITY as i32 {
            table.put(k, k).unwrap();
        }
        b.iter(|| {
            let _ = table.put(black_box(-7), 1);
        });
    });

    for strategy in [Strategy::Linear, Strategy::Quadratic, Strategy::DoubleHashing] {
        c.bench_function(&format!("{strategy} fill 180"), |b| {
            b.iter(|| {
                let mut table = strategy.build::<i32, i32>(DEFAULT_CAPACITY).unwrap();
                for k in make_keys().take(180) {
                    let _ = table.put(k, k);
                }
                black_box(table.collisions())
            });
        });
    }
}

/// Deterministic key stream, spread over the whole `i32` range.
pub fn make_keys() -> impl Iterator<Item = i32> {
    let mut state = 0x2545_f491u32;
    std::iter::from_fn(move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        Some(state as i32)
    })
}

criterion_group!(benches, benchme);
criterion_main!(benches);
