use criterion::{criterion_group, criterion_main, Criterion};
use sectorscope::export::{export_csv, to_csv};
use sectorscope::record::Mode;
use sectorscope::store;
use std::hint::black_box;

fn benchmark_premium_serialization(c: &mut Criterion) {
    c.bench_function("to_csv_premium", |b| {
        let records = store::premium();
        b.iter(|| to_csv(black_box(records)));
    });
}

fn benchmark_export_all_modes(c: &mut Criterion) {
    c.bench_function("export_csv_all_modes", |b| {
        b.iter(|| {
            for mode in Mode::ALL {
                let _ = export_csv(black_box(mode));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_premium_serialization,
    benchmark_export_all_modes
);
criterion_main!(benches);
