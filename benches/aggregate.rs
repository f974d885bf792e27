use criterion::{criterion_group, criterion_main, Criterion};
use sectorscope::aggregate::{chart_series, group_by, ChartKind, SizeBucket};
use sectorscope::record::{CustomerRecord, Mode};
use sectorscope::store;
use std::hint::black_box;

fn benchmark_chart_kinds(c: &mut Criterion) {
    for kind in ChartKind::ALL {
        let name = format!("chart_{kind:?}");
        c.bench_function(&name, |b| {
            b.iter(|| chart_series(black_box(Mode::Premium), black_box(kind)));
        });
    }
}

fn benchmark_all_modes(c: &mut Criterion) {
    c.bench_function("charts_all_modes", |b| {
        b.iter(|| {
            for mode in Mode::ALL {
                for kind in ChartKind::ALL {
                    let _ = chart_series(black_box(mode), kind);
                }
            }
        });
    });
}

fn benchmark_group_by(c: &mut Criterion) {
    c.bench_function("group_by_size_bucket", |b| {
        let customers = store::records(Mode::Premium).customers();
        b.iter(|| {
            group_by(black_box(&customers), |record| {
                SizeBucket::classify(record.company_size()).map(|bucket| bucket.label().to_string())
            })
        });
    });
}

criterion_group!(
    benches,
    benchmark_chart_kinds,
    benchmark_all_modes,
    benchmark_group_by
);
criterion_main!(benches);
