//! Criterion benchmarks for radar_core
//!
//! Run with: cargo bench -p radar_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use radar_core::analysis::{SweepConfig, sweep};
use radar_core::engine::compute_metrics;
use radar_core::model::{CostLedger, InputField, Scenario};

fn bench_compute_metrics(c: &mut Criterion) {
    let inputs = Scenario::Realistic.inputs();
    let ledger = CostLedger::with_defaults();
    let context = ledger.cost_context();

    c.bench_function("compute_metrics", |b| {
        b.iter(|| compute_metrics(black_box(&inputs), black_box(&context)));
    });
}

fn bench_sweep(c: &mut Criterion) {
    let inputs = Scenario::Realistic.inputs();
    let ledger = CostLedger::with_defaults();
    let context = ledger.cost_context();

    let mut group = c.benchmark_group("sweep");
    for field in [
        InputField::ChurnRate,
        InputField::PartnerCount,
        InputField::UpfrontFeePerPartner,
    ] {
        let config = SweepConfig::for_field(field);
        group.bench_with_input(
            BenchmarkId::from_parameter(field),
            &config,
            |b, config| {
                b.iter(|| sweep(black_box(&inputs), config, black_box(&context)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_compute_metrics, bench_sweep);
criterion_main!(benches);
