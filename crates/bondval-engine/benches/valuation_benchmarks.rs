//! Benchmarks for the bondval-engine valuation and batch components.
//!
//! Run with: cargo bench -p bondval-engine

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal_macros::dec;

use bondval_core::{BondRecord, InstrumentType, PaymentFrequency, RateSpec, RawRow};
use bondval_engine::{value, BatchValuator};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_test_record(id: usize) -> BondRecord {
    let rates = ["2.5%", "3.10%", "Inflation+0.92%", "4.75%", "Inflation-0.50%"];
    let kinds = [
        InstrumentType::Standard,
        InstrumentType::InflationLinked,
        InstrumentType::ZeroCoupon,
    ];

    let rate = RateSpec::parse(rates[id % rates.len()]);
    BondRecord::new(format!("BOND_{id:05}"), "Bench Issuer", rate)
        .with_instrument_type(kinds[id % kinds.len()])
        .with_payment_frequency(PaymentFrequency::SemiAnnual)
        .with_face_value(dec!(1000))
        .with_discount_factor(dec!(0.97))
        .with_years_to_maturity(1.0 + (id % 30) as f64 * 0.5)
}

fn create_test_row(id: usize) -> RawRow {
    let ratings = ["AAA", "AA+", "A-", "BBB", "BB-", "CCC+"];
    let types = ["Bond", "Inflation-Linked", "Zero-Coupon"];
    let frequencies = ["Annual", "Semi-Annual", "Quarterly"];

    [
        ("BondID", format!("BOND_{id:05}")),
        ("Issuer", "Bench Issuer".to_string()),
        ("Rate", format!("{}.{:02}%", 1 + id % 6, id % 100)),
        ("FaceValue", "1000".to_string()),
        ("PaymentFrequency", frequencies[id % frequencies.len()].to_string()),
        ("Rating", ratings[id % ratings.len()].to_string()),
        ("Type", types[id % types.len()].to_string()),
        ("YearsToMaturity", format!("{}.25", id % 30)),
        ("DiscountFactor", "0.98".to_string()),
    ]
    .into_iter()
    .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_single_valuation(c: &mut Criterion) {
    let records: Vec<BondRecord> = (0..3).map(create_test_record).collect();

    let mut group = c.benchmark_group("single_valuation");
    for record in &records {
        group.bench_with_input(
            BenchmarkId::from_parameter(record.instrument_type()),
            record,
            |b, record| b.iter(|| value(black_box(record))),
        );
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_valuation");

    for size in [100usize, 1_000, 10_000] {
        let rows: Vec<RawRow> = (0..size).map(create_test_row).collect();
        group.throughput(Throughput::Elements(size as u64));

        let sequential = BatchValuator::new();
        group.bench_with_input(BenchmarkId::new("sequential", size), &rows, |b, rows| {
            b.iter(|| sequential.run(black_box(rows)))
        });

        let parallel = BatchValuator::new().with_parallel(true);
        group.bench_with_input(BenchmarkId::new("parallel", size), &rows, |b, rows| {
            b.iter(|| parallel.run(black_box(rows)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_valuation, bench_batch);
criterion_main!(benches);
