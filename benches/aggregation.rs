use cashflow_core::cashflow::CashflowService;
use cashflow_core::ledger::{PeriodSelection, PriceModel, TimeRecord};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_sample_ledger(record_count: usize) -> Vec<TimeRecord> {
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..record_count)
        .map(|idx| {
            let date = start_date + Duration::days((idx % 365) as i64);
            let model = match idx % 3 {
                0 => PriceModel::HourlyRate,
                1 => PriceModel::FixedPrice,
                _ => PriceModel::Other,
            };
            let fee = 50.0 + (idx % 100) as f64;
            TimeRecord::new(Some(date), model)
                .with_amounts(fee, fee * 0.4, fee * 0.6)
                .with_project(format!("Project {}", idx % 25))
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let records = build_sample_ledger(black_box(10_000));

    c.bench_function("analyze_quarter_10k", |b| {
        b.iter(|| {
            CashflowService::analyze(&records, PeriodSelection::Months(3)).expect("analyze")
        })
    });

    c.bench_function("analyze_all_time_10k", |b| {
        b.iter(|| CashflowService::analyze(&records, PeriodSelection::All).expect("analyze"))
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
