use cashflow_core::ledger::{PriceModel, TimeRecord};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Two years of quarterly bookings used by the broader window tests.
pub static TWO_YEAR_LEDGER: Lazy<Vec<TimeRecord>> = Lazy::new(|| {
    vec![
        record(2022, 7, 1, PriceModel::HourlyRate, 90.0, 30.0, 60.0),
        record(2022, 11, 20, PriceModel::FixedPrice, 120.0, 50.0, 70.0),
        record(2023, 3, 14, PriceModel::HourlyRate, 200.0, 80.0, 120.0),
        record(2023, 9, 2, PriceModel::Other, 75.0, 25.0, 50.0),
        record(2024, 5, 30, PriceModel::FixedPrice, 310.0, 110.0, 200.0),
    ]
});

pub fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record(
    y: i32,
    m: u32,
    d: u32,
    model: PriceModel,
    fee: f64,
    cost: f64,
    profit: f64,
) -> TimeRecord {
    TimeRecord::new(Some(sample_date(y, m, d)), model).with_amounts(fee, cost, profit)
}

pub fn undated_record(model: PriceModel, fee: f64, cost: f64, profit: f64) -> TimeRecord {
    TimeRecord::new(None, model).with_amounts(fee, cost, profit)
}
