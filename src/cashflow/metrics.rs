//! Reduction of a record subset into the five cashflow totals.

use serde::{Deserialize, Serialize};

use crate::ledger::{PriceModel, TimeRecord};

/// Aggregated totals for one period. All fields are exactly zero for an
/// empty subset.
///
/// `hourly_fees + fixed_fees` only equals `total_income` when every record
/// carries one of the two recognized pricing models; records with any other
/// category contribute to `total_income` but to neither bucket.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CashflowMetrics {
    pub total_income: f64,
    pub total_cost: f64,
    pub total_profit: f64,
    pub hourly_fees: f64,
    pub fixed_fees: f64,
}

/// Reduces a record subset into its cashflow totals. Pure fold over the
/// borrowed records; missing amounts count as zero.
pub fn calculate_metrics<'a, I>(records: I) -> CashflowMetrics
where
    I: IntoIterator<Item = &'a TimeRecord>,
{
    let mut acc = Accumulator::default();
    for record in records {
        acc.add(record);
    }
    acc.finish()
}

#[derive(Default)]
struct Accumulator {
    income: f64,
    cost: f64,
    profit: f64,
    hourly: f64,
    fixed: f64,
}

impl Accumulator {
    fn add(&mut self, record: &TimeRecord) {
        let fee = record.fee.unwrap_or_default();
        self.income += fee;
        self.cost += record.cost.unwrap_or_default();
        self.profit += record.profit.unwrap_or_default();
        match record.price_model {
            PriceModel::HourlyRate => self.hourly += fee,
            PriceModel::FixedPrice => self.fixed += fee,
            PriceModel::Other => {}
        }
    }

    fn finish(self) -> CashflowMetrics {
        CashflowMetrics {
            total_income: self.income,
            total_cost: self.cost,
            total_profit: self.profit,
            hourly_fees: self.hourly,
            fixed_fees: self.fixed,
        }
    }
}
