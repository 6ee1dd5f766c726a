//! Facade combining the period selector and the metrics aggregator into a
//! single report for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::ledger::{select_windows, DateWindow, Period, PeriodSelection, TimeRecord};

use super::metrics::{calculate_metrics, CashflowMetrics};

/// Complete cashflow summary for a selection, ready for diagram and card
/// rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashflowReport {
    pub selection: PeriodSelection,
    /// Absent only when the record table was empty.
    pub current_period: Option<Period>,
    pub current: CashflowMetrics,
    /// Bounded comparison window; absent for the all-time selection and for
    /// an empty table.
    pub preceding_period: Option<DateWindow>,
    /// Totals over the preceding window; present (possibly all zero)
    /// whenever the window itself exists.
    pub preceding: Option<CashflowMetrics>,
    /// True iff the preceding window holds at least one record. When false,
    /// consumers must render the preceding side as "N/A"; its zeros are
    /// absence rather than measurements.
    pub has_preceding: bool,
    /// Data-quality notes surfaced to downstream consumers.
    pub disclosures: Vec<String>,
}

/// Stateless cashflow computations over borrowed record tables.
pub struct CashflowService;

impl CashflowService {
    /// Computes the report for a selection. Recomputes from the full table
    /// on every call; the caller's collection is never mutated.
    pub fn analyze(records: &[TimeRecord], selection: PeriodSelection) -> Result<CashflowReport> {
        let windows = select_windows(records, selection)?;
        let mut disclosures = Vec::new();

        let undated = records
            .iter()
            .filter(|record| record.record_date.is_none())
            .count();

        let current = match windows.current {
            Some(period) => {
                if undated > 0 && !matches!(period, Period::AllTime) {
                    disclosures.push(format!(
                        "{} record(s) without a parseable date were excluded from period windows",
                        undated
                    ));
                }
                calculate_metrics(
                    records
                        .iter()
                        .filter(|record| period.contains(record.record_date)),
                )
            }
            None => CashflowMetrics::default(),
        };

        let preceding = windows.preceding.map(|window| {
            if let Some(earliest) = records.iter().filter_map(|r| r.record_date).min() {
                if window.start < earliest {
                    disclosures.push(format!(
                        "comparison window begins {} but data only starts {}",
                        window.start, earliest
                    ));
                }
            }
            calculate_metrics(
                records
                    .iter()
                    .filter(|record| record.record_date.map(|d| window.contains(d)).unwrap_or(false)),
            )
        });

        tracing::debug!(
            %selection,
            record_count = records.len(),
            undated,
            has_preceding = windows.has_preceding,
            "computed cashflow report"
        );

        Ok(CashflowReport {
            selection,
            current_period: windows.current,
            current,
            preceding_period: windows.preceding,
            preceding,
            has_preceding: windows.has_preceding,
            disclosures,
        })
    }
}
