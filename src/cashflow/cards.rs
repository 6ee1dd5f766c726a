//! Comparison-card input: one card per headline metric, with the preceding
//! side reported as absent (never zero) when no comparison data exists.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::comparison::{compare, Trend};
use super::service::CashflowReport;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MetricKind {
    Income,
    Cost,
    Profit,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MetricKind::Income => "Income",
            MetricKind::Cost => "Cost",
            MetricKind::Profit => "Profit",
        };
        f.write_str(label)
    }
}

/// One comparison card. `preceding`, `delta`, `pct_change`, and `trend` are
/// absent whenever the report has no preceding data, so consumers render
/// "N/A" instead of a misleading zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricCard {
    pub kind: MetricKind,
    pub current_label: String,
    pub preceding_label: Option<String>,
    pub current: f64,
    pub preceding: Option<f64>,
    pub delta: Option<f64>,
    pub pct_change: Option<f64>,
    pub trend: Option<Trend>,
    /// A growing cost is a regression; rendering flips the delta coloring.
    pub inverted_delta: bool,
}

/// Builds the three headline cards (income, cost, profit) from a report.
pub fn metric_cards(report: &CashflowReport) -> Vec<MetricCard> {
    let current_label = report
        .current_period
        .map(|period| period.label())
        .unwrap_or_default();
    let preceding_label = report.preceding_period.map(|window| window.label());

    [
        (MetricKind::Income, report.current.total_income, false),
        (MetricKind::Cost, report.current.total_cost, true),
        (MetricKind::Profit, report.current.total_profit, false),
    ]
    .into_iter()
    .map(|(kind, current, inverted_delta)| {
        let comparison = report.preceding.filter(|_| report.has_preceding).map(
            |preceding_metrics| {
                let preceding = match kind {
                    MetricKind::Income => preceding_metrics.total_income,
                    MetricKind::Cost => preceding_metrics.total_cost,
                    MetricKind::Profit => preceding_metrics.total_profit,
                };
                compare(current, preceding)
            },
        );
        MetricCard {
            kind,
            current_label: current_label.clone(),
            preceding_label: preceding_label.clone(),
            current,
            preceding: comparison.map(|cmp| cmp.preceding),
            delta: comparison.map(|cmp| cmp.delta),
            pct_change: comparison.map(|cmp| cmp.pct_change),
            trend: comparison.map(|cmp| cmp.trend),
            inverted_delta,
        }
    })
    .collect()
}
