//! Period windowing: date windows, period selection keys, and the
//! current-vs-preceding window derivation used for trend comparison.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CashflowError, Result};

use super::dates::{month_abbrev, shift_months};
use super::record::TimeRecord;

/// Half-open reporting window: contains `date` iff `start <= date < end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(CashflowError::InvalidWindow(format!(
                "window end {} must be after start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Card-header label covering the window's month span, e.g.
    /// `"DEC 2023 - JAN 2024"`. The end month is taken from the last day
    /// inside the half-open range.
    pub fn label(&self) -> String {
        let last = self.end.pred_opt().unwrap_or(self.end);
        format!(
            "{} {} - {} {}",
            month_abbrev(self.start.month()).to_uppercase(),
            self.start.year(),
            month_abbrev(last.month()).to_uppercase(),
            last.year()
        )
    }
}

/// Aggregation period: a bounded window or the all-time sentinel.
///
/// A bounded window never matches a record without a parseable date;
/// `AllTime` matches every record, dated or not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Period {
    Window(DateWindow),
    AllTime,
}

impl Period {
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        match self {
            Period::AllTime => true,
            Period::Window(window) => date.map(|d| window.contains(d)).unwrap_or(false),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Period::AllTime => "ALL TIME".to_string(),
            Period::Window(window) => window.label(),
        }
    }
}

/// Period selector value as chosen in the UI.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PeriodSelection {
    /// Trailing window of whole calendar months (1, 3, 6, or 12).
    Months(u32),
    All,
}

impl PeriodSelection {
    /// Parses the selector keys exposed by the period picker.
    pub fn parse(key: &str) -> Result<Self> {
        match key.trim().to_ascii_uppercase().as_str() {
            "1M" => Ok(PeriodSelection::Months(1)),
            "3M" => Ok(PeriodSelection::Months(3)),
            "6M" => Ok(PeriodSelection::Months(6)),
            "12M" | "1Y" => Ok(PeriodSelection::Months(12)),
            "ALL" => Ok(PeriodSelection::All),
            other => Err(CashflowError::InvalidPeriod(other.to_string())),
        }
    }

    pub fn months(&self) -> Option<u32> {
        match self {
            PeriodSelection::Months(m) => Some(*m),
            PeriodSelection::All => None,
        }
    }
}

impl fmt::Display for PeriodSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodSelection::Months(12) => f.write_str("1Y"),
            PeriodSelection::Months(m) => write!(f, "{}M", m),
            PeriodSelection::All => f.write_str("All"),
        }
    }
}

/// The pair of windows derived for a selection: the current period and, for
/// month-based selections, the adjacent preceding period of equal length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodWindows {
    pub current: Option<Period>,
    pub preceding: Option<DateWindow>,
    /// True iff at least one record falls inside the preceding window.
    pub has_preceding: bool,
}

impl PeriodWindows {
    /// Windows for an empty record table: nothing to report on either side.
    pub fn empty() -> Self {
        Self {
            current: None,
            preceding: None,
            has_preceding: false,
        }
    }
}

/// Derives the current and preceding windows for a selection, anchored at
/// the maximum record date.
///
/// The current window for `Months(m)` spans `[max_date - m months,
/// max_date]` inclusive; the preceding window covers the `m` months directly
/// before it, half-open at the current start so the two never overlap.
/// `All` reports a single all-time period and never a preceding one, even
/// when earlier data exists.
///
/// An empty table yields [`PeriodWindows::empty`]. A non-empty table where
/// no record has a parseable date has no usable reference point and fails
/// with [`CashflowError::UndatedData`].
pub fn select_windows(records: &[TimeRecord], selection: PeriodSelection) -> Result<PeriodWindows> {
    if records.is_empty() {
        return Ok(PeriodWindows::empty());
    }

    let max_date = records
        .iter()
        .filter_map(|record| record.record_date)
        .max()
        .ok_or_else(|| {
            CashflowError::UndatedData(format!(
                "none of the {} records has a parseable record date",
                records.len()
            ))
        })?;

    match selection {
        PeriodSelection::All => {
            tracing::debug!(%max_date, "selected all-time period");
            Ok(PeriodWindows {
                current: Some(Period::AllTime),
                preceding: None,
                has_preceding: false,
            })
        }
        PeriodSelection::Months(0) => Err(CashflowError::InvalidPeriod(
            "month count must be at least 1".to_string(),
        )),
        PeriodSelection::Months(months) => {
            let current_start = shift_months(max_date, -(months as i32));
            let current_end = max_date.succ_opt().unwrap_or(NaiveDate::MAX);
            let current = DateWindow::new(current_start, current_end)?;
            let preceding_start = shift_months(current_start, -(months as i32));
            let preceding = DateWindow::new(preceding_start, current_start)?;
            let has_preceding = records
                .iter()
                .filter_map(|record| record.record_date)
                .any(|date| preceding.contains(date));
            tracing::debug!(
                months,
                current_start = %current.start,
                current_end = %current.end,
                preceding_start = %preceding.start,
                has_preceding,
                "selected trailing month windows"
            );
            Ok(PeriodWindows {
                current: Some(Period::Window(current)),
                preceding: Some(preceding),
                has_preceding,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::record::PriceModel;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dated_record(y: i32, m: u32, d: u32) -> TimeRecord {
        TimeRecord::new(Some(date(y, m, d)), PriceModel::HourlyRate)
    }

    #[test]
    fn rejects_inverted_windows() {
        assert!(DateWindow::new(date(2024, 2, 1), date(2024, 1, 1)).is_err());
        assert!(DateWindow::new(date(2024, 1, 1), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn window_membership_is_half_open() {
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 2, 1)).unwrap();
        assert!(window.contains(date(2024, 1, 1)));
        assert!(window.contains(date(2024, 1, 31)));
        assert!(!window.contains(date(2024, 2, 1)));
        assert!(!window.contains(date(2023, 12, 31)));
    }

    #[test]
    fn parses_selector_keys() {
        assert_eq!(PeriodSelection::parse("1M").unwrap(), PeriodSelection::Months(1));
        assert_eq!(PeriodSelection::parse("3m").unwrap(), PeriodSelection::Months(3));
        assert_eq!(PeriodSelection::parse("1Y").unwrap(), PeriodSelection::Months(12));
        assert_eq!(PeriodSelection::parse("12M").unwrap(), PeriodSelection::Months(12));
        assert_eq!(PeriodSelection::parse(" all ").unwrap(), PeriodSelection::All);
        assert!(PeriodSelection::parse("YTD").is_err());
        assert!(PeriodSelection::parse("").is_err());
    }

    #[test]
    fn empty_table_yields_empty_windows() {
        let windows = select_windows(&[], PeriodSelection::Months(3)).unwrap();
        assert_eq!(windows, PeriodWindows::empty());
    }

    #[test]
    fn undated_table_fails_fast() {
        let records = vec![
            TimeRecord::new(None, PriceModel::Other),
            TimeRecord::new(None, PriceModel::FixedPrice),
        ];
        let err = select_windows(&records, PeriodSelection::Months(1)).unwrap_err();
        assert!(matches!(err, CashflowError::UndatedData(_)));
        let err = select_windows(&records, PeriodSelection::All).unwrap_err();
        assert!(matches!(err, CashflowError::UndatedData(_)));
    }

    #[test]
    fn zero_month_selection_is_invalid() {
        let records = vec![dated_record(2024, 1, 15)];
        let err = select_windows(&records, PeriodSelection::Months(0)).unwrap_err();
        assert!(matches!(err, CashflowError::InvalidPeriod(_)));
    }

    #[test]
    fn trailing_window_is_anchored_at_max_date() {
        let records = vec![dated_record(2024, 1, 10), dated_record(2024, 1, 15)];
        let windows = select_windows(&records, PeriodSelection::Months(1)).unwrap();
        let current = match windows.current {
            Some(Period::Window(window)) => window,
            other => panic!("expected bounded window, got {:?}", other),
        };
        assert_eq!(current.start, date(2023, 12, 15));
        assert_eq!(current.end, date(2024, 1, 16));
        let preceding = windows.preceding.unwrap();
        assert_eq!(preceding.start, date(2023, 11, 15));
        assert_eq!(preceding.end, date(2023, 12, 15));
        assert!(!windows.has_preceding);
    }

    #[test]
    fn preceding_presence_tracks_data() {
        let records = vec![dated_record(2024, 6, 30), dated_record(2024, 2, 15)];
        let windows = select_windows(&records, PeriodSelection::Months(3)).unwrap();
        assert!(windows.has_preceding);
    }

    #[test]
    fn all_selection_never_reports_preceding() {
        let records = vec![dated_record(2020, 1, 1), dated_record(2024, 12, 31)];
        let windows = select_windows(&records, PeriodSelection::All).unwrap();
        assert_eq!(windows.current, Some(Period::AllTime));
        assert_eq!(windows.preceding, None);
        assert!(!windows.has_preceding);
    }

    #[test]
    fn all_time_contains_undated_records() {
        assert!(Period::AllTime.contains(None));
        let window = DateWindow::new(date(2024, 1, 1), date(2024, 2, 1)).unwrap();
        assert!(!Period::Window(window).contains(None));
    }

    #[test]
    fn month_end_anchor_clamps_both_windows() {
        let records = vec![dated_record(2024, 3, 31)];
        let windows = select_windows(&records, PeriodSelection::Months(1)).unwrap();
        let current = match windows.current {
            Some(Period::Window(window)) => window,
            other => panic!("expected bounded window, got {:?}", other),
        };
        assert_eq!(current.start, date(2024, 2, 29));
        let preceding = windows.preceding.unwrap();
        assert_eq!(preceding.start, date(2024, 1, 29));
        assert_eq!(preceding.end, date(2024, 2, 29));
    }

    #[test]
    fn window_labels_cover_month_span() {
        let window = DateWindow::new(date(2023, 12, 15), date(2024, 1, 16)).unwrap();
        assert_eq!(window.label(), "DEC 2023 - JAN 2024");
        assert_eq!(Period::AllTime.label(), "ALL TIME");
    }

    #[test]
    fn selection_display_matches_picker_keys() {
        assert_eq!(PeriodSelection::Months(1).to_string(), "1M");
        assert_eq!(PeriodSelection::Months(12).to_string(), "1Y");
        assert_eq!(PeriodSelection::All.to_string(), "All");
    }
}
