//! Record model and period windowing for the billing ledger.

pub mod dates;
pub mod period;
pub mod record;

pub use dates::{days_in_month, parse_record_date, shift_months};
pub use period::{select_windows, DateWindow, Period, PeriodSelection, PeriodWindows};
pub use record::{PriceModel, TimeRecord};
