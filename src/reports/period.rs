//! Calendar windows offered by the reports menu

use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::filter::DateRange;
use crate::error::{LedgerError, LedgerResult};

/// A report window relative to "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// First of this month through today
    MonthToDate,
    /// The whole of last month
    PreviousMonth,
    /// January 1 through today
    YearToDate,
    /// The whole of last year
    PreviousYear,
}

impl ReportPeriod {
    /// Table title for this report
    pub fn title(&self) -> &'static str {
        match self {
            Self::MonthToDate => "Month To Date",
            Self::PreviousMonth => "Previous Month",
            Self::YearToDate => "Year To Date",
            Self::PreviousYear => "Previous Year",
        }
    }

    /// Inclusive date window of this period as seen from `today`
    pub fn range(&self, today: NaiveDate) -> LedgerResult<DateRange> {
        let first_of_month = today.with_day(1).ok_or_else(|| out_of_range(today))?;

        match self {
            Self::MonthToDate => Ok(DateRange::new(first_of_month, today)),
            Self::PreviousMonth => {
                let end = first_of_month
                    .pred_opt()
                    .ok_or_else(|| out_of_range(today))?;
                let start = end.with_day(1).ok_or_else(|| out_of_range(today))?;
                Ok(DateRange::new(start, end))
            }
            Self::YearToDate => Ok(DateRange::new(year_start(today.year(), today)?, today)),
            Self::PreviousYear => {
                let year = today.year() - 1;
                let end = NaiveDate::from_ymd_opt(year, 12, 31)
                    .ok_or_else(|| out_of_range(today))?;
                Ok(DateRange::new(year_start(year, today)?, end))
            }
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

fn year_start(year: i32, today: NaiveDate) -> LedgerResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| out_of_range(today))
}

fn out_of_range(today: NaiveDate) -> LedgerError {
    LedgerError::Validation(format!("no report window for {}", today))
}
