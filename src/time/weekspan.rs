use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WeekSpanError {
    #[error("Start Date is missing!")]
    MissingStartDate,
    #[error("End Date is missing!")]
    MissingEndDate,
    #[error("Start Date cannot be after End Date!")]
    StartAfterEnd,
}

/// Number of complete weeks, and up to 6 leftover days of an incomplete week,
/// between two dates. Built by [`weeks_between`]; the total day span is
/// computed once at construction and cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekSpan {
    weeks: i64,
    extra_days: i64,
    total_days: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl WeekSpan {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        weeks: i64,
        extra_days: i64,
    ) -> WeekSpan {
        WeekSpan {
            weeks,
            extra_days,
            total_days: weeks * 7 + extra_days,
            start_date,
            end_date,
        }
    }

    pub fn weeks(&self) -> i64 {
        self.weeks
    }

    /// Leftover days of the trailing incomplete week, between 0 and 6.
    pub fn extra_days(&self) -> i64 {
        self.extra_days
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// The whole span as total days, equal to `weeks * 7 + extra_days`.
    pub fn as_days(&self) -> i64 {
        self.total_days
    }
}

impl fmt::Display for WeekSpan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Between {} and {} are {} weeks and {} extra days.",
            self.start_date, self.end_date, self.weeks, self.extra_days
        )
    }
}

/// Computes the number of complete weeks between two dates, with possibly an
/// extra 1-6 days for an incomplete week.
///
/// Both dates must be given and `start_date` must not be after `end_date`;
/// equal dates yield a zero span. The day difference is calendar-aware, so
/// month lengths and leap days are handled across multi-year spans.
pub fn weeks_between(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<WeekSpan, WeekSpanError> {
    let start_date = start_date.ok_or(WeekSpanError::MissingStartDate)?;
    let end_date = end_date.ok_or(WeekSpanError::MissingEndDate)?;
    if start_date > end_date {
        return Err(WeekSpanError::StartAfterEnd);
    }
    let total_days = (end_date - start_date).num_days();
    Ok(WeekSpan::new(start_date, end_date, total_days / 7, total_days % 7))
}
