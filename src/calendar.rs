//! Calendar arithmetic over chrono types.
//!
//! Chrono's own `Months` arithmetic clamps to the last day of the month
//! (Jan 31 + 1 month = Feb 28). Differences are measured with overflowing
//! days rolled forward instead, so that adding N months and then comparing
//! against the end date never lands on a day that was not actually reached:
//!   • Jan 31 + 1 month = Mar 3 (Mar 2 in a leap year)
//!   • Feb 29 + 1 year  = Mar 1
//!
//! Time of day is carried through unchanged.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Utc};

use crate::units::MONTHS_IN_YEAR;

/// A point on the calendar that can be shifted by whole years, months and days.
///
/// Every shift returns `None` when the result would leave the representable range.
pub trait CalendarDate: Copy + Ord {
    /// Proleptic Gregorian year.
    fn calendar_year(&self) -> i32;

    fn add_months(self, months: i32) -> Option<Self>;

    fn add_days(self, days: i64) -> Option<Self>;

    fn add_years(self, years: i32) -> Option<Self> {
        self.add_months(years.checked_mul(MONTHS_IN_YEAR)?)
    }
}

/// Shifts by `months`, rolling any day past the end of the target month into the next one.
fn roll_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let total = date
        .year()
        .checked_mul(MONTHS_IN_YEAR)?
        .checked_add(date.month0() as i32)?
        .checked_add(months)?;
    let year = total.div_euclid(MONTHS_IN_YEAR);
    let month0 = total.rem_euclid(MONTHS_IN_YEAR) as u32;

    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
    first.checked_add_days(Days::new(u64::from(date.day0())))
}

fn roll_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

impl CalendarDate for NaiveDate {
    fn calendar_year(&self) -> i32 {
        self.year()
    }

    fn add_months(self, months: i32) -> Option<Self> {
        roll_months(self, months)
    }

    fn add_days(self, days: i64) -> Option<Self> {
        roll_days(self, days)
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_year(&self) -> i32 {
        self.year()
    }

    fn add_months(self, months: i32) -> Option<Self> {
        Some(roll_months(self.date(), months)?.and_time(self.time()))
    }

    fn add_days(self, days: i64) -> Option<Self> {
        Some(roll_days(self.date(), days)?.and_time(self.time()))
    }
}

impl CalendarDate for DateTime<Utc> {
    fn calendar_year(&self) -> i32 {
        self.year()
    }

    fn add_months(self, months: i32) -> Option<Self> {
        Some(self.naive_utc().add_months(months)?.and_utc())
    }

    fn add_days(self, days: i64) -> Option<Self> {
        Some(self.naive_utc().add_days(days)?.and_utc())
    }
}
