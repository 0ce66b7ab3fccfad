//! decompose.rs
//!
//! Splits the span between two dates into whole years, months, weeks and days.
//!
//! Units are measured longest first. Each measured unit advances a cursor so
//! the next one only sees the remainder:
//!   • years:  calendar year difference, minus one if that overshoots the end
//!   • months: whole months after the years (see below)
//!   • weeks:  whole 7-day steps after the months
//!   • days:   whole days after the weeks
//!
//! A step landing exactly on the end date counts as a completed unit.
//!
//! When months are selected without years, the skipped years still count
//! towards months, so "%M" over three years reads 36 months rather than 0.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::units::{DAYS_IN_WEEK, MONTHS_IN_YEAR, Unit, UnitSet};

/// Whole unit counts between two dates. Unselected units are always 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
}

impl Counts {
    pub fn get(&self, unit: Unit) -> u32 {
        match unit {
            Unit::Year => self.years,
            Unit::Month => self.months,
            Unit::Week => self.weeks,
            Unit::Day => self.days,
        }
    }
}

/// Measures `start..=end` in the units of `units`.
///
/// Callers guarantee `start <= end`.
pub fn decompose<D: CalendarDate>(start: D, end: D, units: UnitSet) -> Counts {
    let mut counts = Counts::default();
    let mut cursor = start;

    if units.has(Unit::Year) {
        let (years, shifted) = full_years(cursor, end);
        counts.years = years as u32;
        cursor = shifted;
    }

    if units.has(Unit::Month) {
        // Jump close to the end first so the month loop stays short.
        let (years, base) = if units.has(Unit::Year) {
            (0, cursor)
        } else {
            full_years(cursor, end)
        };
        let months = years * MONTHS_IN_YEAR + count_steps(end, |n| base.add_months(n));
        counts.months = months as u32;
        cursor = cursor.add_months(months).unwrap_or(end);
    }

    if units.has(Unit::Week) {
        let weeks = count_steps(end, |n| cursor.add_days(i64::from(n * DAYS_IN_WEEK)));
        counts.weeks = weeks as u32;
        cursor = cursor
            .add_days(i64::from(weeks * DAYS_IN_WEEK))
            .unwrap_or(end);
    }

    if units.has(Unit::Day) {
        counts.days = count_steps(end, |n| cursor.add_days(i64::from(n))) as u32;
    }

    trace!("decomposed {units:?} into {counts:?}");
    counts
}

/// Whole years from `start` to `end`, with `start` shifted by that many years.
fn full_years<D: CalendarDate>(start: D, end: D) -> (i32, D) {
    let years = end.calendar_year() - start.calendar_year();

    [years, years - 1]
        .into_iter()
        .find_map(|y| {
            start
                .add_years(y)
                .filter(|shifted| *shifted <= end)
                .map(|shifted| (y, shifted))
        })
        .unwrap_or((0, start))
}

/// Number of consecutive steps `1, 2, ...` whose target is still `<= end`.
fn count_steps<D: CalendarDate>(end: D, step: impl Fn(i32) -> Option<D>) -> i32 {
    let mut n = 0;
    while step(n + 1).is_some_and(|d| d <= end) {
        n += 1;
    }
    n
}
