use std::fmt;

use log::debug;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::calendar::CalendarDate;
use crate::decompose::{Counts, decompose};
use crate::error::{DiffError, Result};
use crate::format::{FormatSpec, Zeros};
use crate::units::{Unit, UnitSet};

/// Difference between two dates in whole years, months, weeks and days.
///
/// Only the units selected at construction are measured; the rest read 0.
/// Two diffs are equal when their counts are, whatever format built them.
#[derive(Debug, Clone)]
pub struct Diff {
    counts: Counts,
    units: UnitSet,
    spec: FormatSpec,
    // false when `spec` is the canonical template of `units`
    from_format: bool,
}

impl Diff {
    /// Measures `start..=end` in the units named by the verbs of `format`.
    ///
    /// ```
    /// use calendiff::Diff;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2000, 4, 17).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2003, 3, 16).unwrap();
    ///
    /// assert_eq!(Diff::new(start, end, "%Y")?.to_string(), "2 years");
    /// assert_eq!(Diff::new(start, end, "%M")?.to_string(), "34 months");
    /// assert_eq!(Diff::new(start, end, "%Y %M")?.to_string(), "2 years 10 months");
    /// # Ok::<(), calendiff::DiffError>(())
    /// ```
    pub fn new<D: CalendarDate>(start: D, end: D, format: &str) -> Result<Diff> {
        if start > end {
            return Err(DiffError::StartAfterEnd);
        }

        let spec = FormatSpec::parse(format).inspect_err(|err| debug!("rejected format: {err}"))?;
        let units = spec.units();

        Ok(Diff {
            counts: decompose(start, end, units),
            units,
            spec,
            from_format: true,
        })
    }

    /// Measures `start..=end` in `units`.
    ///
    /// Without a format string, rendering falls back to every selected unit as
    /// a counted noun, longest first.
    ///
    /// ```
    /// use calendiff::{Diff, UnitSet};
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2000, 4, 17).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2003, 3, 16).unwrap();
    ///
    /// let diff = Diff::with_units(start, end, UnitSet::YEARS | UnitSet::MONTHS)?;
    /// assert_eq!(diff.to_string(), "2 years 10 months");
    /// # Ok::<(), calendiff::DiffError>(())
    /// ```
    pub fn with_units<D: CalendarDate>(start: D, end: D, units: UnitSet) -> Result<Diff> {
        if start > end {
            return Err(DiffError::StartAfterEnd);
        }

        // An empty set has no verbs, so this is also where it gets rejected.
        let spec = FormatSpec::parse(&units.canonical_template())?;

        Ok(Diff {
            counts: decompose(start, end, units),
            units,
            spec,
            from_format: false,
        })
    }

    pub fn years(&self) -> u32 {
        self.counts.years
    }

    pub fn months(&self) -> u32 {
        self.counts.months
    }

    pub fn weeks(&self) -> u32 {
        self.counts.weeks
    }

    pub fn days(&self) -> u32 {
        self.counts.days
    }

    pub fn get(&self, unit: Unit) -> u32 {
        self.counts.get(unit)
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    /// Units this difference was measured in.
    pub fn units(&self) -> UnitSet {
        self.units
    }

    /// Format string given at construction, if any.
    pub fn template(&self) -> Option<&str> {
        self.from_format.then(|| self.spec.as_str())
    }

    /// True when all four counts match.
    pub fn equal(&self, other: &Diff) -> bool {
        self.counts == other.counts
    }

    /// Renders with `format`, dropping units that are zero.
    ///
    /// ```
    /// use calendiff::Diff;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2000, 10, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2010, 11, 30).unwrap();
    ///
    /// let diff = Diff::new(start, end, "%Y %M %D")?;
    /// assert_eq!(diff.format("%y anos")?, "10 anos");
    /// # Ok::<(), calendiff::DiffError>(())
    /// ```
    pub fn format(&self, format: &str) -> Result<String> {
        Ok(FormatSpec::parse(format)?.render(&self.counts, Zeros::Elide))
    }

    /// Renders with `format`, keeping units that are zero.
    pub fn format_with_zeros(&self, format: &str) -> Result<String> {
        Ok(FormatSpec::parse(format)?.render(&self.counts, Zeros::Keep))
    }

    /// Default rendering with zero units kept.
    pub fn to_string_with_zeros(&self) -> String {
        self.spec.render(&self.counts, Zeros::Keep)
    }
}

impl PartialEq for Diff {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for Diff {}

/// Default rendering with zero units dropped.
impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.spec.render(&self.counts, Zeros::Elide))
    }
}

impl Serialize for Diff {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Diff", 6)?;
        state.serialize_field("years", &self.counts.years)?;
        state.serialize_field("months", &self.counts.months)?;
        state.serialize_field("weeks", &self.counts.weeks)?;
        state.serialize_field("days", &self.counts.days)?;
        state.serialize_field("units", &self.units)?;
        state.serialize_field("template", &self.template())?;
        state.end()
    }
}
