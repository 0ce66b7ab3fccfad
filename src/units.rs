//! Calendar units and the set of units a difference is measured in.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MONTHS_IN_YEAR: i32 = 12;
pub const DAYS_IN_WEEK: i32 = 7;

/// A single calendar unit, ordered from longest to shortest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Year,
    Month,
    Week,
    Day,
}

impl Unit {
    /// Units in decomposition order.
    pub const ALL: [Unit; 4] = [Unit::Year, Unit::Month, Unit::Week, Unit::Day];

    /// Singular English noun for the unit.
    pub fn noun(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
        }
    }

    /// Maps a format verb letter to its unit. Case is not significant here.
    pub fn from_verb(c: char) -> Option<Unit> {
        match c {
            'Y' | 'y' => Some(Unit::Year),
            'M' | 'm' => Some(Unit::Month),
            'W' | 'w' => Some(Unit::Week),
            'D' | 'd' => Some(Unit::Day),
            _ => None,
        }
    }

    /// Uppercase verb letter, as used in canonical templates.
    pub fn verb(self) -> char {
        match self {
            Unit::Year => 'Y',
            Unit::Month => 'M',
            Unit::Week => 'W',
            Unit::Day => 'D',
        }
    }

    /// `"1 year"`, `"0 years"`, `"3 years"`.
    pub fn counted(self, n: u32) -> String {
        let suffix = if n == 1 { "" } else { "s" };
        format!("{n} {}{suffix}", self.noun())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

bitflags! {
    /// Units selected for a difference. Bit values are stable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct UnitSet: u8 {
        const YEARS = 0x80;
        const MONTHS = 0x40;
        const WEEKS = 0x20;
        const DAYS = 0x10;
    }
}

impl UnitSet {
    /// Years, months, weeks and days.
    pub const ALL: UnitSet = UnitSet::all();

    pub fn has(self, unit: Unit) -> bool {
        self.contains(UnitSet::from(unit))
    }

    /// Selected units, longest first.
    pub fn units(self) -> impl Iterator<Item = Unit> {
        Unit::ALL.into_iter().filter(move |u| self.has(*u))
    }

    /// Template rendering every selected unit as a counted noun, e.g. `"%Y %M %D"`.
    pub fn canonical_template(self) -> String {
        self.units()
            .map(|u| format!("%{}", u.verb()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Unit> for UnitSet {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Year => UnitSet::YEARS,
            Unit::Month => UnitSet::MONTHS,
            Unit::Week => UnitSet::WEEKS,
            Unit::Day => UnitSet::DAYS,
        }
    }
}

impl FromIterator<Unit> for UnitSet {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        iter.into_iter()
            .fold(UnitSet::empty(), |set, u| set | UnitSet::from(u))
    }
}
