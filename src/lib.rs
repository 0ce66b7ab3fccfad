//! Calendar differences between two dates, in whole years, months, weeks and
//! days, rendered through small `%Y %M %W %D` format strings.
//!
//! ```
//! use calendiff::Diff;
//! use chrono::NaiveDate;
//!
//! let start = NaiveDate::from_ymd_opt(2000, 10, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2010, 10, 30).unwrap();
//!
//! let diff = Diff::new(start, end, "%Y %M %D")?;
//! assert_eq!(diff.to_string(), "10 years 29 days");
//! assert_eq!(diff.to_string_with_zeros(), "10 years 0 months 29 days");
//! assert_eq!(diff.format_with_zeros("%y anos %m meses %d dias")?, "10 anos 0 meses 29 dias");
//! # Ok::<(), calendiff::DiffError>(())
//! ```

pub mod calendar;
pub mod decompose;
pub mod diff;
pub mod error;
pub mod format;
pub mod units;

pub use calendar::CalendarDate;
pub use decompose::{Counts, decompose};
pub use diff::Diff;
pub use error::{DiffError, Result};
pub use format::{FormatSpec, Zeros};
pub use units::{Unit, UnitSet};
