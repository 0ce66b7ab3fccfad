//! Worked date pairs and error cases for the public API.

use calendiff::{Counts, Diff, DiffError, Unit, UnitSet};
use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

struct Case {
    start: &'static str,
    end: &'static str,
    units: UnitSet,
    format: &'static str,
    counts: [u32; 4],
    print: &'static str,
    print_with_zeros: &'static str,
}

const CASES: &[Case] = &[
    Case {
        start: "2000-04-17",
        end: "2003-03-16",
        units: UnitSet::YEARS,
        format: "%Y",
        counts: [2, 0, 0, 0],
        print: "2 years",
        print_with_zeros: "2 years",
    },
    Case {
        start: "2000-04-17",
        end: "2003-03-16",
        units: UnitSet::MONTHS,
        format: "%M",
        counts: [0, 34, 0, 0],
        print: "34 months",
        print_with_zeros: "34 months",
    },
    Case {
        start: "2000-04-17",
        end: "2003-03-16",
        units: UnitSet::DAYS,
        format: "%D",
        counts: [0, 0, 0, 1063],
        print: "1063 days",
        print_with_zeros: "1063 days",
    },
    Case {
        start: "2000-04-17",
        end: "2003-03-16",
        units: UnitSet::WEEKS.union(UnitSet::DAYS),
        format: "%W %D",
        counts: [0, 0, 151, 6],
        print: "151 weeks 6 days",
        print_with_zeros: "151 weeks 6 days",
    },
    Case {
        start: "2000-04-17",
        end: "2003-03-16",
        units: UnitSet::ALL,
        format: "%Y %M %W %D",
        counts: [2, 10, 3, 6],
        print: "2 years 10 months 3 weeks 6 days",
        print_with_zeros: "2 years 10 months 3 weeks 6 days",
    },
    Case {
        start: "2000-10-01",
        end: "2010-11-30",
        units: UnitSet::YEARS.union(UnitSet::MONTHS).union(UnitSet::DAYS),
        format: "%Y %M %D",
        counts: [10, 1, 0, 29],
        print: "10 years 1 month 29 days",
        print_with_zeros: "10 years 1 month 29 days",
    },
    Case {
        start: "2000-10-01",
        end: "2010-10-30",
        units: UnitSet::YEARS.union(UnitSet::MONTHS).union(UnitSet::DAYS),
        format: "%Y %M %D",
        counts: [10, 0, 0, 29],
        print: "10 years 29 days",
        print_with_zeros: "10 years 0 months 29 days",
    },
    Case {
        start: "2019-12-31",
        end: "2020-02-29",
        units: UnitSet::MONTHS.union(UnitSet::DAYS),
        format: "%M %D",
        counts: [0, 1, 0, 29],
        print: "1 month 29 days",
        print_with_zeros: "1 month 29 days",
    },
    Case {
        start: "2000-04-17",
        end: "2003-04-17",
        units: UnitSet::ALL,
        format: "%Y %M %W %D",
        counts: [3, 0, 0, 0],
        print: "3 years",
        print_with_zeros: "3 years 0 months 0 weeks 0 days",
    },
];

fn expected(case: &Case) -> String {
    let [y, m, w, d] = case.counts;
    format!("{y}/{m}/{w}/{d}")
}

fn actual(diff: &Diff) -> String {
    format!("{}/{}/{}/{}", diff.years(), diff.months(), diff.weeks(), diff.days())
}

#[test]
fn test_new_diff_counts() {
    for case in CASES {
        let diff = Diff::new(date(case.start), date(case.end), case.format).unwrap();
        assert_eq!(actual(&diff), expected(case), "{} -> {} {:?}", case.start, case.end, case.format);
        assert_eq!(diff.units(), case.units);
        assert_eq!(diff.template(), Some(case.format));
    }
}

#[test]
fn test_with_units_counts() {
    for case in CASES {
        let diff = Diff::with_units(date(case.start), date(case.end), case.units).unwrap();
        assert_eq!(actual(&diff), expected(case), "{} -> {} {:?}", case.start, case.end, case.units);
        assert_eq!(diff.template(), None);
    }
}

#[test]
fn test_string() {
    for case in CASES {
        let by_format = Diff::new(date(case.start), date(case.end), case.format).unwrap();
        assert_eq!(by_format.to_string(), case.print);

        // Canonical templates match the space separated formats in the table.
        let by_units = Diff::with_units(date(case.start), date(case.end), case.units).unwrap();
        assert_eq!(by_units.to_string(), case.print);
    }
}

#[test]
fn test_string_with_zeros() {
    for case in CASES {
        let by_format = Diff::new(date(case.start), date(case.end), case.format).unwrap();
        assert_eq!(by_format.to_string_with_zeros(), case.print_with_zeros);

        let by_units = Diff::with_units(date(case.start), date(case.end), case.units).unwrap();
        assert_eq!(by_units.to_string_with_zeros(), case.print_with_zeros);
    }
}

#[test]
fn test_custom_unit_names() -> anyhow::Result<()> {
    let diff = Diff::new(date("2000-10-01"), date("2010-10-30"), "%y anos %m meses %d dias")?;
    assert_eq!(diff.to_string_with_zeros(), "10 anos 0 meses 29 dias");
    assert_eq!(diff.to_string(), "10 anos meses 29 dias");
    Ok(())
}

#[test]
fn test_equal_dates_are_zero() -> anyhow::Result<()> {
    let d = date("2012-06-14");
    let diff = Diff::new(d, d, "%Y %M %W %D")?;
    assert_eq!(diff.counts(), Counts::default());
    assert_eq!(diff.to_string(), "");
    assert_eq!(diff.to_string_with_zeros(), "0 years 0 months 0 weeks 0 days");
    Ok(())
}

#[test]
fn test_months_alone_are_a_total() -> anyhow::Result<()> {
    let start = date("2000-04-17");
    let end = start + chrono::Months::new(36);
    let diff = Diff::new(start, end, "%M")?;
    assert_eq!(diff.months(), 36);
    assert_eq!(diff.get(Unit::Year), 0);
    Ok(())
}

#[test]
fn test_new_diff_fails() {
    let now = Utc::now();
    let later = now + Duration::hours(1);

    assert_eq!(Diff::new(later, now, "%D").unwrap_err(), DiffError::StartAfterEnd);
    // Start after end is reported even when the format is also broken.
    assert_eq!(Diff::new(later, now, "%X").unwrap_err(), DiffError::StartAfterEnd);

    let cases = [
        ("%X%L %S", r#"format "%X%L %S" has unknown verb X"#),
        ("   ", "undefined dates difference mode"),
        ("Years and months", "undefined dates difference mode"),
    ];
    for (format, message) in cases {
        let err = Diff::new(now, later, format).unwrap_err();
        assert_eq!(err.to_string(), message, "{format:?}");
    }
}

#[test]
fn test_with_units_fails() {
    let start = date("2000-01-02");
    let end = date("2000-01-01");
    assert_eq!(
        Diff::with_units(start, end, UnitSet::YEARS).unwrap_err(),
        DiffError::StartAfterEnd
    );
    assert_eq!(
        Diff::with_units(end, start, UnitSet::empty()).unwrap_err(),
        DiffError::EmptyUnitSet
    );
}

#[test]
fn test_formats() -> anyhow::Result<()> {
    let start = date("2000-04-17");
    let end = start + chrono::Months::new(36);

    for diff in [
        Diff::new(start, end, "%Y, %M, %W and %D")?,
        Diff::with_units(start, end, UnitSet::ALL)?,
    ] {
        assert_eq!(diff.format("%Y %M")?, "3 years");
        assert_eq!(diff.format_with_zeros("%Y %M")?, "3 years 0 months");
    }
    Ok(())
}

#[test]
fn test_format_with_units_never_computed() -> anyhow::Result<()> {
    let diff = Diff::new(date("2000-10-01"), date("2010-11-30"), "%Y")?;
    assert_eq!(diff.format_with_zeros("%Y %M %D")?, "10 years 0 months 0 days");
    assert_eq!(diff.format("%Y %M %D")?, "10 years");
    Ok(())
}

#[test]
fn test_format_fails() -> anyhow::Result<()> {
    let diff = Diff::new(date("2000-04-17"), date("2003-03-16"), "%Y, %M, %W and %D")?;

    assert!(matches!(
        diff.format("%X%L %S"),
        Err(DiffError::UnknownVerb { verb: 'X', .. })
    ));
    assert_eq!(diff.format("   "), Err(DiffError::EmptyUnitSet));
    assert_eq!(
        diff.format_with_zeros("Years and months"),
        Err(DiffError::EmptyUnitSet)
    );
    Ok(())
}

#[test]
fn test_equal_ignores_format() -> anyhow::Result<()> {
    let d1 = date("2000-10-01");
    let d2 = date("2000-10-30");

    let diff1 = Diff::new(d1, d2, "%Y %M %D")?;
    let diff2 = Diff::new(d1, d2, "%D, %M and %Y")?;
    assert!(diff1.equal(&diff2));
    assert_eq!(diff1, diff2);

    let diff3 = Diff::new(d1, d2 - Duration::days(2), "%Y %M %D")?;
    assert!(!diff1.equal(&diff3));

    let diff4 = Diff::new(d1, d2, "%Y")?;
    assert!(!diff1.equal(&diff4));
    Ok(())
}

#[test]
fn test_time_of_day_matters() -> anyhow::Result<()> {
    let start: NaiveDateTime = date("2000-01-01").and_hms_opt(12, 0, 0).unwrap();
    let end: NaiveDateTime = date("2000-01-08").and_hms_opt(11, 59, 59).unwrap();

    let diff = Diff::new(start, end, "%W %D")?;
    assert_eq!((diff.weeks(), diff.days()), (0, 6));

    let diff = Diff::new(start, end + Duration::seconds(1), "%W %D")?;
    assert_eq!(diff.to_string(), "1 week");
    Ok(())
}

#[test]
fn test_serialize() -> anyhow::Result<()> {
    let diff = Diff::new(date("2000-10-01"), date("2010-11-30"), "%Y %M %D")?;
    let json = serde_json::to_value(&diff)?;

    assert_eq!(json["years"], 10);
    assert_eq!(json["months"], 1);
    assert_eq!(json["weeks"], 0);
    assert_eq!(json["days"], 29);
    assert_eq!(json["template"], "%Y %M %D");

    let units: UnitSet = serde_json::from_value(json["units"].clone())?;
    assert_eq!(units, diff.units());

    let by_units = Diff::with_units(date("2000-10-01"), date("2010-11-30"), UnitSet::YEARS)?;
    assert!(serde_json::to_value(&by_units)?["template"].is_null());
    Ok(())
}
