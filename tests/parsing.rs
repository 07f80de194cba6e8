use fuzzydate::datatype::FuzzyDate;
use fuzzydate::error::FuzzyDateError;

#[test]
fn full_date_round_trips() {
    let date: FuzzyDate = "1990.05.15".parse().expect("parse ok");
    assert_eq!(date.year(), Some(1990));
    assert_eq!(date.month(), Some(5));
    assert_eq!(date.day(), Some(15));
    assert!(!date.is_decade());
    assert_eq!(date.canonical(), "1990.05.15");
    assert_eq!("1990.05.15".parse::<FuzzyDate>().unwrap(), date);
}

#[test]
fn partial_dates_round_trip() {
    let year_only: FuzzyDate = "1990.??.??".parse().unwrap();
    assert_eq!(year_only.year(), Some(1990));
    assert_eq!(year_only.month(), None);
    assert_eq!(year_only.day(), None);
    assert_eq!(year_only.canonical(), "1990.??.??");

    let no_day: FuzzyDate = "1990.05.??".parse().unwrap();
    assert_eq!(no_day.day(), None);
    assert_eq!(no_day.canonical(), "1990.05.??");

    let no_year: FuzzyDate = "????.05.15".parse().unwrap();
    assert_eq!(no_year.year(), None);
    assert_eq!(no_year.canonical(), "????.05.15");
}

#[test]
fn decade_marker_scales_the_base() {
    let decade: FuzzyDate = "199?.??.??".parse().unwrap();
    assert_eq!(decade.year(), Some(1990));
    assert!(decade.is_decade());
    assert_eq!(decade.canonical(), "199?.??.??");
}

#[test]
fn unknown_year_is_not_a_decade() {
    let unknown: FuzzyDate = "????.05.15".parse().unwrap();
    assert!(!unknown.is_decade());
}

#[test]
fn construction_and_parsing_agree() {
    let combos: &[(Option<i32>, Option<u32>, Option<u32>, bool)] = &[
        (Some(1990), Some(5), Some(15), false),
        (Some(1990), Some(5), None, false),
        (Some(1990), None, None, false),
        (Some(1990), None, None, true),
        (Some(1990), Some(5), Some(15), true),
        (None, Some(5), Some(15), false),
        (None, Some(5), None, false),
        (None, Some(2), Some(29), false),
    ];
    for &(y, m, d, decade) in combos {
        let built = FuzzyDate::new(y, m, d, decade).expect("valid combination");
        let reparsed: FuzzyDate = built.canonical().parse().expect("round trip");
        assert_eq!(reparsed, built);
        assert_eq!(reparsed.year(), built.year());
        assert_eq!(reparsed.month(), built.month());
        assert_eq!(reparsed.day(), built.day());
        assert_eq!(reparsed.is_decade(), built.is_decade());
    }
}

#[test]
fn wrong_separator_is_a_format_error() {
    let err = "2020-01-01".parse::<FuzzyDate>().unwrap_err();
    assert!(matches!(err, FuzzyDateError::Format { .. }));
    assert!(FuzzyDate::try_parse("2020-01-01").is_none());
}

#[test]
fn grammar_requires_exact_shape() {
    for raw in [
        "1990.5.15",
        "1990.05.5",
        "90.05.15",
        "1990.05.15 ",
        " 1990.05.15",
        "1990.05",
        "1990.05.15.00",
        "19??.05.15",
        "1990.?.??",
        "199?.05.1?",
        "abcd.ef.gh",
    ] {
        let err = raw.parse::<FuzzyDate>().unwrap_err();
        assert!(
            matches!(err, FuzzyDateError::Format { .. }),
            "{raw:?} should fail the grammar, got {err}"
        );
    }
}

#[test]
fn well_formed_but_invalid_fails_like_construction() {
    // grammar matches, semantics do not
    let err = "2001.02.29".parse::<FuzzyDate>().unwrap_err();
    assert!(matches!(err, FuzzyDateError::InvalidCalendarDate(_)));
    let err = "????.02.30".parse::<FuzzyDate>().unwrap_err();
    assert!(matches!(err, FuzzyDateError::InvalidCalendarDate(_)));
    let err = "????.13.01".parse::<FuzzyDate>().unwrap_err();
    assert!(matches!(err, FuzzyDateError::InvalidCalendarDate(_)));
    let err = "????.??.??".parse::<FuzzyDate>().unwrap_err();
    assert!(matches!(err, FuzzyDateError::MissingComponent(_)));
    let err = "????.??.15".parse::<FuzzyDate>().unwrap_err();
    assert!(matches!(err, FuzzyDateError::MissingComponent(_)));
}

#[test]
fn try_parse_swallows_everything() {
    assert!(FuzzyDate::try_parse("").is_none());
    assert!(FuzzyDate::try_parse("not a date").is_none());
    assert!(FuzzyDate::try_parse("2001.02.29").is_none());
    assert!(FuzzyDate::try_parse("????.??.??").is_none());
    assert_eq!(
        FuzzyDate::try_parse("1990.05.15").unwrap().canonical(),
        "1990.05.15"
    );
}

#[test]
fn unknown_year_validates_against_a_leap_year() {
    // the fixed validation year 2000 is a leap year, so February 29 with
    // an unknown year is accepted
    let date = FuzzyDate::new(None, Some(2), Some(29), false).expect("accepted quirk");
    assert_eq!(date.canonical(), "????.02.29");
    let err = FuzzyDate::new(None, Some(2), Some(30), false).unwrap_err();
    assert!(matches!(err, FuzzyDateError::InvalidCalendarDate(_)));
}

#[test]
fn construction_invariants() {
    let err = FuzzyDate::new(None, None, None, false).unwrap_err();
    assert!(matches!(err, FuzzyDateError::MissingComponent(_)));
    let err = FuzzyDate::new(Some(1990), None, Some(15), false).unwrap_err();
    assert!(matches!(err, FuzzyDateError::MissingComponent(_)));
    let err = FuzzyDate::new(None, None, None, true).unwrap_err();
    assert!(matches!(err, FuzzyDateError::MissingComponent(_)));
    // a decade base must stay representable in the canonical form
    let err = FuzzyDate::new(Some(1993), None, None, true).unwrap_err();
    assert!(matches!(err, FuzzyDateError::InvalidCalendarDate(_)));
    let err = FuzzyDate::new(Some(990), None, None, true).unwrap_err();
    assert!(matches!(err, FuzzyDateError::InvalidCalendarDate(_)));
    let err = FuzzyDate::new(Some(10500), Some(1), Some(1), false).unwrap_err();
    assert!(matches!(err, FuzzyDateError::InvalidCalendarDate(_)));
}
