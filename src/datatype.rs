// used for calendar validation, the full-date view and age arithmetic
use chrono::{Datelike, NaiveDate, Utc};

// used when parsing a string to a FuzzyDate
use std::str::FromStr;
// used to print out readable forms of a data type
use std::fmt;
// used to indicate that data types need to be hashable
use std::hash::{Hash, Hasher};
// used for canonical-string ordering
use std::cmp::Ordering;

use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use regex::Regex;
use tracing::debug;

use crate::error::{FuzzyDateError, Result};
use crate::locale::{DateLocale, Russian};

/// Year used to validate month/day combinations when the year is unknown.
/// 2000 is a leap year, so a February 29 with an unknown year is accepted
/// even though the actual year may not have had that day.
pub const DEFAULT_VALIDATION_YEAR: i32 = 2000;

lazy_static! {
    // three dot-separated groups: year, month, day
    static ref CANONICAL_GRAMMAR: Regex =
        Regex::new(r"^(\d{4}|\d{3}\?|\?{4})\.(\d{2}|\?{2})\.(\d{2}|\?{2})$").unwrap();
}

// ------------- FuzzyDate -------------

/// A calendar date where the year, month and/or day may be unknown.
///
/// The year can additionally be known only to decade precision, in which
/// case it holds the decade's base year (1990 stands for "the 1990s").
/// Values are immutable once constructed; the derived strings are memoized
/// on first use and are pure functions of the four fields, so a concurrent
/// first computation is harmless.
///
/// The canonical `YYYY.MM.DD` string (with `?` placeholders) is the
/// contract for equality, hashing, ordering and serialization. Ordering is
/// plain character-ordinal comparison of that string, and since `?` sorts
/// after the digits, `1990.??.??` compares *greater* than `1990.01.01`.
/// That is a property of the encoding, not an accident.
#[derive(Debug, Clone)]
pub struct FuzzyDate {
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    decade: bool,
    canonical: OnceCell<String>,
    short_readable: OnceCell<String>,
    readable: OnceCell<String>,
}

impl FuzzyDate {
    /// Creates a fuzzy date, enforcing the construction invariants:
    /// at least one component must be known, a day needs its month, and
    /// known components must form a valid calendar date (using
    /// [`DEFAULT_VALIDATION_YEAR`] when the year is unknown). A decade
    /// year must be a multiple of ten that fits the canonical form, so
    /// that no two distinct field states share a canonical string.
    pub fn new(
        year: Option<i32>,
        month: Option<u32>,
        day: Option<u32>,
        decade: bool,
    ) -> Result<Self> {
        if year.is_none() && month.is_none() && day.is_none() {
            return Err(FuzzyDateError::MissingComponent(
                "at least one of year, month and day must be known".into(),
            ));
        }
        if day.is_some() && month.is_none() {
            return Err(FuzzyDateError::MissingComponent(
                "a day cannot be given without its month".into(),
            ));
        }
        match year {
            Some(y) if !(0..=9999).contains(&y) => {
                return Err(FuzzyDateError::InvalidCalendarDate(format!(
                    "year {y} does not fit the four-digit canonical form"
                )));
            }
            Some(y) if decade && (y % 10 != 0 || !(1000..=9990).contains(&y)) => {
                return Err(FuzzyDateError::InvalidCalendarDate(format!(
                    "{y} is not a representable decade base"
                )));
            }
            None if decade => {
                return Err(FuzzyDateError::MissingComponent(
                    "decade precision requires a year".into(),
                ));
            }
            _ => (),
        }
        if let Some(m) = month {
            let y = year.unwrap_or(DEFAULT_VALIDATION_YEAR);
            let d = day.unwrap_or(1);
            if NaiveDate::from_ymd_opt(y, m, d).is_none() {
                return Err(FuzzyDateError::InvalidCalendarDate(format!(
                    "{y:04}-{m:02}-{d:02} is not a day in the calendar"
                )));
            }
        }
        Ok(Self {
            year,
            month,
            day,
            decade,
            canonical: OnceCell::new(),
            short_readable: OnceCell::new(),
            readable: OnceCell::new(),
        })
    }

    /// Lenient counterpart of `parse`: any failure, malformed grammar and
    /// invalid semantics alike, becomes `None`. Empty input is `None` too.
    pub fn try_parse(raw: &str) -> Option<FuzzyDate> {
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<FuzzyDate>() {
            Ok(date) => Some(date),
            Err(error) => {
                debug!("discarding unparsable fuzzy date {:?}: {}", raw, error);
                None
            }
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }
    pub fn month(&self) -> Option<u32> {
        self.month
    }
    pub fn day(&self) -> Option<u32> {
        self.day
    }
    /// True when the year holds a decade base rather than an exact year.
    pub fn is_decade(&self) -> bool {
        self.decade
    }

    /// The canonical `YYYY.MM.DD` encoding, `?` for unknown positions and
    /// `199?` style for decades. Equality, ordering, hashing and the wire
    /// format are all defined over this string.
    pub fn canonical(&self) -> &str {
        self.canonical.get_or_init(|| {
            let mut s = self.year_segment();
            s.push('.');
            push_two_digit(&mut s, self.month);
            s.push('.');
            push_two_digit(&mut s, self.day);
            s
        })
    }

    fn year_segment(&self) -> String {
        match self.year {
            None => "????".to_string(),
            Some(y) if self.decade => format!("{}?", y / 10),
            Some(y) => format!("{y:04}"),
        }
    }

    /// Short numeric rendering, `15/05/1990` style. Unknown trailing
    /// components simply shorten the string (`05/1990`, `1990`, `199?`).
    pub fn short_readable_date(&self) -> &str {
        self.short_readable.get_or_init(|| {
            let mut s = String::new();
            if let Some(d) = self.day {
                s.push_str(&format!("{d:02}/"));
            }
            if self.day.is_some() || self.month.is_some() {
                match self.month {
                    Some(m) => s.push_str(&format!("{m:02}/")),
                    None => s.push_str("??/"),
                }
            }
            s.push_str(&self.year_segment());
            s
        })
    }

    /// Full worded rendering in the default locale, e.g. `15 мая 1990`,
    /// `май 1990` or `май, 1990-е`.
    pub fn readable_date(&self) -> &str {
        self.readable.get_or_init(|| self.worded(&Russian))
    }

    /// Full worded rendering with an explicit locale. Bypasses the cache.
    pub fn readable_date_with(&self, locale: &dyn DateLocale) -> String {
        self.worded(locale)
    }

    fn worded(&self, locale: &dyn DateLocale) -> String {
        let mut s = String::new();
        if let Some(m) = self.month {
            match self.day {
                // a day puts the month name into its declined form
                Some(d) => {
                    s.push_str(&format!("{d} "));
                    s.push_str(locale.month_with_day(m));
                }
                None => s.push_str(locale.month_standalone(m)),
            }
        }
        if let Some(y) = self.year {
            if !s.is_empty() {
                s.push_str(if self.decade { ", " } else { " " });
            }
            s.push_str(&y.to_string());
            if self.decade {
                s.push_str(locale.decade_suffix());
            }
        }
        s
    }

    /// The year as text, with the locale's decade suffix when the year is
    /// only known to decade precision.
    pub fn readable_year(&self) -> Option<String> {
        self.year.map(|y| {
            if self.decade {
                format!("{}{}", y, Russian.decade_suffix())
            } else {
                y.to_string()
            }
        })
    }

    /// A plain calendar date, available when both month and day are known.
    /// An unknown year is substituted with the current one, which suits
    /// anniversary lookups. `None` also covers the rare February 29 whose
    /// substituted current year is not a leap year.
    pub fn as_full_date(&self) -> Option<NaiveDate> {
        let m = self.month?;
        let d = self.day?;
        let y = self.year.unwrap_or_else(|| Utc::now().year());
        NaiveDate::from_ymd_opt(y, m, d)
    }

    /// Elapsed age in years relative to the given date, as a worded string
    /// in the default locale, or `None` when this date's year is unknown
    /// or not strictly in the past.
    ///
    /// Unknown precision widens the answer into a range: a decade year
    /// yields an eleven-year span, and a known birthday month without a
    /// day yields a two-year span when the relative date falls inside
    /// that month.
    pub fn age_on(&self, relative: NaiveDate) -> Option<String> {
        self.age_with(relative, &Russian)
    }

    /// Same as [`FuzzyDate::age_on`] with an explicit locale.
    pub fn age_with(&self, relative: NaiveDate, locale: &dyn DateLocale) -> Option<String> {
        let year = self.year?;
        if relative.year() <= year {
            return None;
        }
        // baseline assumes the birthday has not yet come this year
        let mut years = relative.year() - year - 1;
        if self.decade {
            let upper = years + 1;
            return Some(format!(
                "{}..{} {}",
                years - 10,
                upper,
                locale.years_word(upper)
            ));
        }
        if let (Some(m), None) = (self.month, self.day) {
            if m == relative.month() {
                // the birthday month but no day: it may or may not have passed
                let upper = years + 1;
                return Some(format!("{}..{} {}", years, upper, locale.years_word(upper)));
            }
        }
        let birthday_passed = match (self.month, self.day) {
            (Some(m), _) if relative.month() > m => true,
            (Some(m), Some(d)) => relative.month() == m && relative.day() > d,
            _ => false,
        };
        if birthday_passed {
            years += 1;
        }
        Some(format!("{} {}", years, locale.years_word(years)))
    }
}

// ------------- Optional-operand comparisons -------------
//
// An unknown operand makes every ordering relation false rather than an
// error, matching how record fields with no date at all are compared.

pub fn before(lhs: Option<&FuzzyDate>, rhs: Option<&FuzzyDate>) -> bool {
    matches!((lhs, rhs), (Some(a), Some(b)) if a < b)
}

pub fn after(lhs: Option<&FuzzyDate>, rhs: Option<&FuzzyDate>) -> bool {
    matches!((lhs, rhs), (Some(a), Some(b)) if a > b)
}

/// Unlike [`before`], equal dates satisfy this relation.
pub fn on_or_before(lhs: Option<&FuzzyDate>, rhs: Option<&FuzzyDate>) -> bool {
    matches!((lhs, rhs), (Some(a), Some(b)) if a <= b)
}

/// Unlike [`after`], equal dates satisfy this relation.
pub fn on_or_after(lhs: Option<&FuzzyDate>, rhs: Option<&FuzzyDate>) -> bool {
    matches!((lhs, rhs), (Some(a), Some(b)) if a >= b)
}

fn push_two_digit(s: &mut String, component: Option<u32>) {
    match component {
        Some(value) => s.push_str(&format!("{value:02}")),
        None => s.push_str("??"),
    }
}

impl FromStr for FuzzyDate {
    type Err = FuzzyDateError;

    /// Strict parse of the canonical grammar. A grammatically well-formed
    /// but semantically invalid string (February 30) fails with the same
    /// errors as direct construction.
    fn from_str(raw: &str) -> Result<Self> {
        let captures =
            CANONICAL_GRAMMAR
                .captures(raw)
                .ok_or_else(|| FuzzyDateError::Format {
                    text: raw.to_string(),
                })?;
        let year_group = captures.get(1).unwrap().as_str();
        let (year, decade) = match year_group.parse::<i32>() {
            Ok(y) => (Some(y), false),
            // not four plain digits: a decade marker, or all unknown
            Err(_) => match year_group.strip_suffix('?').unwrap().parse::<i32>() {
                Ok(base) => (Some(base * 10), true),
                Err(_) => (None, false),
            },
        };
        let month = parse_two_digit(captures.get(2).unwrap().as_str());
        let day = parse_two_digit(captures.get(3).unwrap().as_str());
        FuzzyDate::new(year, month, day, decade)
    }
}

fn parse_two_digit(group: &str) -> Option<u32> {
    group.parse::<u32>().ok()
}

impl fmt::Display for FuzzyDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

// equality, hashing and ordering are all defined over the canonical string

impl PartialEq for FuzzyDate {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}
impl Eq for FuzzyDate {}

impl Hash for FuzzyDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl Ord for FuzzyDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical().cmp(other.canonical())
    }
}
impl PartialOrd for FuzzyDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
