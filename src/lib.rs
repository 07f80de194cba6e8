//! Fuzzydate – calendar dates for genealogy, where parts may be unknown.
//!
//! Genealogical records rarely come with complete dates: a birth year may
//! be known while the day is lost, or a year may only be narrowed down to
//! a decade ("born in the 1890s"). The [`datatype::FuzzyDate`] value
//! captures exactly that:
//! * `year`, `month` and `day` are each individually optional.
//! * A decade flag marks a year that is really "the 1990s" rather than 1990.
//! * A canonical `YYYY.MM.DD` encoding with `?` placeholders (`1990.05.??`,
//!   `199?.??.??`, `????.02.29`) round-trips through parsing and serves as
//!   the contract for equality, hashing, ordering and serialization.
//!
//! ## Modules
//! * [`datatype`] – The [`datatype::FuzzyDate`] value type: construction,
//!   parsing, canonical and readable formatting, ordering and age
//!   computation.
//! * [`locale`] – The [`locale::DateLocale`] strategy with the default
//!   Russian month names, pluralization and decade suffix.
//! * [`interface`] – serde adapter reading and writing the canonical string.
//! * [`error`] – [`error::FuzzyDateError`] and the crate `Result` alias.
//!
//! ## Ordering
//! Values order by character-ordinal comparison of their canonical
//! strings. `?` sorts after the digits, so a date that is vaguer in a
//! trailing component compares greater than an otherwise identical exact
//! date (`1990.??.??` > `1990.01.01`). This is a documented property of
//! the encoding and relied upon by stored data; do not "fix" it.
//!
//! ## Quick Start
//! ```
//! use chrono::NaiveDate;
//! use fuzzydate::datatype::FuzzyDate;
//! let birth: FuzzyDate = "1990.05.??".parse().unwrap();
//! assert_eq!(birth.to_string(), "1990.05.??");
//! assert_eq!(birth.readable_date(), "май 1990");
//! let today = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
//! assert_eq!(birth.age_on(today).unwrap(), "30 лет");
//! ```

pub mod datatype;
pub mod error;
pub mod interface;
pub mod locale;
