//! Language-specific material for the worded renderings of a fuzzy date.
//!
//! Month name declension, the decade suffix, and the pluralized "years"
//! word all live behind [`DateLocale`] so that parsing, ordering and age
//! arithmetic never need to know which language is being rendered.
//! [`Russian`] is the default and currently the only implementation.

/// Strategy for the language-dependent parts of readable formatting.
pub trait DateLocale {
    /// Month name used when a day number precedes it ("15 мая").
    fn month_with_day(&self, month: u32) -> &'static str;
    /// Month name used when the month stands on its own ("май 1990").
    fn month_standalone(&self, month: u32) -> &'static str;
    /// Suffix appended to a decade-precision year ("1990-е").
    fn decade_suffix(&self) -> &'static str;
    /// The word for "years" agreeing grammatically with the given count.
    fn years_word(&self, years: i32) -> &'static str;
}

// index 0 unused, months are 1-indexed
const MONTHS_WITH_DAY: [&str; 13] = [
    "", "января", "февраля", "марта", "апреля", "мая", "июня", "июля",
    "августа", "сентября", "октября", "ноября", "декабря",
];
const MONTHS_STANDALONE: [&str; 13] = [
    "", "январь", "февраль", "март", "апрель", "май", "июнь", "июль",
    "август", "сентябрь", "октябрь", "ноябрь", "декабрь",
];

/// Russian formatting rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct Russian;

impl DateLocale for Russian {
    fn month_with_day(&self, month: u32) -> &'static str {
        MONTHS_WITH_DAY[month as usize]
    }
    fn month_standalone(&self, month: u32) -> &'static str {
        MONTHS_STANDALONE[month as usize]
    }
    fn decade_suffix(&self) -> &'static str {
        "-е"
    }
    fn years_word(&self, years: i32) -> &'static str {
        let ones = years % 10;
        let tens = (years / 10) % 10;
        // 11..=19 always take the "many" form, regardless of the ones digit
        if tens != 1 {
            if ones == 1 {
                return "год";
            }
            if (2..=4).contains(&ones) {
                return "года";
            }
        }
        "лет"
    }
}
