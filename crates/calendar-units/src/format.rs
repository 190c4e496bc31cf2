//! Human-readable date strings.
//!
//! Rendering is delegated to `chrono`'s localized strftime support. The
//! three default-locale formatters are built once per process and shared.

use std::sync::OnceLock;

use chrono::{Locale, NaiveDate, NaiveTime};

/// Locale used by [`DateFormatter::shared`].
pub const DEFAULT_LOCALE: Locale = Locale::en_US;

/// How much of a date to spell out. Examples are for `en_US`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateStyle {
    /// The locale's numeric date, e.g. `03/10/2015`.
    Short,
    /// Abbreviated month name, e.g. `Mar 10, 2015`.
    Medium,
    /// Weekday and full month name, e.g. `Tuesday, March 10, 2015`.
    Full,
}

impl DateStyle {
    /// The strftime pattern for this style in `locale`.
    ///
    /// `Short` always uses the locale's own date format. `Medium` and
    /// `Full` carry a field order for a handful of locales and fall back to
    /// the `en_US` order elsewhere; month and weekday names are always
    /// translated.
    fn pattern(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (DateStyle::Short, _) => "%x",

            (DateStyle::Medium, Locale::en_GB | Locale::fr_FR | Locale::es_ES) => "%-d %b %Y",
            (DateStyle::Medium, Locale::de_DE) => "%d.%m.%Y",
            (DateStyle::Medium, Locale::ja_JP) => "%Y/%m/%d",
            (DateStyle::Medium, _) => "%b %-d, %Y",

            (DateStyle::Full, Locale::en_GB) => "%A, %-d %B %Y",
            (DateStyle::Full, Locale::fr_FR) => "%A %-d %B %Y",
            (DateStyle::Full, Locale::de_DE) => "%A, %-d. %B %Y",
            (DateStyle::Full, Locale::es_ES) => "%A, %-d de %B de %Y",
            (DateStyle::Full, Locale::ja_JP) => "%Y年%-m月%-d日%A",
            (DateStyle::Full, _) => "%A, %B %-d, %Y",
        }
    }
}

/// Renders civil dates in one style and locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateFormatter {
    style: DateStyle,
    locale: Locale,
}

static SHORT: OnceLock<DateFormatter> = OnceLock::new();
static MEDIUM: OnceLock<DateFormatter> = OnceLock::new();
static FULL: OnceLock<DateFormatter> = OnceLock::new();

impl DateFormatter {
    pub fn new(style: DateStyle, locale: Locale) -> Self {
        DateFormatter { style, locale }
    }

    /// The process-wide formatter for `style` in [`DEFAULT_LOCALE`].
    pub fn shared(style: DateStyle) -> &'static DateFormatter {
        let cell = match style {
            DateStyle::Short => &SHORT,
            DateStyle::Medium => &MEDIUM,
            DateStyle::Full => &FULL,
        };
        cell.get_or_init(|| DateFormatter::new(style, DEFAULT_LOCALE))
    }

    pub fn style(&self) -> DateStyle {
        self.style
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn format(&self, date: NaiveDate) -> String {
        // Every pattern is date-only, so anchoring at UTC midnight cannot
        // change the rendered day.
        date.and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(self.style.pattern(self.locale), self.locale)
            .to_string()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 3, 10).unwrap()
    }

    #[test]
    fn test_medium_en_us() {
        let f = DateFormatter::new(DateStyle::Medium, Locale::en_US);
        assert_eq!(f.format(date()), "Mar 10, 2015");
    }

    #[test]
    fn test_full_en_us() {
        let f = DateFormatter::new(DateStyle::Full, Locale::en_US);
        assert_eq!(f.format(date()), "Tuesday, March 10, 2015");
    }

    #[test]
    fn test_short_en_us() {
        let f = DateFormatter::new(DateStyle::Short, Locale::en_US);
        assert_eq!(f.format(date()), "03/10/2015");
    }

    // ── localized field order ───────────────────────────────────────────

    #[test]
    fn test_fr_fr() {
        let full = DateFormatter::new(DateStyle::Full, Locale::fr_FR);
        assert_eq!(full.format(date()), "mardi 10 mars 2015");
        let medium = DateFormatter::new(DateStyle::Medium, Locale::fr_FR);
        assert_eq!(medium.format(date()), "10 mars 2015");
    }

    #[test]
    fn test_de_de() {
        let full = DateFormatter::new(DateStyle::Full, Locale::de_DE);
        assert_eq!(full.format(date()), "Dienstag, 10. März 2015");
        let medium = DateFormatter::new(DateStyle::Medium, Locale::de_DE);
        assert_eq!(medium.format(date()), "10.03.2015");
    }

    #[test]
    fn test_en_gb() {
        let full = DateFormatter::new(DateStyle::Full, Locale::en_GB);
        assert_eq!(full.format(date()), "Tuesday, 10 March 2015");
        let medium = DateFormatter::new(DateStyle::Medium, Locale::en_GB);
        assert_eq!(medium.format(date()), "10 Mar 2015");
    }

    #[test]
    fn test_es_es_full() {
        let full = DateFormatter::new(DateStyle::Full, Locale::es_ES);
        assert_eq!(full.format(date()), "martes, 10 de marzo de 2015");
    }

    #[test]
    fn test_ja_jp() {
        let full = DateFormatter::new(DateStyle::Full, Locale::ja_JP);
        assert_eq!(full.format(date()), "2015年3月10日火曜日");
        let medium = DateFormatter::new(DateStyle::Medium, Locale::ja_JP);
        assert_eq!(medium.format(date()), "2015/03/10");
    }

    #[test]
    fn test_shared_is_memoized() {
        let a = DateFormatter::shared(DateStyle::Full);
        let b = DateFormatter::shared(DateStyle::Full);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.style(), DateStyle::Full);
        assert_eq!(a.locale(), DEFAULT_LOCALE);
        assert!(!std::ptr::eq(a, DateFormatter::shared(DateStyle::Short)));
    }
}
