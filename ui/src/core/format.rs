//! Formatting helpers for presenting content.

use time::{format_description::well_known::Rfc3339, Date, OffsetDateTime};

use crate::i18n::{catalog, Locale};

const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time, rounded up, never below one minute.
pub fn read_time_minutes(text: &str) -> usize {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Parse a store timestamp (RFC 3339); `None` on failure.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}

/// Long date in the catalog's pattern for `locale`, e.g. `March 2, 2025` / `2 mars 2025`.
pub fn format_date(date: Date, locale: Locale) -> String {
    let months = catalog().translate_list("date.months", locale);
    let month_index = usize::from(u8::from(date.month())) - 1;
    let month = months
        .get(month_index)
        .cloned()
        .unwrap_or_else(|| date.month().to_string());

    catalog().translate(
        "date.long",
        locale,
        &[
            ("day", date.day().to_string()),
            ("month", month),
            ("year", date.year().to_string()),
        ],
    )
}

/// Date part of a store timestamp, or the raw text if it does not parse.
pub fn format_timestamp(raw: &str, locale: Locale) -> String {
    parse_timestamp(raw)
        .map(|ts| format_date(ts.date(), locale))
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn read_time_rounds_up() {
        assert_eq!(read_time_minutes(""), 1);
        assert_eq!(read_time_minutes("one two three"), 1);
        let long = "word ".repeat(401);
        assert_eq!(read_time_minutes(&long), 3);
    }

    #[test]
    fn long_dates_follow_locale_pattern() {
        let d = date!(2025 - 03 - 02);
        assert_eq!(format_date(d, Locale::En), "March 2, 2025");
        assert_eq!(format_date(d, Locale::Fr), "2 mars 2025");
        assert_eq!(format_date(d, Locale::Ar), "2 مارس 2025");
    }

    #[test]
    fn unparseable_timestamp_is_shown_verbatim() {
        assert_eq!(format_timestamp("soon", Locale::En), "soon");
        assert_eq!(
            format_timestamp("2024-01-10T08:00:00Z", Locale::En),
            "January 10, 2024"
        );
    }
}
