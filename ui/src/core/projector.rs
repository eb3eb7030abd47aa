//! Resolve multilingual rows into the active language.

use super::record::{MultilingualRecord, ProjectedRecord};
use crate::i18n::Locale;

/// Project `record` into `locale`, keeping only `logical_fields`.
///
/// Pure: the record is not touched and equal inputs give equal outputs.
pub fn project(
    record: &MultilingualRecord,
    logical_fields: &[&str],
    locale: Locale,
) -> ProjectedRecord {
    let fields = logical_fields
        .iter()
        .map(|&name| {
            let text = record
                .field(name)
                .map(|t| t.resolve(locale))
                .unwrap_or("");
            (name.to_string(), text.to_string())
        })
        .collect();

    ProjectedRecord {
        id: record.id.clone(),
        fields,
        attributes: record.attributes.clone(),
    }
}

/// Same as [`project`] for a raw language code: `fr` and `ar` select their
/// column, any other code (including unsupported ones) projects as English.
pub fn project_code(
    record: &MultilingualRecord,
    logical_fields: &[&str],
    code: &str,
) -> ProjectedRecord {
    let locale = match code {
        "fr" => Locale::Fr,
        "ar" => Locale::Ar,
        _ => Locale::En,
    };
    project(record, logical_fields, locale)
}

/// Project a whole collection, preserving order.
pub fn project_all(
    records: &[MultilingualRecord],
    logical_fields: &[&str],
    locale: Locale,
) -> Vec<ProjectedRecord> {
    records
        .iter()
        .map(|r| project(r, logical_fields, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::LocalizedText;
    use proptest::prelude::*;
    use rstest::rstest;

    fn testimonial() -> MultilingualRecord {
        MultilingualRecord::new("t1")
            .with_field(
                "quote",
                LocalizedText::new()
                    .with(Locale::En, "Great work")
                    .with(Locale::Fr, "")
                    .with(Locale::Ar, "رائع"),
            )
            .with_field(
                "author",
                LocalizedText::new()
                    .with(Locale::En, "Sara")
                    .with(Locale::Fr, "Sara")
                    .with(Locale::Ar, "سارة"),
            )
            .with_attribute("display_order", 1)
    }

    #[rstest]
    #[case("en", "Great work")]
    #[case("fr", "")]
    #[case("ar", "رائع")]
    #[case("xx", "Great work")]
    #[case("", "Great work")]
    #[case("fr-FR", "Great work")]
    fn branch_table(#[case] code: &str, #[case] quote: &str) {
        let p = project_code(&testimonial(), &["quote"], code);
        assert_eq!(p.text("quote"), quote);
    }

    #[test]
    fn empty_french_quote_stays_empty() {
        let p = project(&testimonial(), &["quote", "author"], Locale::Fr);
        assert_eq!(p.text("quote"), "");
        assert_eq!(p.text("author"), "Sara");
    }

    #[test]
    fn absent_optional_fields_resolve_to_empty_string() {
        let p = project(&testimonial(), &["quote", "description", "date"], Locale::En);
        assert_eq!(p.fields.get("description").map(String::as_str), Some(""));
        assert_eq!(p.fields.get("date").map(String::as_str), Some(""));
    }

    #[test]
    fn attributes_and_id_carry_through() {
        let p = project(&testimonial(), &["quote"], Locale::Ar);
        assert_eq!(p.id, "t1");
        assert_eq!(p.attributes["display_order"], 1);
        assert!(!p.fields.contains_key("author"));
    }

    #[test]
    fn project_all_keeps_order() {
        let records = vec![
            MultilingualRecord::new("a"),
            MultilingualRecord::new("b"),
            MultilingualRecord::new("c"),
        ];
        let ids: Vec<_> = project_all(&records, &["title"], Locale::Fr)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    fn any_locale() -> impl Strategy<Value = Locale> {
        prop_oneof![Just(Locale::En), Just(Locale::Fr), Just(Locale::Ar)]
    }

    fn any_record() -> impl Strategy<Value = MultilingualRecord> {
        (".{0,12}", ".{0,12}", ".{0,12}", any::<bool>()).prop_map(|(en, fr, ar, with_fr)| {
            let mut title = LocalizedText::new().with(Locale::En, en).with(Locale::Ar, ar);
            if with_fr {
                title.insert(Locale::Fr, fr);
            }
            MultilingualRecord::new("r").with_field("title", title)
        })
    }

    proptest! {
        #[test]
        fn resolves_exactly_the_requested_column(record in any_record(), locale in any_locale()) {
            let p = project(&record, &["title"], locale);
            let expected = record.field("title").and_then(|t| t.get(locale)).unwrap_or("");
            prop_assert_eq!(p.text("title"), expected);
        }

        #[test]
        fn projection_is_idempotent(record in any_record(), locale in any_locale()) {
            let snapshot = record.clone();
            let first = project(&record, &["title", "description"], locale);
            let second = project(&record, &["title", "description"], locale);
            prop_assert_eq!(first, second);
            prop_assert_eq!(record, snapshot);
        }

        #[test]
        fn unknown_codes_project_as_english(record in any_record(), code in "[a-z]{2,3}") {
            prop_assume!(code != "fr" && code != "ar");
            prop_assert_eq!(
                project_code(&record, &["title"], &code),
                project(&record, &["title"], Locale::En)
            );
        }
    }
}
