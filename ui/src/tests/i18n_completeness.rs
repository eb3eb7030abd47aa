use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::{catalog, Locale};

/// Extract the literal key of every `t!(<locale>, "<key>" ...)` call under `src/`.
///
/// Only direct literals are found; keys built at runtime (category labels,
/// const tables) are covered by the tests next to those tables.
fn extract_translation_keys_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find("t!(") {
            // `assert!(` and friends also end in `t!(`.
            let preceded_by_ident = rest[..pos]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            rest = &rest[pos + 3..];
            if preceded_by_ident {
                continue;
            }
            // Skip the locale expression up to the first argument separator.
            let Some(comma) = rest.find(',') else { break };
            let after = rest[comma + 1..].trim_start();
            let Some(literal) = after.strip_prefix('"') else {
                continue;
            };
            if let Some(end) = literal.find('"') {
                let key = &literal[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.')
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let referenced = extract_translation_keys_from_source(&crate_root.join("src"));
    assert!(
        referenced.contains("nav.home"),
        "source scan found no t! calls; the extractor is broken"
    );

    let catalog = catalog();
    let missing: Vec<_> = referenced
        .iter()
        .filter(|key| !catalog.contains(key, Locale::En))
        .cloned()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Referenced translation keys missing in en.json ({}):\n{}",
            missing.len(),
            missing.join("\n")
        );
    }

    let unused: Vec<_> = catalog
        .keys(Locale::En)
        .into_iter()
        .filter(|k| !referenced.contains(*k))
        .collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} en keys not referenced through t! (first 20 shown):\n{}",
            unused.len(),
            unused.iter().take(20).cloned().collect::<Vec<_>>().join(", ")
        );
    }
}
