//! Locale parity checks over the embedded FTL sources.
//!
//! When adding a locale, create `ui/i18n/<locale>/affectmap-ui.ftl` and
//! register it in `LOCALES`.

use std::collections::{BTreeMap, BTreeSet};

const EN_US: &str = include_str!("../i18n/en-US/affectmap-ui.ftl");
const LOCALES: &[(&str, &str)] = &[("ko-KR", include_str!("../i18n/ko-KR/affectmap-ui.ftl"))];

/// Message id → `$variables` referenced anywhere in its body (including
/// select variants on following lines).
fn messages(src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for raw in src.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let starts_message = !raw.starts_with(char::is_whitespace)
            && !line.starts_with(['.', '[', '*', '}', '-']);
        if starts_message {
            if let Some((id, _)) = line.split_once('=') {
                let id = id.trim().to_string();
                assert!(
                    !out.contains_key(&id),
                    "duplicate message {id:?} in line {raw:?}"
                );
                out.insert(id.clone(), BTreeSet::new());
                current = Some(id);
            }
        }
        if let Some(id) = &current {
            let vars = out.entry(id.clone()).or_default();
            vars.extend(variables(line));
        }
    }
    out
}

fn variables(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split('$').skip(1).filter_map(|tail| {
        let name: String = tail
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        (!name.is_empty()).then_some(name)
    })
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = messages(EN_US);
    assert!(!fallback.is_empty(), "fallback (en-US) contains no keys");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys = messages(src);
        let missing: Vec<&str> = fallback
            .keys()
            .filter(|k| !keys.contains_key(*k))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing: {}", missing.join(", ")));
        }
    }
    assert!(
        failures.is_empty(),
        "translation completeness check failed:\n{}\nhint: copy the keys from en-US, then translate",
        failures.join("\n")
    );
}

#[test]
fn placeholders_match_fallback() {
    let fallback = messages(EN_US);
    for (locale, src) in LOCALES {
        for (id, vars) in messages(src) {
            let Some(expected) = fallback.get(&id) else {
                continue;
            };
            assert_eq!(&vars, expected, "{locale}: placeholders differ for {id}");
        }
    }
}

#[test]
fn counted_messages_use_count() {
    let fallback = messages(EN_US);
    for id in ["map-form-selected", "map-preview-bars"] {
        assert!(fallback[id].contains("count"), "{id} should reference $count");
    }
}
