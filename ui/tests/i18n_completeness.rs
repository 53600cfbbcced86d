//! Every `t!("...")` key referenced under `src/` must exist in the fallback
//! FTL, and every locale directory must carry the fallback's keys.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "affectmap-ui.ftl";
const I18N_DIR: &str = "i18n";

fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
        } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

/// Literal first arguments of `t!(...)` calls.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";
    let mut found = BTreeSet::new();
    for path in rust_sources(src_root) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(NEEDLE) {
            rest = &rest[pos + NEEDLE.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }
    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("fallback FTL file is readable");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(!fallback_keys.is_empty(), "no keys parsed from {fallback_file:?}");

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(referenced.contains("nav-home"));

    let missing: Vec<&str> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .map(String::as_str)
        .collect();
    assert!(
        missing.is_empty(),
        "referenced keys missing in fallback:\n{}",
        missing.join("\n")
    );

    let mut report = Vec::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("locale {locale} is missing {path:?}"));
        let keys = parse_ftl_keys(&content);
        let gaps: Vec<&str> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .map(String::as_str)
            .collect();
        if !gaps.is_empty() {
            report.push(format!("{locale}: {}", gaps.join(", ")));
        }
    }
    assert!(report.is_empty(), "incomplete locales:\n{}", report.join("\n"));

    let unused: Vec<&str> = fallback_keys
        .iter()
        .filter(|k| !referenced.contains(*k))
        .map(String::as_str)
        .collect();
    if !unused.is_empty() {
        eprintln!("[i18n] note: fallback keys unused in sources: {}", unused.join(", "));
    }
}
