//! Every `t!("...")` call in `src/` must resolve in each embedded locale, and
//! every bundle message must be used by some call.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::available_languages;

const FTL_FILENAME: &str = "galleria-ui.ftl";

fn is_message_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
}

/// Message ids defined in a Fluent file (terms and comments skipped).
fn bundle_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| is_message_id(id))
        .map(str::to_string)
        .collect()
}

/// Literal first arguments of `t!(` calls under `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let needle = "t!(\"";
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (pos, _) in content.match_indices(needle) {
            let rest = &content[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if is_message_id(key) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(
        referenced.contains("gallery-load-failed"),
        "source scan found no t!() calls"
    );

    let locales = available_languages();
    assert!(locales.iter().any(|l| l == "en-US"), "fallback bundle missing");

    let mut report = Vec::new();
    for locale in &locales {
        let path = crate_root.join("i18n").join(locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
        let defined = bundle_keys(&content);

        let missing: Vec<_> = referenced.difference(&defined).cloned().collect();
        if !missing.is_empty() {
            report.push(format!("{locale} is missing: {}", missing.join(", ")));
        }

        let unused: Vec<_> = defined.difference(&referenced).cloned().collect();
        if !unused.is_empty() {
            report.push(format!("{locale} defines unused: {}", unused.join(", ")));
        }
    }

    assert!(report.is_empty(), "{}", report.join("\n"));
}
