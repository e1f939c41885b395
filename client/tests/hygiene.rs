//! Hygiene — source scan run as a test.
//!
//! Production files under `client/src/` (test modules excluded) are checked
//! for panicking calls, silently discarded results, and reactive state. The
//! site renders constant data, so every budget is zero.

use std::fs;
use std::path::Path;

struct Rule {
    name: &'static str,
    pattern: &'static str,
}

const PANICS: &[Rule] = &[
    Rule { name: "unwrap", pattern: ".unwrap()" },
    Rule { name: "expect", pattern: ".expect(" },
    Rule { name: "panic", pattern: "panic!(" },
    Rule { name: "unreachable", pattern: "unreachable!(" },
    Rule { name: "todo", pattern: "todo!(" },
    Rule { name: "unimplemented", pattern: "unimplemented!(" },
];

const SILENT_LOSS: &[Rule] = &[
    Rule { name: "let underscore", pattern: "let _ =" },
    Rule { name: "dot ok", pattern: ".ok()" },
];

// Pages are pure renders of `'static` content.
const STATE: &[Rule] = &[
    Rule { name: "RwSignal", pattern: "RwSignal::new" },
    Rule { name: "signal", pattern: "signal(" },
    Rule { name: "static mut", pattern: "static mut" },
    Rule { name: "provide_context", pattern: "provide_context(" },
];

const STYLE: &[Rule] = &[Rule { name: "allow dead_code", pattern: "#[allow(dead_code)]" }];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the client crate root");
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path_str.ends_with("_test.rs") || path_str.ends_with("test_helpers.rs");
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Violations as `path:line: rule` strings.
fn violations(files: &[SourceFile], rules: &[Rule]) -> Vec<String> {
    let mut hits = Vec::new();
    for file in files {
        for (idx, line) in file.content.lines().enumerate() {
            let trimmed = line.trim_start();
            if trimmed.starts_with("//") {
                continue;
            }
            for rule in rules {
                if line.contains(rule.pattern) {
                    hits.push(format!("  {}:{}: {}", file.path, idx + 1, rule.name));
                }
            }
        }
    }
    hits
}

fn assert_clean(rules: &[Rule], what: &str) {
    let hits = violations(&source_files(), rules);
    assert!(hits.is_empty(), "{what} found in production code:\n{}", hits.join("\n"));
}

#[test]
fn no_panicking_calls() {
    assert_clean(PANICS, "panicking calls");
}

#[test]
fn no_silently_discarded_results() {
    assert_clean(SILENT_LOSS, "discarded results");
}

#[test]
fn no_reactive_or_mutable_state() {
    assert_clean(STATE, "mutable state");
}

#[test]
fn no_dead_code_allowances() {
    assert_clean(STYLE, "dead code allowances");
}
