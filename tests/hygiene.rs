//! Hygiene — enforces coding standards at test time.
//!
//! Scans the production sources for antipatterns and pins each to a budget.
//! Budgets only ratchet down: to add an occurrence you must remove one
//! elsewhere first. Panicking macros are banned outright. DOM, style, and
//! storage writes have no recovery path in this crate, so a fixed number of
//! deliberately discarded `Result`s is allowed.

use std::fs;
use std::path::Path;

/// (pattern, budget). The budget is the current count, never more.
const BUDGETS: &[(&str, usize)] = &[
    // Panics — these crash the page.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss — discarding errors without inspecting them.
    ("let _ =", 21),
    (".ok()", 7),
    // Style / structure.
    ("#[allow(dead_code)]", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs` companions.
fn source_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_lines_containing(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 { Some((file.path.clone(), count)) } else { None }
        })
        .collect()
}

#[test]
fn source_stays_within_hygiene_budgets() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut overruns = Vec::new();
    for &(pattern, budget) in BUDGETS {
        let hits = count_lines_containing(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail = hits
                .iter()
                .map(|(path, c)| format!("  {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            overruns.push(format!("`{pattern}` budget exceeded: found {count}, max {budget}\n{detail}"));
        }
    }

    assert!(overruns.is_empty(), "hygiene budget overruns:\n{}", overruns.join("\n"));
}
