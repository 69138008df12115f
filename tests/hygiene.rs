//! Source hygiene for the shapeboard library.
//!
//! Scans every production file under `src/` (sibling `_test.rs` modules are
//! exempt) and holds each pattern to a fixed budget. Comment lines are not
//! counted. A budget only ever goes down.

use std::fs;
use std::path::{Path, PathBuf};

/// A pattern and the most occurrences the library may contain.
struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

const fn budget(pattern: &'static str, max: usize, hint: &'static str) -> Budget {
    Budget { pattern, max, hint }
}

// ── Panics ──────────────────────────────────────────────────────

const PANICKING: &[Budget] = &[
    budget(".unwrap()", 0, "propagate with `?` or handle the None/Err arm"),
    budget(".expect(", 0, "propagate with `?` or handle the None/Err arm"),
    budget("panic!(", 0, "return an error instead"),
    budget("unreachable!(", 0, "make the state unrepresentable"),
    budget("todo!(", 0, "finish the stub"),
    budget("unimplemented!(", 0, "finish the stub"),
];

// ── Silent loss ─────────────────────────────────────────────────

const DISCARDING: &[Budget] = &[
    budget("let _ =", 0, "log the error with tracing or return it"),
    budget(".ok()", 0, "log the error with tracing or return it"),
];

// ── Output ──────────────────────────────────────────────────────

const PRINTING: &[Budget] = &[
    budget("println!(", 0, "use tracing"),
    budget("eprintln!(", 0, "use tracing"),
    budget("print!(", 0, "use tracing"),
    budget("dbg!(", 0, "use tracing"),
];

// ── Geometry and indexing ───────────────────────────────────────

/// Coordinates are `f64` end to end; widening goes through `f64::from`.
/// The single `as usize` is the handle discriminant indexing the border's
/// fixed eight-box table.
const CASTS: &[Budget] = &[
    budget(" as usize", 1, "index by a typed enum discriminant only"),
    budget(" as f64", 0, "use f64::from"),
    budget(" as f32", 0, "coordinates stay f64"),
    budget(" as u32", 0, "canvas sizes arrive as u32 already"),
    budget(" as i32", 0, "coordinates stay f64"),
];

const UNSAFE: &[Budget] = &[budget("unsafe ", 0, "the library has no FFI of its own")];

const ALLOWANCES: &[Budget] = &[
    budget("#[allow(dead_code)]", 0, "delete the dead code"),
    budget("#[allow(unused", 0, "delete the unused item"),
];

// =============================================================
// Scanner
// =============================================================

struct Source {
    path: PathBuf,
    text: String,
}

impl Source {
    fn name(&self) -> String {
        self.path
            .strip_prefix(src_dir())
            .unwrap_or(self.path.as_path())
            .display()
            .to_string()
    }

    /// Lines that carry code, with their 1-based numbers.
    fn code_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with("//"))
            .map(|(i, line)| (i + 1, line))
    }
}

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Every production `.rs` file under `src/`.
fn library_sources() -> Vec<Source> {
    let mut pending = vec![src_dir()];
    let mut sources = Vec::new();
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
                continue;
            }
            let is_rs = path.extension().is_some_and(|e| e == "rs");
            let is_test = path.to_string_lossy().ends_with("_test.rs");
            if is_rs && !is_test {
                let text = fs::read_to_string(&path).unwrap();
                sources.push(Source { path, text });
            }
        }
    }
    assert!(!sources.is_empty(), "no sources found under {}", src_dir().display());
    sources
}

/// Check each budget and report every overrun with the offending lines.
fn enforce(group: &str, budgets: &[Budget]) {
    let sources = library_sources();
    let mut failures = Vec::new();

    for b in budgets {
        let hits: Vec<String> = sources
            .iter()
            .flat_map(|src| {
                src.code_lines()
                    .filter(|(_, line)| line.contains(b.pattern))
                    .map(|(n, line)| format!("    {}:{n}: {}", src.name(), line.trim()))
                    .collect::<Vec<_>>()
            })
            .collect();

        if hits.len() > b.max {
            failures.push(format!(
                "  `{}` found {} times, budget {} ({}):\n{}",
                b.pattern,
                hits.len(),
                b.max,
                b.hint,
                hits.join("\n")
            ));
        }
    }

    assert!(failures.is_empty(), "{group} over budget:\n{}", failures.join("\n"));
}

// =============================================================
// Budgets
// =============================================================

#[test]
fn library_never_panics() {
    enforce("panicking calls", PANICKING);
}

#[test]
fn errors_are_never_silently_dropped() {
    enforce("discarded results", DISCARDING);
}

#[test]
fn output_goes_through_tracing() {
    enforce("direct output", PRINTING);
}

#[test]
fn numeric_casts_stay_within_budget() {
    enforce("numeric casts", CASTS);
}

#[test]
fn library_has_no_unsafe_code() {
    enforce("unsafe code", UNSAFE);
}

#[test]
fn no_lint_allowances_for_dead_code() {
    enforce("lint allowances", ALLOWANCES);
}

// =============================================================
// Layout
// =============================================================

/// Modules with behavior keep their unit tests in a sibling `<name>_test.rs`.
#[test]
fn every_module_declares_its_sibling_tests() {
    let exempt = ["lib.rs", "consts.rs"];
    let mut missing = Vec::new();

    for src in library_sources() {
        let name = src.name();
        if exempt.contains(&name.as_str()) {
            continue;
        }
        let stem = name.trim_end_matches(".rs");
        let attr = format!("#[path = \"{stem}_test.rs\"]");
        let sibling = src.path.with_file_name(format!("{stem}_test.rs"));
        if !src.text.contains(&attr) || !sibling.is_file() {
            missing.push(name);
        }
    }

    assert!(missing.is_empty(), "modules without sibling tests: {missing:?}");
}
