//! Hygiene: enforces coding standards at test time.
//!
//! Scans the client source tree for antipatterns. Each has a budget, ideally
//! zero. Adding one means fixing an existing one first; budgets never grow.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    hint: &'static str,
}

// Panics: these abort the wasm module and freeze the page.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, hint: "propagate or log instead" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, hint: "propagate or log instead" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, hint: "return an error" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, hint: "make the state unrepresentable" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, hint: "finish the stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, hint: "finish the stub" };

// Silent loss: discards errors without inspecting.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, hint: "log the error" };
// `Response::ok()` status checks in net/api.rs count here too.
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 4, hint: "match and log the error" };

// Raw HTML injection is reserved for sanitized assistant markdown.
const INNER_HTML: Budget = Budget { pattern: "inner_html=", max: 1, hint: "render text nodes" };

// The leptos prelude's `ElementExt::style(value)` shadows the web-sys getter,
// so a bare `.style()` on a DOM node fails to compile in csr builds.
const BARE_STYLE_GETTER: Budget =
    Budget { pattern: ".style()", max: 0, hint: "call web_sys::HtmlElement::style(&el)" };

// Style / structure.
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, hint: "delete the code" };

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, skipping `_test.rs` siblings.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn enforce(budget: &Budget) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");

    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|f| (f.path.clone(), f.content.lines().filter(|l| l.contains(budget.pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");

    assert!(
        found <= budget.max,
        "`{}` budget exceeded: found {found}, max {} ({}).\n{listing}",
        budget.pattern,
        budget.max,
        budget.hint,
    );
}

#[test]
fn unwrap_budget() {
    enforce(&UNWRAP);
}

#[test]
fn expect_budget() {
    enforce(&EXPECT);
}

#[test]
fn panic_budget() {
    enforce(&PANIC);
}

#[test]
fn unreachable_budget() {
    enforce(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    enforce(&TODO);
}

#[test]
fn unimplemented_budget() {
    enforce(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    enforce(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    enforce(&DOT_OK);
}

#[test]
fn inner_html_budget() {
    enforce(&INNER_HTML);
}

#[test]
fn bare_style_getter_budget() {
    enforce(&BARE_STYLE_GETTER);
}

#[test]
fn allow_dead_code_budget() {
    enforce(&ALLOW_DEAD_CODE);
}
