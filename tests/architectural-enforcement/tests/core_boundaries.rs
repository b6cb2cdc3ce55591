//! Integration Test: Core Boundaries
//!
//! **Policy**:
//! - The reducer modules of `misskey-core` are synchronous: no `.await`, no
//!   spawning, no network or file access, no sleeping
//! - `misskey-core` never imports the terminal stack
//! - Production code in both crates does not `unwrap()` or `expect()`

use std::fs;
use std::path::Path;

use architectural_enforcement::{code_part, production_lines, workspace_root};

/// Modules reduced on the event loop thread
const REDUCER_MODULES: &[&str] = &[
    "core/src/session.rs",
    "core/src/detail.rs",
    "core/src/layout.rs",
    "core/src/event.rs",
    "core/src/model.rs",
    "core/src/emoji/mod.rs",
];

const FORBIDDEN_IN_REDUCER: &[(&str, &str)] = &[
    (".await", "Awaiting"),
    ("tokio::spawn", "Task spawn"),
    ("spawn_blocking", "Blocking task spawn"),
    ("std::thread::sleep", "Sleep"),
    ("tokio::time::sleep", "Sleep"),
    ("reqwest::", "Network access"),
    ("std::fs", "File access"),
];

const TERMINAL_CRATES: &[&str] = &["ratatui", "crossterm"];

/// Test that the reducer never blocks or awaits
#[test]
fn test_reducer_is_synchronous() {
    let mut violations = Vec::new();
    for module in REDUCER_MODULES {
        let path = workspace_root().join(module);
        scan_file(&path, &mut violations, |code| {
            FORBIDDEN_IN_REDUCER
                .iter()
                .find(|(pattern, _)| code.contains(pattern))
                .map(|(_, what)| *what)
        });
    }
    report("Reducer modules must stay synchronous", &violations);
}

/// Test that the core crate does not depend on the terminal stack
#[test]
fn test_core_is_headless() {
    let mut violations = Vec::new();
    check_directory(&workspace_root().join("core/src"), &mut violations, |code| {
        TERMINAL_CRATES
            .iter()
            .find(|name| code.contains(&format!("{name}::")))
            .map(|_| "Terminal crate in core")
    });

    let manifest = fs::read_to_string(workspace_root().join("core/Cargo.toml"))
        .expect("core manifest is readable");
    for name in TERMINAL_CRATES {
        if manifest.lines().any(|line| line.trim_start().starts_with(name)) {
            violations.push(format!("core/Cargo.toml - depends on {name}"));
        }
    }
    report("misskey-core must stay headless", &violations);
}

/// Test that production code propagates errors
#[test]
fn test_no_unwrap_in_production_code() {
    let mut violations = Vec::new();
    for dir in ["core/src", "tui/src"] {
        check_directory(&workspace_root().join(dir), &mut violations, |code| {
            (code.contains(".unwrap()") || code.contains(".expect(")).then_some("Unwrap")
        });
    }
    report("Production code must not unwrap", &violations);
}

fn check_directory(
    dir: &Path,
    violations: &mut Vec<String>,
    check: impl Fn(&str) -> Option<&'static str> + Copy,
) {
    assert!(dir.exists(), "missing source directory {}", dir.display());
    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
            scan_file(entry.path(), violations, check);
        }
    }
}

fn scan_file(
    path: &Path,
    violations: &mut Vec<String>,
    check: impl Fn(&str) -> Option<&'static str>,
) {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));

    for (idx, line) in production_lines(&content).iter().enumerate() {
        if let Some(what) = check(code_part(line)) {
            violations.push(format!(
                "{}:{} - {}: {}",
                path.display(),
                idx + 1,
                what,
                line.trim()
            ));
        }
    }
}

fn report(policy: &str, violations: &[String]) {
    if violations.is_empty() {
        return;
    }
    eprintln!("\n❌ {policy}\n");
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }
    panic!("\nFound {} violation(s).", violations.len());
}
