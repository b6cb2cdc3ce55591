//! Architectural Enforcement Integration Tests
//!
//! Source scans that keep the workspace honest:
//! - The session reducer and its helpers never block or await
//! - `misskey-core` stays headless (no terminal crates)
//! - Production code propagates errors instead of unwrapping
//!
//! The checks live under `tests/`; this library only locates the sources.

use std::path::{Path, PathBuf};

/// Workspace root, two levels above this crate
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Lines of a source file before its `#[cfg(test)]` module
pub fn production_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .take_while(|line| !line.trim_start().starts_with("#[cfg(test)]"))
        .collect()
}

/// Code part of a line, with any `//` comment removed
pub fn code_part(line: &str) -> &str {
    line.split("//").next().unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_lines_stop_at_test_module() {
        let source = "fn a() {}\n#[cfg(test)]\nmod tests {}\n";
        assert_eq!(production_lines(source), vec!["fn a() {}"]);
    }

    #[test]
    fn test_code_part_drops_comments() {
        assert_eq!(code_part("let x = 1; // .await"), "let x = 1; ");
    }
}
