//! Source-tree scanning helpers for architecture contract tests.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A line of source that matched a rule.
pub type Hit = (String, usize, String);

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn display_path(path: &Path) -> String {
    path.strip_prefix(root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Every `.rs` file under `relative_dir`, sorted.
pub fn rust_sources(relative_dir: &str) -> Vec<PathBuf> {
    let mut pending = vec![root().join(relative_dir)];
    let mut files = Vec::new();

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("failed to read dir {}: {e}", dir.display()));
        for entry in entries {
            let path = entry
                .unwrap_or_else(|e| panic!("failed to read dir entry: {e}"))
                .path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
    }

    files.sort();
    files
}

fn scan<F>(relative_dir: &str, mut keep: F) -> Vec<Hit>
where
    F: FnMut(&Path, &str) -> bool,
{
    let mut hits = Vec::new();
    for file in rust_sources(relative_dir) {
        let content = fs::read_to_string(&file)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", file.display()));
        for (idx, line) in content.lines().enumerate() {
            if keep(&file, line) {
                hits.push((display_path(&file), idx + 1, line.to_string()));
            }
        }
    }
    hits
}

/// Lines under `relative_dir` containing any of `patterns`.
pub fn find_lines_containing(relative_dir: &str, patterns: &[&str]) -> Vec<Hit> {
    scan(relative_dir, |_, line| patterns.iter().any(|p| line.contains(p)))
}

/// Like [`find_lines_containing`], ignoring the listed files.
pub fn find_lines_containing_except_files(
    relative_dir: &str,
    patterns: &[&str],
    allowed_relative_files: &[&str],
) -> Vec<Hit> {
    let allowed: HashSet<&str> = allowed_relative_files.iter().copied().collect();
    find_lines_containing(relative_dir, patterns)
        .into_iter()
        .filter(|(path, _, _)| !allowed.contains(path.as_str()))
        .collect()
}

/// Lines in `mod.rs` files that do more than declare modules.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    scan(relative_dir, |file, raw| {
        if file.file_name().and_then(|name| name.to_str()) != Some("mod.rs") {
            return false;
        }
        let line = raw.trim();
        let allowed = line.is_empty()
            || line.starts_with("//")
            || line.starts_with("#![")
            || line.starts_with("#[cfg")
            || line.starts_with("pub mod ")
            || line.starts_with("mod ");
        !allowed
    })
}

pub fn path_exists(relative_path: &str) -> bool {
    root().join(relative_path).exists()
}

pub fn read_relative(relative_path: &str) -> String {
    fs::read_to_string(root().join(relative_path))
        .unwrap_or_else(|e| panic!("failed to read {relative_path}: {e}"))
}
