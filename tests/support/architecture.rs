//! Source scanning for layer-boundary checks.

use std::fs;
use std::path::{Path, PathBuf};

/// One offending source line: `(file relative to the crate, line number, text)`.
pub type Hit = (String, usize, String);

fn crate_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn display_path(path: &Path) -> String {
    path.strip_prefix(crate_root())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Every `.rs` file under `relative_dir`, sorted.
fn rust_sources(relative_dir: &str) -> Vec<PathBuf> {
    let mut pending = vec![crate_root().join(relative_dir)];
    let mut sources = Vec::new();

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
        for entry in entries {
            let path = entry.expect("directory entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                sources.push(path);
            }
        }
    }

    sources.sort();
    sources
}

fn scan(relative_dir: &str, keep: impl Fn(&Path) -> bool, flag: impl Fn(&str) -> bool) -> Vec<Hit> {
    let mut hits = Vec::new();
    for file in rust_sources(relative_dir).into_iter().filter(|f| keep(f.as_path())) {
        let source = fs::read_to_string(&file)
            .unwrap_or_else(|e| panic!("cannot read {}: {e}", file.display()));
        for (index, line) in source.lines().enumerate() {
            if flag(line) {
                hits.push((display_path(&file), index + 1, line.to_string()));
            }
        }
    }
    hits
}

/// Lines under `relative_dir` mentioning any of `needles`.
pub fn find_lines_containing(relative_dir: &str, needles: &[&str]) -> Vec<Hit> {
    scan(relative_dir, |_| true, |line| needles.iter().any(|n| line.contains(n)))
}

/// Lines in `mod.rs` files that do more than declare modules.
pub fn find_non_export_lines_in_mod_files(relative_dir: &str) -> Vec<Hit> {
    let is_mod_file = |path: &Path| path.file_name().is_some_and(|name| name == "mod.rs");
    let is_declaration = |line: &str| {
        let line = line.trim();
        line.is_empty()
            || line.starts_with("//")
            || line.starts_with("pub mod ")
            || line.starts_with("mod ")
            || line.starts_with("#[cfg")
    };
    scan(relative_dir, is_mod_file, |line| !is_declaration(line))
}

pub fn path_exists(relative_path: &str) -> bool {
    crate_root().join(relative_path).exists()
}

pub fn read_relative(relative_path: &str) -> String {
    fs::read_to_string(crate_root().join(relative_path))
        .unwrap_or_else(|e| panic!("cannot read {relative_path}: {e}"))
}
