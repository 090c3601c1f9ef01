use std::path::{Path, PathBuf};

/// Marker document identifying a project root.
const CONTEXT_MARKER: &str = "docs/PROJECT_CONTEXT.md";

/// Walk upward from `start` to the nearest project root.
///
/// A directory is a root if it holds `docs/PROJECT_CONTEXT.md` or `.git`.
/// Falls back to `start` itself. The result is always absolute: canonical
/// when `start` exists, otherwise made absolute against the working directory.
pub fn find_project_root(start: &Path) -> PathBuf {
    let start = std::fs::canonicalize(start)
        .or_else(|_| std::path::absolute(start))
        .unwrap_or_else(|_| start.to_path_buf());

    for dir in start.ancestors() {
        if dir.join(CONTEXT_MARKER).exists() || dir.join(".git").exists() {
            tracing::debug!(root = %dir.display(), "project root found");
            return dir.to_path_buf();
        }
    }

    tracing::debug!(root = %start.display(), "no project marker found, using start directory");
    start
}
