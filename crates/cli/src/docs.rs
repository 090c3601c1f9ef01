use std::path::{Path, PathBuf};

use hk_contextpack::DocSource;
use hk_domain::trace::TraceEvent;

/// Read a text file, replacing invalid UTF-8 instead of failing.
pub fn read_text_lossy(path: &Path) -> std::io::Result<String> {
    Ok(decode_lossy(std::fs::read(path)?))
}

/// Decode bytes as UTF-8, replacing invalid sequences.
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Reads project documents relative to the project root.
///
/// No caching: every pack build reads the files it needs once.
pub struct DocReader {
    root: PathBuf,
}

impl DocReader {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl DocSource for DocReader {
    fn read_doc(&self, rel_path: &str) -> Option<String> {
        let path = self.root.join(rel_path);
        if !path.is_file() {
            TraceEvent::DocRead {
                path: rel_path.to_string(),
                raw_chars: 0,
                found: false,
            }
            .emit();
            return None;
        }

        match read_text_lossy(&path) {
            Ok(content) => {
                TraceEvent::DocRead {
                    path: rel_path.to_string(),
                    raw_chars: content.chars().count(),
                    found: true,
                }
                .emit();
                Some(content)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read document, skipping");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_existing_doc_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/NOW.md"), "focus").unwrap();

        let reader = DocReader::new(dir.path().to_path_buf());
        assert_eq!(reader.read_doc("docs/NOW.md").as_deref(), Some("focus"));
    }

    #[test]
    fn missing_doc_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let reader = DocReader::new(dir.path().to_path_buf());
        assert_eq!(reader.read_doc("docs/NOW.md"), None);
    }

    #[test]
    fn directory_is_not_a_doc() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("docs/NOW.md")).unwrap();
        let reader = DocReader::new(dir.path().to_path_buf());
        assert_eq!(reader.read_doc("docs/NOW.md"), None);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, [b'o', b'k', 0xFF, b'!']).unwrap();
        assert_eq!(read_text_lossy(&path).unwrap(), "ok\u{FFFD}!");
    }
}
