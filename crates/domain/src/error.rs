use std::path::PathBuf;

/// Shared error type used across all handoff crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config at {}: {message}", path.display())]
    ConfigRead { path: PathBuf, message: String },

    #[error("failed to parse config at {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// An explicitly named optional input (selection, diff) does not exist.
    #[error("{label} file not found: {}", path.display())]
    MissingInput { label: String, path: PathBuf },

    #[error("template not found for role '{role}' at {}", path.display())]
    TemplateNotFound { role: String, path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
