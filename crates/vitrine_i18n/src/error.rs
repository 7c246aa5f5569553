use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("catalog parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to read preferences {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("corrupt preference file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
