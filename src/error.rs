use std::path::PathBuf;

/// Convenience result type used across huepatch.
pub type HuepatchResult<T> = Result<T, HuepatchError>;

/// Top-level error taxonomy used by patcher APIs.
#[derive(thiserror::Error, Debug)]
pub enum HuepatchError {
    /// Invalid call arguments, raised before any I/O is attempted.
    #[error("validation error: {0}")]
    Validation(String),

    /// A file could not be opened, sought, or written.
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HuepatchError {
    /// Build a [`HuepatchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HuepatchError::Io`] value for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
