use thiserror::Error;

/// Main error type for shaclip CLI operations
#[derive(Debug, Error)]
pub enum ShaclipError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Resolution failed; the notification already went to stderr.
    #[error("unable to resolve a commit id")]
    ResolveFailed,
}

impl ShaclipError {
    /// Get the error code for JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            ShaclipError::InvalidArgs(_) => "invalid_args",
            ShaclipError::Io(_) => "io_error",
            ShaclipError::ResolveFailed => "resolve_failed",
        }
    }

    /// Get the exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            ShaclipError::InvalidArgs(_) => 2,
            ShaclipError::Io(_) => 5,
            ShaclipError::ResolveFailed => 1,
        }
    }
}
