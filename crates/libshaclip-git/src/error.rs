use thiserror::Error;

/// Errors that can occur during Git queries
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a git repository: {0}")]
    NotARepo(String),

    #[error("File is outside the repository work tree: {0}")]
    OutsideWorkTree(String),
}
