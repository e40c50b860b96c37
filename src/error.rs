use thiserror::Error;

/// Unified error type for mkversion operations
#[derive(Error, Debug)]
pub enum MkVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Bad branch: {0}")]
    Branch(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in mkversion
pub type Result<T> = std::result::Result<T, MkVersionError>;

impl MkVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        MkVersionError::Config(msg.into())
    }

    /// Create an error for a current branch name that no grammar accepts
    pub fn branch(name: impl Into<String>) -> Self {
        MkVersionError::Branch(name.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        MkVersionError::Repository(msg.into())
    }
}
