//! SelectionProofread Error Types
//!
//! Every failure of a run is one of these variants. Only `main` turns them
//! into an exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Central error type for SelectionProofread
#[derive(Error, Debug)]
pub enum ProofreadError {
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("Error parsing config file {}: {source}", path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("API key missing in config.")]
    MissingCredential,

    #[error("Unsupported window manager: '{0}'")]
    UnsupportedSession(String),

    #[error("Key injection failed: {0}")]
    InputInjection(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Completion API error ({status}): {message}")]
    CompletionApi { status: u16, message: String },

    #[error("No result from AI.")]
    EmptyResult,

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ProofreadError {
    /// Failures that are reported at warning level rather than error level
    pub fn is_warning(&self) -> bool {
        matches!(self, ProofreadError::EmptyResult)
    }
}

/// Result type alias for SelectionProofread operations
pub type ProofreadResult<T> = Result<T, ProofreadError>;
