use thiserror::Error;

/// Why a completion request failed. Auth and model errors are worth
/// distinguishing because the fix is on the user's side, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionErrorKind {
    /// Rejected credential (401/403).
    Auth,
    /// The configured model is unknown or not enabled for this key.
    ModelNotEnabled,
    /// Anything else: connect/timeout failures, 5xx, undecodable body.
    Transport,
}

impl std::fmt::Display for CompletionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth => write!(f, "authentication"),
            Self::ModelNotEnabled => write!(f, "model not enabled"),
            Self::Transport => write!(f, "transport"),
        }
    }
}

/// All failure modes of a run. Every error aborts the run; nothing is
/// retried or recovered locally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown case identifier: {0}")]
    UnknownCase(String),

    #[error("failed to fetch opinion: {0}")]
    Fetch(String),

    #[error("completion request failed ({kind}): {message}")]
    Completion {
        kind: CompletionErrorKind,
        message: String,
    },

    #[error("could not parse model response: {0}")]
    Parse(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn completion(kind: CompletionErrorKind, message: impl Into<String>) -> Self {
        Self::Completion {
            kind,
            message: message.into(),
        }
    }
}
