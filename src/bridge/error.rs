use thiserror::Error;

/// Failure reported by an external host call (activation, API lookup,
/// resolver registration).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HostError {
    message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why the one-time registration sequence aborted.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("consumer extension is not installed")]
    ConsumerUnavailable,

    #[error("consumer extension exposes no provider API at version {0}")]
    ProviderApiUnavailable(String),

    #[error("backend does not support {method} version {expected} (declared: {found:?})")]
    CapabilityUnsupported {
        method: String,
        expected: String,
        found: Option<String>,
    },

    #[error("host call failed: {0}")]
    Host(#[from] HostError),
}

impl RegistrationError {
    /// True for the expected "optional integration not present" aborts,
    /// which are logged at debug rather than error level.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, Self::Host(_))
    }
}

/// Failure of one forwarded resolve call. Scoped to that single
/// request; later requests start fresh.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("backend request failed: {0}")]
    Backend(String),

    #[error("request was cancelled")]
    Cancelled,
}
