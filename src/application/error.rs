// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    /// Network failure or non-success status while talking to a remote API.
    #[error("transport error: {0}")]
    Transport(String),

    /// A remote API answered, but not with the shape we expect.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// An upstream provider (PubMed, the LLM) failed on our behalf.
    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Message suitable for a user-facing notice, without the variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(DomainError::Validation(msg) | DomainError::MalformedResponse(msg))
            | Self::Validation(msg)
            | Self::Transport(msg)
            | Self::MalformedResponse(msg)
            | Self::Upstream(msg)
            | Self::Infrastructure(msg) => msg.clone(),
        }
    }

    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            Self::MalformedResponse(_) | Self::Domain(DomainError::MalformedResponse(_))
        )
    }
}
