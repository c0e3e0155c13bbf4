use thiserror::Error;

/// Everything that can go wrong while driving the bar.
///
/// None of these reach the user: the controller logs them and the affected
/// feature simply does nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("element `{0}` not found")]
    MissingElement(&'static str),

    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("collaborator `{0}` unavailable")]
    CollaboratorUnavailable(&'static str),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

pub type NavResult<T> = Result<T, NavError>;
