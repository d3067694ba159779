use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersError {
    #[error("Invalid version: {0:?}")]
    InvalidVersion(String),

    #[error("Invalid constraint: {0:?}")]
    InvalidConstraint(String),

    #[error("Invalid vers URI: {0:?}")]
    InvalidUri(String),
}

impl VersError {
    /// The offending input text carried by the error
    pub fn input(&self) -> &str {
        match self {
            VersError::InvalidVersion(s)
            | VersError::InvalidConstraint(s)
            | VersError::InvalidUri(s) => s,
        }
    }
}
