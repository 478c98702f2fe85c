use nav_core::NavError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// An error from the shared navigation types, e.g. an unknown agent ID.
    #[error(transparent)]
    Nav(#[from] NavError),

    #[error("simulation configuration error: {0}")]
    Config(String),
}

pub type SimResult<T> = Result<T, SimError>;
