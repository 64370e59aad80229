use gengrad_core::GenGradError;
use thiserror::Error;

/// Errors raised while building or running a network.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum NnError {
    #[error("Invalid MLP sizes {sizes:?}: need an input size and at least one layer, all non-zero")]
    InvalidSizes { sizes: Vec<usize> },

    #[error("Input size mismatch: expected {expected} inputs, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid initializer: {0}")]
    InvalidInit(String),

    #[error("Engine error: {0}")]
    Engine(#[from] GenGradError),
}

pub type Result<T> = std::result::Result<T, NnError>;
