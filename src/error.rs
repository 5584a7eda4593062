use thiserror::Error;

/// Cost model error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CostError {
    /// Horizon, price, rate or amount outside the range the model accepts.
    /// Reaching this from the CLI means clamping was skipped somewhere.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CostError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
