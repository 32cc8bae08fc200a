use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterleavingError {
    /// A caller-supplied value broke a precondition. Nothing partial is returned.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Sampling could not place a draw inside the breakpoints. Indicates a bug in
    /// breakpoint construction, never bad input.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
    #[error("config error: {0}")]
    Config(String),
}

impl InterleavingError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        InterleavingError::InvalidArgument(message.into())
    }
}

pub type Result<T, E = InterleavingError> = std::result::Result<T, E>;

pub(crate) fn validate_tau(tau: f64) -> Result<f64> {
    if tau.is_finite() && tau > 0.0 {
        Ok(tau)
    } else {
        Err(InterleavingError::invalid(format!(
            "tau must be finite and positive, got {}",
            tau
        )))
    }
}
