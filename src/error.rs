use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionError {
    #[error("False-positive rate {0} is outside the open interval (0, 1)")]
    Domain(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Series did not converge after {terms} terms (residual bound {residual:e})")]
    NonConvergence { terms: usize, residual: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Special function evaluation failed: {0}")]
    Computation(String),
}

pub type Result<T> = std::result::Result<T, DetectionError>;
