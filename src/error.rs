use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Caller-supplied arguments are malformed (length mismatch, non-finite values).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The target axis lacks the state an operation requires.
    #[error("invalid axis: {0}")]
    InvalidAxis(String),

    /// Render primitives or serialized payloads fail validation.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
