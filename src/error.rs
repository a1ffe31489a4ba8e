use thiserror::Error;

/// Top-level error type for the rigid3 toolkit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rigid3Error {
    #[error("index {index} is out of range [0, 2]")]
    IndexOutOfRange { index: usize },

    #[error("expected exactly {expected} elements, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Convenience type alias for results using [`Rigid3Error`].
pub type Result<T> = std::result::Result<T, Rigid3Error>;
