use thiserror::Error;

/// Numeric and encoding utility errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("fractional part has {digits} digits, unit allows at most {max}")]
    PrecisionOverflow { digits: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, UtilsError>;
