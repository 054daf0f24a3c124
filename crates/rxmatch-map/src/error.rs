//! Error types for matcher configuration.

use thiserror::Error;

/// Invalid matcher options. Lookups themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("window length must be at least 1")]
    InvalidWindow,

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatchError::InvalidThreshold {
            name: "inner_threshold",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "inner_threshold must be within [0, 1], got 1.5");
    }
}
