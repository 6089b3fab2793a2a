//! Crate-wide error types

use thiserror::Error;

/// Errors surfaced by training, dataset synthesis, and chart rendering
#[derive(Debug, Error)]
pub enum Error {
    /// Training was handed zero samples
    #[error("empty dataset: training requires at least one sample")]
    EmptyDataset,

    /// Label count does not match the sample count
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Degenerate blob generator configuration
    #[error("invalid blob configuration: {0}")]
    InvalidBlobs(String),

    /// Loss-curve rendering was requested before any epoch ran
    #[error("empty loss history: train the model before rendering the loss curve")]
    EmptyLossHistory,

    /// Chart backend failure
    #[error("render error: {0}")]
    Render(String),
}

/// Result type for clasificar operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyDataset;
        assert!(format!("{}", err).contains("empty dataset"));

        let err = Error::DimensionMismatch {
            expected: 3,
            actual: 2,
        };
        assert!(format!("{}", err).contains("expected 3"));
        assert!(format!("{}", err).contains("got 2"));

        let err = Error::InvalidBlobs("zero clusters".to_string());
        assert!(format!("{}", err).contains("invalid blob configuration"));
        assert!(format!("{}", err).contains("zero clusters"));

        let err = Error::EmptyLossHistory;
        assert!(format!("{}", err).contains("empty loss history"));

        let err = Error::Render("font not found".to_string());
        assert!(format!("{}", err).contains("render error"));
    }
}
