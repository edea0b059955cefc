use thiserror::Error;

/// Errors surfaced by the simulation engine and its collaborators.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Grid construction with zero rows or columns.
    #[error("grid dimensions must be at least 1x1")]
    InvalidDimension,

    /// Cell access outside the grid rectangle.
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },

    /// Ragged, empty, or otherwise invalid pattern data.
    #[error("malformed pattern: {0}")]
    MalformedPattern(String),

    /// Rule name not present in the registry.
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// I/O failure while reading or writing a pattern file.
    #[error("pattern file error: {0}")]
    Io(#[from] std::io::Error),
}
