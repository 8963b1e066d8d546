use thiserror::Error;

/// Errors that can occur while building a search tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A rating fell outside the domain of the strength transform
    /// (finite, `x > -1`).
    #[error("rating {value} is outside the strength domain (must be finite and greater than -1)")]
    Domain { value: f64 },
}

/// Convenience Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
