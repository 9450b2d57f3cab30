//! Error types for search path validation

use thiserror::Error;

/// The error type for strict search criteria validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchPathError {
    /// A required segment (category or city) is empty after normalization
    #[error("Empty {field} segment - category and city are required")]
    EmptySegment { field: &'static str },

    /// Category is inserted verbatim, so it must already be a slug
    #[error("Category is not a normalized slug: {category:?}")]
    UnnormalizedCategory { category: String },

    /// A segment would contain a path separator and split the path
    #[error("Invalid {field} segment: {value:?} contains '/'")]
    InvalidSegment { field: &'static str, value: String },

    /// Pincode contains whitespace
    #[error("Invalid pincode: {pincode:?}")]
    InvalidPincode { pincode: String },
}

/// Result type for search path operations
pub type Result<T> = std::result::Result<T, SearchPathError>;
