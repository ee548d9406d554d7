//! Error types for catalog loading, configuration and generation

use crate::algorithm::layout::LayoutViolation;
use std::fmt;
use std::path::PathBuf;

/// Why a generation request produced no layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonReason {
    /// The search tree was fully explored within budget without a valid completion
    Exhausted,
    /// Every permitted attempt ran out of its iteration budget
    AttemptLimit,
    /// The wall-clock limit elapsed between attempts
    TimeLimit,
}

impl fmt::Display for AbandonReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Exhausted => "search space exhausted",
            Self::AttemptLimit => "attempt limit reached",
            Self::TimeLimit => "time limit reached",
        };
        f.write_str(text)
    }
}

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Catalog contents cannot support generation
    InvalidCatalog {
        /// Description of what's wrong with the catalog
        reason: String,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Catalog file is not valid JSON or doesn't match the catalog schema
    CatalogParse {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying deserialization error
        source: serde_json::Error,
    },

    /// Layout could not be serialized for the renderer
    Serialization {
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An accepted layout failed its final self-check and was not committed
    InvalidLayout {
        /// First broken property found
        violation: LayoutViolation,
    },

    /// No layout could be produced
    Abandoned {
        /// Attempts started before giving up
        attempts: usize,
        /// Search nodes visited across all attempts
        iterations: usize,
        /// What ended the search
        reason: AbandonReason,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid catalog: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::CatalogParse { path, source } => {
                write!(f, "Failed to parse catalog '{}': {source}", path.display())
            }
            Self::Serialization { source } => {
                write!(f, "Failed to serialize layout: {source}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidLayout { violation } => {
                write!(f, "Accepted layout failed verification: {violation}")
            }
            Self::Abandoned {
                attempts,
                iterations,
                reason,
            } => {
                write!(
                    f,
                    "Generation abandoned after {attempts} attempts and {iterations} iterations: {reason}"
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogParse { source, .. } | Self::Serialization { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(reason: &impl ToString) -> GenerationError {
    GenerationError::InvalidCatalog {
        reason: reason.to_string(),
    }
}

/// Attach a path to a file system error
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

impl GenerationError {
    /// Whether this error reports a configuration problem rather than a failed search
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidCatalog { .. } | Self::InvalidParameter { .. } | Self::CatalogParse { .. }
        )
    }
}
