//! Error types for the prerequisite engine

#[cfg(feature = "python")]
use pyo3::exceptions::{PyKeyError, PyOSError, PyValueError};
#[cfg(feature = "python")]
use pyo3::PyErr;
use thiserror::Error;

/// Main error type for the prerequisite engine
#[derive(Error, Debug)]
pub enum PrereqError {
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Invalid UOC clause: {0}")]
    InvalidUocClause(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PrereqError {
    fn from(err: serde_json::Error) -> Self {
        PrereqError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<PrereqError> for PyErr {
    fn from(err: PrereqError) -> PyErr {
        match err {
            PrereqError::CourseNotFound(code) => {
                PyKeyError::new_err(format!("Course not found: {}", code))
            }
            PrereqError::InvalidUocClause(msg) => {
                PyValueError::new_err(format!("Invalid UOC clause: {}", msg))
            }
            PrereqError::DeserializationError(msg) => {
                PyValueError::new_err(format!("Deserialization error: {}", msg))
            }
            PrereqError::Io(e) => PyOSError::new_err(format!("I/O error: {}", e)),
        }
    }
}

/// Result type alias for the prerequisite engine
pub type Result<T> = std::result::Result<T, PrereqError>;
