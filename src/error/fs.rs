//! File system errors

use super::PrionError;

/// Creates a staging failed error
pub fn staging_failed(path: impl Into<String>, reason: impl Into<String>) -> PrionError {
    PrionError::StagingFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PrionError {
    PrionError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
#[cfg(test)]
pub fn io_error(message: impl Into<String>) -> PrionError {
    PrionError::IoError {
        message: message.into(),
        source: None,
    }
}
