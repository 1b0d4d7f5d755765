//! Configuration and vimrc errors

use super::PrionError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> PrionError {
    PrionError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PrionError {
    PrionError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> PrionError {
    PrionError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a vimrc not found error
pub fn vimrc_not_found(path: impl Into<String>) -> PrionError {
    PrionError::VimrcNotFound { path: path.into() }
}

/// Creates an editor failed error
pub fn editor_failed(editor: impl Into<String>, reason: impl Into<String>) -> PrionError {
    PrionError::EditorFailed {
        editor: editor.into(),
        reason: reason.into(),
    }
}
