//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the web admin console
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Menu registration error
    #[error("Menu registration error: {message}")]
    MenuRegistration {
        /// Description of the registration failure
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },
}

impl Error {
    /// Create a configuration error from a message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a menu registration error from a message
    pub fn menu_registration(message: impl Into<String>) -> Self {
        Self::MenuRegistration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_message() {
        let err = Error::menu_registration("duplicate token");
        assert_eq!(err.to_string(), "Menu registration error: duplicate token");
    }

    #[test]
    fn test_config_error_constructor() {
        let err = Error::config("missing file");
        assert!(matches!(err, Error::Configuration { source: None, .. }));
    }
}
