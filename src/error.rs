//! Error handling for the DSPFlow engine
//!
//! This module defines the crate error type and a Result alias for use
//! throughout the library.

use thiserror::Error;

/// Main error type for DSPFlow operations
#[derive(Error, Debug)]
pub enum DspFlowError {
    /// A step type name that is not present in the factory registry
    #[error("Unknown step type: {0}")]
    UnknownStep(String),

    /// A processing mode string other than `single` or `batch`
    #[error("Invalid processing mode: {0}")]
    InvalidMode(String),

    /// A step parameter outside its accepted domain
    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<DspFlowError>,
    },
}

impl DspFlowError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        DspFlowError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Shorthand for an [`DspFlowError::InvalidParameter`]
    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        DspFlowError::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for DSPFlow operations
pub type Result<T> = std::result::Result<T, DspFlowError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DspFlowError::UnknownStep("Resample".to_string());
        assert_eq!(err.to_string(), "Unknown step type: Resample");
    }

    #[test]
    fn test_error_with_context() {
        let err = DspFlowError::Config("missing field".to_string());
        let with_ctx = err.with_context("Failed to load engine config");
        assert!(with_ctx.to_string().contains("Failed to load engine config"));
        assert!(with_ctx.to_string().contains("missing field"));
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = DspFlowError::invalid_parameter("alpha", "must be finite");
        assert_eq!(err.to_string(), "Invalid parameter alpha: must be finite");
    }

    #[test]
    fn test_result_ext_lazy_context() {
        let res: Result<()> = Err(DspFlowError::InvalidMode("stream".to_string()));
        let err = res.with_context(|| "set_step_mode".to_string()).unwrap_err();
        assert!(err.to_string().starts_with("set_step_mode: "));
    }
}
