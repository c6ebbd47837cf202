pub mod app_config;

pub use app_config::Config;

/// Broad classification of every failure the shop and milking log can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input: unknown component, day out of range, bad or repeated cow id.
    Validation,
    /// A finite resource ran out (inventory).
    ResourceExhausted,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::ValidationError(_) | CoreError::Configuration(_) => ErrorKind::Validation,
            CoreError::ResourceExhausted(_) => ErrorKind::ResourceExhausted,
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = CoreError::ValidationError("Invalid component choice".to_string());
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = CoreError::ResourceExhausted("processor is out of stock".to_string());
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(err.to_string(), "Resource exhausted: processor is out of stock");
    }
}
