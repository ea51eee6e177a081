use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Remote error: {operation} - {message}")]
    Remote { operation: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn remote(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error() {
        let error = DomainError::remote("delete_user", "HTTP 500");
        assert_eq!(error.to_string(), "Remote error: delete_user - HTTP 500");
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("bad timeout");
        assert_eq!(error.to_string(), "Configuration error: bad timeout");
    }
}
