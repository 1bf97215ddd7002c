use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::InvalidRule(message) => write!(f, "Invalid page rule: {}", message),
            ConfigurationError::InvalidStore(message) => write!(f, "Invalid store: {}", message),
            ConfigurationError::InvalidLogLevel(level) => write!(f, "Unknown log level: '{}'", level),
        }
    }
}

impl std::error::Error for ConfigurationError {}
