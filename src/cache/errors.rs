use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Operation error: {0}")]
    OperationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Memcache error: {0}")]
    MemcacheError(#[from] memcache::MemcacheError),
}

impl From<serde_json::Error> for CacheError {
    fn from(error: serde_json::Error) -> Self {
        CacheError::SerializationError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_display() {
        let error = CacheError::ConnectionError("failed to connect".to_string());
        assert_eq!(format!("{}", error), "Connection error: failed to connect");
    }

    #[test]
    fn test_operation_error_display() {
        let error = CacheError::OperationError("operation failed".to_string());
        assert_eq!(format!("{}", error), "Operation error: operation failed");
    }

    #[test]
    fn test_serialization_error_from_json() {
        let json_error = serde_json::from_str::<u32>("not a number").unwrap_err();
        let error: CacheError = json_error.into();
        assert!(matches!(error, CacheError::SerializationError(_)));
        assert!(format!("{}", error).starts_with("Serialization error: "));
    }

    #[test]
    fn test_error_debug() {
        let error = CacheError::ConnectionError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConnectionError"));
        assert!(debug_str.contains("test"));
    }
}
