//! Storage Errors
//!
//! Failures of the persistence port. None of these reach the user;
//! the store logs them and carries on.

/// Errors raised while reading or writing the persisted task list
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Backing storage could not be reached (no window, storage disabled, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Persisted value is not a valid task list
    #[error("Malformed task list: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Backing storage rejected the write (quota, private mode, ...)
    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Common result type for persistence operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::Unavailable("no window".to_string());
        assert!(error.to_string().contains("Storage unavailable"));

        let error = StorageError::Write("quota exceeded".to_string());
        assert!(error.to_string().contains("quota exceeded"));

        let parse = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error = StorageError::from(parse);
        assert!(error.to_string().starts_with("Malformed task list"));
    }
}
