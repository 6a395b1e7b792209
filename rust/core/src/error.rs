//! Error types for the protocol simulation

use thiserror::Error;

/// Simulation error types
///
/// The taxonomy is deliberately small: fixture misses are normal results
/// (see [`crate::query::Payload`]), so the only real failure class is
/// writing the report artifact.
#[derive(Error, Debug)]
pub enum SimError {
    /// Report I/O errors
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: SimError = io.into();
        assert!(err.to_string().contains("read-only"));
    }
}
