//! Expense loading error types.

/// Errors that can occur while loading expenses. Every variant is a load
/// failure and is handled the same way by the view; the variants only make
/// the log line more useful.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error (status {status}): {body}")]
    Status { status: u16, body: String },

    /// Body was not a JSON list of expenses
    #[error("Failed to deserialize expenses: {0}")]
    Deserialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_status_display() {
        let error = LoadError::Status {
            status: 404,
            body: "Not found".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("404"));
        assert!(error_str.contains("Not found"));
    }

    #[test]
    fn test_load_error_from_serde() {
        let serde_error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let error: LoadError = serde_error.into();
        assert!(matches!(error, LoadError::Deserialization(_)));
        assert!(error.to_string().contains("Failed to deserialize expenses"));
    }
}
