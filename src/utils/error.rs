use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing field '{field}' in record {index}")]
    MissingField { field: String, index: usize },

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("System error: {0}")]
    System(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field_and_record() {
        let err = AppError::MissingField {
            field: "active".to_string(),
            index: 3,
        };
        assert_eq!(err.to_string(), "Missing field 'active' in record 3");
    }

    #[test]
    fn file_not_found_carries_the_path() {
        let err = AppError::FileNotFound("data/users.csv".to_string());
        assert!(err.to_string().contains("data/users.csv"));
    }
}
