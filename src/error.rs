//! Application-wide error type
//!
//! Provides a unified error that can be propagated with `?` throughout the
//! application and converted into an HTTP response at the controller boundary.

use thiserror::Error;

/// Application-wide error type
///
/// # Example
///
/// ```rust,ignore
/// pub async fn execute(&self) -> Result<Vec<TodoItem>, AppError> {
///     let rows = todos::Entity::find().all(self.db.inner()).await?; // DbErr converts automatically
///     Ok(rows)
/// }
/// ```
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Malformed request (unreadable or unparsable body)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Generic internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Create a BadRequest error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Database(_) => 500,
            Self::BadRequest(_) => 400,
            Self::Internal(_) => 500,
        }
    }
}

// Implement From<DbErr> for automatic error conversion with ?
impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::database("boom").status_code(), 500);
        assert_eq!(AppError::bad_request("nope").status_code(), 400);
        assert_eq!(AppError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_db_err_conversion() {
        let err: AppError = sea_orm::DbErr::Custom("no such table".to_string()).into();
        assert!(matches!(err, AppError::Database(_)));
    }
}
