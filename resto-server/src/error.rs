//! Bridge from repository errors to the API error type
//!
//! Lets handlers use `?` on repository calls: unique violations surface as
//! 409, everything else as a 500 carrying the database message.

use shared::error::{AppError, ErrorCode};

use crate::db::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate(what) => {
                tracing::warn!(constraint = %what, "Unique constraint violated");
                AppError::new(ErrorCode::AlreadyExists).with_detail("conflict", what)
            }
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_repo_error_status() {
        let err: AppError = RepoError::Duplicate("categories_name_key".into()).into();
        assert_eq!(err.http_status(), StatusCode::CONFLICT);

        let err: AppError = RepoError::Database("relation \"menu\" does not exist".into()).into();
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "relation \"menu\" does not exist");
    }
}
