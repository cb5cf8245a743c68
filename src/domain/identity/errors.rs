use thiserror::Error;

/// Typed failures from the account store collaborator.
///
/// The service never inspects storage-specific causes; every variant is
/// downgraded to an unknown-error result at the operation boundary. The
/// variants exist so adapters and logs can stay precise.
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Transaction failed: {0}")]
  TransactionFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

// sqlx errors are translated here, at the collaborator boundary, so the
// service only ever sees explicit error values.
impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_row_not_found_maps_to_not_found() {
    let error = RepositoryError::from(sqlx::Error::RowNotFound);
    assert!(matches!(error, RepositoryError::NotFound));
  }

  #[test]
  fn test_pool_errors_map_to_connection_failed() {
    assert!(matches!(
      RepositoryError::from(sqlx::Error::PoolTimedOut),
      RepositoryError::ConnectionFailed(_)
    ));
    assert!(matches!(
      RepositoryError::from(sqlx::Error::PoolClosed),
      RepositoryError::ConnectionFailed(_)
    ));
  }

  #[test]
  fn test_duplicate_key_message_survives() {
    let error = RepositoryError::DuplicateKey("accounts_username_key".to_string());
    assert_eq!(
      error.to_string(),
      "Duplicate key violation: accounts_username_key"
    );
  }
}
