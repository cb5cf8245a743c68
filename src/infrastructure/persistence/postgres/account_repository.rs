use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::domain::identity::entities::{Account, NewAccount, UserType};
use crate::domain::identity::errors::RepositoryError;
use crate::domain::identity::ports::AccountRepository;
use crate::infrastructure::config::DatabaseConfig;

/// Builds a Postgres connection pool from configuration
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
  let connecting = PgPoolOptions::new()
    .max_connections(config.max_connections)
    .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
    .connect(&config.url);

  tokio::time::timeout(Duration::from_secs(config.connect_timeout_seconds), connecting)
    .await
    .map_err(|_| sqlx::Error::PoolTimedOut)?
}

/// Database row structure for the accounts table
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
  id: i64,
  username: String,
  display_name: Option<String>,
  age: Option<i32>,
  user_type: String,
  password_digest: String,
  created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
  type Error = RepositoryError;

  fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
    let user_type = UserType::from_name(&row.user_type).ok_or_else(|| {
      RepositoryError::DatabaseError(format!("unknown user type: {}", row.user_type))
    })?;

    Ok(Account {
      id: row.id,
      username: row.username,
      display_name: row.display_name,
      age: row.age,
      user_type,
      password_digest: row.password_digest,
      created_at: row.created_at,
    })
  }
}

/// PostgreSQL implementation of the AccountRepository trait
pub struct PgAccountRepository {
  pool: PgPool,
}

impl PgAccountRepository {
  /// Creates a new PgAccountRepository with the given connection pool
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
  /// Inserts the account inside a single transaction.
  ///
  /// A failure drops the transaction and rolls it back, so no partial record
  /// stays visible to subsequent reads.
  async fn create(&self, account: NewAccount) -> Result<Account, RepositoryError> {
    let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;

    let result = sqlx::query_as::<_, AccountRow>(
      r#"
            INSERT INTO accounts (username, display_name, age, user_type, password_digest)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, display_name, age, user_type, password_digest, created_at
            "#,
    )
    .bind(&account.username)
    .bind(&account.display_name)
    .bind(account.age)
    .bind(account.user_type.as_str())
    .bind(&account.password_digest)
    .fetch_one(&mut *tx)
    .await;

    let row = match result {
      Ok(row) => row,
      Err(e) => {
        tracing::error!("Failed to create account: {}", e);
        return Err(e.into());
      }
    };

    tx.commit()
      .await
      .map_err(|e| RepositoryError::TransactionFailed(e.to_string()))?;

    row.try_into()
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Account>, RepositoryError> {
    let result = sqlx::query_as::<_, AccountRow>(
      r#"
            SELECT id, username, display_name, age, user_type, password_digest, created_at
            FROM accounts
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await;

    match result {
      Ok(Some(row)) => Ok(Some(row.try_into()?)),
      Ok(None) => Ok(None),
      Err(e) => {
        tracing::error!("Failed to find account by id: {}", e);
        Err(e.into())
      }
    }
  }

  async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError> {
    let result = sqlx::query_as::<_, AccountRow>(
      r#"
            SELECT id, username, display_name, age, user_type, password_digest, created_at
            FROM accounts
            WHERE username = $1
            "#,
    )
    .bind(username)
    .fetch_optional(&self.pool)
    .await;

    match result {
      Ok(Some(row)) => Ok(Some(row.try_into()?)),
      Ok(None) => Ok(None),
      Err(e) => {
        tracing::error!("Failed to find account by username: {}", e);
        Err(e.into())
      }
    }
  }
}
