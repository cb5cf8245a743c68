use async_trait::async_trait;

use super::entities::{Account, NewAccount};
use super::errors::RepositoryError;

/// Repository trait for account persistence operations.
///
/// Lookups are exact-match: the identifier is the integer primary key, the
/// username compares by string equality. Username uniqueness is enforced by
/// the store, not re-validated by callers.
#[async_trait]
pub trait AccountRepository: Send + Sync {
  /// Persists a new account as a single atomic operation and returns it with
  /// its store-assigned identifier. No partial record may remain visible
  /// after a failure.
  async fn create(&self, account: NewAccount) -> Result<Account, RepositoryError>;

  /// Finds an account by its store-assigned identifier
  async fn find_by_id(&self, id: i64) -> Result<Option<Account>, RepositoryError>;

  /// Finds an account by exact username match
  async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError>;
}

/// One-way digest function for credentials.
///
/// Deterministic: the same plaintext always maps to the same digest, which is
/// what makes stored-digest comparison at login possible. No inverse is
/// exposed and no failure surfaces at this layer.
pub trait PasswordHasher: Send + Sync {
  fn hash(&self, plaintext: &str) -> String;
}

/// Process-wide mapping from opaque session token to account identifier.
///
/// The registry is the only long-lived shared mutable state in the core; it
/// is appended to on every successful login and torn down with the process.
pub trait SessionRegistry: Send + Sync {
  /// Generates an unguessable token, records `token -> account id` and
  /// returns the token. Tokens are never reused; concurrent calls must not
  /// lose entries or collide.
  fn issue(&self, account_id: i64) -> String;

  /// Resolves a previously issued token to its owning account
  fn resolve(&self, token: &str) -> Option<i64>;
}
