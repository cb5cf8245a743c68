use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of roles an account may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
  Administrator,
  Operator,
  Reader,
}

impl UserType {
  /// Every member of the enumeration
  pub const ALL: [UserType; 3] = [UserType::Administrator, UserType::Operator, UserType::Reader];

  /// Resolves a role from its exact name.
  ///
  /// Membership is decided by exact name match; returns `None` for any other
  /// spelling, including different casing.
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|role| role.as_str() == name)
  }

  /// Returns the canonical name of the role
  pub fn as_str(&self) -> &'static str {
    match self {
      UserType::Administrator => "Administrator",
      UserType::Operator => "Operator",
      UserType::Reader => "Reader",
    }
  }
}

impl fmt::Display for UserType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Persisted account record.
///
/// The only place the password digest lives; it must never cross into the
/// [`ApplicationUser`] projection. Created exactly once at registration and
/// never mutated by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
  /// Store-assigned identifier, immutable after creation
  pub id: i64,
  /// Unique login name, at least four characters
  pub username: String,
  /// Human-facing name
  pub display_name: Option<String>,
  /// Age in years
  pub age: Option<i32>,
  /// Role used for authorization elsewhere
  pub user_type: UserType,
  /// One-way digest of the password, never the plaintext
  pub password_digest: String,
  /// Timestamp when the account was created
  pub created_at: DateTime<Utc>,
}

/// Insert payload for a new account.
///
/// The identifier and creation timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAccount {
  pub username: String,
  pub display_name: Option<String>,
  pub age: Option<i32>,
  pub user_type: UserType,
  pub password_digest: String,
}

/// Read projection of an account without the password digest.
///
/// Constructed on every successful lookup, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationUser {
  /// Store-assigned account identifier
  pub id: i64,
  /// Unique login name
  pub username: String,
  /// Human-facing name
  pub display_name: Option<String>,
  /// Age in years
  pub age: Option<i32>,
  /// Role used for authorization elsewhere
  pub user_type: UserType,
}

impl From<&Account> for ApplicationUser {
  fn from(account: &Account) -> Self {
    Self {
      id: account.id,
      username: account.username.clone(),
      display_name: account.display_name.clone(),
      age: account.age,
      user_type: account.user_type,
    }
  }
}
