use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::identity::entities::{Account, NewAccount};
use crate::domain::identity::errors::RepositoryError;
use crate::domain::identity::ports::AccountRepository;

/// In-memory implementation of the AccountRepository trait.
///
/// Mirrors the relational store's contract: identifiers come from a
/// monotonically increasing sequence and username uniqueness is enforced at
/// insert, so the store stays the final arbiter for concurrent duplicate
/// registrations. Backs tests and embedded deployments.
#[derive(Debug)]
pub struct InMemoryAccountRepository {
  accounts: RwLock<HashMap<i64, Account>>,
  next_id: AtomicI64,
}

impl InMemoryAccountRepository {
  /// Creates an empty store with identifiers starting at 1
  pub fn new() -> Self {
    Self {
      accounts: RwLock::new(HashMap::new()),
      next_id: AtomicI64::new(1),
    }
  }
}

impl Default for InMemoryAccountRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
  async fn create(&self, account: NewAccount) -> Result<Account, RepositoryError> {
    let mut accounts = self.accounts.write().expect("account store lock poisoned");

    let duplicate = accounts
      .values()
      .any(|existing| existing.username == account.username);
    if duplicate {
      return Err(RepositoryError::DuplicateKey(format!(
        "username \"{}\" already exists",
        account.username
      )));
    }

    let id = self.next_id.fetch_add(1, Ordering::SeqCst);
    let stored = Account {
      id,
      username: account.username,
      display_name: account.display_name,
      age: account.age,
      user_type: account.user_type,
      password_digest: account.password_digest,
      created_at: Utc::now(),
    };
    accounts.insert(id, stored.clone());

    Ok(stored)
  }

  async fn find_by_id(&self, id: i64) -> Result<Option<Account>, RepositoryError> {
    let accounts = self.accounts.read().expect("account store lock poisoned");
    Ok(accounts.get(&id).cloned())
  }

  async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError> {
    let accounts = self.accounts.read().expect("account store lock poisoned");
    Ok(
      accounts
        .values()
        .find(|account| account.username == username)
        .cloned(),
    )
  }
}
