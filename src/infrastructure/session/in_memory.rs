use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::identity::ports::SessionRegistry;

/// Process-lifetime session registry backed by a lock-protected map.
///
/// Shared across concurrent logins; entries are only ever inserted in the
/// current scope and live until the registry is dropped with the process.
/// Tokens are v4 UUIDs, so collisions are negligible and never silently
/// overwrite an existing session.
#[derive(Debug, Default)]
pub struct InMemorySessionRegistry {
  sessions: RwLock<HashMap<String, i64>>,
}

impl InMemorySessionRegistry {
  /// Creates an empty registry
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of sessions issued so far
  pub fn len(&self) -> usize {
    self
      .sessions
      .read()
      .expect("session registry lock poisoned")
      .len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl SessionRegistry for InMemorySessionRegistry {
  fn issue(&self, account_id: i64) -> String {
    let token = Uuid::new_v4().to_string();

    let mut sessions = self
      .sessions
      .write()
      .expect("session registry lock poisoned");
    sessions.insert(token.clone(), account_id);

    token
  }

  fn resolve(&self, token: &str) -> Option<i64> {
    self
      .sessions
      .read()
      .expect("session registry lock poisoned")
      .get(token)
      .copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Arc;

  #[test]
  fn test_issue_returns_resolvable_token() {
    let registry = InMemorySessionRegistry::new();

    let token = registry.issue(42);
    assert_eq!(registry.resolve(&token), Some(42));
    assert_eq!(registry.len(), 1);
  }

  #[test]
  fn test_issued_tokens_are_unique() {
    let registry = InMemorySessionRegistry::new();

    let first = registry.issue(1);
    let second = registry.issue(1);
    assert_ne!(first, second);
    assert_eq!(registry.len(), 2);
  }

  #[test]
  fn test_unknown_token_does_not_resolve() {
    let registry = InMemorySessionRegistry::new();
    registry.issue(1);

    assert_eq!(registry.resolve("not-a-token"), None);
  }

  #[test]
  fn test_concurrent_issuance_loses_no_entries() {
    let registry = Arc::new(InMemorySessionRegistry::new());

    let handles: Vec<_> = (0..8)
      .map(|account_id| {
        let registry = registry.clone();
        std::thread::spawn(move || {
          for _ in 0..16 {
            let token = registry.issue(account_id);
            assert_eq!(registry.resolve(&token), Some(account_id));
          }
        })
      })
      .collect();

    for handle in handles {
      handle.join().unwrap();
    }

    assert_eq!(registry.len(), 8 * 16);
  }
}
