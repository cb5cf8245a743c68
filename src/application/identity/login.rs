use std::sync::Arc;

use crate::domain::identity::result::IdentityResult;
use crate::domain::identity::services::IdentityService;

/// Command for logging in a returning user
#[derive(Debug, Clone, Default)]
pub struct LoginCommand {
  /// Login name of the account
  pub username: Option<String>,
  /// Plain text password to compare against the stored digest
  pub password: Option<String>,
}

/// Use case for logging in a returning user
pub struct LoginUseCase {
  identity_service: Arc<IdentityService>,
}

impl LoginUseCase {
  /// Creates a new instance of LoginUseCase
  pub fn new(identity_service: Arc<IdentityService>) -> Self {
    Self { identity_service }
  }

  /// Executes the login use case.
  ///
  /// On success a session token has been issued into the registry as a side
  /// effect; the result itself carries no payload.
  pub async fn execute(&self, command: LoginCommand) -> IdentityResult {
    let result = self
      .identity_service
      .authenticate(command.username.as_deref(), command.password.as_deref())
      .await;

    if let Some(error) = result.error {
      tracing::warn!("Login rejected for {:?}: {}", command.username, error);
    }

    result
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::identity::{RegisterAccountCommand, RegisterAccountUseCase};
  use crate::domain::identity::result::IdentityErrorKind;
  use crate::infrastructure::persistence::memory::InMemoryAccountRepository;
  use crate::infrastructure::security::Sha256PasswordHasher;
  use crate::infrastructure::session::InMemorySessionRegistry;

  struct Harness {
    register: RegisterAccountUseCase,
    login: LoginUseCase,
    sessions: Arc<InMemorySessionRegistry>,
  }

  fn harness() -> Harness {
    let sessions = Arc::new(InMemorySessionRegistry::new());
    let service = Arc::new(IdentityService::new(
      Arc::new(InMemoryAccountRepository::new()),
      sessions.clone(),
      Arc::new(Sha256PasswordHasher::new()),
    ));

    Harness {
      register: RegisterAccountUseCase::new(service.clone()),
      login: LoginUseCase::new(service),
      sessions,
    }
  }

  async fn register_alice(h: &Harness) {
    let result = h
      .register
      .execute(RegisterAccountCommand {
        username: Some("alice".to_string()),
        display_name: Some("Alice".to_string()),
        age: Some(30),
        user_type: Some("Reader".to_string()),
        password: Some("secret1".to_string()),
      })
      .await;
    assert!(result.succeeded);
  }

  #[tokio::test]
  async fn test_login_issues_a_session() {
    let h = harness();
    register_alice(&h).await;

    let result = h
      .login
      .execute(LoginCommand {
        username: Some("alice".to_string()),
        password: Some("secret1".to_string()),
      })
      .await;

    assert!(result.succeeded);
    assert_eq!(h.sessions.len(), 1);
  }

  #[tokio::test]
  async fn test_login_failures_issue_no_session() {
    let h = harness();
    register_alice(&h).await;

    let wrong = h
      .login
      .execute(LoginCommand {
        username: Some("alice".to_string()),
        password: Some("wrong!".to_string()),
      })
      .await;
    assert_eq!(wrong.error, Some(IdentityErrorKind::InvalidPassword));

    let nobody = h
      .login
      .execute(LoginCommand {
        username: Some("bob".to_string()),
        password: Some("whatever".to_string()),
      })
      .await;
    assert_eq!(nobody.error, Some(IdentityErrorKind::NoSuchUser));

    assert!(h.sessions.is_empty());
  }
}
