use std::sync::Arc;

use crate::domain::identity::result::IdentityResult;
use crate::domain::identity::services::IdentityService;
use crate::domain::identity::validation::AccountDraft;

/// Command for registering a new account.
///
/// Fields are optional because the caller's payload may omit any of them;
/// validation, not deserialization, decides what is acceptable.
#[derive(Debug, Clone, Default)]
pub struct RegisterAccountCommand {
  /// Login name, unique across accounts
  pub username: Option<String>,
  /// Human-facing display name
  pub display_name: Option<String>,
  /// Age in years
  pub age: Option<i32>,
  /// Role name, one of the closed user-type set
  pub user_type: Option<String>,
  /// Plain text password, hashed before persistence
  pub password: Option<String>,
}

/// Use case for registering a new account
pub struct RegisterAccountUseCase {
  identity_service: Arc<IdentityService>,
}

impl RegisterAccountUseCase {
  /// Creates a new instance of RegisterAccountUseCase
  pub fn new(identity_service: Arc<IdentityService>) -> Self {
    Self { identity_service }
  }

  /// Executes the registration use case.
  ///
  /// Returns the uniform [`IdentityResult`] contract; this method never
  /// errors past the boundary.
  pub async fn execute(&self, command: RegisterAccountCommand) -> IdentityResult {
    let draft = AccountDraft {
      username: command.username,
      display_name: command.display_name,
      age: command.age,
      user_type: command.user_type,
    };

    let result = self
      .identity_service
      .register(Some(&draft), command.password.as_deref())
      .await;

    if let Some(error) = result.error {
      tracing::warn!("Registration rejected for {:?}: {}", draft.username, error);
    } else {
      tracing::info!("Registered account {:?}", draft.username);
    }

    result
  }
}
