use serde::Deserialize;

use super::entities::{NewAccount, UserType};
use super::result::{IdentityErrorKind, IdentityResult};

/// Minimum length of a username, in characters
pub const MIN_USERNAME_CHARS: usize = 4;
/// Minimum length of a password, in characters
pub const MIN_PASSWORD_CHARS: usize = 5;

/// Unvalidated registration payload as it arrives from the caller.
///
/// Every field is optional; [`validate_account`] decides which ones must be
/// present. The role travels as its raw name so membership in [`UserType`]
/// is a validation outcome rather than a parsing precondition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountDraft {
  pub username: Option<String>,
  pub display_name: Option<String>,
  pub age: Option<i32>,
  pub user_type: Option<String>,
}

impl AccountDraft {
  /// Builds the persistable record once validation has accepted the draft.
  ///
  /// Returns `None` while a required field is still absent.
  pub fn to_new_account(&self, password_digest: String) -> Option<NewAccount> {
    let username = self.username.clone()?;
    let user_type = self.user_type.as_deref().and_then(UserType::from_name)?;

    Some(NewAccount {
      username,
      display_name: self.display_name.clone(),
      age: self.age,
      user_type,
      password_digest,
    })
  }
}

/// Checks the structural validity of a registration payload.
///
/// Fails when the payload is absent, the username is absent or shorter than
/// [`MIN_USERNAME_CHARS`], or the user type is absent or not a member of the
/// [`UserType`] enumeration. The first check that rejects the draft wins;
/// exactly one failure is reported per call.
pub fn validate_account(candidate: Option<&AccountDraft>) -> IdentityResult {
  let Some(draft) = candidate else {
    return IdentityResult::failure_with(
      IdentityErrorKind::InvalidAccount,
      "The provided account payload is missing",
    );
  };

  let username_chars = draft
    .username
    .as_deref()
    .map(|username| username.chars().count())
    .unwrap_or(0);
  if username_chars < MIN_USERNAME_CHARS {
    return IdentityResult::failure_with(
      IdentityErrorKind::InvalidAccount,
      format!(
        "The provided account username must be at least {} characters long",
        MIN_USERNAME_CHARS
      ),
    );
  }

  let known_role = draft
    .user_type
    .as_deref()
    .and_then(UserType::from_name)
    .is_some();
  if !known_role {
    return IdentityResult::failure_with(
      IdentityErrorKind::InvalidAccount,
      "The provided account type is invalid",
    );
  }

  IdentityResult::success()
}

/// Checks the structural validity of a password.
///
/// Fails when the value is absent or shorter than [`MIN_PASSWORD_CHARS`].
pub fn validate_password(candidate: Option<&str>) -> IdentityResult {
  let Some(password) = candidate else {
    return IdentityResult::failure_with(
      IdentityErrorKind::InvalidPassword,
      "The provided password is missing",
    );
  };

  if password.chars().count() < MIN_PASSWORD_CHARS {
    return IdentityResult::failure_with(
      IdentityErrorKind::InvalidPassword,
      format!(
        "The provided password must be at least {} characters long",
        MIN_PASSWORD_CHARS
      ),
    );
  }

  IdentityResult::success()
}
