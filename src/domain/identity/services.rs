use std::sync::Arc;

use super::entities::ApplicationUser;
use super::errors::RepositoryError;
use super::ports::{AccountRepository, PasswordHasher, SessionRegistry};
use super::result::{IdentityErrorKind, IdentityResult};
use super::validation::{AccountDraft, validate_account, validate_password};

/// Identity service orchestrating validation, persistence, digest comparison
/// and session issuance.
///
/// Every public operation returns an [`IdentityResult`]; expected failures
/// are detected locally and repository errors are downgraded to an
/// unknown-error result at this boundary, never propagated further.
pub struct IdentityService {
  accounts: Arc<dyn AccountRepository>,
  sessions: Arc<dyn SessionRegistry>,
  hasher: Arc<dyn PasswordHasher>,
}

impl IdentityService {
  /// Creates a new instance of IdentityService
  pub fn new(
    accounts: Arc<dyn AccountRepository>,
    sessions: Arc<dyn SessionRegistry>,
    hasher: Arc<dyn PasswordHasher>,
  ) -> Self {
    Self {
      accounts,
      sessions,
      hasher,
    }
  }

  /// Registers a new account.
  ///
  /// Both the account and the password check are evaluated before branching;
  /// when both reject, the account failure takes priority. On success the
  /// record is persisted under a single transaction and the result carries
  /// no payload.
  pub async fn register(
    &self,
    candidate: Option<&AccountDraft>,
    password: Option<&str>,
  ) -> IdentityResult {
    let account_check = validate_account(candidate);
    let password_check = validate_password(password);
    if account_check.is_failure() {
      return account_check;
    }
    if password_check.is_failure() {
      return password_check;
    }

    // Validation guarantees the draft and its required fields are present
    // from here on.
    let record = candidate
      .zip(password)
      .and_then(|(draft, plaintext)| draft.to_new_account(self.hasher.hash(plaintext)));
    let Some(record) = record else {
      return IdentityResult::failure(IdentityErrorKind::Unknown);
    };

    match self.accounts.create(record).await {
      Ok(_) => IdentityResult::success(),
      Err(e) => IdentityResult::failure_with(IdentityErrorKind::Unknown, e.to_string()),
    }
  }

  /// Authenticates a returning user and issues a session token on success.
  ///
  /// The username lookup yields a digest-free projection; the digest-bearing
  /// record is re-fetched by identifier inside the comparison step and never
  /// leaves it.
  pub async fn authenticate(
    &self,
    username: Option<&str>,
    password: Option<&str>,
  ) -> IdentityResult {
    let user = match self.user_by_username(username).await {
      Ok(Some(user)) => user,
      Ok(None) => return IdentityResult::failure(IdentityErrorKind::NoSuchUser),
      Err(e) => return IdentityResult::failure_with(IdentityErrorKind::Unknown, e.to_string()),
    };

    match self.check_password(Some(&user), password).await {
      Ok(true) => {
        self.sign_in(&user);
        IdentityResult::success()
      }
      Ok(false) => IdentityResult::failure(IdentityErrorKind::InvalidPassword),
      Err(e) => IdentityResult::failure_with(IdentityErrorKind::Unknown, e.to_string()),
    }
  }

  /// Looks up an account by username as its public projection
  async fn user_by_username(
    &self,
    username: Option<&str>,
  ) -> Result<Option<ApplicationUser>, RepositoryError> {
    let Some(username) = username else {
      return Ok(None);
    };

    let account = self.accounts.find_by_username(username).await?;
    Ok(account.as_ref().map(ApplicationUser::from))
  }

  /// Compares the supplied plaintext against the stored digest.
  ///
  /// An absent user or password is a non-match, not an error. A record that
  /// vanished between the username lookup and the re-fetch by identifier
  /// surfaces as a repository error.
  async fn check_password(
    &self,
    user: Option<&ApplicationUser>,
    password: Option<&str>,
  ) -> Result<bool, RepositoryError> {
    let Some((user, plaintext)) = user.zip(password) else {
      return Ok(false);
    };

    let account = self
      .accounts
      .find_by_id(user.id)
      .await?
      .ok_or(RepositoryError::NotFound)?;

    Ok(account.password_digest == self.hasher.hash(plaintext))
  }

  /// Records a session for an authenticated user; the token stays in the
  /// registry (the current contract does not return it inline)
  fn sign_in(&self, user: &ApplicationUser) {
    self.sessions.issue(user.id);
  }
}
