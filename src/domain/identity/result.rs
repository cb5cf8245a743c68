use serde::Serialize;
use std::fmt;

/// Failure categories crossing the service boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IdentityErrorKind {
  /// No account matches the supplied username
  NoSuchUser,
  /// Malformed password input, or digest mismatch at login
  InvalidPassword,
  /// Malformed registration input
  InvalidAccount,
  /// Unexpected failure from the persistence layer or elsewhere
  Unknown,
}

impl fmt::Display for IdentityErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::NoSuchUser => write!(f, "no such user"),
      Self::InvalidPassword => write!(f, "invalid password"),
      Self::InvalidAccount => write!(f, "invalid account"),
      Self::Unknown => write!(f, "unknown error"),
    }
  }
}

/// Uniform outcome of every validation and service operation.
///
/// Public operations return this structure instead of erroring across the
/// boundary. Callers branch on `succeeded` and, on failure, may surface
/// `message` for diagnostics. Success carries no payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityResult {
  /// Whether the operation succeeded
  pub succeeded: bool,
  /// Failure category, absent on success
  pub error: Option<IdentityErrorKind>,
  /// Human-readable diagnostic, absent on success and optional on failure
  pub message: Option<String>,
}

impl IdentityResult {
  /// A successful outcome
  pub fn success() -> Self {
    Self {
      succeeded: true,
      error: None,
      message: None,
    }
  }

  /// A failed outcome without a diagnostic message
  pub fn failure(error: IdentityErrorKind) -> Self {
    Self {
      succeeded: false,
      error: Some(error),
      message: None,
    }
  }

  /// A failed outcome carrying a diagnostic message
  pub fn failure_with(error: IdentityErrorKind, message: impl Into<String>) -> Self {
    Self {
      succeeded: false,
      error: Some(error),
      message: Some(message.into()),
    }
  }

  pub fn is_failure(&self) -> bool {
    !self.succeeded
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_success_carries_no_payload() {
    let result = IdentityResult::success();

    assert!(result.succeeded);
    assert!(!result.is_failure());
    assert_eq!(result.error, None);
    assert_eq!(result.message, None);
  }

  #[test]
  fn test_failure_carries_kind_and_optional_message() {
    let bare = IdentityResult::failure(IdentityErrorKind::NoSuchUser);
    assert!(bare.is_failure());
    assert_eq!(bare.error, Some(IdentityErrorKind::NoSuchUser));
    assert_eq!(bare.message, None);

    let with_message =
      IdentityResult::failure_with(IdentityErrorKind::Unknown, "connection refused");
    assert!(with_message.is_failure());
    assert_eq!(with_message.error, Some(IdentityErrorKind::Unknown));
    assert_eq!(with_message.message.as_deref(), Some("connection refused"));
  }

  #[test]
  fn test_boundary_serialization_shape() {
    let result = IdentityResult::failure_with(IdentityErrorKind::InvalidAccount, "too short");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
      json,
      serde_json::json!({
        "succeeded": false,
        "error": "InvalidAccount",
        "message": "too short",
      })
    );
  }

  #[test]
  fn test_error_kind_display() {
    assert_eq!(IdentityErrorKind::NoSuchUser.to_string(), "no such user");
    assert_eq!(IdentityErrorKind::Unknown.to_string(), "unknown error");
  }
}
