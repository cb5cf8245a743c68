use sha2::{Digest, Sha256};

use crate::domain::identity::ports::PasswordHasher;

/// SHA-256 credential hasher.
///
/// Produces the lowercase hex digest of the UTF-8 plaintext. The digest is
/// deterministic, so stored digests compare by plain equality at login.
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
  /// Creates a new instance of Sha256PasswordHasher
  pub fn new() -> Self {
    Self
  }
}

impl Default for Sha256PasswordHasher {
  fn default() -> Self {
    Self::new()
  }
}

impl PasswordHasher for Sha256PasswordHasher {
  fn hash(&self, plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_hash_is_deterministic() {
    let hasher = Sha256PasswordHasher::new();
    assert_eq!(hasher.hash("secret1"), hasher.hash("secret1"));
  }

  #[test]
  fn test_distinct_inputs_produce_distinct_digests() {
    let hasher = Sha256PasswordHasher::new();
    assert_ne!(hasher.hash("secret1"), hasher.hash("secret2"));
    assert_ne!(hasher.hash(""), hasher.hash(" "));
  }

  #[test]
  fn test_digest_is_lowercase_hex() {
    let hasher = Sha256PasswordHasher::new();
    let digest = hasher.hash("secret1");

    assert_eq!(digest.len(), 64);
    assert!(
      digest
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    );
  }

  #[test]
  fn test_known_vector() {
    let hasher = Sha256PasswordHasher::new();
    assert_eq!(
      hasher.hash("abc"),
      "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
  }
}
