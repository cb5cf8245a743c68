mod sha256_hasher;

pub use sha256_hasher::Sha256PasswordHasher;
