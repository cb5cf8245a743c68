pub mod identity;

// Re-export identity module for easier access
pub use identity::*;
