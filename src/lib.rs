//! Turnstile: account registration and session issuance.
//!
//! The crate is split into three layers: `domain` holds the identity
//! entities, validation rules and the [`domain::identity::IdentityService`];
//! `application` wraps the service in command-driven use cases; and
//! `infrastructure` provides the Postgres and in-memory account stores, the
//! SHA-256 credential hasher, the in-memory session registry and
//! configuration loading.

pub mod application;
pub mod domain;
pub mod infrastructure;
