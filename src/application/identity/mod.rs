//! Identity use cases
//!
//! This module contains the registration and login use cases that wrap the
//! identity service behind caller-facing commands.

mod login;
mod register_account;

pub use login::{LoginCommand, LoginUseCase};
pub use register_account::{RegisterAccountCommand, RegisterAccountUseCase};
