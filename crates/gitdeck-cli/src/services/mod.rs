//! Service layer for business logic with dependency injection.
//!
//! Services accept trait-based dependencies (`GitOps`, `ConfigStore`,
//! `Prompter`), so every interactive flow can be tested with the mocks in
//! `test_mocks`.

pub mod config;
pub mod dispatch;
pub mod init;
pub mod locate;
pub mod session;

#[cfg(test)]
pub mod test_mocks;

pub use dispatch::{collect_status, print_status};
pub use session::{Session, SessionEnd};
