//! Account repository for the bank ledger
//!
//! Owns the in-memory account collection and enforces every creation and
//! deposit rule before state is touched.

pub mod validation;
pub mod repository;
pub mod config;

pub use repository::{AccountRepository, InMemoryAccountRepository};
pub use config::AccountServiceConfig;
