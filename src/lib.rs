//! Bank ledger metapackage
//!
//! Re-exports the workspace crates so end-to-end tests can reach every layer
//! through one dependency.

pub use account_service;
pub use api_gateway;
pub use common;
