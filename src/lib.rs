//! Client portal for registering products on an external ledger and verifying them.
//!
//! The ledger backend owns consensus and persistence; this crate calls its `/products` API,
//! derives a display-only integrity hash for drafts and renders the portal screens.

pub mod app;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use crypto::hashing::{integrity_hash, IntegrityHashDeriver};
pub use domain::product::{Product, ProductDraft, StatusTone};
pub use infra::config::Settings;
pub use infra::ledger::{ApiError, ApiResult, LedgerClient, ProductLedger};
