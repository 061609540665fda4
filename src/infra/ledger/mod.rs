//! # Ledger API
//!
//! The three `/products` operations exposed by the ledger backend, behind the
//! [`ProductLedger`] trait so screens can be driven by [`LedgerClient`] or a test double.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::domain::product::{Product, ProductDraft};

pub use client::LedgerClient;
pub use error::{ApiError, ApiResult, ErrorBody};

#[async_trait]
pub trait ProductLedger: Send + Sync {
    /// Submits a draft. The backend's response body is returned as-is.
    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<JsonValue>;

    /// Looks up one product by id.
    async fn get_product(&self, id: &str) -> ApiResult<Product>;

    /// Lists every product in the order the backend returns them.
    async fn get_all_products(&self) -> ApiResult<Vec<Product>>;
}
