//! Transaction list screen state.

use crate::domain::product::Product;
use crate::infra::ledger::{ApiResult, ProductLedger};

pub const REFRESH_FAILED_MESSAGE: &str = "Could not refresh the transaction list.";

/// Last successfully fetched product list.
///
/// A failed refresh only records a notice; the previously displayed rows stay.
/// Fetches are ticketed so that a result arriving after a newer one is dropped.
#[derive(Debug, Clone, Default)]
pub struct TransactionList {
    products: Vec<Product>,
    loaded: bool,
    notice: Option<String>,
    issued: u64,
    applied: u64,
}

impl TransactionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Whether any fetch has succeeded yet.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Starts a fetch; pass the ticket back to [`TransactionList::apply_fetched`].
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Folds in the result of fetch `ticket` unless a later fetch has already landed.
    /// Returns whether the result was used.
    pub fn apply_fetched(&mut self, ticket: u64, result: ApiResult<Vec<Product>>) -> bool {
        if ticket <= self.applied {
            tracing::debug!(ticket, applied = self.applied, "dropping superseded list fetch");
            return false;
        }
        self.applied = ticket;
        self.apply(result);
        true
    }

    /// Folds the result of a fetch-all into the list.
    pub fn apply(&mut self, result: ApiResult<Vec<Product>>) {
        match result {
            Ok(products) => {
                self.products = products;
                self.loaded = true;
                self.notice = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, kept = self.products.len(), "transaction list refresh failed");
                self.notice = Some(REFRESH_FAILED_MESSAGE.to_string());
            }
        }
    }

    pub async fn refresh(&mut self, ledger: &dyn ProductLedger) {
        let ticket = self.begin_fetch();
        let result = ledger.get_all_products().await;
        self.apply_fetched(ticket, result);
    }
}
