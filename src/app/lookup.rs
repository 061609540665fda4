//! Consumer lookup and verify-by-id screens.
//!
//! Both report any failure as a single message; they differ only in whether the backend's own
//! message is allowed through.

use crate::domain::product::Product;
use crate::infra::ledger::ProductLedger;

pub const NOT_FOUND_MESSAGE: &str = "Product not found or verification failed.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load product details.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Nothing was searched for.
    Idle,
    Found(Product),
    Failed { message: String },
}

impl Lookup {
    pub fn product(&self) -> Option<&Product> {
        match self {
            Lookup::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Lookup::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Consumer lookup: every failure reads as "not found or tampered".
pub async fn consumer_lookup(ledger: &dyn ProductLedger, id: &str) -> Lookup {
    let id = id.trim();
    if id.is_empty() {
        return Lookup::Idle;
    }
    match ledger.get_product(id).await {
        Ok(product) => Lookup::Found(product),
        Err(e) => {
            tracing::info!(id, error = %e, "consumer lookup failed");
            Lookup::Failed {
                message: NOT_FOUND_MESSAGE.to_string(),
            }
        }
    }
}

/// Verification detail: shows the backend's message when it sent one.
pub async fn verify_product(ledger: &dyn ProductLedger, id: &str) -> Lookup {
    if id.is_empty() {
        return Lookup::Idle;
    }
    match ledger.get_product(id).await {
        Ok(product) => Lookup::Found(product),
        Err(e) => {
            tracing::info!(id, error = %e, "verification lookup failed");
            Lookup::Failed {
                message: e.user_message(LOAD_FAILED_MESSAGE),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductDraft;
    use crate::infra::ledger::{ApiError, ApiResult};
    use async_trait::async_trait;
    use serde_json::Value as JsonValue;

    /// Knows one product; every other id is a 404 carrying `message`.
    struct OneProduct {
        message: Option<&'static str>,
    }

    fn widget() -> Product {
        Product {
            id: "P-1".into(),
            name: "Widget".into(),
            producer_id: "PROD-001".into(),
            manufacture_date: "2024-01-01".into(),
            status: "VERIFIED".into(),
            integrity_hash: None,
            blockchain_tx_id: None,
            owner: Some("Org1MSP".into()),
        }
    }

    #[async_trait]
    impl ProductLedger for OneProduct {
        async fn create_product(&self, _draft: &ProductDraft) -> ApiResult<JsonValue> {
            Ok(JsonValue::Null)
        }

        async fn get_product(&self, id: &str) -> ApiResult<Product> {
            if id == "P-1" {
                Ok(widget())
            } else {
                Err(ApiError::Backend {
                    status: 404,
                    message: self.message.map(str::to_string),
                })
            }
        }

        async fn get_all_products(&self) -> ApiResult<Vec<Product>> {
            Ok(vec![widget()])
        }
    }

    #[tokio::test]
    async fn consumer_finds_known_product() {
        let ledger = OneProduct { message: None };
        let got = consumer_lookup(&ledger, " P-1 ").await;
        assert_eq!(got.product().map(|p| p.id.as_str()), Some("P-1"));
        assert_eq!(got.error(), None);
    }

    #[tokio::test]
    async fn consumer_hides_backend_message() {
        let ledger = OneProduct {
            message: Some("sql: no rows in result set"),
        };
        let got = consumer_lookup(&ledger, "P-2").await;
        assert_eq!(got.error(), Some(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn consumer_ignores_blank_search() {
        let ledger = OneProduct { message: None };
        assert_eq!(consumer_lookup(&ledger, "   ").await, Lookup::Idle);
    }

    #[tokio::test]
    async fn verify_shows_backend_message_or_fallback() {
        let with = OneProduct {
            message: Some("Product not found"),
        };
        assert_eq!(
            verify_product(&with, "P-2").await.error(),
            Some("Product not found")
        );

        let without = OneProduct { message: None };
        assert_eq!(
            verify_product(&without, "P-2").await.error(),
            Some(LOAD_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn verify_returns_owner() {
        let ledger = OneProduct { message: None };
        let got = verify_product(&ledger, "P-1").await;
        assert_eq!(
            got.product().and_then(|p| p.owner.as_deref()),
            Some("Org1MSP")
        );
    }
}
