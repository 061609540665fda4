//! In-memory ledger for unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};

use super::{ApiError, ApiResult, ProductLedger};
use crate::domain::product::{Product, ProductDraft};

#[derive(Debug, Default)]
pub struct FakeLedger {
    products: Mutex<Vec<Product>>,
    offline: AtomicBool,
    pub list_calls: AtomicUsize,
}

impl FakeLedger {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> ApiResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(ApiError::Backend {
                status: 503,
                message: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProductLedger for FakeLedger {
    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<JsonValue> {
        self.check_online()?;
        let mut products = self.products.lock().unwrap();
        if products.iter().any(|p| p.id == draft.id) {
            return Err(ApiError::Backend {
                status: 500,
                message: Some(format!("the product {} already exists", draft.id)),
            });
        }
        let product = Product {
            id: draft.id.clone(),
            name: draft.name.clone(),
            producer_id: draft.producer_id.clone(),
            manufacture_date: draft.manufacture_date.clone(),
            status: "PENDING".to_string(),
            integrity_hash: draft.integrity_hash.clone(),
            blockchain_tx_id: None,
            owner: None,
        };
        products.insert(0, product.clone());
        Ok(json!({"message": "Product creation requested", "product": product}))
    }

    async fn get_product(&self, id: &str) -> ApiResult<Product> {
        self.check_online()?;
        let products = self.products.lock().unwrap();
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Backend {
                status: 404,
                message: Some("Product not found".to_string()),
            })
    }

    async fn get_all_products(&self) -> ApiResult<Vec<Product>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.products.lock().unwrap().clone())
    }
}
