use crate::app::TransactionList;
use crate::infra::ledger::ProductLedger;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn ProductLedger>,
    /// Producer identity stamped on every draft submitted through the portal.
    pub producer_id: String,
    /// Origin encoded into verification QR codes.
    pub public_url: String,
    /// Last good transaction list, kept so a failed refresh can still show it.
    pub transactions: Arc<RwLock<TransactionList>>,
    /// Product ids with a create request outstanding.
    pub in_flight: Arc<Mutex<HashSet<String>>>,
}

impl AppState {
    pub fn new(
        ledger: Arc<dyn ProductLedger>,
        producer_id: impl Into<String>,
        public_url: impl Into<String>,
    ) -> Self {
        Self {
            ledger,
            producer_id: producer_id.into(),
            public_url: public_url.into(),
            transactions: Arc::new(RwLock::new(TransactionList::new())),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Marks `id` as being submitted. Returns `None` if it already is.
    ///
    /// The mark is released when the returned guard drops, including when the request future
    /// is abandoned mid-flight.
    pub fn claim_submission(&self, id: &str) -> Option<SubmissionGuard> {
        let mut set = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !set.insert(id.to_string()) {
            return None;
        }
        Some(SubmissionGuard {
            in_flight: self.in_flight.clone(),
            id: id.to_string(),
        })
    }
}

#[derive(Debug)]
pub struct SubmissionGuard {
    in_flight: Arc<Mutex<HashSet<String>>>,
    id: String,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        let mut set = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        set.remove(&self.id);
    }
}

/// Product draft fields as posted by the producer form (or sent as hash-preview query).
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DraftFields {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub manufacture_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct LookupQuery {
    #[serde(default)]
    pub id: Option<String>,
}

/// JSON envelope for the portal's non-HTML routes.
#[derive(Serialize, Debug)]
pub struct ApiResponse {
    pub success: bool,
    pub data: JsonValue,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
