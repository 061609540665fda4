//! Product records as exchanged with the ledger backend.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Status assigned to a draft before it is submitted.
pub const INITIAL_STATUS: &str = "Manufactured";

/// A registered product as reported by the backend.
///
/// `status` is passed through untouched; see [`StatusTone`] for the few values the portal
/// colours. The snake_case spellings are accepted because the backend's own store uses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "producer_id")]
    pub producer_id: String,
    #[serde(default, alias = "manufacture_date")]
    pub manufacture_date: String,
    #[serde(default)]
    pub status: String,
    #[serde(
        default,
        alias = "integrity_hash",
        skip_serializing_if = "Option::is_none"
    )]
    pub integrity_hash: Option<String>,
    #[serde(
        default,
        alias = "blockchain_tx_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub blockchain_tx_id: Option<String>,
    /// Custody/signature information, only present on verification responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Product {
    pub fn tone(&self) -> StatusTone {
        StatusTone::of(&self.status)
    }
}

/// A product held in form state before submission. It has no `blockchainTxId` by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub producer_id: String,
    pub manufacture_date: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrity_hash: Option<String>,
}

impl ProductDraft {
    /// A blank draft for `producer_id`, dated today and in the initial status.
    pub fn fresh(producer_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            producer_id: producer_id.into(),
            manufacture_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            status: INITIAL_STATUS.to_string(),
            integrity_hash: None,
        }
    }

    /// Clears the per-item fields and keeps producer, date and status for the next entry.
    pub fn reset_item(&mut self) {
        self.id.clear();
        self.name.clear();
        self.integrity_hash = None;
    }
}

/// Presentational grouping of backend status labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Verified,
    Failed,
    Pending,
}

impl StatusTone {
    pub fn of(status: &str) -> Self {
        match status {
            "VERIFIED" => StatusTone::Verified,
            "FAILED" => StatusTone::Failed,
            _ => StatusTone::Pending,
        }
    }

    /// CSS class used by the portal templates.
    pub fn css_class(self) -> &'static str {
        match self {
            StatusTone::Verified => "tone-verified",
            StatusTone::Failed => "tone-failed",
            StatusTone::Pending => "tone-pending",
        }
    }
}
