//! Producer registration form: draft editing, live integrity hash and submission.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::crypto::hashing::IntegrityHashDeriver;
use crate::domain::product::ProductDraft;
use crate::infra::ledger::{ApiResult, ProductLedger};

pub const CREATE_FAILED_MESSAGE: &str = "Failed to create product.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("product id is required")]
    MissingId,

    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

/// Result of the last submission, as shown under the form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created {
        product_id: String,
        message: String,
        /// Backend response body, untouched.
        response: JsonValue,
    },
    Failed {
        message: String,
    },
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Created { message, .. } | SubmitOutcome::Failed { message } => message,
        }
    }

    /// Id to render a QR code for, on success.
    pub fn created_id(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Created { product_id, .. } => Some(product_id),
            SubmitOutcome::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProducerForm {
    draft: ProductDraft,
    deriver: IntegrityHashDeriver,
    submitting: bool,
    outcome: Option<SubmitOutcome>,
}

impl ProducerForm {
    /// A blank form for the configured producer.
    pub fn new(producer_id: impl Into<String>) -> Self {
        Self::from_draft(ProductDraft::fresh(producer_id))
    }

    /// A form pre-filled with `draft`; the integrity hash is derived immediately.
    pub fn from_draft(draft: ProductDraft) -> Self {
        let mut form = Self {
            draft,
            deriver: IntegrityHashDeriver::new(),
            submitting: false,
            outcome: None,
        };
        form.draft.integrity_hash = None;
        form.refresh_hash();
        form
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn integrity_hash(&self) -> &str {
        self.deriver.current()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn outcome(&self) -> Option<&SubmitOutcome> {
        self.outcome.as_ref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.draft.id = id.into();
        self.refresh_hash();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.refresh_hash();
    }

    pub fn set_manufacture_date(&mut self, date: impl Into<String>) {
        self.draft.manufacture_date = date.into();
        self.refresh_hash();
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.draft.status = status.into();
    }

    fn refresh_hash(&mut self) {
        if let Some(hash) = self.deriver.refresh(&self.draft) {
            self.draft.integrity_hash = (!hash.is_empty()).then(|| hash.to_string());
        }
    }

    /// Locks the form and hands out the draft to submit.
    pub fn begin_submit(&mut self) -> Result<ProductDraft, SubmitError> {
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        if self.draft.id.is_empty() {
            return Err(SubmitError::MissingId);
        }
        self.submitting = true;
        self.outcome = None;
        Ok(self.draft.clone())
    }

    /// Records the backend's answer for `submitted` and unlocks the form.
    ///
    /// On success the per-item fields are cleared; producer, date and status are kept.
    pub fn finish_submit(
        &mut self,
        submitted: &ProductDraft,
        result: ApiResult<JsonValue>,
    ) -> &SubmitOutcome {
        self.submitting = false;
        let outcome = match result {
            Ok(response) => {
                self.draft.reset_item();
                self.deriver.clear();
                SubmitOutcome::Created {
                    product_id: submitted.id.clone(),
                    message: format!("Product {} created successfully on Blockchain!", submitted.id),
                    response,
                }
            }
            Err(e) => {
                tracing::warn!(id = %submitted.id, error = %e, "product creation failed");
                SubmitOutcome::Failed {
                    message: e.user_message(CREATE_FAILED_MESSAGE),
                }
            }
        };
        self.outcome.insert(outcome)
    }

    /// Submits the current draft through `ledger`.
    pub async fn submit(&mut self, ledger: &dyn ProductLedger) -> Result<&SubmitOutcome, SubmitError> {
        let draft = self.begin_submit()?;
        let result = ledger.create_product(&draft).await;
        Ok(self.finish_submit(&draft, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hashing::integrity_hash;
    use crate::infra::ledger::ApiError;
    use serde_json::json;

    fn filled_form() -> ProducerForm {
        let mut form = ProducerForm::new("PROD-001");
        form.set_manufacture_date("2024-01-01");
        form.set_id("P-1001");
        form.set_name("Widget");
        form
    }

    #[test]
    fn hash_follows_edits() {
        let mut form = ProducerForm::new("PROD-001");
        assert_eq!(form.integrity_hash(), "");
        assert_eq!(form.draft().integrity_hash, None);

        form.set_manufacture_date("2024-01-01");
        form.set_id("P-1001");
        assert_eq!(form.integrity_hash(), "");

        form.set_name("Widget");
        let expected = integrity_hash("P-1001", "Widget", "PROD-001", "2024-01-01");
        assert_eq!(form.integrity_hash(), expected);
        assert_eq!(form.draft().integrity_hash.as_deref(), Some(expected.as_str()));

        form.set_name("");
        assert_eq!(form.draft().integrity_hash, None);
    }

    #[test]
    fn empty_id_blocks_submission() {
        let mut form = ProducerForm::new("PROD-001");
        form.set_name("Widget");
        assert_eq!(form.begin_submit(), Err(SubmitError::MissingId));
        assert!(!form.is_submitting());
    }

    #[test]
    fn second_submission_is_refused_while_in_flight() {
        let mut form = filled_form();
        let draft = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySubmitting));

        form.finish_submit(&draft, Ok(json!({})));
        assert!(!form.is_submitting());
    }

    #[test]
    fn success_resets_item_fields_only() {
        let mut form = filled_form();
        form.set_status("Manufactured");
        let draft = form.begin_submit().unwrap();
        assert!(draft.integrity_hash.is_some());

        let outcome = form
            .finish_submit(&draft, Ok(json!({"message": "Product creation requested"})))
            .clone();

        assert_eq!(outcome.created_id(), Some("P-1001"));
        assert_eq!(outcome.message(), "Product P-1001 created successfully on Blockchain!");
        assert!(form.draft().id.is_empty());
        assert!(form.draft().name.is_empty());
        assert_eq!(form.draft().integrity_hash, None);
        assert_eq!(form.integrity_hash(), "");
        assert_eq!(form.draft().producer_id, "PROD-001");
        assert_eq!(form.draft().manufacture_date, "2024-01-01");
        assert_eq!(form.draft().status, "Manufactured");
    }

    #[test]
    fn failure_keeps_the_draft_and_extracts_message() {
        let mut form = filled_form();
        let draft = form.begin_submit().unwrap();
        let outcome = form
            .finish_submit(
                &draft,
                Err(ApiError::Backend {
                    status: 500,
                    message: Some("Failed to save to DB: duplicate key".into()),
                }),
            )
            .clone();

        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "Failed to save to DB: duplicate key".into()
            }
        );
        assert_eq!(form.draft().id, "P-1001");
        assert!(!form.integrity_hash().is_empty());
    }

    #[tokio::test]
    async fn submit_through_ledger() {
        use crate::infra::ledger::fake::FakeLedger;

        let ledger = FakeLedger::default();
        let mut form = filled_form();
        let outcome = form.submit(&ledger).await.unwrap();
        assert_eq!(outcome.created_id(), Some("P-1001"));

        let stored = ledger.get_product("P-1001").await.unwrap();
        assert_eq!(
            stored.integrity_hash.as_deref(),
            Some(integrity_hash("P-1001", "Widget", "PROD-001", "2024-01-01").as_str())
        );

        // Same id again: the ledger refuses and the draft is kept.
        form.set_id("P-1001");
        form.set_name("Widget");
        let outcome = form.submit(&ledger).await.unwrap();
        assert_eq!(outcome.message(), "the product P-1001 already exists");
        assert_eq!(form.draft().id, "P-1001");
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let mut form = filled_form();
        let draft = form.begin_submit().unwrap();
        let outcome = form.finish_submit(
            &draft,
            Err(ApiError::Backend {
                status: 502,
                message: None,
            }),
        );
        assert_eq!(outcome.message(), CREATE_FAILED_MESSAGE);
        assert_eq!(outcome.created_id(), None);
    }
}
