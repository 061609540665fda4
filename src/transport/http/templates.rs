//! Askama page definitions.

use askama::Template;

use crate::app::{Lookup, ProducerForm, SubmitOutcome, TransactionList};
use crate::domain::product::Product;
use crate::infra::qr::path_segment;

/// Leading hash characters shown in list rows.
const HASH_PREFIX_LEN: usize = 12;

/// Display strings for one product.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    /// `id` encoded for use inside a link path.
    pub path_id: String,
    pub name: String,
    pub producer_id: String,
    pub manufacture_date: String,
    pub status: String,
    pub tone_class: &'static str,
    pub integrity_hash: String,
    /// Truncated hash for table cells.
    pub integrity_short: String,
    pub tx_id: String,
    pub owner: Option<String>,
}

impl From<&Product> for ProductView {
    fn from(p: &Product) -> Self {
        let hash = p.integrity_hash.as_deref().filter(|h| !h.is_empty());
        Self {
            id: p.id.clone(),
            path_id: path_segment(&p.id),
            name: p.name.clone(),
            producer_id: p.producer_id.clone(),
            manufacture_date: p.manufacture_date.clone(),
            status: p.status.clone(),
            tone_class: p.tone().css_class(),
            integrity_hash: hash.unwrap_or("-").to_string(),
            integrity_short: match hash {
                Some(h) => format!("{}...", h.chars().take(HASH_PREFIX_LEN).collect::<String>()),
                None => "-".to_string(),
            },
            tx_id: p.blockchain_tx_id.clone().unwrap_or_else(|| "Pending".to_string()),
            owner: p.owner.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

#[derive(Template)]
#[template(path = "producer.html")]
pub struct ProducerTemplate {
    pub id: String,
    pub name: String,
    pub producer_id: String,
    pub manufacture_date: String,
    pub status: String,
    pub integrity_hash: String,
    pub success: Option<String>,
    pub error: Option<String>,
    pub qr_id: Option<String>,
    pub qr_path_id: String,
}

impl ProducerTemplate {
    pub fn from_form(form: &ProducerForm) -> Self {
        let draft = form.draft();
        let (success, error, qr_id) = match form.outcome() {
            Some(SubmitOutcome::Created {
                product_id, message, ..
            }) => (Some(message.clone()), None, Some(product_id.clone())),
            Some(SubmitOutcome::Failed { message }) => (None, Some(message.clone()), None),
            None => (None, None, None),
        };
        Self {
            id: draft.id.clone(),
            name: draft.name.clone(),
            producer_id: draft.producer_id.clone(),
            manufacture_date: draft.manufacture_date.clone(),
            status: draft.status.clone(),
            integrity_hash: form.integrity_hash().to_string(),
            success,
            error,
            qr_path_id: qr_id.as_deref().map(path_segment).unwrap_or_default(),
            qr_id,
        }
    }

    /// Form page carrying a message that never reached the backend.
    pub fn rejected(form: &ProducerForm, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::from_form(form)
        }
    }
}

#[derive(Template)]
#[template(path = "consumer.html")]
pub struct ConsumerTemplate {
    pub search_id: String,
    pub product: Option<ProductView>,
    pub error: Option<String>,
}

impl ConsumerTemplate {
    pub fn new(search_id: &str, lookup: &Lookup) -> Self {
        Self {
            search_id: search_id.to_string(),
            product: lookup.product().map(ProductView::from),
            error: lookup.error().map(str::to_string),
        }
    }
}

#[derive(Template)]
#[template(path = "verify.html")]
pub struct VerifyTemplate {
    pub id: String,
    pub product: Option<ProductView>,
    pub error: Option<String>,
}

impl VerifyTemplate {
    pub fn new(id: &str, lookup: &Lookup) -> Self {
        Self {
            id: id.to_string(),
            product: lookup.product().map(ProductView::from),
            error: lookup.error().map(str::to_string),
        }
    }
}

#[derive(Template)]
#[template(path = "transactions.html")]
pub struct TransactionsTemplate {
    pub rows: Vec<ProductView>,
    pub empty: bool,
    pub notice: Option<String>,
}

impl TransactionsTemplate {
    pub fn from_list(list: &TransactionList) -> Self {
        let rows: Vec<ProductView> = list.products().iter().map(ProductView::from).collect();
        Self {
            empty: rows.is_empty(),
            rows,
            notice: list.notice().map(str::to_string),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub message: String,
}
