use crate::app::{consumer_lookup, verify_product};
use crate::transport::http::error::WebError;
use crate::transport::http::templates::{ConsumerTemplate, HomeTemplate, VerifyTemplate};
use crate::transport::http::types::{AppState, LookupQuery};
use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::Html;

pub async fn home_handler() -> Result<Html<String>, WebError> {
    Ok(Html(HomeTemplate {}.render()?))
}

/// Consumer lookup form; a search runs when `?id=` is present.
pub async fn consumer_handler(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Html<String>, WebError> {
    let search_id = query.id.unwrap_or_default();
    let lookup = consumer_lookup(state.ledger.as_ref(), &search_id).await;
    Ok(Html(ConsumerTemplate::new(search_id.trim(), &lookup).render()?))
}

/// Verification detail reached from a scanned QR code.
pub async fn verify_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let lookup = verify_product(state.ledger.as_ref(), &id).await;
    Ok(Html(VerifyTemplate::new(&id, &lookup).render()?))
}
