use crate::app::ProducerForm;
use crate::crypto::hashing::integrity_hash;
use crate::domain::product::INITIAL_STATUS;
use crate::transport::http::error::WebError;
use crate::transport::http::templates::ProducerTemplate;
use crate::transport::http::types::{ApiResponse, AppState, DraftFields};
use askama::Template;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::{Form, Json};

/// Builds the form the way the browser last showed it. The producer id always comes from
/// configuration.
fn form_from_fields(state: &AppState, fields: DraftFields) -> ProducerForm {
    let mut form = ProducerForm::new(state.producer_id.clone());
    if let Some(date) = fields.manufacture_date.filter(|d| !d.is_empty()) {
        form.set_manufacture_date(date);
    }
    form.set_status(fields.status.unwrap_or_else(|| INITIAL_STATUS.to_string()));
    form.set_id(fields.id.trim());
    form.set_name(fields.name);
    form
}

/// Blank registration form. Query parameters pre-fill it.
pub async fn producer_form_handler(
    State(state): State<AppState>,
    Query(fields): Query<DraftFields>,
) -> Result<Html<String>, WebError> {
    let form = form_from_fields(&state, fields);
    Ok(Html(ProducerTemplate::from_form(&form).render()?))
}

pub async fn producer_submit_handler(
    State(state): State<AppState>,
    Form(fields): Form<DraftFields>,
) -> Result<Html<String>, WebError> {
    let mut form = form_from_fields(&state, fields);
    let id = form.draft().id.clone();

    if id.is_empty() {
        let page = ProducerTemplate::rejected(&form, "Product ID is required.");
        return Ok(Html(page.render()?));
    }

    let Some(_guard) = state.claim_submission(&id) else {
        let page = ProducerTemplate::rejected(
            &form,
            format!("A submission for product {id} is already in progress."),
        );
        return Ok(Html(page.render()?));
    };

    // Empty ids are rejected above, so the form itself cannot refuse here.
    let submitted = form.submit(state.ledger.as_ref()).await.map(|_| ());
    let page = match submitted {
        Ok(()) => ProducerTemplate::from_form(&form),
        Err(e) => ProducerTemplate::rejected(&form, e.to_string()),
    };
    Ok(Html(page.render()?))
}

/// Live integrity hash for the fields currently in the form.
pub async fn integrity_hash_handler(
    State(state): State<AppState>,
    Query(fields): Query<DraftFields>,
) -> Json<ApiResponse> {
    let date = fields.manufacture_date.unwrap_or_default();
    let hash = integrity_hash(fields.id.trim(), &fields.name, &state.producer_id, &date);
    Json(ApiResponse::ok(serde_json::json!({ "integrityHash": hash })))
}
