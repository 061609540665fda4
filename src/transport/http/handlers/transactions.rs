use crate::transport::http::error::WebError;
use crate::transport::http::templates::TransactionsTemplate;
use crate::transport::http::types::AppState;
use askama::Template;
use axum::extract::State;
use axum::response::Html;

/// Fetches the list and renders it. The backend call runs without holding the list lock;
/// when refreshes overlap, the most recently started one wins.
async fn load_and_render(state: &AppState) -> Result<Html<String>, WebError> {
    let ticket = state.transactions.write().await.begin_fetch();
    let result = state.ledger.get_all_products().await;
    let page = {
        let mut list = state.transactions.write().await;
        list.apply_fetched(ticket, result);
        TransactionsTemplate::from_list(&list)
    };
    Ok(Html(page.render()?))
}

/// Initial display.
pub async fn transactions_handler(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    load_and_render(&state).await
}

/// Manual refresh button.
pub async fn transactions_refresh_handler(
    State(state): State<AppState>,
) -> Result<Html<String>, WebError> {
    load_and_render(&state).await
}
