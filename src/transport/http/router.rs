use crate::transport::http::handlers::{health, pages, producer, qr, transactions};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/", get(pages::home_handler))
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/producer",
            get(producer::producer_form_handler).post(producer::producer_submit_handler),
        )
        .route("/producer/hash", get(producer::integrity_hash_handler))
        .route("/consumer", get(pages::consumer_handler))
        .route("/transactions", get(transactions::transactions_handler))
        .route(
            "/transactions/refresh",
            post(transactions::transactions_refresh_handler),
        )
        .route("/verify/:id", get(pages::verify_handler))
        .route("/qr/:id", get(qr::qr_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
