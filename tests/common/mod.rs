//! In-process stand-in for the ledger backend's `/products` API.
//!
//! Mirrors the real backend's wire habits: snake_case fields, `{"error": ...}` bodies,
//! `null` for an empty list and a `{"message", "product"}` envelope on create.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value as JsonValue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct FakeBackend {
    products: Arc<Mutex<Vec<JsonValue>>>,
    offline: Arc<AtomicBool>,
}

impl FakeBackend {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn stored(&self) -> Vec<JsonValue> {
        self.products.lock().unwrap().clone()
    }

    fn unavailable(&self) -> Option<Response> {
        self.offline.load(Ordering::SeqCst).then(|| {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"error": "ledger unavailable"})),
            )
                .into_response()
        })
    }
}

async fn create(State(backend): State<FakeBackend>, Json(input): Json<JsonValue>) -> Response {
    if let Some(res) = backend.unavailable() {
        return res;
    }
    let id = input["id"].as_str().unwrap_or_default().to_string();
    let mut products = backend.products.lock().unwrap();
    if products.iter().any(|p| p["id"] == id.as_str()) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": format!("Failed to save to DB: duplicate key {id}")})),
        )
            .into_response();
    }
    let stored = json!({
        "id": id,
        "name": input["name"],
        "producer_id": input["producerId"],
        "manufacture_date": input["manufactureDate"],
        "integrity_hash": input["integrityHash"].as_str().unwrap_or_default(),
        "status": "PENDING",
    });
    products.insert(0, stored.clone());
    (
        StatusCode::CREATED,
        Json(json!({"message": "Product creation requested", "product": stored})),
    )
        .into_response()
}

async fn list(State(backend): State<FakeBackend>) -> Response {
    if let Some(res) = backend.unavailable() {
        return res;
    }
    let products = backend.products.lock().unwrap();
    if products.is_empty() {
        return Json(JsonValue::Null).into_response();
    }
    Json(JsonValue::Array(products.clone())).into_response()
}

async fn get_one(State(backend): State<FakeBackend>, Path(id): Path<String>) -> Response {
    if let Some(res) = backend.unavailable() {
        return res;
    }
    let products = backend.products.lock().unwrap();
    match products.iter().find(|p| p["id"] == id.as_str()) {
        Some(p) => Json(p.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Product not found"})),
        )
            .into_response(),
    }
}

/// Starts the fake backend on an ephemeral port and returns its base URL.
pub async fn spawn_backend() -> (String, FakeBackend) {
    let backend = FakeBackend::default();
    let router = Router::new()
        .route("/products", get(list).post(create))
        .route("/products/:id", get(get_one))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://127.0.0.1:{}", port), backend)
}
