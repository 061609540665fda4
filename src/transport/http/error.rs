//! Error pages for the portal.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::infra::qr::QrError;
use crate::transport::http::templates::ErrorTemplate;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("template error: {0}")]
    Template(String),

    #[error("qr code error: {0}")]
    Qr(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "portal request failed");
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let page = ErrorTemplate {
            status: status.as_u16(),
            message: self.to_string(),
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(_) => (status, self.to_string()).into_response(),
        }
    }
}

impl From<askama::Error> for WebError {
    fn from(err: askama::Error) -> Self {
        WebError::Template(err.to_string())
    }
}

impl From<QrError> for WebError {
    fn from(err: QrError) -> Self {
        WebError::Qr(err.to_string())
    }
}
