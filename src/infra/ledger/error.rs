//! # Ledger API Errors

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while talking to the ledger backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or transport failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    ///
    /// `message` holds the backend's `error` field when the body carried one.
    #[error("backend error: {status}{}", message_suffix(.message))]
    Backend { status: u16, message: Option<String> },

    /// The configured backend address cannot be used as a base URL.
    #[error("invalid ledger base url: {0}")]
    InvalidBaseUrl(String),

    /// Success status, but the body did not decode.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" - {m}"),
        None => String::new(),
    }
}

/// Result type for ledger operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error body returned by the backend (`{"error": "..."}`).
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extracts a non-blank message from a raw error body, if there is one.
    pub fn extract(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
    }
}

impl ApiError {
    /// The human-readable message reported by the backend, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Backend { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The backend message, or `fallback` when none could be extracted.
    pub fn user_message(&self, fallback: &str) -> String {
        self.message().unwrap_or(fallback).to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Backend { status: 404, .. })
    }
}
