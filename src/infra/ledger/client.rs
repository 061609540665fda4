// Responsible for all communication with the ledger backend's `/products` API.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::error::{ApiError, ApiResult, ErrorBody};
use super::ProductLedger;
use crate::domain::product::{Product, ProductDraft};

/// HTTP client for the ledger backend.
///
/// Cheap to clone; clones share the underlying connection pool. No timeout and no retry
/// policy is configured beyond the transport defaults.
///
/// ```rust,ignore
/// let client = LedgerClient::new("http://localhost:8081")?;
/// let products = client.get_all_products().await?;
/// ```
#[derive(Debug, Clone)]
pub struct LedgerClient {
    base_url: Url,
    http: Client,
}

impl LedgerClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// * [`ApiError::InvalidBaseUrl`] - `base_url` is not an absolute http(s) URL
    /// * [`ApiError::Network`] - the HTTP client could not be built
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = Client::builder().build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn error_from(res: Response) -> ApiError {
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        let message = ErrorBody::extract(&body);
        tracing::warn!(status, message = ?message, "ledger backend returned an error");
        ApiError::Backend { status, message }
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> ApiResult<T> {
        if !res.status().is_success() {
            return Err(Self::error_from(res).await);
        }
        res.json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ProductLedger for LedgerClient {
    async fn create_product(&self, draft: &ProductDraft) -> ApiResult<JsonValue> {
        let url = self.endpoint(&["products"]);
        tracing::debug!(%url, id = %draft.id, "creating product");

        let res = self.http.post(url).json(draft).send().await?;
        if !res.status().is_success() {
            return Err(Self::error_from(res).await);
        }

        // The body is passed through untyped; an empty body is not an error.
        let body = res.text().await?;
        if body.trim().is_empty() {
            return Ok(JsonValue::Null);
        }
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn get_product(&self, id: &str) -> ApiResult<Product> {
        let url = self.endpoint(&["products", id]);
        tracing::debug!(%url, "fetching product");

        let res = self.http.get(url).send().await?;
        Self::decode(res).await
    }

    async fn get_all_products(&self) -> ApiResult<Vec<Product>> {
        let url = self.endpoint(&["products"]);
        tracing::debug!(%url, "listing products");

        let res = self.http.get(url).send().await?;
        // An empty table is serialised as `null` by the backend.
        let products: Option<Vec<Product>> = Self::decode(res).await?;
        Ok(products.unwrap_or_default())
    }
}
