use crate::infra::qr::{render_svg, verification_url};
use crate::transport::http::error::WebError;
use crate::transport::http::types::AppState;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;

/// SVG QR code linking to `/verify/{id}` on the public portal origin.
pub async fn qr_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, WebError> {
    let url = verification_url(&state.public_url, &id)?;
    let svg = render_svg(&url)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}
