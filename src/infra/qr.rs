//! QR codes pointing at a product's verification page.

use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};
use reqwest::Url;
use thiserror::Error;

/// Minimum rendered edge length in pixels.
pub const QR_SIZE: u32 = 128;

#[derive(Error, Debug)]
pub enum QrError {
    #[error("cannot build a verification link from origin {0}")]
    InvalidOrigin(String),

    #[error("qr encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// `{origin}/verify/{id}`, with `id` encoded as a single path segment.
pub fn verification_url(origin: &str, product_id: &str) -> Result<String, QrError> {
    let mut url = Url::parse(origin).map_err(|_| QrError::InvalidOrigin(origin.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| QrError::InvalidOrigin(origin.to_string()))?
        .pop_if_empty()
        .extend(["verify", product_id]);
    Ok(url.to_string())
}

/// `product_id` percent-encoded as one path segment, for `/verify/..` and `/qr/..` links.
pub fn path_segment(product_id: &str) -> String {
    let Ok(mut url) = Url::parse("http://portal.invalid/") else {
        return product_id.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(product_id);
    }
    url.path().trim_start_matches('/').to_string()
}

fn encode(data: &str) -> Result<QrCode, QrError> {
    Ok(QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)?)
}

/// Renders `data` as an SVG document (error correction level H, with quiet zone).
pub fn render_svg(data: &str) -> Result<String, QrError> {
    let code = encode(data)?;
    Ok(code
        .render()
        .min_dimensions(QR_SIZE, QR_SIZE)
        .quiet_zone(true)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// Renders `data` with half-block characters for terminal output.
pub fn render_terminal(data: &str) -> Result<String, QrError> {
    let code = encode(data)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .quiet_zone(true)
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_url_appends_encoded_id() {
        assert_eq!(
            verification_url("http://localhost:3000", "P-1001").unwrap(),
            "http://localhost:3000/verify/P-1001"
        );
        assert_eq!(
            verification_url("https://portal.example/app/", "A B/C").unwrap(),
            "https://portal.example/app/verify/A%20B%2FC"
        );
        assert!(matches!(
            verification_url("not an origin", "P-1"),
            Err(QrError::InvalidOrigin(_))
        ));
    }

    #[test]
    fn path_segment_escapes_separators() {
        assert_eq!(path_segment("P-1001"), "P-1001");
        assert_eq!(path_segment("LOT/7"), "LOT%2F7");
        assert_eq!(path_segment("a?b#c%d"), "a%3Fb%23c%25d");
        assert_eq!(path_segment(""), "");
    }

    #[test]
    fn svg_output_is_an_svg_document() {
        let svg = render_svg("http://localhost:3000/verify/P-1001").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn terminal_output_is_multiline() {
        let out = render_terminal("http://localhost:3000/verify/P-1001").unwrap();
        assert!(out.lines().count() > 10);
    }
}
