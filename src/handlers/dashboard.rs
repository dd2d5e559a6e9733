//! Fallback handler serving the embedded dashboard.
//!
//! Any path that matches no API route gets the dashboard document, a
//! self-contained HTML page that drives the same JSON endpoints any other
//! client would use. The page is embedded at compile time; there is no
//! template engine and nothing to deploy alongside the binary.

use axum::{
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Response},
};

const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// Serve the dashboard for unmatched paths.
///
/// Preflight OPTIONS requests are answered by the CORS layer before they
/// get here; a plain OPTIONS to an unrouted path still receives an empty
/// response rather than the HTML document.
pub async fn dashboard(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }

    Html(DASHBOARD_HTML).into_response()
}
