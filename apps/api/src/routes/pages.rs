//! Static page routes. The browser client ships inside the binary via
//! `include_str!` so the proxy is a single self-contained deployable.

use axum::http::header;
use axum::response::{Html, IntoResponse};

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// GET /script.js
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript")],
        include_str!("../../assets/script.js"),
    )
}
