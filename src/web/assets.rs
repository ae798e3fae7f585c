use axum::{http::header, response::IntoResponse};

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 32 32"><rect width="32" height="32" rx="6" fill="#0f172a"/><path d="M8 24V13l8-6 8 6v11h-5v-6h-6v6z" fill="#fff"/></svg>"##;

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="1200" viewBox="0 0 1200 1200"><rect width="1200" height="1200" fill="#e2e8f0"/><path d="M400 800l150-200 100 130 70-90 80 160z" fill="#94a3b8"/><circle cx="720" cy="470" r="50" fill="#94a3b8"/></svg>"##;

pub async fn logo() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], LOGO_SVG)
}

pub async fn placeholder() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], PLACEHOLDER_SVG)
}
