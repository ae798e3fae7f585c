pub mod assets;
pub mod pages;
pub mod view;

use std::sync::Arc;

use anyhow::{anyhow, Result};
use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{Html, Response},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, Local};
use log::info;
use serde::Serialize;
use tokio::net::TcpListener;

use crate::{
    config::Config,
    models::{apartment::Apartment, filter::FilterState},
};

use view::{ListingView, ViewQuery};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct ApartmentsResponse {
    pub seed: u64,
    pub filter: FilterState,
    pub total: usize,
    pub apartments: Vec<Apartment>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/api/apartments", get(list_apartments))
        .route("/logo.svg", get(assets::logo))
        .route("/placeholder.svg", get(assets::placeholder))
        .route("/health", get(health))
        .layer(middleware::from_fn(cors_layer))
        .with_state(state)
}

pub async fn start_http_server(
    state: AppState,
    mut shutdown_rx: tokio::sync::broadcast::Receiver<()>,
) -> Result<()> {
    let bind_addr = state.config.bind_address();

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|err| anyhow!("failed to bind http listener on {}: {}", bind_addr, err))?;
    info!("Serving landing page on http://{}", bind_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn cors_layer(req: axum::http::Request<axum::body::Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = Response::new(axum::body::Body::empty());
        apply_cors_headers(response.headers_mut());
        *response.status_mut() = StatusCode::NO_CONTENT;
        response
    } else {
        let mut response = next.run(req).await;
        apply_cors_headers(response.headers_mut());
        response
    }
}

fn apply_cors_headers(headers: &mut axum::http::HeaderMap) {
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    headers.insert(
        axum::http::header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
}

async fn landing_page(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Html<String> {
    let view = ListingView::resolve(&state.config, &query);
    let visible = view.visible();
    info!(
        "Rendering view {}: {} of {} apartments match",
        view.seed,
        visible.len(),
        view.apartments.len()
    );

    Html(pages::render_landing(&view, &visible, Local::now().year()))
}

async fn list_apartments(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Json<ApiResponse<ApartmentsResponse>> {
    let view = ListingView::resolve(&state.config, &query);
    let apartments: Vec<Apartment> = view.visible().into_iter().cloned().collect();

    Json(ApiResponse {
        data: ApartmentsResponse {
            seed: view.seed,
            filter: view.filter,
            total: view.apartments.len(),
            apartments,
        },
    })
}

async fn health() -> &'static str {
    "OK"
}
