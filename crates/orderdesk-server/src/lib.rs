// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use orderdesk_store::OrderStore;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod http;
mod metrics;

pub use config::{validate_startup_config, ApiConfig};

pub const CRATE_NAME: &str = "orderdesk-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<OrderStore>,
    pub api: ApiConfig,
    pub(crate) metrics: Arc<metrics::RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<OrderStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<OrderStore>, api: ApiConfig) -> Self {
        Self {
            store,
            api,
            metrics: Arc::new(metrics::RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::landing_handler))
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/metrics", get(http::handlers::metrics_handler))
        .route("/v1/version", get(http::handlers::version_handler))
        .route("/v1/orders", get(http::handlers::list_orders_handler))
        .route(
            "/v1/orders/{id}/status",
            post(http::handlers::update_order_status_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            http::cors::cors_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
