// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::api_error_response;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use orderdesk_api::{
    parse_list_orders_params, ApiError, OrderDto, OrdersResponse, UpdateStatusRequest,
};
use orderdesk_model::OrderStatus;
use orderdesk_query::run_query;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::atomic::Ordering;
use std::time::Instant;
use tracing::{info, warn};

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

pub(crate) async fn landing_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = make_request_id(&state);
    let html = format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Orderdesk</title></head><body>\
<h1>Orderdesk</h1>\
<p>Version: <code>{}</code></p>\
<h2>Example Queries</h2>\
<ul>\
<li><a href=\"/v1/orders?page=1&limit=10\">/v1/orders?page=1&limit=10</a></li>\
<li><a href=\"/v1/orders?status=Pending&sortBy=amount&order=desc\">/v1/orders?status=Pending&sortBy=amount&order=desc</a></li>\
<li><a href=\"/v1/orders?search=alice\">/v1/orders?search=alice</a></li>\
</ul>\
</body></html>",
        env!("CARGO_PKG_VERSION")
    );
    let resp = Html(html).into_response();
    state
        .metrics
        .observe_request("/", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = make_request_id(&state);
    let resp = (StatusCode::OK, "ok").into_response();
    state
        .metrics
        .observe_request("/healthz", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn version_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = make_request_id(&state);
    let payload = json!({
        "name": crate::CRATE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "config_schema_version": crate::config::CONFIG_SCHEMA_VERSION,
    });
    let resp = Json(payload).into_response();
    state
        .metrics
        .observe_request("/v1/version", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let text = state.metrics.render_text().await;
    let mut resp = (StatusCode::OK, text).into_response();
    resp.headers_mut().insert(
        "content-type",
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    resp
}

pub(crate) async fn list_orders_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    info!(request_id = %request_id, route = "/v1/orders", params = ?params, "request start");

    let parsed = match parse_list_orders_params(&params) {
        Ok(v) => v,
        Err(err) => {
            warn!(request_id = %request_id, error = %err.message, "list orders rejected");
            let resp = api_error_response(err);
            state
                .metrics
                .observe_request("/v1/orders", StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };

    let snapshot = state.store.snapshot();
    let page = run_query(&snapshot, &parsed.to_query_request());
    let body = OrdersResponse {
        data: page.items.iter().map(OrderDto::from).collect(),
        page: page.page,
        total_pages: page.total_pages,
        total_records: page.total_records,
    };
    let resp = Json(body).into_response();
    state
        .metrics
        .observe_request("/v1/orders", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn update_order_status_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStatusRequest>,
) -> Response {
    const ROUTE: &str = "/v1/orders/{id}/status";
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    info!(request_id = %request_id, route = ROUTE, order_id = id, "request start");

    let raw_status = body.status.as_deref().map(str::trim).unwrap_or("");
    if raw_status.is_empty() {
        warn!(request_id = %request_id, order_id = id, "status update missing status");
        let resp = api_error_response(ApiError::missing_status());
        state
            .metrics
            .observe_request(ROUTE, StatusCode::BAD_REQUEST, started.elapsed())
            .await;
        return with_request_id(resp, &request_id);
    }

    let new_status = match OrderStatus::parse(raw_status) {
        Ok(v) => v,
        Err(_) => {
            warn!(
                request_id = %request_id,
                order_id = id,
                status = raw_status,
                "status update with invalid status"
            );
            let resp = api_error_response(ApiError::invalid_status(raw_status));
            state
                .metrics
                .observe_request(ROUTE, StatusCode::BAD_REQUEST, started.elapsed())
                .await;
            return with_request_id(resp, &request_id);
        }
    };

    if !state.store.update_status(id, new_status) {
        let resp = api_error_response(ApiError::order_not_found(id));
        state
            .metrics
            .observe_request(ROUTE, StatusCode::NOT_FOUND, started.elapsed())
            .await;
        return with_request_id(resp, &request_id);
    }

    info!(request_id = %request_id, order_id = id, new_status = %new_status, "status update ok");
    let resp = Json(json!({"message": "Status updated successfully"})).into_response();
    state
        .metrics
        .observe_request(ROUTE, StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}
