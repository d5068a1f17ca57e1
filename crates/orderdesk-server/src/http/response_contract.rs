// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orderdesk_api::{ApiError, ApiErrorCode};
use serde_json::json;

#[must_use]
pub(crate) fn api_error_status(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::InvalidQueryParameter
        | ApiErrorCode::MissingStatus
        | ApiErrorCode::InvalidStatus => StatusCode::BAD_REQUEST,
        ApiErrorCode::OrderNotFound => StatusCode::NOT_FOUND,
        ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[must_use]
pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = api_error_status(err.code);
    (status, Json(json!({"error": err}))).into_response()
}
