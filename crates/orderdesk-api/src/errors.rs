// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    InvalidQueryParameter,
    MissingStatus,
    InvalidStatus,
    OrderNotFound,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            format!("invalid query parameter: {name}"),
            json!({"parameter": name, "value": value}),
        )
    }

    #[must_use]
    pub fn missing_status() -> Self {
        Self::new(ApiErrorCode::MissingStatus, "Status is required", json!({}))
    }

    #[must_use]
    pub fn invalid_status(value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidStatus,
            "Invalid status value",
            json!({"status": value}),
        )
    }

    #[must_use]
    pub fn order_not_found(id: i64) -> Self {
        Self::new(
            ApiErrorCode::OrderNotFound,
            format!("Order with id '{id}' not found"),
            json!({"order_id": id}),
        )
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};
