// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use orderdesk_model::Order;
use serde::{Deserialize, Serialize};

/// One order as it appears on the wire. Field names are camelCase and the
/// status travels as its enum name string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    pub customer_name: String,
    pub amount: f64,
    pub status: String,
    pub created_date: DateTime<Utc>,
}

impl From<&Order> for OrderDto {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name.clone(),
            amount: order.amount,
            status: order.status.as_str().to_string(),
            created_date: order.created_date,
        }
    }
}

/// Paginated list envelope. Returned with 200 even when `data` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub data: Vec<OrderDto>,
    pub page: u64,
    pub total_pages: u64,
    pub total_records: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}
