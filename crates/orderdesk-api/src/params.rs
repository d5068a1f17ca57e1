// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use orderdesk_query::{OrderQueryRequest, SortKey, SortOrder, StatusFilter};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Query parameters of the list endpoint after defaulting and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOrdersParams {
    pub page: u64,
    pub limit: u64,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl ListOrdersParams {
    /// Resolves the raw string parameters into a pipeline request. The
    /// lenient pieces (unknown status, unknown sort key, unknown direction)
    /// never fail here; their fallbacks live in the query crate.
    #[must_use]
    pub fn to_query_request(&self) -> OrderQueryRequest {
        OrderQueryRequest {
            page: self.page,
            limit: self.limit,
            search: self.search.clone(),
            status: StatusFilter::from_raw(self.status.as_deref()),
            sort: SortKey::from_raw(self.sort_by.as_deref()),
            order: SortOrder::from_raw(self.order.as_deref()),
        }
    }
}

/// Parses list-endpoint query parameters.
///
/// Defaults: `page=1`, `limit=10`, `order=asc`. A non-positive `page` is
/// coerced to 1; a non-positive `limit` is rejected. Values that fail to
/// parse as integers at all are rejected as well.
pub fn parse_list_orders_params(
    query: &BTreeMap<String, String>,
) -> Result<ListOrdersParams, ApiError> {
    let page = match query.get("page") {
        Some(raw) => {
            let value = raw
                .parse::<i64>()
                .map_err(|_| ApiError::invalid_param("page", raw))?;
            if value <= 0 {
                DEFAULT_PAGE
            } else {
                value as u64
            }
        }
        None => DEFAULT_PAGE,
    };

    let limit = match query.get("limit") {
        Some(raw) => {
            let value = raw
                .parse::<i64>()
                .map_err(|_| ApiError::invalid_param("limit", raw))?;
            if value <= 0 {
                return Err(ApiError::invalid_param("limit", raw));
            }
            value as u64
        }
        None => DEFAULT_LIMIT,
    };

    Ok(ListOrdersParams {
        page,
        limit,
        search: query.get("search").cloned(),
        status: query.get("status").cloned(),
        sort_by: query.get("sortBy").cloned(),
        order: query.get("order").cloned(),
    })
}
