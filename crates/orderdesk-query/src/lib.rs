// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use orderdesk_model::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

pub const CRATE_NAME: &str = "orderdesk-query";

/// Resolved status filter for stage one of the pipeline.
///
/// An absent, blank, `"all"`, or unparseable raw value all resolve to `Any`:
/// a status filter that fails enum parse is silently skipped, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    Any,
    Only(OrderStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(value) = raw else {
            return Self::Any;
        };
        if value.trim().is_empty() || value.eq_ignore_ascii_case("all") {
            return Self::Any;
        }
        match OrderStatus::parse(value) {
            Ok(status) => Self::Only(status),
            Err(_) => Self::Any,
        }
    }
}

/// Comparison key for stage three. Anything that is not `amount` or
/// `createddate` (case-insensitive) falls back to id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Id,
    Amount,
    CreatedDate,
}

impl SortKey {
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("amount") => Self::Amount,
            Some(value) if value.eq_ignore_ascii_case("createddate") => Self::CreatedDate,
            _ => Self::Id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// One list request, fully resolved. `page` and `limit` are 1-based and
/// validated upstream (`page >= 1`, `limit >= 1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQueryRequest {
    pub page: u64,
    pub limit: u64,
    pub search: Option<String>,
    pub status: StatusFilter,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl Default for OrderQueryRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            status: StatusFilter::Any,
            sort: SortKey::Id,
            order: SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPage {
    pub items: Vec<Order>,
    pub page: u64,
    pub total_pages: u64,
    pub total_records: u64,
}

/// Runs the fixed filter -> search -> sort -> paginate pipeline.
///
/// Pure function of the input slice and request: no side effects, safe to
/// call concurrently. `total_records` counts the filtered set before
/// pagination; a page past the end yields an empty item list, not an error.
#[must_use]
pub fn run_query(orders: &[Order], req: &OrderQueryRequest) -> OrderPage {
    let mut filtered: Vec<Order> = orders
        .iter()
        .filter(|o| matches_status(o, req.status))
        .filter(|o| matches_search(o, req.search.as_deref()))
        .cloned()
        .collect();

    sort_orders(&mut filtered, req.sort, req.order);

    let total_records = filtered.len() as u64;
    let total_pages = total_records.div_ceil(req.limit);

    let start = (req.page - 1)
        .saturating_mul(req.limit)
        .min(total_records) as usize;
    let end = (start as u64).saturating_add(req.limit).min(total_records) as usize;
    let items = filtered[start..end].to_vec();

    OrderPage {
        items,
        page: req.page,
        total_pages,
        total_records,
    }
}

fn matches_status(order: &Order, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::Any => true,
        StatusFilter::Only(status) => order.status == status,
    }
}

fn matches_search(order: &Order, search: Option<&str>) -> bool {
    let Some(raw) = search else {
        return true;
    };
    let term = raw.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    order.id.to_string() == term || order.customer_name.to_lowercase().contains(&term)
}

fn sort_orders(orders: &mut [Order], key: SortKey, order: SortOrder) {
    // Vec::sort_by is stable, so ties keep their original relative order in
    // both directions. Direction only applies to the amount and created-date
    // keys; an id sort is always ascending.
    match (key, order) {
        (SortKey::Id, _) => orders.sort_by_key(|o| o.id),
        (SortKey::Amount, SortOrder::Asc) => orders.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
        (SortKey::Amount, SortOrder::Desc) => orders.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        (SortKey::CreatedDate, SortOrder::Asc) => {
            orders.sort_by(|a, b| a.created_date.cmp(&b.created_date));
        }
        (SortKey::CreatedDate, SortOrder::Desc) => {
            orders.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        }
    }
}

#[cfg(test)]
mod query_tests;
