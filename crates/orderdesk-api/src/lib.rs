// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

pub const CRATE_NAME: &str = "orderdesk-api";

pub mod dto;
pub mod errors;
pub mod params;

pub use dto::{OrderDto, OrdersResponse, UpdateStatusRequest};
pub use errors::{ApiError, ApiErrorCode};
pub use params::{parse_list_orders_params, ListOrdersParams};
