// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const CRATE_NAME: &str = "orderdesk-model";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    InvalidFormat(&'static str),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::InvalidFormat(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Closed status enumeration. Serialized by exact variant name; parsed
/// case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Completed, Self::Cancelled];

    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.trim().is_empty() {
            return Err(ParseError::Empty("status"));
        }
        for status in Self::ALL {
            if raw.eq_ignore_ascii_case(status.as_str()) {
                return Ok(status);
            }
        }
        Err(ParseError::InvalidFormat(
            "status must be one of Pending, Completed, Cancelled",
        ))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single purchase record. `status` is the only field that mutates after
/// creation; everything else is fixed at seed time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub amount: f64,
    pub status: OrderStatus,
    pub created_date: DateTime<Utc>,
}

impl Order {
    #[must_use]
    pub fn new(
        id: i64,
        customer_name: impl Into<String>,
        amount: f64,
        status: OrderStatus,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            amount,
            status,
            created_date,
        }
    }
}
