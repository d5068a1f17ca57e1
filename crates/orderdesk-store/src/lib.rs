// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use orderdesk_model::{Order, OrderStatus};
use std::sync::{PoisonError, RwLock};
use tracing::{info, warn};

pub const CRATE_NAME: &str = "orderdesk-store";

mod seed;

pub use seed::{seed_orders, SEED_CUSTOMER_NAMES};

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub seed_count: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_count: 55 }
    }
}

/// Sole owner of the order collection for the lifetime of the process.
///
/// The collection is fixed at construction; `update_status` is the only
/// mutation and only touches the `status` field. Reads take a snapshot under
/// the read lock so the query pipeline never observes a half-applied write.
pub struct OrderStore {
    orders: RwLock<Vec<Order>>,
}

impl OrderStore {
    #[must_use]
    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }

    /// Generates the startup collection: ids `1..=seed_count`, randomized
    /// names, amounts, statuses, and creation dates.
    #[must_use]
    pub fn seeded(cfg: &StoreConfig) -> Self {
        let orders = seed_orders(cfg.seed_count);
        info!(count = orders.len(), "seeded orders into in-memory store");
        Self::from_orders(orders)
    }

    /// Full collection in insertion order, reflecting prior mutations.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn get_by_id(&self, id: i64) -> Option<Order> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|o| o.id == id)
            .cloned()
    }

    /// Sets the status of the order with the given id. Returns false and
    /// leaves the store untouched when no such order exists.
    pub fn update_status(&self, id: i64, new_status: OrderStatus) -> bool {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);
        match orders.iter_mut().find(|o| o.id == id) {
            Some(order) => {
                let old_status = order.status;
                order.status = new_status;
                info!(
                    order_id = id,
                    old_status = %old_status,
                    new_status = %new_status,
                    "order status updated"
                );
                true
            }
            None => {
                warn!(order_id = id, "status update for non-existent order");
                false
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
