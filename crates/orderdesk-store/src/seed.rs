// SPDX-License-Identifier: Apache-2.0

use chrono::{Duration, Utc};
use orderdesk_model::{Order, OrderStatus};
use rand::Rng;

/// Name pool used by the seed step.
pub const SEED_CUSTOMER_NAMES: [&str; 10] = [
    "John", "Srikanta", "Mark", "Swaroop", "Alice", "Bob", "Sarah", "Todd", "Emma", "Sophia",
];

/// Builds `count` randomized orders with sequential ids starting at 1.
/// Amounts are rounded to two decimals; creation dates land 1-29 days in
/// the past.
#[must_use]
pub fn seed_orders(count: usize) -> Vec<Order> {
    let mut rng = rand::thread_rng();
    let mut orders = Vec::with_capacity(count);
    for i in 1..=count {
        let name = SEED_CUSTOMER_NAMES[rng.gen_range(0..SEED_CUSTOMER_NAMES.len())];
        let amount = (rng.gen::<f64>() * 5000.0 * 100.0).round() / 100.0;
        let status = OrderStatus::ALL[rng.gen_range(0..OrderStatus::ALL.len())];
        let created_date = Utc::now() - Duration::days(rng.gen_range(1..30));
        orders.push(Order::new(i as i64, name, amount, status, created_date));
    }
    orders
}
