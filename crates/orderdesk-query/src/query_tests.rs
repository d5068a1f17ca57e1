use super::*;
use chrono::{DateTime, TimeZone, Utc};
use orderdesk_model::{Order, OrderStatus};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, d, 0, 0, 0).single().expect("timestamp")
}

fn fixture() -> Vec<Order> {
    vec![
        Order::new(1, "John", 500.00, OrderStatus::Pending, day(5)),
        Order::new(2, "Alice", 120.50, OrderStatus::Completed, day(2)),
        Order::new(3, "Johnson", 500.00, OrderStatus::Pending, day(8)),
        Order::new(4, "Bob", 75.25, OrderStatus::Cancelled, day(2)),
        Order::new(5, "alice cooper", 980.10, OrderStatus::Completed, day(1)),
    ]
}

fn request() -> OrderQueryRequest {
    OrderQueryRequest {
        limit: 50,
        ..OrderQueryRequest::default()
    }
}

fn ids(page: &OrderPage) -> Vec<i64> {
    page.items.iter().map(|o| o.id).collect()
}

#[test]
fn status_filter_keeps_only_matching_orders() {
    let req = OrderQueryRequest {
        status: StatusFilter::from_raw(Some("Pending")),
        ..request()
    };
    let page = run_query(&fixture(), &req);
    assert_eq!(ids(&page), vec![1, 3]);
    assert!(page.items.iter().all(|o| o.status == OrderStatus::Pending));
}

#[test]
fn status_filter_is_case_insensitive() {
    let req = OrderQueryRequest {
        status: StatusFilter::from_raw(Some("completed")),
        ..request()
    };
    assert_eq!(ids(&run_query(&fixture(), &req)), vec![2, 5]);
}

#[test]
fn all_and_unparseable_status_filters_are_skipped() {
    assert_eq!(StatusFilter::from_raw(None), StatusFilter::Any);
    assert_eq!(StatusFilter::from_raw(Some("all")), StatusFilter::Any);
    assert_eq!(StatusFilter::from_raw(Some("ALL")), StatusFilter::Any);
    assert_eq!(StatusFilter::from_raw(Some("  ")), StatusFilter::Any);
    assert_eq!(StatusFilter::from_raw(Some("bogus")), StatusFilter::Any);

    let req = OrderQueryRequest {
        status: StatusFilter::from_raw(Some("bogus")),
        ..request()
    };
    assert_eq!(run_query(&fixture(), &req).total_records, 5);
}

#[test]
fn search_matches_customer_name_substring_case_insensitively() {
    let req = OrderQueryRequest {
        search: Some("aliCE".to_string()),
        ..request()
    };
    assert_eq!(ids(&run_query(&fixture(), &req)), vec![2, 5]);
}

#[test]
fn search_matches_id_by_exact_decimal_string() {
    let req = OrderQueryRequest {
        search: Some(" 4 ".to_string()),
        ..request()
    };
    assert_eq!(ids(&run_query(&fixture(), &req)), vec![4]);
}

#[test]
fn search_does_not_match_id_prefixes() {
    let orders = vec![
        Order::new(1, "Zed", 1.0, OrderStatus::Pending, day(1)),
        Order::new(12, "Zed", 2.0, OrderStatus::Pending, day(1)),
    ];
    let req = OrderQueryRequest {
        search: Some("1".to_string()),
        ..request()
    };
    assert_eq!(ids(&run_query(&orders, &req)), vec![1]);
}

#[test]
fn blank_search_applies_no_filter() {
    let req = OrderQueryRequest {
        search: Some("   ".to_string()),
        ..request()
    };
    assert_eq!(run_query(&fixture(), &req).total_records, 5);
}

#[test]
fn sort_by_amount_is_monotone_in_both_directions() {
    let asc = run_query(
        &fixture(),
        &OrderQueryRequest {
            sort: SortKey::from_raw(Some("amount")),
            ..request()
        },
    );
    let amounts: Vec<f64> = asc.items.iter().map(|o| o.amount).collect();
    assert!(amounts.windows(2).all(|w| w[0] <= w[1]));

    let desc = run_query(
        &fixture(),
        &OrderQueryRequest {
            sort: SortKey::from_raw(Some("Amount")),
            order: SortOrder::from_raw(Some("DESC")),
            ..request()
        },
    );
    let amounts: Vec<f64> = desc.items.iter().map(|o| o.amount).collect();
    assert!(amounts.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn sort_ties_preserve_original_relative_order() {
    let asc = run_query(
        &fixture(),
        &OrderQueryRequest {
            sort: SortKey::Amount,
            ..request()
        },
    );
    // Orders 1 and 3 share an amount; 1 precedes 3 in the seed.
    assert_eq!(ids(&asc), vec![4, 2, 1, 3, 5]);

    let desc = run_query(
        &fixture(),
        &OrderQueryRequest {
            sort: SortKey::CreatedDate,
            order: SortOrder::Desc,
            ..request()
        },
    );
    // Orders 2 and 4 share a created date; 2 precedes 4 in the seed.
    assert_eq!(ids(&desc), vec![3, 1, 2, 4, 5]);
}

#[test]
fn unknown_sort_key_falls_back_to_id_ascending_even_for_desc() {
    let page = run_query(
        &fixture(),
        &OrderQueryRequest {
            sort: SortKey::from_raw(Some("customerName")),
            order: SortOrder::Desc,
            ..request()
        },
    );
    assert_eq!(ids(&page), vec![1, 2, 3, 4, 5]);
}

#[test]
fn pagination_math_and_clipping() {
    let req = OrderQueryRequest {
        page: 2,
        limit: 2,
        ..OrderQueryRequest::default()
    };
    let page = run_query(&fixture(), &req);
    assert_eq!(page.total_records, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(ids(&page), vec![3, 4]);

    let last = run_query(
        &fixture(),
        &OrderQueryRequest {
            page: 3,
            limit: 2,
            ..OrderQueryRequest::default()
        },
    );
    assert_eq!(ids(&last), vec![5]);
}

#[test]
fn page_beyond_total_yields_empty_items_not_error() {
    let req = OrderQueryRequest {
        page: 9,
        limit: 10,
        ..OrderQueryRequest::default()
    };
    let page = run_query(&fixture(), &req);
    assert!(page.items.is_empty());
    assert_eq!(page.page, 9);
    assert_eq!(page.total_records, 5);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn empty_collection_produces_zero_pages() {
    let page = run_query(&[], &OrderQueryRequest::default());
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.total_records, 0);
}

#[test]
fn pipeline_applies_filter_before_pagination_counts() {
    let req = OrderQueryRequest {
        status: StatusFilter::Only(OrderStatus::Completed),
        limit: 1,
        ..OrderQueryRequest::default()
    };
    let page = run_query(&fixture(), &req);
    assert_eq!(page.total_records, 2);
    assert_eq!(page.total_pages, 2);
    assert_eq!(ids(&page), vec![2]);
}

#[test]
fn run_query_leaves_input_untouched() {
    let orders = fixture();
    let before = orders.clone();
    let _ = run_query(
        &orders,
        &OrderQueryRequest {
            sort: SortKey::Amount,
            order: SortOrder::Desc,
            ..request()
        },
    );
    assert_eq!(orders, before);
}
