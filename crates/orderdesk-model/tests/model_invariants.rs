use chrono::{TimeZone, Utc};
use orderdesk_model::{Order, OrderStatus, ParseError};

#[test]
fn status_parse_is_case_insensitive() {
    assert_eq!(
        OrderStatus::parse("pending").expect("parse"),
        OrderStatus::Pending
    );
    assert_eq!(
        OrderStatus::parse("COMPLETED").expect("parse"),
        OrderStatus::Completed
    );
    assert_eq!(
        OrderStatus::parse("cAnCeLlEd").expect("parse"),
        OrderStatus::Cancelled
    );
}

#[test]
fn status_parse_rejects_unknown_and_blank() {
    assert!(matches!(
        OrderStatus::parse("bogus"),
        Err(ParseError::InvalidFormat(_))
    ));
    assert!(matches!(OrderStatus::parse(""), Err(ParseError::Empty(_))));
    assert!(matches!(
        OrderStatus::parse("   "),
        Err(ParseError::Empty(_))
    ));
}

#[test]
fn status_round_trips_through_its_wire_name() {
    for status in OrderStatus::ALL {
        assert_eq!(OrderStatus::parse(status.as_str()).expect("parse"), status);
    }
}

#[test]
fn status_serializes_as_exact_variant_name() {
    assert_eq!(
        serde_json::to_string(&OrderStatus::Pending).expect("serialize"),
        "\"Pending\""
    );
    assert_eq!(
        serde_json::from_str::<OrderStatus>("\"Cancelled\"").expect("deserialize"),
        OrderStatus::Cancelled
    );
    assert!(serde_json::from_str::<OrderStatus>("\"shipped\"").is_err());
}

#[test]
fn order_serde_uses_snake_case_field_names() {
    let order = Order::new(
        7,
        "Sarah",
        1250.50,
        OrderStatus::Completed,
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().expect("timestamp"),
    );
    let value = serde_json::to_value(&order).expect("serialize");
    assert_eq!(value["id"], 7);
    assert_eq!(value["customer_name"], "Sarah");
    assert_eq!(value["status"], "Completed");
    let back: Order = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, order);
}
