#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the integration tests: tracing setup and builders for
//! in-memory nested-array documents. The builders exist because the payload
//! format is positional — fixtures need values at exact offsets like 183 with
//! nulls everywhere in between, which `json!` alone renders unreadable.

use serde_json::{json, Value};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

/// Builds a sequence holding each value at its given offset, null-padded in
/// between, exactly as the wire format does.
pub fn sparse(entries: &[(usize, Value)]) -> Value {
    let len = entries.iter().map(|(idx, _)| idx + 1).max().unwrap_or(0);
    let mut seq = vec![Value::Null; len];
    for (idx, value) in entries {
        seq[*idx] = value.clone();
    }
    Value::Array(seq)
}

/// Wraps a data array into a minimal top-level document at offset 6.
pub fn document_with_data(data: Value) -> Vec<u8> {
    serde_json::to_vec(&sparse(&[(6, data)])).expect("fixture should serialize")
}

/// The CID sits outside the data array, on a deep path relative to the root.
pub fn cid_node(cid: &str) -> Value {
    sparse(&[(
        3,
        sparse(&[(
            0,
            sparse(&[(
                13,
                sparse(&[(0, sparse(&[(0, sparse(&[(1, json!(cid))]))]))]),
            )]),
        )]),
    )])
}

/// A full restaurant document exercising every offset the extractor reads,
/// in the primary (current) layout.
pub fn restaurant_document() -> Vec<u8> {
    let order_online_items = json!([
        [
            ["Uber Eats"],
            [null, null, ["https://order.example.com/ubereats"]]
        ],
        [
            ["DoorDash"],
            [null, null, ["https://order.example.com/doordash"]]
        ]
    ]);

    serde_json::to_vec(&sparse(&[
        (6, restaurant_data(order_online_items, true)),
        (25, cid_node("12345678901234567890")),
    ]))
    .expect("fixture should serialize")
}

/// Like [`restaurant_document`], but with the order-online items present only
/// at the alternate (older) layout offset.
pub fn restaurant_document_with_legacy_ordering() -> Vec<u8> {
    let order_online_items = json!([
        [
            ["Uber Eats"],
            [null, null, ["https://order.example.com/ubereats"]]
        ]
    ]);

    serde_json::to_vec(&sparse(&[
        (6, restaurant_data(order_online_items, false)),
        (25, cid_node("12345678901234567890")),
    ]))
    .expect("fixture should serialize")
}

fn restaurant_data(order_online_items: Value, primary_order_layout: bool) -> Value {
    // Primary layout: items at [75, 0, 1, 2]; alternate: [75, 0, 0, 2].
    let order_slot = sparse(&[(2, order_online_items)]);
    let order_online = if primary_order_layout {
        sparse(&[(0, sparse(&[(1, order_slot)]))])
    } else {
        sparse(&[(0, sparse(&[(0, order_slot)]))])
    };

    sparse(&[
        (
            4,
            sparse(&[
                (2, json!("$$")),
                (3, json!(["https://maps.example.com/reviews/kyoto-ramen"])),
                (7, json!(4.6)),
                (8, json!(1284)),
            ]),
        ),
        (7, json!(["https://kyotoramen.example.com"])),
        (9, sparse(&[(2, json!(35.0116)), (3, json!(135.7681))])),
        (10, json!("0x6001a8d6c3f1:0x5f8a")),
        (11, json!("Kyoto Ramen")),
        (13, json!(["Ramen restaurant", "Noodle shop"])),
        (18, json!("Kyoto Ramen, 123 Main St")),
        (27, json!("https://maps.example.com/place/kyoto-ramen")),
        (30, json!("Asia/Tokyo")),
        (
            32,
            sparse(&[(
                1,
                sparse(&[(1, json!("Hand-pulled noodles and tonkotsu broth."))]),
            )]),
        ),
        (
            34,
            sparse(&[
                (
                    1,
                    json!([
                        ["Monday", ["10 am", "–10 pm"]],
                        ["Sunday", ["Closed"]]
                    ]),
                ),
                (4, sparse(&[(4, json!("Open"))])),
            ]),
        ),
        (
            38,
            json!(["https://kyotoramen.example.com/menu", "Menu"]),
        ),
        (
            46,
            json!([["https://book.example.com/kyoto-ramen", "OpenTable"]]),
        ),
        (
            52,
            sparse(&[
                (
                    0,
                    json!([
                        [
                            [null, "Alice", "https://img.example.com/alice.jpg"],
                            "a month ago",
                            null,
                            "Great noodles, short wait.",
                            5,
                            null, null, null, null, null, null, null, null, null,
                            [[null, null, null, null, null, null, ["https://img.example.com/bowl.jpg"]]]
                        ],
                        [[null, ""], "yesterday", null, "placeholder entry", 1]
                    ]),
                ),
                (3, json!([3, 1, 22, 104, 1154])),
            ]),
        ),
        (
            57,
            sparse(&[(1, json!("Kyoto Ramen Co.")), (2, json!("abc123"))]),
        ),
        (
            72,
            sparse(&[(
                0,
                sparse(&[(
                    1,
                    sparse(&[(6, json!(["https://img.example.com/thumb.jpg"]))]),
                )]),
            )]),
        ),
        (75, order_online),
        (
            84,
            sparse(&[(
                0,
                json!([
                    [1, [[8, 20], [12, 85]]],
                    [7, [[12, 60]]]
                ]),
            )]),
        ),
        (
            100,
            sparse(&[(
                1,
                json!([[
                    "accessibility",
                    "Accessibility",
                    [
                        [null, "Wheelchair accessible entrance", [null, [[1]]]],
                        [null, "", [null, [[1]]]]
                    ]
                ]]),
            )]),
        ),
        (
            171,
            sparse(&[(
                0,
                json!([[
                    null,
                    null,
                    "Front of restaurant",
                    [[null, null, null, null, null, null, ["https://img.example.com/front.jpg"]]]
                ]]),
            )]),
        ),
        (178, sparse(&[(0, json!(["+81 75-123-4567"]))])),
        (
            183,
            sparse(&[
                (
                    1,
                    json!([
                        "Nakagyo Ward",
                        "123 Main St",
                        null,
                        "Kyoto",
                        "604-8091",
                        "Kyoto Prefecture",
                        "Japan"
                    ]),
                ),
                (2, sparse(&[(2, json!(["8Q6QXM2C+XX"]))])),
            ]),
        ),
    ])
}
