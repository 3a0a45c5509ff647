//! Synthetic dataset and responder for demo mode.
//!
//! The collection is generated once per process with randomized but
//! schema-valid contents, then paginated with the same page size and
//! pagination shape as the live API so consumers are mode-agnostic.
//!
//! The write endpoints return success envelopes with synthesized identifiers
//! but deliberately do NOT mutate the collection: a mock create/update is
//! fire-and-forget, and a subsequent read will not reflect it. Preserve this
//! when touching the module; consumers rely on the read side staying stable.

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::json;

use somahar_core::{Order, Pagination, RemoteConfig};

use crate::error::ClientError;

/// Items per page, matching the live API.
pub const PAGE_SIZE: usize = 20;

/// Size of the generated collection; 45 items give three pages (20/20/5).
pub const MOCK_ORDER_COUNT: usize = 45;

/// Partners assigned to generated orders.
const ORDER_PARTNERS: &[&str] = &["RedX", "Steadfast", "Pathao", "Paperfly"];

/// Statuses assigned to generated orders.
const ORDER_STATUSES: &[&str] = &[
    "Picked",
    "In Transit",
    "Out for Delivery",
    "Delivered",
    "Cancelled",
];

/// Police-station areas for generated addresses.
const AREAS: &[&str] = &["Gulshan", "Banani", "Dhanmondi", "Mirpur"];

static MOCK_ORDERS: LazyLock<Vec<Order>> = LazyLock::new(|| generate_orders(MOCK_ORDER_COUNT));

/// The configuration the mock server exposes on `/app-config`.
///
/// Slightly wider than the per-order sets, like a real deployment where some
/// configured partners have no orders yet.
fn remote_config() -> RemoteConfig {
    RemoteConfig {
        delivery_partners: ["RedX", "Steadfast", "Pathao", "Paperfly", "E-Courier", "In-House"]
            .map(String::from)
            .to_vec(),
        quick_statuses: [
            "Picked",
            "In Transit",
            "Out for Delivery",
            "Delivered",
            "Cancelled",
            "Returned",
        ]
        .map(String::from)
        .to_vec(),
    }
}

fn generate_orders(count: usize) -> Vec<Order> {
    let mut rng = rand::rng();
    let now = chrono::Local::now();
    let last_update = now.format("%Y-%m-%d %H:%M:%S").to_string();
    let estimated_delivery = (now + chrono::Duration::days(3)).format("%Y-%m-%d").to_string();

    (1..=count)
        .map(|i| Order {
            id: i as u64,
            tracking_code: format!("ST-{}", 8000 + i - 1),
            buyer_name: format!("Customer {i}"),
            phone: format!("017{:08}", i - 1),
            address: format!("House {i}, Road {}, Dhaka", rng.random_range(0..20)),
            police_station: pick(AREAS, &mut rng),
            amount: format!("{} BDT", 500 + rng.random_range(0..2000)),
            rider_name: if rng.random_bool(0.5) {
                format!("Rider {i}")
            } else {
                String::new()
            },
            rider_phone: if rng.random_bool(0.5) {
                "018...".to_string()
            } else {
                String::new()
            },
            estimated_delivery: estimated_delivery.clone(),
            delivery_partner: pick(ORDER_PARTNERS, &mut rng),
            latest_status: pick(ORDER_STATUSES, &mut rng),
            last_update: last_update.clone(),
        })
        .collect()
}

fn pick(choices: &[&str], rng: &mut impl Rng) -> String {
    choices.choose(rng).copied().unwrap_or_default().to_string()
}

/// Extract the 1-based `page` query parameter, defaulting to 1.
fn page_param(endpoint: &str) -> usize {
    endpoint
        .split_once("page=")
        .and_then(|(_, rest)| rest.split('&').next())
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(1)
}

fn orders_page(page: usize) -> serde_json::Value {
    let page = page.max(1);
    let orders: Vec<&Order> = MOCK_ORDERS
        .iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();
    let pagination = Pagination {
        current_page: page as u32,
        total_pages: MOCK_ORDERS.len().div_ceil(PAGE_SIZE) as u32,
        total_items: MOCK_ORDERS.len() as u64,
    };
    json!({ "orders": orders, "pagination": pagination })
}

/// Answer a logical endpoint the way the live server would.
///
/// Unknown endpoints fail exactly like an unmapped live route.
pub(crate) fn respond(endpoint: &str) -> Result<serde_json::Value, ClientError> {
    if endpoint == "/app-config" {
        return serde_json::to_value(remote_config()).map_err(|e| ClientError::Decode(e.to_string()));
    }

    if endpoint.starts_with("/orders") {
        return Ok(orders_page(page_param(endpoint)));
    }

    if endpoint == "/add-order" {
        let mut rng = rand::rng();
        return Ok(json!({
            "success": true,
            "message": "Order created successfully (Mock)",
            "tracking_code": format!("MOCK-{}", rng.random_range(0..1000)),
            "order_id": rng.random_range(0..10_000u64),
        }));
    }

    if endpoint == "/update-status" || endpoint == "/update-details" {
        return Ok(json!({ "success": true, "message": "Updated successfully (Mock)" }));
    }

    Err(ClientError::EndpointNotFound)
}
