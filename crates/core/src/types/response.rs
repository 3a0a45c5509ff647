//! Response envelopes for the remote endpoints.

use serde::{Deserialize, Serialize};

use super::order::Order;
use super::pagination::Pagination;

/// One page of orders plus its pagination metadata, from `GET /orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersPage {
    #[serde(default)]
    pub orders: Vec<Order>,
    pub pagination: Pagination,
}

/// Envelope returned by `POST /add-order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub tracking_code: String,
    pub order_id: u64,
    /// Human-readable confirmation; not always present on live servers.
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope returned by `POST /update-status` and `POST /update-details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteResponse {
    pub success: bool,
    pub message: String,
}
