//! Order snapshot as served by the remote API.

use serde::{Deserialize, Serialize};

/// A single order as returned by the `/orders` endpoint.
///
/// Treated as an immutable snapshot: the client never mutates an `Order` in
/// place. After a successful write it overlays the applied fields onto a
/// clone; it does not re-fetch to confirm.
///
/// All descriptive fields are display strings on the wire (including
/// `amount`, e.g. `"1200 BDT"`, and the timestamp fields), so they are kept
/// as strings here rather than parsed into richer types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned identity.
    pub id: u64,
    pub tracking_code: String,
    pub buyer_name: String,
    pub phone: String,
    pub address: String,
    pub police_station: String,
    pub amount: String,
    pub rider_name: String,
    pub rider_phone: String,
    pub estimated_delivery: String,
    pub delivery_partner: String,
    pub latest_status: String,
    pub last_update: String,
}

impl Order {
    /// Overlay a status change onto a snapshot after a successful
    /// `/update-status` call.
    #[must_use]
    pub fn with_status(mut self, status: &str) -> Self {
        self.latest_status = status.to_string();
        self
    }
}
