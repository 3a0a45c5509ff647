//! Wire types for the Somahar remote API.

pub mod config;
pub mod order;
pub mod pagination;
pub mod payload;
pub mod response;

pub use config::RemoteConfig;
pub use order::Order;
pub use pagination::Pagination;
pub use payload::{CreateOrderPayload, UpdateDetailsPayload, UpdateStatusPayload, ValidationError};
pub use response::{CreateOrderResponse, OrdersPage, WriteResponse};
