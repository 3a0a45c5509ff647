//! Order write commands: create, status update, details update.
//!
//! # Usage
//!
//! ```bash
//! somahar add --buyer "Rahim Khan" --phone 01712345678 --address "House 12, Dhaka"
//! somahar set-status --order 8 --status Delivered
//! somahar set-details --order 8 --rider-name "Rider 3" --estimated-delivery 2025-12-10
//! ```

use tracing::info;

use somahar_client::{ClientError, Session};
use somahar_core::{CreateOrderPayload, UpdateDetailsPayload};

/// Create a new order and report the assigned identifiers.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] when a required field is empty,
/// otherwise the classified error from the request.
pub async fn add(session: &Session, payload: &CreateOrderPayload) -> Result<(), ClientError> {
    let response = session.client().create_order(payload).await?;
    info!(
        "Order created: tracking code {}, order id {}",
        response.tracking_code, response.order_id
    );
    if let Some(message) = response.message {
        info!("{message}");
    }
    Ok(())
}

/// Set the latest status of an order.
///
/// # Errors
///
/// Returns the classified error from the request.
pub async fn set_status(
    session: &Session,
    order_id: u64,
    status: &str,
) -> Result<(), ClientError> {
    let response = session.client().set_order_status(order_id, status).await?;
    info!("{}", response.message);
    Ok(())
}

/// Update delivery metadata of an order.
///
/// The status field is deliberately not part of this payload; use
/// `set-status` for status changes.
///
/// # Errors
///
/// Returns the classified error from the request.
pub async fn set_details(
    session: &Session,
    payload: &UpdateDetailsPayload,
) -> Result<(), ClientError> {
    let response = session.client().set_order_details(payload).await?;
    info!("{}", response.message);
    Ok(())
}
