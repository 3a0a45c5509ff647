//! Order listing.
//!
//! # Usage
//!
//! ```bash
//! somahar orders
//! somahar orders --page 3
//! ```

use tracing::{info, warn};

use somahar_client::{ClientError, OrderList, Session};

/// List one page of orders with a pagination footer.
///
/// Out-of-range pages are clamped by the listing contract; when that
/// happens the page actually shown is reported.
///
/// # Errors
///
/// Returns the classified error from the fetch.
pub async fn list(session: &Session, page: u32) -> Result<(), ClientError> {
    let mut list = OrderList::new();
    list.sync(session).await?;
    if page != list.current_page() {
        list.load_page(session, page).await?;
    }
    if page != list.current_page() {
        warn!(
            "Page {page} is out of range; showing page {}",
            list.current_page()
        );
    }

    for order in list.orders() {
        info!(
            "#{:<4} {:10} {:24} {:>10}  {}",
            order.id, order.tracking_code, order.buyer_name, order.amount, order.latest_status
        );
    }

    if let Some(pagination) = list.pagination() {
        info!(
            "Page {}/{} ({} orders total)",
            pagination.current_page, pagination.total_pages, pagination.total_items
        );
    }
    Ok(())
}
