//! Remote configuration display.
//!
//! # Usage
//!
//! ```bash
//! somahar config            # cached copy, fetching once if none is cached
//! somahar config --refresh  # force a re-fetch
//! ```

use tracing::info;

use somahar_client::{ClientError, Session};

/// Show the server-defined choice values.
///
/// # Errors
///
/// Returns the classified error when an explicit or initial fetch fails.
pub async fn show(session: &mut Session, refresh: bool) -> Result<(), ClientError> {
    if refresh || session.remote_config().is_none() {
        session.refresh_config().await?;
    }

    let Some(config) = session.remote_config() else {
        info!("No remote configuration available; connect or enable demo mode first");
        return Ok(());
    };

    info!("Delivery partners:");
    for partner in &config.delivery_partners {
        info!("  - {partner}");
    }
    info!("Quick statuses:");
    for status in &config.quick_statuses {
        info!("  - {status}");
    }
    Ok(())
}
