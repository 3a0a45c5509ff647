//! Pagination consumer for the order listing.
//!
//! Encodes the contract a listing view must follow: pages are 1-based and
//! clamped, a settings change resets the list to page 1, a manual refresh
//! re-fetches the page on display, and pull-to-refresh always goes back to
//! page 1. Results fetched under a stale settings generation are discarded
//! so an old identity's page never overwrites fresher state.

use tracing::debug;

use somahar_core::{Order, Pagination};

use crate::error::ClientError;
use crate::session::Session;

/// Client-side state of the paged order listing.
#[derive(Debug, Default)]
pub struct OrderList {
    orders: Vec<Order>,
    pagination: Option<Pagination>,
    current_page: u32,
    generation: u64,
    loaded: bool,
}

impl OrderList {
    /// An empty listing positioned at page 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_page: 1,
            ..Self::default()
        }
    }

    /// Orders currently on display.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Pagination metadata from the last successful fetch.
    #[must_use]
    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    /// The 1-based page currently on display.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Bring the listing in line with the session.
    ///
    /// If the session's settings generation moved since the last fetch, the
    /// listing resets to page 1 and re-fetches; stale pages from a previous
    /// identity are never shown. Otherwise fetches only if nothing was ever
    /// loaded.
    ///
    /// # Errors
    ///
    /// Propagates the classified error from the fetch.
    pub async fn sync(&mut self, session: &Session) -> Result<(), ClientError> {
        if self.loaded && self.generation == session.generation() {
            return Ok(());
        }
        if self.generation != session.generation() {
            debug!(
                from = self.generation,
                to = session.generation(),
                "Settings changed, resetting listing to page 1"
            );
            self.orders.clear();
            self.pagination = None;
            self.current_page = 1;
            self.loaded = false;
        }
        self.fetch(session, 1).await
    }

    /// Navigate to `page`. Out-of-range requests (`page` 0, or beyond the
    /// known total) are no-ops.
    ///
    /// # Errors
    ///
    /// Propagates the classified error from the fetch.
    pub async fn load_page(&mut self, session: &Session, page: u32) -> Result<(), ClientError> {
        if page < 1 {
            return Ok(());
        }
        if let Some(pagination) = self.pagination
            && !pagination.contains_page(page)
        {
            return Ok(());
        }
        self.fetch(session, page).await
    }

    /// Re-fetch the page currently on display.
    ///
    /// # Errors
    ///
    /// Propagates the classified error from the fetch.
    pub async fn refresh(&mut self, session: &Session) -> Result<(), ClientError> {
        self.fetch(session, self.current_page).await
    }

    /// The pull-to-refresh gesture: always re-fetches page 1, whatever page
    /// was showing.
    ///
    /// # Errors
    ///
    /// Propagates the classified error from the fetch.
    pub async fn pull_to_refresh(&mut self, session: &Session) -> Result<(), ClientError> {
        self.fetch(session, 1).await
    }

    async fn fetch(&mut self, session: &Session, page: u32) -> Result<(), ClientError> {
        let generation = session.generation();
        let data = session.client().fetch_orders(page).await?;

        // Out-of-order guard: completion order is not guaranteed, so a
        // result from an older identity must not overwrite fresher state.
        if generation != session.generation() {
            debug!(page, "Discarding stale page fetched under an old generation");
            return Ok(());
        }

        self.current_page = data.pagination.current_page;
        self.orders = data.orders;
        self.pagination = Some(data.pagination);
        self.generation = generation;
        self.loaded = true;
        Ok(())
    }
}
