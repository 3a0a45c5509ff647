//! Somahar Client SDK.
//!
//! Thin client for the Somahar order-tracking REST API (a WordPress-hosted
//! plugin), with a built-in demo mode backed by generated sample data.
//!
//! # Architecture
//!
//! - [`settings`] - Connection settings and their persisted store
//! - [`client`] - The access layer: one choke point for every remote call
//! - [`mock`] - Synthetic dataset answering all calls in demo mode
//! - [`session`] - Authenticated/unauthenticated state machine and the
//!   remote-config cache
//! - [`orders`] - Pagination consumer for the order listing
//!
//! Every [`ApiClient`] is bound to the settings snapshot it was built
//! with; the session constructs a fresh client on each settings commit, so
//! no call ever mixes old and new credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use somahar_client::{Session, SettingsStore, OrderList};
//!
//! let mut session = Session::restore(SettingsStore::at_default_path()?);
//! session.login("my-site.com/wp-json/fbbot/v1", "secret-key", true).await?;
//!
//! let mut list = OrderList::new();
//! list.sync(&session).await?;
//! for order in list.orders() {
//!     println!("{} {}", order.tracking_code, order.latest_status);
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod error;
pub mod mock;
pub mod orders;
pub mod session;
pub mod settings;

pub use client::ApiClient;
pub use error::ClientError;
pub use orders::OrderList;
pub use session::{Session, SessionState};
pub use settings::{Settings, SettingsError, SettingsStore};
