//! Somahar Core - Shared wire types.
//!
//! This crate provides the types exchanged with the remote order-management
//! API, used by:
//! - `client` - SDK with the access layer, mock responder, and session state
//! - `cli` - Command-line front-end for the SDK
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Field names
//! match the remote JSON wire format exactly (`snake_case`), so every type
//! here derives `Serialize`/`Deserialize` without rename attributes.
//!
//! # Modules
//!
//! - [`types`] - Orders, pagination, request payloads, and response envelopes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
