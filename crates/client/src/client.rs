//! The client access layer: a single choke point for every remote call.
//!
//! Each [`ApiClient`] is bound to the [`Settings`] snapshot it was built
//! with and never mutates it; the session builds a new client on every
//! settings commit, so an in-flight call always completes against the
//! settings it started with.
//!
//! Failure classification (live calls only) is part of the public contract:
//! 401 means the key is wrong, 404 means the URL path is wrong, a transport
//! failure against a plain-HTTP target is a security problem, and any other
//! transport failure is (almost always) server-side request blocking.

use std::time::Duration;

use reqwest::Method;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use somahar_core::{
    CreateOrderPayload, CreateOrderResponse, OrdersPage, RemoteConfig, UpdateDetailsPayload,
    UpdateStatusPayload, WriteResponse,
};

use crate::error::ClientError;
use crate::mock;
use crate::settings::Settings;

/// Custom header carrying the API key on credentialed endpoints.
pub const API_KEY_HEADER: &str = "X-FBBOT-API-KEY";

/// Artificial latency for mock responses. Models a realistic round trip for
/// UI testing; the exact value is not load-bearing.
const MOCK_LATENCY: Duration = Duration::from_millis(600);

/// Client for the Somahar order-tracking API.
///
/// Dispatches to the live server, or to the [`mock`] responder when the
/// settings carry the mock flag.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    settings: Settings,
}

impl ApiClient {
    /// Create a client bound to a settings snapshot.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
        }
    }

    /// The settings snapshot this client was built with.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fetch the server-defined choice values from the public endpoint.
    ///
    /// Deliberately NOT auth-sensitive: sending the custom key header to a
    /// public route risks a cross-origin preflight rejection on servers that
    /// don't allow it there.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ClientError`] on any failure.
    pub async fn fetch_remote_config(&self) -> Result<RemoteConfig, ClientError> {
        self.dispatch(Method::GET, "/app-config", None, false).await
    }

    /// Fetch one 1-based page of orders. Page 0 is treated as page 1.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ClientError`] on any failure.
    pub async fn fetch_orders(&self, page: u32) -> Result<OrdersPage, ClientError> {
        let page = page.max(1);
        self.dispatch(Method::GET, &format!("/orders?page={page}"), None, true)
            .await
    }

    /// Create a new order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] before any request is built if a
    /// required field is empty, otherwise a classified [`ClientError`].
    pub async fn create_order(
        &self,
        payload: &CreateOrderPayload,
    ) -> Result<CreateOrderResponse, ClientError> {
        payload.validate()?;
        let body = serde_json::to_value(payload).map_err(|e| ClientError::Decode(e.to_string()))?;
        self.dispatch(Method::POST, "/add-order", Some(body), true)
            .await
    }

    /// Set the latest status of an order.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ClientError`] on any failure.
    pub async fn set_order_status(
        &self,
        order_id: u64,
        status_message: &str,
    ) -> Result<WriteResponse, ClientError> {
        let payload = UpdateStatusPayload {
            order_id,
            status_message: status_message.to_string(),
        };
        let body =
            serde_json::to_value(&payload).map_err(|e| ClientError::Decode(e.to_string()))?;
        self.dispatch(Method::POST, "/update-status", Some(body), true)
            .await
    }

    /// Update delivery metadata of an order.
    ///
    /// Does NOT bundle a status change; callers issue a separate
    /// [`Self::set_order_status`] when the status field changed.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ClientError`] on any failure.
    pub async fn set_order_details(
        &self,
        payload: &UpdateDetailsPayload,
    ) -> Result<WriteResponse, ClientError> {
        let body = serde_json::to_value(payload).map_err(|e| ClientError::Decode(e.to_string()))?;
        self.dispatch(Method::POST, "/update-details", Some(body), true)
            .await
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
        auth_sensitive: bool,
    ) -> Result<T, ClientError> {
        if self.settings.use_mock {
            debug!(%method, endpoint, "Mock API request");
            tokio::time::sleep(MOCK_LATENCY).await;
            let value = mock::respond(endpoint)?;
            return serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()));
        }

        // Never let a call leave the process against the shipped placeholder.
        if self.settings.is_placeholder() {
            return Err(ClientError::Configuration);
        }

        let url = compose_url(&self.settings.base_url, endpoint);
        debug!(%method, %url, auth_sensitive, "API request");

        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        if should_attach_key(auth_sensitive, &self.settings) {
            request = request.header(API_KEY_HEADER, self.settings.api_key.expose_secret());
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify_transport(&url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                401 => ClientError::InvalidCredential,
                404 => ClientError::EndpointNotFound,
                code => ClientError::Api {
                    status: code,
                    status_text: status.canonical_reason().unwrap_or_default().to_string(),
                },
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// The key header goes out only on auth-sensitive endpoints, and only when a
/// non-empty key is configured. Never otherwise, even if one is set.
fn should_attach_key(auth_sensitive: bool, settings: &Settings) -> bool {
    auth_sensitive && settings.has_api_key()
}

/// Join base and endpoint, stripping a trailing slash from the base so the
/// result never carries a double slash.
fn compose_url(base_url: &str, endpoint: &str) -> String {
    format!("{}{endpoint}", base_url.trim_end_matches('/'))
}

/// True when the target itself is plain HTTP.
///
/// The original mobile front-end keyed this on the page origin being HTTPS;
/// a native client has no page origin, so the target scheme alone decides.
fn is_insecure_target(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| u.scheme() == "http")
}

fn classify_transport(url: &str, error: &reqwest::Error) -> ClientError {
    debug!(%url, %error, "Transport failure");
    if is_insecure_target(url) {
        ClientError::InsecureEndpoint
    } else {
        ClientError::NetworkBlocked
    }
}
