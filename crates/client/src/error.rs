//! Error taxonomy for the access layer.
//!
//! Every failure is classified into a distinct, user-facing variant. Callers
//! render the message directly rather than pattern-matching on it, so each
//! message must be actionable and specific to the cause.

use somahar_core::ValidationError;
use thiserror::Error;

/// A classified failure from the client access layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL unset or still the shipped placeholder; raised before any
    /// network attempt.
    #[error("Invalid API URL. Please configure a real WordPress URL.")]
    Configuration,

    /// HTTP 401 from the remote.
    #[error("Invalid API Key")]
    InvalidCredential,

    /// HTTP 404: the route does not exist, or in mock mode an endpoint the
    /// responder does not map.
    #[error("Endpoint not found. Check your WordPress URL.")]
    EndpointNotFound,

    /// Any other non-2xx status.
    #[error("API Error: {status} {status_text}")]
    Api { status: u16, status_text: String },

    /// Transport failure against a plain-HTTP target.
    #[error(
        "Security Error: Cannot connect to an insecure HTTP server. Your WordPress site must use HTTPS."
    )]
    InsecureEndpoint,

    /// Transport failure for any other reason (connection refused, DNS,
    /// CORS-style blocking).
    #[error("Network request blocked. This is likely a CORS issue on your WordPress site.")]
    NetworkBlocked,

    /// A response arrived but its body was not the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// Client-side required-field check failed; never sent to the remote.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message_names_the_fix() {
        assert_eq!(
            ClientError::Configuration.to_string(),
            "Invalid API URL. Please configure a real WordPress URL."
        );
    }

    #[test]
    fn test_auth_message_identifies_the_credential() {
        assert_eq!(ClientError::InvalidCredential.to_string(), "Invalid API Key");
    }

    #[test]
    fn test_api_error_carries_status_and_text() {
        let err = ClientError::Api {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "API Error: 503 Service Unavailable");
    }

    #[test]
    fn test_validation_error_passes_through() {
        let err = ClientError::from(ValidationError { field: "phone" });
        assert_eq!(err.to_string(), "phone is required");
    }

    #[test]
    fn test_transport_messages_are_distinct() {
        assert_ne!(
            ClientError::InsecureEndpoint.to_string(),
            ClientError::NetworkBlocked.to_string()
        );
    }
}
