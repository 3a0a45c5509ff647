//! Request payloads for the write endpoints.
//!
//! Required-field validation lives here, on the client side; it is performed
//! before a request is built and is never delegated to the remote service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A required field was left empty.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{field} is required")]
pub struct ValidationError {
    /// Wire name of the offending field.
    pub field: &'static str,
}

/// Body for `POST /add-order`.
///
/// `buyer_name`, `phone`, and `address` are required non-empty; the rest are
/// optional and omitted from the JSON body when unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderPayload {
    pub buyer_name: String,
    pub phone: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub police_station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_partner: Option<String>,
}

impl CreateOrderPayload {
    /// Check the required fields before submission.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first empty required field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("buyer_name", &self.buyer_name),
            ("phone", &self.phone),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError { field });
            }
        }
        Ok(())
    }
}

/// Body for `POST /update-status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusPayload {
    pub order_id: u64,
    pub status_message: String,
}

/// Body for `POST /update-details`.
///
/// A status change is NOT part of this payload; callers issue a separate
/// `/update-status` request when the status field changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDetailsPayload {
    pub order_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rider_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub police_station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_partner: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_payload() -> CreateOrderPayload {
        CreateOrderPayload {
            buyer_name: "Rahim Khan".to_string(),
            phone: "01712345678".to_string(),
            address: "House 12, Road 5, Dhaka".to_string(),
            ..CreateOrderPayload::default()
        }
    }

    #[test]
    fn test_validate_accepts_required_fields() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_buyer_name() {
        let payload = CreateOrderPayload {
            buyer_name: String::new(),
            ..valid_payload()
        };
        assert_eq!(
            payload.validate().unwrap_err(),
            ValidationError {
                field: "buyer_name"
            }
        );
    }

    #[test]
    fn test_validate_rejects_whitespace_only_address() {
        let payload = CreateOrderPayload {
            address: "   ".to_string(),
            ..valid_payload()
        };
        assert_eq!(
            payload.validate().unwrap_err(),
            ValidationError { field: "address" }
        );
    }

    #[test]
    fn test_unset_optionals_are_omitted_from_json() {
        let json = serde_json::to_value(valid_payload()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("police_station"));
        assert!(!object.contains_key("delivery_partner"));
        assert_eq!(json["buyer_name"], "Rahim Khan");
    }

    #[test]
    fn test_update_details_omits_unset_fields() {
        let payload = UpdateDetailsPayload {
            order_id: 42,
            rider_name: Some("Rider 9".to_string()),
            ..UpdateDetailsPayload::default()
        };
        let json = serde_json::to_value(payload).unwrap();
        assert_eq!(json["order_id"], 42);
        assert_eq!(json["rider_name"], "Rider 9");
        assert!(!json.as_object().unwrap().contains_key("estimated_delivery"));
    }

    #[test]
    fn test_validation_error_message_is_actionable() {
        let err = ValidationError { field: "phone" };
        assert_eq!(err.to_string(), "phone is required");
    }
}
