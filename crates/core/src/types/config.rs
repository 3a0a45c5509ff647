//! Remote configuration served by the public `/app-config` endpoint.

use serde::{Deserialize, Serialize};

/// Server-defined choice values used to populate selection controls.
///
/// Cached in memory by the session controller and refreshed on settings
/// change or explicit request; never persisted across restarts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Valid delivery-partner names, in server order.
    pub delivery_partners: Vec<String>,
    /// Valid quick-status labels, in server order.
    pub quick_statuses: Vec<String>,
}

impl RemoteConfig {
    /// True when the server supplied no choice values at all.
    ///
    /// The session controller installs this empty config as a last-resort
    /// fallback when a refresh fails and nothing was ever cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delivery_partners.is_empty() && self.quick_statuses.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(RemoteConfig::default().is_empty());
    }

    #[test]
    fn test_deserialize_from_wire() {
        let json = r#"{"delivery_partners":["RedX","Pathao"],"quick_statuses":["Picked"]}"#;
        let config: RemoteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.delivery_partners, vec!["RedX", "Pathao"]);
        assert_eq!(config.quick_statuses, vec!["Picked"]);
        assert!(!config.is_empty());
    }
}
