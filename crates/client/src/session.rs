//! Session state machine and the remote-config cache.
//!
//! The session owns the active [`Settings`], the [`ApiClient`] built from
//! them, and an in-memory copy of the server-defined choice values. All
//! transitions go through a single commit path: persist (or erase) the
//! record, rebuild the client, bump the settings generation, and run exactly
//! one background config refresh.
//!
//! Consumers key their reset behavior off [`Session::generation`]: a bumped
//! generation means the identity changed and any state fetched under the old
//! one must be discarded.

use secrecy::SecretString;
use tracing::{debug, info, warn};

use somahar_core::RemoteConfig;

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::settings::{Settings, SettingsStore};

/// Authentication state, derived from the active settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No usable settings; only login, demo mode, or settings edits apply.
    Unauthenticated,
    /// Real URL and key committed; calls go over the network.
    AuthenticatedLive,
    /// Mock flag committed; calls are answered locally.
    AuthenticatedMock,
}

/// The authenticated/unauthenticated state machine plus config cache.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    client: ApiClient,
    store: SettingsStore,
    config: Option<RemoteConfig>,
    generation: u64,
}

impl Session {
    /// Restore a session from the persisted settings record (defaults when
    /// none exists).
    #[must_use]
    pub fn restore(store: SettingsStore) -> Self {
        let settings = store.load();
        let client = ApiClient::new(settings.clone());
        Self {
            settings,
            client,
            store,
            config: None,
            generation: 0,
        }
    }

    /// Current state, derived from the active settings.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.settings.use_mock {
            SessionState::AuthenticatedMock
        } else if self.settings.is_authenticated() {
            SessionState::AuthenticatedLive
        } else {
            SessionState::Unauthenticated
        }
    }

    /// The client bound to the current settings.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The active settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Monotonic counter bumped on every settings commit.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The cached remote configuration, if any refresh ever succeeded (or
    /// the empty fallback was installed).
    #[must_use]
    pub fn remote_config(&self) -> Option<&RemoteConfig> {
        self.config.as_ref()
    }

    /// Validate credentials against the remote and commit them on success.
    ///
    /// The URL is normalized first (a missing scheme becomes `https://`).
    /// Validation is a [`ApiClient::fetch_remote_config`] call on a
    /// temporary client built from the candidate settings; on failure the
    /// candidate is discarded and the session is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the classified error from the validating call. Callers may
    /// offer [`Self::force_connect`] as the bypass when the validating call
    /// itself is blocked by policy.
    pub async fn login(
        &mut self,
        url: &str,
        key: &str,
        remember: bool,
    ) -> Result<(), ClientError> {
        let candidate = Settings {
            base_url: normalize_url(url),
            api_key: SecretString::from(key.to_string()),
            use_mock: false,
            remember,
        };

        let probe = ApiClient::new(candidate.clone());
        probe.fetch_remote_config().await?;

        info!(base_url = %candidate.base_url, "Login validated");
        self.commit(candidate).await;
        Ok(())
    }

    /// Commit credentials without the validating call.
    ///
    /// Escape hatch for deployments where the validating call is blocked by
    /// policy but the operator knows the settings are correct.
    pub async fn force_connect(&mut self, url: &str, key: &str, remember: bool) {
        let candidate = Settings {
            base_url: normalize_url(url),
            api_key: SecretString::from(key.to_string()),
            use_mock: false,
            remember,
        };
        info!(base_url = %candidate.base_url, "Connecting without validation");
        self.commit(candidate).await;
    }

    /// Switch to demo mode, discarding whatever URL/key are staged.
    pub async fn enable_demo_mode(&mut self) {
        info!("Demo mode enabled");
        self.commit(Settings {
            use_mock: true,
            ..Settings::default()
        })
        .await;
    }

    /// Replace the active settings wholesale (the settings-screen save path).
    pub async fn update_settings(&mut self, settings: Settings) {
        self.commit(settings).await;
    }

    /// Clear to defaults and erase the persisted record.
    pub fn logout(&mut self) {
        info!("Logged out");
        if let Err(e) = self.store.erase() {
            warn!(error = %e, "Failed to erase persisted settings");
        }
        self.settings = Settings::default();
        self.client = ApiClient::new(self.settings.clone());
        self.config = None;
        self.generation += 1;
    }

    /// Re-fetch the remote configuration with the current settings.
    ///
    /// Silently skipped (like the access layer's guard, but without raising)
    /// when live settings still carry the placeholder URL. On failure any
    /// previously cached config is retained; the empty fallback is installed
    /// only if nothing was ever obtained, so choice controls keep working.
    ///
    /// # Errors
    ///
    /// Propagates the classified error so interactive callers can react;
    /// the background path swallows it instead.
    pub async fn refresh_config(&mut self) -> Result<(), ClientError> {
        if !self.settings.use_mock && self.settings.is_placeholder() {
            debug!("Config refresh skipped: settings are default or incomplete");
            return Ok(());
        }

        match self.client.fetch_remote_config().await {
            Ok(config) => {
                debug!(
                    partners = config.delivery_partners.len(),
                    statuses = config.quick_statuses.len(),
                    "Remote config refreshed"
                );
                self.config = Some(config);
                Ok(())
            }
            Err(e) => {
                if self.config.is_none() {
                    self.config = Some(RemoteConfig::default());
                }
                Err(e)
            }
        }
    }

    /// Commit new settings as the active session.
    ///
    /// Persists or erases the durable record per `remember`, rebuilds the
    /// client, bumps the generation, and runs one background config refresh.
    /// The refresh failure is swallowed here: a passive attempt triggered by
    /// a settings change must never take the app down.
    async fn commit(&mut self, settings: Settings) {
        if settings.remember {
            if let Err(e) = self.store.save(&settings) {
                warn!(error = %e, "Failed to persist settings");
            }
        } else if let Err(e) = self.store.erase() {
            warn!(error = %e, "Failed to erase persisted settings");
        }

        self.client = ApiClient::new(settings.clone());
        self.settings = settings;
        self.generation += 1;

        if self.settings.is_authenticated() {
            if let Err(e) = self.refresh_config().await {
                warn!(error = %e, "Background config refresh failed");
            }
        }
    }
}

/// Trim the raw URL and prefix a secure scheme when none is present.
fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_BASE_URL;
    use secrecy::ExposeSecret;

    fn temp_session() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json"));
        let session = Session::restore(store);
        (dir, session)
    }

    #[test]
    fn test_normalize_url_prefixes_https() {
        assert_eq!(
            normalize_url("shop.example.com/wp-json/fbbot/v1"),
            "https://shop.example.com/wp-json/fbbot/v1"
        );
        assert_eq!(
            normalize_url("  shop.example.com  "),
            "https://shop.example.com"
        );
    }

    #[test]
    fn test_normalize_url_keeps_existing_scheme() {
        assert_eq!(
            normalize_url("http://shop.example.com"),
            "http://shop.example.com"
        );
        assert_eq!(
            normalize_url("https://shop.example.com"),
            "https://shop.example.com"
        );
    }

    #[test]
    fn test_fresh_session_is_unauthenticated() {
        let (_dir, session) = temp_session();
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert!(session.remote_config().is_none());
        assert_eq!(session.generation(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_mode_commits_defaults_with_mock_flag() {
        let (_dir, mut session) = temp_session();
        session.enable_demo_mode().await;

        assert_eq!(session.state(), SessionState::AuthenticatedMock);
        assert_eq!(session.settings().base_url, DEFAULT_BASE_URL);
        assert!(session.settings().use_mock);
        // Commit ran exactly one background refresh against the mock
        let config = session.remote_config().unwrap();
        assert_eq!(config.delivery_partners.len(), 6);
    }

    #[tokio::test]
    async fn test_demo_mode_discards_staged_live_settings() {
        let (_dir, mut session) = temp_session();
        session
            .force_connect("https://127.0.0.1:9", "staged-key", false)
            .await;
        assert_eq!(session.state(), SessionState::AuthenticatedLive);

        session.enable_demo_mode().await;
        assert_eq!(session.state(), SessionState::AuthenticatedMock);
        assert_eq!(session.settings().base_url, DEFAULT_BASE_URL);
        assert!(session.settings().api_key.expose_secret().is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_unchanged() {
        let (_dir, mut session) = temp_session();
        // Placeholder URL: the validating call fails before any transport
        let err = session.login(DEFAULT_BASE_URL, "k3y", false).await.unwrap_err();
        assert!(matches!(err, ClientError::Configuration));
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert_eq!(session.generation(), 0);
    }

    #[tokio::test]
    async fn test_force_connect_skips_validation_and_normalizes() {
        let (_dir, mut session) = temp_session();
        session.force_connect("127.0.0.1:9", "k3y", false).await;

        assert_eq!(session.state(), SessionState::AuthenticatedLive);
        assert_eq!(session.settings().base_url, "https://127.0.0.1:9");
        assert_eq!(session.generation(), 1);
        // Background refresh failed (nothing listening) and was swallowed;
        // the empty fallback is installed since nothing was ever cached
        assert!(session.remote_config().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_failure_keeps_previous_config() {
        let (_dir, mut session) = temp_session();
        session.enable_demo_mode().await;
        let cached = session.remote_config().unwrap().clone();
        assert!(!cached.is_empty());

        // Switch to an unreachable live server; the commit-time background
        // refresh fails but the mock-era cache must survive
        session
            .force_connect("https://127.0.0.1:9", "k3y", false)
            .await;
        assert_eq!(session.remote_config().unwrap(), &cached);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_settings_replaces_session_wholesale() {
        let (_dir, mut session) = temp_session();
        session.enable_demo_mode().await;
        let generation = session.generation();

        session
            .update_settings(Settings {
                base_url: "https://127.0.0.1:9".to_string(),
                api_key: SecretString::from("n3w-k3y"),
                use_mock: false,
                remember: true,
            })
            .await;

        assert_eq!(session.state(), SessionState::AuthenticatedLive);
        assert_eq!(session.generation(), generation + 1);
        // The new record replaced the persisted mock one
        let reloaded = session.store.load();
        assert_eq!(reloaded.base_url, "https://127.0.0.1:9");
        assert_eq!(reloaded.api_key.expose_secret(), "n3w-k3y");
        assert!(!reloaded.use_mock);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commit_persists_when_remember_is_set() {
        let (_dir, mut session) = temp_session();
        session.enable_demo_mode().await;

        let reloaded = session.store.load();
        assert!(reloaded.use_mock);
        assert!(reloaded.remember);
    }

    #[tokio::test]
    async fn test_commit_erases_when_remember_is_off() {
        let (_dir, mut session) = temp_session();
        session.force_connect("https://127.0.0.1:9", "k3y", false).await;
        assert!(!session.store.path().exists());
        // In-memory session stays live even though nothing is stored
        assert_eq!(session.state(), SessionState::AuthenticatedLive);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_clears_state_and_storage() {
        let (_dir, mut session) = temp_session();
        session.enable_demo_mode().await;
        assert!(session.store.path().exists());
        let generation = session.generation();

        session.logout();
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert!(!session.store.path().exists());
        assert!(session.remote_config().is_none());
        assert_eq!(session.generation(), generation + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_resumes_persisted_mock_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        {
            let mut session = Session::restore(SettingsStore::new(path.clone()));
            session.enable_demo_mode().await;
        }

        let resumed = Session::restore(SettingsStore::new(path));
        assert_eq!(resumed.state(), SessionState::AuthenticatedMock);
    }
}
