//! Session commands: login, demo mode, logout, status.
//!
//! # Usage
//!
//! ```bash
//! somahar login --url my-site.com/wp-json/fbbot/v1 --key SECRET
//! somahar demo
//! somahar status
//! somahar logout
//! ```

use tracing::{error, info};

use somahar_client::{ClientError, Session, SessionState};

/// Connect to a server.
///
/// Validates the key with a config fetch unless `force` is set; on a failed
/// validation the bypass is suggested but never applied automatically.
///
/// # Errors
///
/// Returns the classified error from the validating call.
pub async fn login(
    session: &mut Session,
    url: &str,
    key: &str,
    remember: bool,
    force: bool,
) -> Result<(), ClientError> {
    if force {
        session.force_connect(url, key, remember).await;
        info!("Connected without validation: {}", session.settings().base_url);
        return Ok(());
    }

    match session.login(url, key, remember).await {
        Ok(()) => {
            info!("Connected: {}", session.settings().base_url);
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            info!(
                "If the validating call is blocked by your server's policy and the \
                 settings are known-good, re-run with --force to connect anyway."
            );
            Err(e)
        }
    }
}

/// Switch to demo mode.
pub async fn demo(session: &mut Session) {
    session.enable_demo_mode().await;
    info!("Demo mode active: all data is generated locally, nothing leaves this machine");
}

/// Clear the session.
pub fn logout(session: &mut Session) {
    session.logout();
    info!("Logged out; persisted settings erased");
}

/// Show the session state and active settings (key redacted).
pub fn status(session: &Session) {
    let settings = session.settings();
    let state = match session.state() {
        SessionState::Unauthenticated => "unauthenticated",
        SessionState::AuthenticatedLive => "authenticated (live)",
        SessionState::AuthenticatedMock => "authenticated (demo)",
    };
    info!("State:    {state}");
    info!("Base URL: {}", settings.base_url);
    info!(
        "API key:  {}",
        if settings.has_api_key() { "[set]" } else { "[not set]" }
    );
    info!("Mock:     {}", settings.use_mock);
    info!("Remember: {}", settings.remember);
}
