//! Application context: session state and display theme, shared across
//! the app and mutated only through the setters here.

use parking_lot::RwLock;

use crate::logic::auth::{AuthError, Authenticator};
use crate::logic::settings::Theme;

#[derive(Debug, Clone, Default)]
struct AuthState {
    authenticated: bool,
    error: Option<String>,
}

pub struct AppContext {
    authenticator: Authenticator,
    auth: RwLock<AuthState>,
    theme: RwLock<Theme>,
}

impl AppContext {
    /// Context for the demo deployment: logged out, dark theme.
    pub fn new() -> Self {
        AppContext {
            authenticator: Authenticator::with_demo_account(),
            auth: RwLock::new(AuthState::default()),
            theme: RwLock::new(Theme::Dark),
        }
    }

    /// Attempt a login. On success the session becomes authenticated
    /// and any prior error clears; on failure the session stays logged
    /// out and the error message is retained for display.
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        match self.authenticator.verify(username, password) {
            Ok(()) => {
                let mut auth = self.auth.write();
                auth.authenticated = true;
                auth.error = None;
                Ok(())
            }
            Err(err) => {
                let mut auth = self.auth.write();
                auth.authenticated = false;
                auth.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// End the session and clear any stored error.
    pub fn logout(&self) {
        let mut auth = self.auth.write();
        if auth.authenticated {
            log::info!("User logged out: {}", self.authenticator.username());
        }
        auth.authenticated = false;
        auth.error = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.read().authenticated
    }

    /// Message from the most recent failed login, if any.
    pub fn last_error(&self) -> Option<String> {
        self.auth.read().error.clone()
    }

    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    pub fn set_theme(&self, theme: Theme) {
        log::info!("Theme changed to {}", theme);
        *self.theme.write() = theme;
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        let ctx = AppContext::new();
        assert!(!ctx.is_authenticated());
        assert!(ctx.last_error().is_none());
        assert_eq!(ctx.theme(), Theme::Dark);
    }

    #[test]
    fn test_login_success_clears_error() {
        let ctx = AppContext::new();

        assert!(ctx.login("admin", "nope").is_err());
        assert!(!ctx.is_authenticated());
        assert_eq!(
            ctx.last_error().as_deref(),
            Some("Invalid username or password")
        );

        assert!(ctx.login("admin", "Aa1234567$$$").is_ok());
        assert!(ctx.is_authenticated());
        assert!(ctx.last_error().is_none());
    }

    #[test]
    fn test_logout_resets_session() {
        let ctx = AppContext::new();
        ctx.login("admin", "Aa1234567$$$").ok();
        assert!(ctx.is_authenticated());

        ctx.logout();
        assert!(!ctx.is_authenticated());
        assert!(ctx.last_error().is_none());
    }

    #[test]
    fn test_theme_setter() {
        let ctx = AppContext::new();
        ctx.set_theme(Theme::Light);
        assert_eq!(ctx.theme(), Theme::Light);
    }
}
