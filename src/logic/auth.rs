//! Authentication
//!
//! Credential checks for the demo deployment. Passwords are never held
//! in clear: the verifier keeps a salted SHA-256 digest and compares
//! digests on login.

use rand::Rng;
use sha2::{Digest, Sha256};

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid username or password"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Verifies login attempts against a stored credential digest.
pub struct Authenticator {
    username: String,
    salt: String,
    password_hash: String,
}

// ============================================================================
// VERIFIER
// ============================================================================

/// Demo deployment account baked into the build.
const DEMO_USERNAME: &str = "admin";
const DEMO_PASSWORD: &str = "Aa1234567$$$";

impl Authenticator {
    /// Build a verifier for one account, salting and hashing the
    /// password immediately.
    pub fn new(username: &str, password: &str) -> Self {
        let salt = generate_salt();
        let password_hash = hash_password(password, &salt);
        Authenticator {
            username: username.to_string(),
            salt,
            password_hash,
        }
    }

    /// Verifier preloaded with the demo deployment account.
    pub fn with_demo_account() -> Self {
        Self::new(DEMO_USERNAME, DEMO_PASSWORD)
    }

    /// Check a login attempt. Succeeds only when both the username and
    /// the password digest match.
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username != self.username {
            log::warn!("Login rejected for unknown user: {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        let hash = hash_password(password, &self.salt);
        if hash != self.password_hash {
            log::warn!("Login rejected for user {}: bad password", username);
            return Err(AuthError::InvalidCredentials);
        }

        log::info!("User authenticated: {}", username);
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}", password, salt));
    format!("{:x}", hasher.finalize())
}

fn generate_salt() -> String {
    let mut rng = rand::thread_rng();
    (0..16)
        .map(|_| {
            let idx = rng.gen_range(0..62);
            let chars = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
            chars[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_account_accepts_correct_credentials() {
        let auth = Authenticator::with_demo_account();
        assert!(auth.verify("admin", "Aa1234567$$$").is_ok());
    }

    #[test]
    fn test_rejects_wrong_password() {
        let auth = Authenticator::with_demo_account();
        assert_eq!(
            auth.verify("admin", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_rejects_unknown_user() {
        let auth = Authenticator::with_demo_account();
        assert_eq!(
            auth.verify("root", "Aa1234567$$$"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_salts_differ_between_verifiers() {
        let a = Authenticator::new("alice", "secret");
        let b = Authenticator::new("alice", "secret");
        // both verify, independent salts mean independent digests
        assert!(a.verify("alice", "secret").is_ok());
        assert!(b.verify("alice", "secret").is_ok());
        assert_ne!(a.salt, b.salt);
    }
}
