//! Authentication configuration.
//!
//! # Environment Variables
//!
//! - `EDUGATE_AUTH_LATENCY_MS`: Simulated network delay for a login attempt (default: 500)
//! - `EDUGATE_PASSWORD_SCHEME`: `plaintext` or `bcrypt` (default: `plaintext`)

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How a submitted password is compared with the stored credential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    /// Exact string comparison against the demo list. Demo-grade only.
    #[default]
    Plaintext,
    /// Salted bcrypt hash verification.
    Bcrypt,
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plaintext" | "plain" => Ok(PasswordScheme::Plaintext),
            "bcrypt" => Ok(PasswordScheme::Bcrypt),
            other => Err(format!("Unknown password scheme: {}", other)),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Plaintext => f.write_str("plaintext"),
            PasswordScheme::Bcrypt => f.write_str("bcrypt"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Delay awaited before the credential check completes.
    pub latency: Duration,
    pub password_scheme: PasswordScheme,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(500),
            password_scheme: PasswordScheme::Plaintext,
        }
    }
}

impl AuthConfig {
    /// Falls back to defaults for unset or unparsable variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            latency: env::var("EDUGATE_AUTH_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::from_millis(500)),
            password_scheme: env::var("EDUGATE_PASSWORD_SCHEME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Config with no simulated delay, for tests and scripted use.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
            ..Self::default()
        }
    }
}
