//! The Authentication Operation.
//!
//! [`Authenticator::authenticate`] is the pure credential check: validate,
//! look up, verify, and build a [`Principal`] with a copied permission set.
//! [`Authenticator::login`] wraps it with the simulated network delay and the
//! session transition, and refuses to apply a result if the session changed
//! while it was pending.

use std::sync::Arc;

use chrono::Utc;
use edugate_config::{AuthConfig, PasswordScheme};
use edugate_core::{AuthError, Principal};
use edugate_observability::{track_login_failure, track_login_success};
use edugate_session::SessionStore;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::credentials::{CredentialStore, DemoDirectory};
use crate::registry::RoleRegistry;

/// Pre-flight input checks, run before any credential lookup.
#[derive(Debug, Clone, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

pub struct Authenticator {
    registry: RoleRegistry,
    credentials: Arc<dyn CredentialStore>,
    config: AuthConfig,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    pub fn new(
        registry: RoleRegistry,
        credentials: Arc<dyn CredentialStore>,
        config: AuthConfig,
    ) -> Self {
        Self {
            registry,
            credentials,
            config,
        }
    }

    /// The standard registry over the demo accounts, using the configured
    /// password scheme.
    pub fn demo(config: AuthConfig) -> Result<Self, bcrypt::BcryptError> {
        if config.password_scheme == PasswordScheme::Plaintext {
            warn!("Using plaintext demo credentials; not suitable for real deployments");
        }
        let directory = DemoDirectory::with_scheme(config.password_scheme)?;
        Ok(Self::new(RoleRegistry::standard(), Arc::new(directory), config))
    }

    pub fn registry(&self) -> &RoleRegistry {
        &self.registry
    }

    /// Edits here only affect principals issued afterwards.
    pub fn registry_mut(&mut self) -> &mut RoleRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Checks a username/password pair and builds a principal. Does not touch
    /// any session.
    #[instrument(skip(self, password))]
    pub fn authenticate(&self, username: &str, password: &str) -> Result<Principal, AuthError> {
        let request = LoginRequest::new(username, password);
        request.validate()?;
        self.check_credentials(&request)
    }

    /// Full login: validate, wait out the simulated latency, check
    /// credentials, then make the principal current and persist it.
    ///
    /// Returns [`AuthError::Superseded`] without touching the session if a
    /// logout or another login completed in the meantime.
    #[instrument(skip(self, session, password))]
    pub async fn login(
        &self,
        session: &SessionStore,
        username: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        let result = self.login_inner(session, username, password).await;
        match &result {
            Ok(principal) => {
                info!(username = %principal.username, role = %principal.role, "Login succeeded");
                track_login_success(principal.role.as_str());
            }
            Err(e) => {
                warn!(reason = e.reason(), "Login failed");
                track_login_failure(e.reason());
            }
        }
        result
    }

    async fn login_inner(
        &self,
        session: &SessionStore,
        username: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        let request = LoginRequest::new(username, password);
        request.validate()?;

        let generation = session.generation();
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        let principal = self.check_credentials(&request)?;

        if session.set_current_if_unchanged(generation, principal.clone())? {
            Ok(principal)
        } else {
            Err(AuthError::Superseded)
        }
    }

    fn check_credentials(&self, request: &LoginRequest) -> Result<Principal, AuthError> {
        let record = self
            .credentials
            .find(&request.username)
            .filter(|record| self.credentials.verify(record, &request.password))
            .ok_or(AuthError::InvalidCredentials)?;

        debug!(username = %record.username, role = %record.role, "Credentials accepted");

        Ok(Principal {
            id: record.id,
            username: record.username,
            role: record.role,
            permissions: self.registry.permissions_for(record.role),
            last_login: Utc::now(),
        })
    }
}
