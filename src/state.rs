use std::sync::Arc;

use anyhow::Context;
use edugate_auth::Authenticator;
use edugate_config::{AuthConfig, SessionConfig};
use edugate_session::{JsonFileStore, SessionStore};
use tracing::info;

use crate::access::{PermissionEvaluator, RenderGate, RouteGuard};

/// Everything the console needs, wired around one shared session.
#[derive(Clone, Debug)]
pub struct AppState {
    pub session: Arc<SessionStore>,
    pub authenticator: Arc<Authenticator>,
    pub evaluator: Arc<PermissionEvaluator>,
    pub guard: RouteGuard,
    pub gate: RenderGate,
}

impl AppState {
    pub fn new(session: SessionStore, authenticator: Authenticator) -> Self {
        let session = Arc::new(session);
        let evaluator = Arc::new(PermissionEvaluator::new(session.clone()));
        Self {
            guard: RouteGuard::new(evaluator.clone()),
            gate: RenderGate::new(evaluator.clone()),
            session,
            authenticator: Arc::new(authenticator),
            evaluator,
        }
    }
}

/// Restores the durable session and builds the demo authenticator.
pub fn init_app_state(
    session_config: &SessionConfig,
    auth_config: AuthConfig,
) -> anyhow::Result<AppState> {
    let storage = JsonFileStore::new(&session_config.storage_path);
    let session = SessionStore::hydrate(storage);
    info!(
        path = %session_config.storage_path.display(),
        authenticated = session.is_authenticated(),
        "Session store ready"
    );

    let authenticator =
        Authenticator::demo(auth_config).context("Failed to build credential directory")?;

    Ok(AppState::new(session, authenticator))
}
