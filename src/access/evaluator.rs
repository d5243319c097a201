//! Permission evaluation.
//!
//! An [`AccessSnapshot`] is a read of the session taken once per render pass
//! or navigation; every check in that pass runs against it. The
//! [`PermissionEvaluator`] hands out snapshots and reuses the previous one
//! while the session generation is unchanged.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use edugate_core::Principal;
use edugate_core::permissions::ALL;
use edugate_session::{SessionStore, SessionView};

#[derive(Debug, Clone, Default)]
pub struct AccessSnapshot {
    generation: u64,
    principal: Option<Arc<Principal>>,
    wildcard: bool,
}

impl AccessSnapshot {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A snapshot over a fabricated principal, independent of any store.
    pub fn for_principal(principal: Principal) -> Self {
        Self::from_parts(0, Some(Arc::new(principal)))
    }

    fn from_view(view: SessionView) -> Self {
        Self::from_parts(view.generation, view.principal)
    }

    fn from_parts(generation: u64, principal: Option<Arc<Principal>>) -> Self {
        let wildcard = principal
            .as_deref()
            .is_some_and(|p| p.is_owner() || p.holds(ALL));
        Self {
            generation,
            principal,
            wildcard,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// False without a principal. True for the Owner role and for any set
    /// holding the `all` wildcard. Otherwise plain membership.
    pub fn has_permission(&self, token: &str) -> bool {
        match self.principal.as_deref() {
            None => false,
            Some(principal) => self.wildcard || principal.holds(token),
        }
    }

    /// False without a principal or for an empty list.
    pub fn has_any_permission(&self, tokens: &[&str]) -> bool {
        if !self.is_authenticated() || tokens.is_empty() {
            return false;
        }
        distinct(tokens).any(|token| self.has_permission(token))
    }

    /// False without a principal. An empty list is vacuously satisfied.
    pub fn has_all_permissions(&self, tokens: &[&str]) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        distinct(tokens).all(|token| self.has_permission(token))
    }
}

/// Yields each token once, in first-seen order.
fn distinct<'a>(tokens: &[&'a str]) -> impl Iterator<Item = &'a str> {
    let mut seen = HashSet::with_capacity(tokens.len());
    tokens
        .iter()
        .copied()
        .filter(move |token| seen.insert(*token))
}

/// Answers permission questions about the session it was built with.
#[derive(Debug)]
pub struct PermissionEvaluator {
    session: Arc<SessionStore>,
    cached: Mutex<Option<AccessSnapshot>>,
}

impl PermissionEvaluator {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self {
            session,
            cached: Mutex::new(None),
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// The current snapshot, rebuilt only when the session has changed since
    /// the last call.
    pub fn snapshot(&self) -> AccessSnapshot {
        let generation = self.session.generation();
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        match cached.as_ref() {
            Some(snapshot) if snapshot.generation == generation => snapshot.clone(),
            _ => {
                let snapshot = AccessSnapshot::from_view(self.session.view());
                *cached = Some(snapshot.clone());
                snapshot
            }
        }
    }

    pub fn has_permission(&self, token: &str) -> bool {
        self.snapshot().has_permission(token)
    }

    pub fn has_any_permission(&self, tokens: &[&str]) -> bool {
        self.snapshot().has_any_permission(tokens)
    }

    pub fn has_all_permissions(&self, tokens: &[&str]) -> bool {
        self.snapshot().has_all_permissions(tokens)
    }
}
