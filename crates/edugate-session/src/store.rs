//! The session store.
//!
//! Holds zero or one principal. Every change (login, logout) bumps a
//! generation counter; readers use it to memoise derived state and pending
//! logins use it to detect that the session moved underneath them.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use edugate_core::{Principal, SessionError, StorageError};
use edugate_observability::{track_logout, track_session_restore};
use tracing::{debug, info, warn};

use crate::storage::{KeyValueStore, MemoryStore};

/// Durable storage key for the serialized principal.
pub const CURRENT_USER_KEY: &str = "currentUser";

/// A consistent read of the session: the principal (if any) together with the
/// generation it was observed at.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub generation: u64,
    pub principal: Option<Arc<Principal>>,
}

#[derive(Debug, Default)]
struct SessionState {
    principal: Option<Arc<Principal>>,
    generation: u64,
}

pub struct SessionStore {
    storage: Box<dyn KeyValueStore>,
    state: RwLock<SessionState>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Builds the store and restores any persisted principal. Call once at
    /// startup.
    ///
    /// Missing data yields an anonymous session. Unparsable or incomplete data
    /// is logged, removed from storage, and also yields an anonymous session.
    /// A storage read failure yields an anonymous session but leaves the
    /// stored entry alone.
    pub fn hydrate(storage: impl KeyValueStore + 'static) -> Self {
        let storage: Box<dyn KeyValueStore> = Box::new(storage);
        let principal = match restore(storage.as_ref()) {
            Ok(Some(principal)) => {
                info!(username = %principal.username, role = %principal.role, "Session restored");
                track_session_restore("restored");
                Some(Arc::new(principal))
            }
            Ok(None) => {
                debug!("No persisted session");
                track_session_restore("absent");
                None
            }
            Err(SessionError::Storage(e)) => {
                warn!(error = %e, "Session storage unreadable, starting anonymous");
                track_session_restore("unavailable");
                None
            }
            Err(e @ SessionError::CorruptSessionData { .. }) => {
                warn!(error = %e, "Discarding persisted session");
                track_session_restore("corrupt");
                if let Err(remove_err) = storage.remove(CURRENT_USER_KEY) {
                    warn!(error = %remove_err, "Failed to remove corrupt session entry");
                }
                None
            }
        };

        Self {
            storage,
            state: RwLock::new(SessionState {
                principal,
                generation: 0,
            }),
        }
    }

    /// An anonymous store backed by memory only.
    pub fn in_memory() -> Self {
        Self::hydrate(MemoryStore::new())
    }

    pub fn current(&self) -> Option<Principal> {
        self.read_state().principal.as_deref().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_state().principal.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.read_state().generation
    }

    pub fn view(&self) -> SessionView {
        let state = self.read_state();
        SessionView {
            generation: state.generation,
            principal: state.principal.clone(),
        }
    }

    /// Replaces any current principal and persists it.
    ///
    /// The durable write happens first; if it fails the in-memory session is
    /// left as it was.
    pub fn set_current(&self, principal: Principal) -> Result<(), StorageError> {
        let mut state = self.write_state();
        self.persist_and_swap(&mut state, principal)
    }

    /// Same as [`set_current`](Self::set_current), but only if no other change
    /// happened since `generation` was observed. Returns `Ok(false)` without
    /// touching anything when the session has moved on.
    pub fn set_current_if_unchanged(
        &self,
        generation: u64,
        principal: Principal,
    ) -> Result<bool, StorageError> {
        let mut state = self.write_state();
        if state.generation != generation {
            debug!(
                expected = generation,
                actual = state.generation,
                "Session changed, dropping stale principal"
            );
            return Ok(false);
        }
        self.persist_and_swap(&mut state, principal)?;
        Ok(true)
    }

    /// Removes the principal from memory and from durable storage.
    ///
    /// The in-memory session is always cleared; a failure to delete the
    /// durable copy is returned so the caller can report it.
    pub fn clear(&self) -> Result<(), StorageError> {
        let mut state = self.write_state();
        let removed = self.storage.remove(CURRENT_USER_KEY);
        if let Some(previous) = state.principal.take() {
            info!(username = %previous.username, "Session cleared");
            track_logout();
        }
        state.generation += 1;
        removed
    }

    fn persist_and_swap(
        &self,
        state: &mut SessionState,
        principal: Principal,
    ) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&principal)?;
        self.storage.set(CURRENT_USER_KEY, &serialized)?;

        debug!(username = %principal.username, "Session persisted");
        state.principal = Some(Arc::new(principal));
        state.generation += 1;
        Ok(())
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn restore(storage: &dyn KeyValueStore) -> Result<Option<Principal>, SessionError> {
    let raw = match storage.get(CURRENT_USER_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Ok(None),
        Err(StorageError::Serialization(e)) => return Err(corrupt(e.to_string())),
        Err(e) => return Err(e.into()),
    };

    let principal: Principal =
        serde_json::from_str(&raw).map_err(|e| corrupt(e.to_string()))?;

    if principal.username.trim().is_empty() {
        return Err(corrupt("empty username".to_string()));
    }

    Ok(Some(principal))
}

fn corrupt(reason: String) -> SessionError {
    SessionError::CorruptSessionData {
        key: CURRENT_USER_KEY.to_string(),
        reason,
    }
}
