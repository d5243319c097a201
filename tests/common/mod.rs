use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::Utc;
use edugate::AppState;
use edugate_auth::{Authenticator, CredentialRecord, CredentialStore, DemoDirectory, RoleRegistry};
use edugate_config::AuthConfig;
use edugate_core::{Principal, PrincipalId, Role, StorageError};
use edugate_session::{KeyValueStore, MemoryStore, SessionStore};

/// Stable ids of the demo accounts
#[allow(dead_code)]
pub mod demo_ids {
    use uuid::Uuid;
    pub const OWNER: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000001);
    pub const ADMIN: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000002);
    pub const TEACHER: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000003);
    pub const STAFF: Uuid = Uuid::from_u128(0x00000000_0000_0000_0000_000000000004);
}

/// Credential store that counts lookups before delegating to the demo directory.
#[allow(dead_code)]
pub struct CountingStore {
    inner: DemoDirectory,
    finds: AtomicUsize,
}

#[allow(dead_code)]
impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: DemoDirectory::plaintext(),
            finds: AtomicUsize::new(0),
        })
    }

    pub fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }
}

impl CredentialStore for CountingStore {
    fn find(&self, username: &str) -> Option<CredentialRecord> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find(username)
    }

    fn verify(&self, record: &CredentialRecord, password: &str) -> bool {
        self.inner.verify(record, password)
    }
}

/// Memory store whose operations can be switched to fail with an I/O error.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl FlakyStore {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("disk unavailable").into());
        }
        Ok(())
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.remove(key)
    }
}

#[allow(dead_code)]
pub fn principal(role: Role, tokens: &[&str]) -> Principal {
    Principal {
        id: PrincipalId::from_u128(42),
        username: format!("{}-user", role.as_str().to_lowercase()),
        role,
        permissions: tokens.iter().map(|s| s.to_string()).collect(),
        last_login: Utc::now(),
    }
}

/// Demo authenticator with no simulated latency.
#[allow(dead_code)]
pub fn demo_authenticator() -> Authenticator {
    Authenticator::new(
        RoleRegistry::standard(),
        Arc::new(DemoDirectory::plaintext()),
        AuthConfig::immediate(),
    )
}

/// App state over a fresh in-memory store. The returned store shares its map
/// with the session, so it can be inspected or used to hydrate a "restarted"
/// session.
#[allow(dead_code)]
pub fn memory_state() -> (AppState, MemoryStore) {
    let storage = MemoryStore::new();
    let session = SessionStore::hydrate(storage.clone());
    (AppState::new(session, demo_authenticator()), storage)
}

#[allow(dead_code)]
pub async fn signed_in(username: &str, password: &str) -> AppState {
    let (state, _) = memory_state();
    state
        .authenticator
        .login(&state.session, username, password)
        .await
        .unwrap();
    state
}
