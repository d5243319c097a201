mod common;

use std::fs;

use common::{demo_authenticator, memory_state, principal};
use edugate::AppState;
use edugate_config::SessionConfig;
use edugate_core::{Role, permissions};
use edugate_session::{CURRENT_USER_KEY, JsonFileStore, KeyValueStore, SessionStore};
use tempfile::TempDir;

fn file_state(dir: &TempDir) -> AppState {
    let store = JsonFileStore::new(dir.path().join("session.json"));
    AppState::new(SessionStore::hydrate(store), demo_authenticator())
}

#[tokio::test]
async fn test_session_survives_restart_in_memory() {
    let (state, storage) = memory_state();
    let principal = state
        .authenticator
        .login(&state.session, "admin", "admin123")
        .await
        .unwrap();

    let restarted = SessionStore::hydrate(storage.clone());

    assert_eq!(restarted.current(), Some(principal));
}

#[tokio::test]
async fn test_session_survives_restart_on_disk() {
    let dir = TempDir::new().unwrap();
    let principal = {
        let state = file_state(&dir);
        state
            .authenticator
            .login(&state.session, "staff", "staff123")
            .await
            .unwrap()
    };

    let restarted = file_state(&dir);

    assert_eq!(restarted.session.current(), Some(principal));
    assert!(restarted.evaluator.has_permission(permissions::FEES));
    assert!(!restarted.evaluator.has_permission(permissions::SETTINGS));
}

#[tokio::test]
async fn test_persisted_value_uses_camel_case_fields() {
    let (state, storage) = memory_state();
    state
        .authenticator
        .login(&state.session, "teacher", "teacher123")
        .await
        .unwrap();

    let raw = storage.get(CURRENT_USER_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["username"], "teacher");
    assert_eq!(value["role"], "Teacher");
    assert!(value.get("lastLogin").is_some());
    assert!(value["permissions"].is_array());
}

#[tokio::test]
async fn test_logout_removes_durable_key() {
    let (state, storage) = memory_state();
    state
        .authenticator
        .login(&state.session, "owner", "owner123")
        .await
        .unwrap();

    state.session.clear().unwrap();

    assert!(!storage.contains_key(CURRENT_USER_KEY));
    assert_eq!(SessionStore::hydrate(storage).current(), None);
}

#[test]
fn test_clear_is_idempotent() {
    let (state, _) = memory_state();
    state.session.clear().unwrap();
    state.session.clear().unwrap();
    assert!(!state.session.is_authenticated());
}

#[test]
fn test_corrupt_session_is_discarded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    let store = JsonFileStore::new(&path);
    store.set(CURRENT_USER_KEY, "{not json").unwrap();

    let session = SessionStore::hydrate(JsonFileStore::new(&path));

    assert_eq!(session.current(), None);
    assert_eq!(JsonFileStore::new(&path).get(CURRENT_USER_KEY).unwrap(), None);
}

#[test]
fn test_unreadable_storage_file_yields_anonymous_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "garbage").unwrap();

    let session = SessionStore::hydrate(JsonFileStore::new(&path));

    assert!(!session.is_authenticated());
}

#[test]
fn test_principal_with_blank_username_is_discarded() {
    let (_, storage) = memory_state();
    let mut blank = principal(Role::Admin, &[permissions::STUDENTS]);
    blank.username = "  ".to_string();
    storage
        .set(CURRENT_USER_KEY, &serde_json::to_string(&blank).unwrap())
        .unwrap();

    let session = SessionStore::hydrate(storage.clone());

    assert_eq!(session.current(), None);
    assert!(!storage.contains_key(CURRENT_USER_KEY));
}

#[test]
fn test_restored_principal_keeps_its_snapshot() {
    let (_, storage) = memory_state();
    let stored = principal(Role::Teacher, &[permissions::MARKSHEETS, permissions::FEES]);
    storage
        .set(CURRENT_USER_KEY, &serde_json::to_string(&stored).unwrap())
        .unwrap();

    let state = AppState::new(SessionStore::hydrate(storage), demo_authenticator());

    assert!(state.evaluator.has_permission(permissions::FEES));
}

#[test]
fn test_config_path_is_used_for_storage() {
    let dir = TempDir::new().unwrap();
    let config = SessionConfig {
        storage_path: dir.path().join("nested").join("session.json"),
    };
    let state = edugate::init_app_state(&config, edugate_config::AuthConfig::immediate()).unwrap();

    state
        .session
        .set_current(principal(Role::Owner, &[]))
        .unwrap();

    assert!(config.storage_path.exists());
}
