//! # Edugate Session
//!
//! Holds at most one authenticated [`Principal`](edugate_core::Principal) and
//! keeps a durable copy of it across restarts.
//!
//! - [`storage`]: The [`KeyValueStore`] abstraction with a file-backed and an in-memory store
//! - [`store`]: The [`SessionStore`] (current / set_current / clear, boot-time hydration)
//!
//! The store is an explicit object passed to whoever needs it; there is no
//! process-wide session global.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use edugate_session::{JsonFileStore, SessionStore};
//!
//! let session = Arc::new(SessionStore::hydrate(JsonFileStore::new("storage/session.json")));
//! if let Some(principal) = session.current() {
//!     println!("Signed in as {}", principal.username);
//! }
//! ```

pub mod storage;
pub mod store;

pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use store::{CURRENT_USER_KEY, SessionStore, SessionView};
