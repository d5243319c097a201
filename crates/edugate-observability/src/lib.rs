//! Edugate Observability
//!
//! - Console and rolling-file logging via `tracing-subscriber` / `tracing-appender`
//! - Login, session restore, and navigation counters via `metrics`
//!
//! Counters are gated at runtime by the `OBSERVABILITY_ENABLED` environment
//! variable. No exporter is installed here; a host process may install any
//! `metrics` recorder before the first event.
//!
//! # Examples
//!
//! ```no_run
//! use edugate_observability::init_logging;
//!
//! fn main() {
//!     let _guard = init_logging();
//!     // ... application code ...
//! }
//! ```

pub mod counters;
pub mod logging;

pub use counters::{
    is_observability_enabled, track_login_failure, track_login_success, track_logout,
    track_navigation, track_session_restore,
};
pub use logging::init_logging;
