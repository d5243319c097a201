//! # Edugate Config
//!
//! Configuration types for the Edugate console, loaded from environment variables.
//!
//! - [`auth`]: Authentication latency and password scheme
//! - [`session`]: Durable session storage location
//!
//! # Example
//!
//! ```ignore
//! use edugate_config::{AuthConfig, SessionConfig};
//!
//! dotenvy::dotenv().ok();
//! let auth_config = AuthConfig::from_env();
//! let session_config = SessionConfig::from_env();
//! ```

pub mod auth;
pub mod session;

// Re-export commonly used types at crate root
pub use auth::{AuthConfig, PasswordScheme};
pub use session::SessionConfig;
