//! # Edugate Auth
//!
//! Authentication for the Edugate console.
//!
//! - [`registry`]: The [`RoleRegistry`], the single source of the role → permission policy
//! - [`credentials`]: The [`CredentialStore`] seam and the fixed [`DemoDirectory`]
//! - [`authenticator`]: The [`Authenticator`] (validation, credential check, session login)
//!
//! # Security Note
//!
//! The default configuration compares plaintext passwords against a fixed
//! demo list. It has no rate limiting and no lockout. Set
//! `EDUGATE_PASSWORD_SCHEME=bcrypt` to verify against salted hashes instead;
//! the `authenticate` contract is the same either way.
//!
//! # Example
//!
//! ```ignore
//! use edugate_auth::Authenticator;
//! use edugate_config::AuthConfig;
//!
//! let authenticator = Authenticator::demo(AuthConfig::from_env())?;
//! let principal = authenticator.login(&session, "owner", "owner123").await?;
//! assert_eq!(principal.role, Role::Owner);
//! ```

pub mod authenticator;
pub mod credentials;
pub mod registry;

// Re-export commonly used types at crate root
pub use authenticator::{Authenticator, LoginRequest};
pub use credentials::{CredentialRecord, CredentialStore, DEMO_ACCOUNTS, DemoDirectory};
pub use registry::RoleRegistry;
