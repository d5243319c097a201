//! # Edugate Core
//!
//! Core types shared by every Edugate crate.
//!
//! - [`permissions`]: The permission token vocabulary, including the `all` wildcard
//! - [`errors`]: Authentication, storage, and session error types
//! - [`principal`]: Roles and the authenticated [`Principal`]
//!
//! # Example
//!
//! ```ignore
//! use edugate_core::permissions;
//! use edugate_core::errors::AuthError;
//!
//! if evaluator.has_permission(permissions::FEES) {
//!     // show the fee collection screen
//! }
//! ```

pub mod errors;
pub mod permissions;
pub mod principal;

// Re-export commonly used types at crate root
pub use errors::{AuthError, SessionError, StorageError, format_validation_errors};
pub use principal::{Principal, PrincipalId, Role};
