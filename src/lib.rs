//! # Edugate
//!
//! Role-based access control for a school-management console.
//!
//! ## Overview
//!
//! A user signs in with one of the fixed demo accounts and receives a
//! [`Principal`](edugate_core::Principal) carrying a copy of their role's
//! permission set. Every navigation and every conditionally rendered fragment
//! is then decided from that set.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── edugate-core/           # Permission tokens, Role, Principal, error types
//! ├── edugate-config/         # Environment-driven configuration
//! ├── edugate-auth/           # Role Registry, credential directory, Authenticator
//! ├── edugate-session/        # Durable key-value storage and the Session Store
//! └── edugate-observability/  # Logging and counters
//! src/
//! ├── access/                 # Permission Evaluator, Route Guard, Render Gate
//! ├── views.rs                # Console screens and their required permission
//! ├── navigation.rs           # Sidebar built through the render gate
//! ├── state.rs                # AppState wiring
//! └── cli/                    # `edugate` subcommand handlers
//! ```
//!
//! ## Roles
//!
//! | Role | Permissions |
//! |------|-------------|
//! | Owner | Everything, including the `all` wildcard |
//! | Admin | Everything except financial screens and settings |
//! | Teacher | Marksheets and reports |
//! | Staff | Front-office work: students, attendance, fees, certificates, exams |
//!
//! Any principal whose role is Owner, or whose set holds `all`, passes every
//! check. No principal at all fails every check.
//!
//! ## Decisions
//!
//! ```text
//! no principal            → RedirectToLogin        (/login)
//! missing permission      → RedirectToUnauthorized (/unauthorized)
//! otherwise               → Allow
//! ```
//!
//! ## Configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `EDUGATE_STORAGE_PATH` | `storage/session.json` |
//! | `EDUGATE_AUTH_LATENCY_MS` | `500` |
//! | `EDUGATE_PASSWORD_SCHEME` | `plaintext` |
//! | `LOG_LEVEL` | `info` |
//! | `EDUGATE_LOG_DIR` | `storage/logs` |
//! | `OBSERVABILITY_ENABLED` | `true` |

pub mod access;
pub mod cli;
pub mod navigation;
pub mod state;
pub mod views;

pub use access::{
    AccessSnapshot, Decision, GateOutcome, GateSpec, PermissionEvaluator, RenderGate, RouteGuard,
};
pub use state::{AppState, init_app_state};
pub use views::View;
