//! Navigation-time authorization.
//!
//! A denial is a [`Decision`] value for the caller to act on, never an error.
//! The guard takes a fresh snapshot on every call, so a login or logout
//! between two navigations is always seen.

use std::sync::Arc;

use edugate_observability::track_navigation;
use tracing::debug;

use crate::access::evaluator::{AccessSnapshot, PermissionEvaluator};
use crate::views::{LOGIN_PATH, UNAUTHORIZED_PATH, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

impl Decision {
    /// Where to send the user, or `None` to render the requested view.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            Decision::Allow => None,
            Decision::RedirectToLogin => Some(LOGIN_PATH),
            Decision::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::RedirectToLogin => "redirect_login",
            Decision::RedirectToUnauthorized => "redirect_unauthorized",
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// The guard rule itself, on an explicit snapshot.
pub fn decide(snapshot: &AccessSnapshot, required_permission: Option<&str>) -> Decision {
    if !snapshot.is_authenticated() {
        return Decision::RedirectToLogin;
    }
    match required_permission {
        None => Decision::Allow,
        Some(token) if snapshot.has_permission(token) => Decision::Allow,
        Some(_) => Decision::RedirectToUnauthorized,
    }
}

#[derive(Debug, Clone)]
pub struct RouteGuard {
    evaluator: Arc<PermissionEvaluator>,
}

impl RouteGuard {
    pub fn new(evaluator: Arc<PermissionEvaluator>) -> Self {
        Self { evaluator }
    }

    pub fn guard(&self, required_permission: Option<&str>) -> Decision {
        let decision = decide(&self.evaluator.snapshot(), required_permission);
        debug!(
            required = required_permission.unwrap_or("-"),
            decision = decision.as_str(),
            "Route guard evaluated"
        );
        track_navigation(decision.as_str());
        decision
    }

    pub fn guard_view(&self, view: View) -> Decision {
        self.guard(view.required_permission())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use edugate_core::{Principal, PrincipalId, Role};

    fn snapshot(role: Role, tokens: &[&str]) -> AccessSnapshot {
        AccessSnapshot::for_principal(Principal {
            id: PrincipalId::from_u128(3),
            username: "someone".to_string(),
            role,
            permissions: tokens.iter().map(|s| s.to_string()).collect(),
            last_login: Utc::now(),
        })
    }

    #[test]
    fn test_anonymous_always_goes_to_login() {
        let anonymous = AccessSnapshot::anonymous();
        assert_eq!(decide(&anonymous, None), Decision::RedirectToLogin);
        assert_eq!(decide(&anonymous, Some("fees")), Decision::RedirectToLogin);
    }

    #[test]
    fn test_no_requirement_allows_any_principal() {
        assert_eq!(decide(&snapshot(Role::Teacher, &[]), None), Decision::Allow);
    }

    #[test]
    fn test_requirement_checked() {
        let teacher = snapshot(Role::Teacher, &["marksheets"]);
        assert_eq!(decide(&teacher, Some("marksheets")), Decision::Allow);
        assert_eq!(
            decide(&teacher, Some("fees")),
            Decision::RedirectToUnauthorized
        );
    }

    #[test]
    fn test_redirect_paths() {
        assert_eq!(Decision::Allow.redirect_path(), None);
        assert_eq!(Decision::RedirectToLogin.redirect_path(), Some("/login"));
        assert_eq!(
            Decision::RedirectToUnauthorized.redirect_path(),
            Some("/unauthorized")
        );
    }
}
