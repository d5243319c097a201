//! Conditional rendering of UI fragments.
//!
//! [`GateSpec::evaluate`] is the boolean render rule. `hide` never changes
//! that boolean; it only picks between [`GateOutcome::Hidden`] and
//! [`GateOutcome::Fallback`] when the answer is no.

use std::sync::Arc;

use crate::access::evaluator::{AccessSnapshot, PermissionEvaluator};

/// Describes which permissions a fragment needs.
///
/// When both `permission` and `permissions` are set, `permission` wins and
/// the list is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateSpec {
    pub permission: Option<String>,
    pub permissions: Option<Vec<String>>,
    pub require_all: bool,
    pub hide: bool,
}

impl GateSpec {
    /// No requirement: renders for any signed-in user.
    pub fn open() -> Self {
        Self::default()
    }

    pub fn permission(token: &str) -> Self {
        Self {
            permission: Some(token.to_string()),
            ..Self::default()
        }
    }

    pub fn any_of(tokens: &[&str]) -> Self {
        Self {
            permissions: Some(tokens.iter().map(|t| t.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn all_of(tokens: &[&str]) -> Self {
        Self {
            require_all: true,
            ..Self::any_of(tokens)
        }
    }

    pub fn hidden(mut self) -> Self {
        self.hide = true;
        self
    }

    pub fn evaluate(&self, snapshot: &AccessSnapshot) -> bool {
        if !snapshot.is_authenticated() {
            return false;
        }
        if let Some(token) = &self.permission {
            return snapshot.has_permission(token);
        }
        match &self.permissions {
            Some(list) => {
                let tokens: Vec<&str> = list.iter().map(String::as_str).collect();
                if self.require_all {
                    snapshot.has_all_permissions(&tokens)
                } else {
                    snapshot.has_any_permission(&tokens)
                }
            }
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Render,
    Hidden,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct RenderGate {
    evaluator: Arc<PermissionEvaluator>,
}

impl RenderGate {
    pub fn new(evaluator: Arc<PermissionEvaluator>) -> Self {
        Self { evaluator }
    }

    pub fn should_render(&self, spec: &GateSpec) -> bool {
        spec.evaluate(&self.evaluator.snapshot())
    }

    /// Same rule against a snapshot the caller already holds, so that every
    /// gate in one render pass sees the same principal.
    pub fn should_render_in(snapshot: &AccessSnapshot, spec: &GateSpec) -> bool {
        spec.evaluate(snapshot)
    }

    pub fn outcome(&self, spec: &GateSpec) -> GateOutcome {
        Self::outcome_in(&self.evaluator.snapshot(), spec)
    }

    pub fn outcome_in(snapshot: &AccessSnapshot, spec: &GateSpec) -> GateOutcome {
        if spec.evaluate(snapshot) {
            GateOutcome::Render
        } else if spec.hide {
            GateOutcome::Hidden
        } else {
            GateOutcome::Fallback
        }
    }
}
