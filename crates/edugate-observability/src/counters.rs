use metrics::counter;
use std::sync::OnceLock;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Track authentication events
pub fn track_login_success(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "role" => role.to_string(), "status" => "success").increment(1);
}

pub fn track_login_failure(reason: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "status" => "failure", "reason" => reason.to_string()).increment(1);
}

pub fn track_logout() {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logouts_total").increment(1);
}

/// Track session hydration at startup (`restored`, `absent`, `corrupt`, `unavailable`)
pub fn track_session_restore(outcome: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("session_restores_total", "outcome" => outcome.to_string()).increment(1);
}

/// Track route guard decisions
pub fn track_navigation(decision: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("navigation_decisions_total", "decision" => decision.to_string()).increment(1);
}
