mod common;

use common::{memory_state, principal, signed_in};
use edugate::navigation::menu;
use edugate::{Decision, GateOutcome, GateSpec, RenderGate, View};
use edugate_core::{Role, permissions};

#[test]
fn test_anonymous_session_denies_everything() {
    let (state, _) = memory_state();

    for token in permissions::ALL_TOKENS.iter().chain([&permissions::ALL]) {
        assert!(!state.evaluator.has_permission(token));
    }
    assert!(!state.evaluator.has_any_permission(&[permissions::STUDENTS]));
    assert!(!state.evaluator.has_all_permissions(&[]));
    assert!(!state.gate.should_render(&GateSpec::open()));
}

#[tokio::test]
async fn test_owner_passes_arbitrary_tokens() {
    let state = signed_in("owner", "owner123").await;

    assert!(state.evaluator.has_permission("anything"));
    assert!(state.evaluator.has_permission("not-a-real-token"));
    assert!(state.evaluator.has_all_permissions(&["x", "y", permissions::SETTINGS]));
}

#[tokio::test]
async fn test_admin_permissions() {
    let state = signed_in("admin", "admin123").await;

    assert!(state.evaluator.has_permission(permissions::STUDENTS));
    assert!(state.evaluator.has_permission(permissions::USERS));
    assert!(!state.evaluator.has_permission(permissions::SETTINGS));
    for token in permissions::FINANCIAL {
        assert!(!state.evaluator.has_permission(token), "{token}");
    }
}

#[tokio::test]
async fn test_teacher_permissions() {
    let state = signed_in("teacher", "teacher123").await;

    assert!(state.evaluator.has_permission(permissions::MARKSHEETS));
    assert!(state.evaluator.has_permission(permissions::REPORTS));
    assert!(!state.evaluator.has_permission(permissions::EXAMINATIONS));
    assert!(!state.evaluator.has_permission(permissions::STUDENTS));
}

#[tokio::test]
async fn test_staff_permissions() {
    let state = signed_in("staff", "staff123").await;

    assert!(state.evaluator.has_all_permissions(&[
        permissions::STUDENTS,
        permissions::ATTENDANCE,
        permissions::FEES,
        permissions::EXAMINATIONS,
    ]));
    assert!(!state.evaluator.has_permission(permissions::EXPENSES));
    assert!(!state.evaluator.has_permission(permissions::USERS));
}

#[tokio::test]
async fn test_empty_list_asymmetry() {
    let state = signed_in("teacher", "teacher123").await;

    assert!(!state.evaluator.has_any_permission(&[]));
    assert!(state.evaluator.has_all_permissions(&[]));
}

#[test]
fn test_wildcard_token_grants_everything() {
    let (state, _) = memory_state();
    state
        .session
        .set_current(principal(Role::Staff, &[permissions::ALL]))
        .unwrap();

    assert!(state.evaluator.has_permission(permissions::SETTINGS));
    assert_eq!(state.guard.guard_view(View::Settings), Decision::Allow);
}

#[test]
fn test_guard_redirects_anonymous_to_login() {
    let (state, _) = memory_state();

    assert_eq!(state.guard.guard(None), Decision::RedirectToLogin);
    assert_eq!(
        state.guard.guard(Some(permissions::FEES)),
        Decision::RedirectToLogin
    );
    assert_eq!(
        state.guard.guard_view(View::Dashboard).redirect_path(),
        Some("/login")
    );
}

#[tokio::test]
async fn test_guard_scenarios() {
    let teacher = signed_in("teacher", "teacher123").await;
    assert_eq!(teacher.guard.guard(None), Decision::Allow);
    assert_eq!(teacher.guard.guard_view(View::Marksheets), Decision::Allow);
    assert_eq!(
        teacher.guard.guard(Some(permissions::FEES)),
        Decision::RedirectToUnauthorized
    );

    let admin = signed_in("admin", "admin123").await;
    assert_eq!(
        admin.guard.guard_view(View::Settings).redirect_path(),
        Some("/unauthorized")
    );
    assert_eq!(admin.guard.guard_view(View::Users), Decision::Allow);
}

#[tokio::test]
async fn test_guard_sees_logout_immediately() {
    let state = signed_in("owner", "owner123").await;
    assert_eq!(state.guard.guard_view(View::Fees), Decision::Allow);

    state.session.clear().unwrap();

    assert_eq!(state.guard.guard_view(View::Fees), Decision::RedirectToLogin);
}

#[tokio::test]
async fn test_every_view_allowed_for_owner() {
    let state = signed_in("owner", "owner123").await;
    for view in View::ALL {
        assert!(state.guard.guard_view(view).is_allowed(), "{view:?}");
    }
}

#[tokio::test]
async fn test_guard_by_parsed_path() {
    let state = signed_in("staff", "staff123").await;

    let view: View = "/staff-attendance".parse().unwrap();
    assert_eq!(state.guard.guard_view(view), Decision::Allow);

    let view: View = "/expenses".parse().unwrap();
    assert_eq!(state.guard.guard_view(view), Decision::RedirectToUnauthorized);
}

#[tokio::test]
async fn test_render_gate_outcomes() {
    let state = signed_in("teacher", "teacher123").await;

    assert!(state.gate.should_render(&GateSpec::permission(permissions::MARKSHEETS)));
    assert_eq!(
        state.gate.outcome(&GateSpec::permission(permissions::FEES)),
        GateOutcome::Fallback
    );
    assert_eq!(
        state.gate.outcome(&GateSpec::permission(permissions::FEES).hidden()),
        GateOutcome::Hidden
    );
    assert!(state.gate.should_render(&GateSpec::any_of(&[
        permissions::FEES,
        permissions::REPORTS
    ])));
    assert!(!state.gate.should_render(&GateSpec::all_of(&[
        permissions::FEES,
        permissions::REPORTS
    ])));
}

#[tokio::test]
async fn test_one_render_pass_uses_one_snapshot() {
    let state = signed_in("owner", "owner123").await;
    let snapshot = state.evaluator.snapshot();

    state.session.clear().unwrap();

    assert!(RenderGate::should_render_in(
        &snapshot,
        &GateSpec::permission(permissions::SETTINGS)
    ));
    assert!(!state.gate.should_render(&GateSpec::permission(permissions::SETTINGS)));
}

#[tokio::test]
async fn test_staff_menu() {
    let state = signed_in("staff", "staff123").await;
    let sidebar = menu(&state.evaluator.snapshot());

    let titles: Vec<&str> = sidebar.iter().map(|s| s.title).collect();
    assert_eq!(
        titles,
        vec!["Overview", "Academics", "Staff", "Finance", "Reports"]
    );

    let finance = sidebar.iter().find(|s| s.title == "Finance").unwrap();
    assert_eq!(finance.entries, vec![View::Fees]);
}

#[tokio::test]
async fn test_admin_menu_has_no_finance() {
    let state = signed_in("admin", "admin123").await;
    let sidebar = menu(&state.evaluator.snapshot());

    assert!(sidebar.iter().all(|s| s.title != "Finance"));
    let admin = sidebar.iter().find(|s| s.title == "Administration").unwrap();
    assert_eq!(admin.entries, vec![View::Users]);
}
