//! Handlers behind the `edugate` console subcommands.
//!
//! Each handler works on the shared [`AppState`] and prints for a human.
//! Failures come back as `anyhow` errors for `main` to report.

use anyhow::{Context, bail};
use dialoguer::{Input, Password};
use edugate_core::{AuthError, format_validation_errors};

use crate::access::{GateSpec, RenderGate};
use crate::access::guard::Decision;
use crate::navigation::{MenuSection, menu};
use crate::state::AppState;
use crate::views::View;

pub async fn handle_login(
    state: &AppState,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };

    match state
        .authenticator
        .login(&state.session, &username, &password)
        .await
    {
        Ok(principal) => {
            println!("✅ Signed in as {} ({})", principal.username, principal.role);
            Ok(())
        }
        Err(AuthError::Validation(errors)) => bail!(format_validation_errors(&errors)),
        Err(e) => Err(e.into()),
    }
}

pub fn handle_logout(state: &AppState) -> anyhow::Result<()> {
    let previous = state.session.current();
    state
        .session
        .clear()
        .context("Signed out, but the stored session could not be removed")?;
    match previous {
        Some(principal) => println!("👋 Signed out {}", principal.username),
        None => println!("Not signed in"),
    }
    Ok(())
}

pub fn handle_whoami(state: &AppState) {
    match state.session.current() {
        Some(principal) => {
            println!("User:        {}", principal.username);
            println!("Role:        {}", principal.role);
            println!("Last login:  {}", principal.last_login.to_rfc3339());
            println!("Permissions: {}", join(principal.permissions.iter()));
        }
        None => println!("Not signed in"),
    }
}

pub fn handle_can(state: &AppState, tokens: &[String], require_all: bool) {
    let snapshot = state.evaluator.snapshot();
    let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();

    for token in &tokens {
        let mark = if snapshot.has_permission(token) { "✅" } else { "❌" };
        println!("{} {}", mark, token);
    }

    let allowed = if require_all {
        snapshot.has_all_permissions(&tokens)
    } else {
        snapshot.has_any_permission(&tokens)
    };
    let mode = if require_all { "all" } else { "any" };
    println!("{}: {}", mode, if allowed { "yes" } else { "no" });
}

pub fn handle_open(state: &AppState, path: &str) -> anyhow::Result<()> {
    let view: View = path.parse().map_err(anyhow::Error::msg)?;
    match state.guard.guard_view(view) {
        Decision::Allow => println!("✅ {} ({})", view, view.path()),
        denied => println!(
            "🚫 {} → {}",
            view.path(),
            denied.redirect_path().unwrap_or_default()
        ),
    }
    Ok(())
}

pub fn handle_menu(state: &AppState) {
    let snapshot = state.evaluator.snapshot();
    if !RenderGate::should_render_in(&snapshot, &GateSpec::open()) {
        println!("Not signed in");
        return;
    }
    print_menu(&menu(&snapshot));
}

fn print_menu(sections: &[MenuSection]) {
    for section in sections {
        println!("{}", section.title);
        for view in &section.entries {
            println!("  {:<20} {}", view.title(), view.path());
        }
    }
}

pub fn handle_roles(state: &AppState) {
    for (role, tokens) in state.authenticator.registry().iter() {
        println!("{:<8} {}", role, join(tokens.iter()));
    }
}

fn join<'a>(tokens: impl Iterator<Item = &'a String>) -> String {
    tokens.map(String::as_str).collect::<Vec<_>>().join(", ")
}
