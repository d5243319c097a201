//! The role → permission mapping.
//!
//! Built once at startup. Logins copy a role's set into the new principal,
//! so edits made here afterwards only affect later logins.

use std::collections::{BTreeSet, HashMap};

use edugate_core::Role;
use edugate_core::permissions::{self, ALL, ALL_TOKENS, FINANCIAL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRegistry {
    grants: HashMap<Role, BTreeSet<String>>,
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl RoleRegistry {
    /// The console's authorization policy.
    pub fn standard() -> Self {
        let owner = ALL_TOKENS.iter().copied().chain([ALL]);

        let admin = ALL_TOKENS
            .iter()
            .copied()
            .filter(|t| !FINANCIAL.contains(t) && *t != permissions::SETTINGS);

        let teacher = [
            permissions::MARKSHEETS,
            permissions::STUDENT_REPORTS,
            permissions::REPORTS,
        ];

        let staff = [
            permissions::STUDENTS,
            permissions::ATTENDANCE,
            permissions::STAFF_ATTENDANCE,
            permissions::MARKSHEETS,
            permissions::CERTIFICATES,
            permissions::FEES,
            permissions::EXAMINATIONS,
            permissions::STUDENT_REPORTS,
            permissions::REPORTS,
        ];

        let mut grants = HashMap::new();
        grants.insert(Role::Owner, to_set(owner));
        grants.insert(Role::Admin, to_set(admin));
        grants.insert(Role::Teacher, to_set(teacher));
        grants.insert(Role::Staff, to_set(staff));

        Self { grants }
    }

    /// A copy of the role's permission set. Empty for a role with no entry.
    pub fn permissions_for(&self, role: Role) -> BTreeSet<String> {
        self.grants.get(&role).cloned().unwrap_or_default()
    }

    /// Looks a role up by name. Unknown names yield an empty set.
    pub fn permissions_for_name(&self, name: &str) -> BTreeSet<String> {
        name.parse::<Role>()
            .map(|role| self.permissions_for(role))
            .unwrap_or_default()
    }

    /// Roles and their sets, in [`Role::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &BTreeSet<String>)> {
        Role::ALL
            .into_iter()
            .filter_map(|role| self.grants.get(&role).map(|set| (role, set)))
    }

    /// Adds a token to a role. Returns false if it was already present.
    pub fn grant(&mut self, role: Role, token: &str) -> bool {
        self.grants.entry(role).or_default().insert(token.to_string())
    }

    /// Removes a token from a role. The Owner's wildcard cannot be removed.
    pub fn revoke(&mut self, role: Role, token: &str) -> bool {
        if role == Role::Owner && permissions::is_wildcard(token) {
            return false;
        }
        self.grants
            .get_mut(&role)
            .is_some_and(|set| set.remove(token))
    }
}

fn to_set<'a>(tokens: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    tokens.into_iter().map(str::to_string).collect()
}
