//! Roles and authenticated principals.
//!
//! A [`Principal`] is only constructed by a successful login or by restoring a
//! previously persisted one. It carries its own copy of the role's permission
//! set, so later edits to the role registry never change an issued session.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of console roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Owner,
    Admin,
    Teacher,
    Staff,
}

impl Role {
    /// Every role, in descending order of reach.
    pub const ALL: [Role; 4] = [Role::Owner, Role::Admin, Role::Teacher, Role::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Admin => "Admin",
            Role::Teacher => "Teacher",
            Role::Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "owner" => Ok(Role::Owner),
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "staff" => Ok(Role::Staff),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Stable principal identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(pub Uuid);

impl PrincipalId {
    /// Create an ID from a u128 value (useful for constants).
    #[inline]
    pub const fn from_u128(v: u128) -> Self {
        Self(Uuid::from_u128(v))
    }

    #[inline]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An authenticated user.
///
/// Serialized with camelCase field names (`lastLogin`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: PrincipalId,
    pub username: String,
    pub role: Role,
    /// Snapshot of the role's permission set at login time.
    pub permissions: BTreeSet<String>,
    pub last_login: DateTime<Utc>,
}

impl Principal {
    /// Raw membership test against the snapshot, without wildcard handling.
    pub fn holds(&self, token: &str) -> bool {
        self.permissions.contains(token)
    }

    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}
