//! Credential lookup and password verification.

use bcrypt::BcryptError;
use edugate_config::PasswordScheme;
use edugate_core::{PrincipalId, Role};
use tracing::warn;

/// The fixed demo accounts: username, password, role.
pub const DEMO_ACCOUNTS: &[(&str, &str, Role)] = &[
    ("owner", "owner123", Role::Owner),
    ("admin", "admin123", Role::Admin),
    ("teacher", "teacher123", Role::Teacher),
    ("staff", "staff123", Role::Staff),
];

/// A stored account. `secret` is either the plaintext password or a bcrypt
/// hash, depending on the directory's scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub id: PrincipalId,
    pub username: String,
    pub secret: String,
    pub role: Role,
}

/// Where the authenticator looks accounts up.
pub trait CredentialStore: Send + Sync {
    /// Exact, case-sensitive username lookup.
    fn find(&self, username: &str) -> Option<CredentialRecord>;

    /// Checks a submitted password against a record returned by `find`.
    fn verify(&self, record: &CredentialRecord, password: &str) -> bool;
}

/// In-memory directory of the [`DEMO_ACCOUNTS`].
#[derive(Debug, Clone)]
pub struct DemoDirectory {
    records: Vec<CredentialRecord>,
    scheme: PasswordScheme,
}

impl DemoDirectory {
    /// Plaintext comparison. Demo-grade only.
    pub fn plaintext() -> Self {
        let records = DEMO_ACCOUNTS
            .iter()
            .zip(1u128..)
            .map(|(&(username, password, role), id)| CredentialRecord {
                id: PrincipalId::from_u128(id),
                username: username.to_string(),
                secret: password.to_string(),
                role,
            })
            .collect();

        Self {
            records,
            scheme: PasswordScheme::Plaintext,
        }
    }

    /// Hashes the demo passwords with the given bcrypt cost.
    pub fn bcrypt(cost: u32) -> Result<Self, BcryptError> {
        let mut directory = Self::plaintext();
        for record in &mut directory.records {
            record.secret = bcrypt::hash(&record.secret, cost)?;
        }
        directory.scheme = PasswordScheme::Bcrypt;
        Ok(directory)
    }

    pub fn with_scheme(scheme: PasswordScheme) -> Result<Self, BcryptError> {
        match scheme {
            PasswordScheme::Plaintext => Ok(Self::plaintext()),
            PasswordScheme::Bcrypt => Self::bcrypt(bcrypt::DEFAULT_COST),
        }
    }

    pub fn scheme(&self) -> PasswordScheme {
        self.scheme
    }
}

impl CredentialStore for DemoDirectory {
    fn find(&self, username: &str) -> Option<CredentialRecord> {
        self.records.iter().find(|r| r.username == username).cloned()
    }

    fn verify(&self, record: &CredentialRecord, password: &str) -> bool {
        match self.scheme {
            PasswordScheme::Plaintext => record.secret == password,
            PasswordScheme::Bcrypt => bcrypt::verify(password, &record.secret).unwrap_or_else(|e| {
                warn!(username = %record.username, error = %e, "Stored hash could not be verified");
                false
            }),
        }
    }
}
