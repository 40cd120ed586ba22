use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::UserId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("user name cannot be empty")]
    EmptyName,

    #[error("user email cannot be empty")]
    EmptyEmail,
}

//
// ─── ROLE ──────────────────────────────────────────────────────────────────────
//

/// Account role. Anything the backend does not call `admin` is a plain user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

impl UserRole {
    /// Lenient parse of the backend's free-form role string.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::User
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Admin => Self::User,
            Self::User => Self::Admin,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── USER ──────────────────────────────────────────────────────────────────────
//

/// A registered account as listed on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: UserRole,
    created_at: DateTime<Utc>,
}

impl User {
    /// Rehydrate a user loaded from a backend.
    ///
    /// # Errors
    ///
    /// Returns `UserError` when the name or email is blank.
    pub fn from_persisted(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
        created_at: DateTime<Utc>,
    ) -> Result<Self, UserError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }
        let email = email.into().trim().to_owned();
        if email.is_empty() {
            return Err(UserError::EmptyEmail);
        }
        Ok(Self {
            id,
            name,
            email,
            role,
            created_at,
        })
    }

    #[must_use]
    pub fn with_role(&self, role: UserRole) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }

    /// Case-insensitive substring match on name or email. A blank query matches everyone.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
    }

    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
