//! Decoded session claims and the role tier model.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use serde::{Deserialize, Serialize};

/// Authorization tier attached to a session.
///
/// Wire labels match the backend's user records: `admin` for the system
/// administrator, `portal_admin` for an organization's administrator,
/// `employee` for a course consumer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    PortalAdmin,
    Employee,
}

impl Role {
    /// Wire label for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::PortalAdmin => "portal_admin",
            Role::Employee => "employee",
        }
    }

    /// Human-readable label for badges and the access-denied page.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "System Admin",
            Role::PortalAdmin => "Portal Admin",
            Role::Employee => "Employee",
        }
    }

    /// Dashboard route a freshly logged-in session of this role lands on.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::PortalAdmin => "/portal-admin",
            Role::Employee => "/employee",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims decoded from the credential's payload segment.
///
/// The backend issues `user_id`, `username`, `role`, and `exp`; each is
/// optional here so a payload that omits one still decodes, and the guard
/// decides what a missing field means. Any claim beyond the known four is
/// carried in `extra` untouched and forwarded to views as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    /// Absolute expiry instant, seconds since the UNIX epoch.
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
