//! User domain entity and its public projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_GUEST};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Guest,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Strict parse of the stored value. Matching is case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            ROLE_ADMIN => Some(UserRole::Admin),
            ROLE_GUEST => Some(UserRole::Guest),
            _ => None,
        }
    }
}

/// Lenient conversion for stored rows: unknown values fall back to guest.
impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        UserRole::parse(s).unwrap_or_else(|| {
            tracing::warn!(role = %s, "Unknown user role, treating as {}", ROLE_GUEST);
            UserRole::Guest
        })
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        UserRole::from(s.as_str())
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::Guest => write!(f, "{}", ROLE_GUEST),
        }
    }
}

/// Full user record as stored by the persistence engine.
///
/// Carries the password hash, so it is deliberately not `Serialize`.
/// Anything leaving the data-access boundary goes through [`UserDto`].
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Keep the hash out of logs and panic messages
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data needed to insert a user record (password already hashed).
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Public projection of a user record.
///
/// Exactly three fields: there is no slot for the password credential, so it
/// cannot be carried out of the data-access layer by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    /// Unique user identifier
    pub id: i32,
    /// User display name
    pub name: String,
    /// User email address
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash1".to_string(),
            role: UserRole::Admin,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_round_trips_through_storage_string() {
        assert_eq!(UserRole::from("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from("GUEST"), UserRole::Guest);
        assert_eq!(String::from(UserRole::Admin), "ADMIN");
        assert_eq!(UserRole::Guest.to_string(), "GUEST");
    }

    #[test]
    fn test_unknown_role_defaults_to_guest() {
        assert_eq!(UserRole::parse("admin"), None);
        assert_eq!(UserRole::parse(""), None);
        assert_eq!(UserRole::parse("GUEST"), Some(UserRole::Guest));

        assert_eq!(UserRole::from("admin"), UserRole::Guest);
        assert_eq!(UserRole::from(""), UserRole::Guest);
    }

    #[test]
    fn test_projection_keeps_fields_verbatim() {
        let mut user = alice();
        user.name = "  Alice  ".to_string();
        user.email = "Alice@Example.COM".to_string();

        let dto = UserDto::from(&user);
        assert_eq!(dto.id, 1);
        assert_eq!(dto.name, "  Alice  ");
        assert_eq!(dto.email, "Alice@Example.COM");
    }

    #[test]
    fn test_projection_json_has_no_credential() {
        let dto = UserDto::from(alice());
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Alice", "email": "alice@example.com"})
        );
        assert!(!json.to_string().contains("hash1"));
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let output = format!("{:?}", alice());
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains("hash1"));
    }
}
