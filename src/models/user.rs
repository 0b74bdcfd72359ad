use std::fmt;

use serde::{Deserialize, Serialize};

/// Access tier. Ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Director,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "user" => Some(Role::User),
            "director" => Some(Role::Director),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Director => "director",
            Role::Admin => "admin",
        }
    }

    pub fn can_manage(&self) -> bool {
        *self >= Role::Director
    }

    pub fn can_administer(&self) -> bool {
        *self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `user_id` is the external identity key; `id` is the advising API's row id.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub(crate) id: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) user_id: Option<String>,
    pub(crate) enable: Option<bool>,
    pub(crate) role: Option<Role>,
}

impl User {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enable.unwrap_or(false)
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn can_manage(&self) -> bool {
        self.role.is_some_and(|r| r.can_manage())
    }

    pub fn can_administer(&self) -> bool {
        self.role.is_some_and(|r| r.can_administer())
    }
}

/// Body for `POST users`. Absent fields are omitted so the advising API
/// reports them as missing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// A submission without a role leaves the upstream role untouched.
#[derive(Debug, Clone, Serialize)]
pub struct UserUpdate {
    pub enable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_privileges() {
        assert!(!Role::User.can_manage());
        assert!(Role::Director.can_manage());
        assert!(!Role::Director.can_administer());
        assert!(Role::Admin.can_administer());
    }

    #[test]
    fn new_user_omits_missing_fields() {
        let body = serde_json::to_value(NewUser {
            email: None,
            user_id: Some("user-test-1".to_string()),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "userId": "user-test-1" }));
    }
}
