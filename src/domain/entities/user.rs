use serde::{Deserialize, Serialize};

use super::permission::Permissions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Admin,
    Manager,
    User,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessLevel::Admin => write!(f, "admin"),
            AccessLevel::Manager => write!(f, "manager"),
            AccessLevel::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for AccessLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(AccessLevel::Admin),
            "manager" => Ok(AccessLevel::Manager),
            "user" => Ok(AccessLevel::User),
            _ => Err(format!("Invalid access level: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Label shown on the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Not Active",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Permissions,
}

impl User {
    /// A bare user as created through the form: no age, phone, access or status.
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age: None,
            phone: None,
            access: None,
            status: None,
            roles: Vec::new(),
            permissions: Permissions::default(),
        }
    }
}

/// Editable copy of a user while the form is open.
///
/// Only `name` and `email` can be changed. `roles` and `permissions` are
/// loaded for display but the form never writes them back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(skip_deserializing)]
    roles: Vec<String>,
    #[serde(skip_deserializing)]
    permissions: Permissions,
}

impl UserDraft {
    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn update_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    pub(crate) fn into_user(self, id: u64) -> User {
        User {
            roles: self.roles,
            permissions: self.permissions,
            ..User::new(id, self.name, self.email)
        }
    }

    /// Writes the editable fields onto an existing record.
    pub(crate) fn apply_to(self, user: &User) -> User {
        User {
            name: self.name,
            email: self.email,
            ..user.clone()
        }
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            roles: user.roles.clone(),
            permissions: user.permissions,
        }
    }
}
