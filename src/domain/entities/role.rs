use serde::{Deserialize, Serialize};

use super::permission::{PermissionKey, Permissions};
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: u64,
    pub name: String,
    pub permissions: Permissions,
    #[serde(default)]
    pub custom_attributes: Vec<String>,
}

impl Role {
    pub fn new(id: u64, name: impl Into<String>, permissions: Permissions, custom_attributes: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            permissions,
            custom_attributes,
        }
    }

    /// Attributes with their first letter capitalized, comma separated.
    pub fn attributes_label(&self) -> String {
        let joined = self
            .custom_attributes
            .iter()
            .map(|attr| capitalize(attr))
            .collect::<Vec<_>>()
            .join(", ");

        if joined.is_empty() {
            "No Custom Attributes".to_string()
        } else {
            joined
        }
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Editable, detached copy of a role's fields while the create/edit form is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub permissions: Permissions,
    #[serde(default)]
    pub custom_attributes: Vec<String>,
}

impl RoleDraft {
    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn update_permission(&mut self, key: PermissionKey, value: bool) {
        self.permissions.set(key, value);
    }

    /// Appends an empty attribute, like the form's "Add Custom Attribute" button.
    pub fn add_attribute(&mut self) {
        self.custom_attributes.push(String::new());
    }

    pub fn update_attribute(&mut self, index: usize, value: impl Into<String>) -> DomainResult<()> {
        let len = self.custom_attributes.len();
        let slot = self
            .custom_attributes
            .get_mut(index)
            .ok_or(DomainError::IndexOutOfRange { index, len })?;
        *slot = value.into();
        Ok(())
    }

    pub fn remove_attribute(&mut self, index: usize) -> DomainResult<String> {
        let len = self.custom_attributes.len();
        if index >= len {
            return Err(DomainError::IndexOutOfRange { index, len });
        }
        Ok(self.custom_attributes.remove(index))
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Role name is required".to_string(),
            ));
        }
        Ok(())
    }

    pub(crate) fn into_role(self, id: u64) -> Role {
        Role {
            id,
            name: self.name,
            permissions: self.permissions,
            custom_attributes: self.custom_attributes,
        }
    }
}

impl From<&Role> for RoleDraft {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            permissions: role.permissions,
            custom_attributes: role.custom_attributes.clone(),
        }
    }
}
