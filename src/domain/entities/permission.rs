use serde::{Deserialize, Serialize};

/// Display-only permission flags shown on roles and users. Nothing in the
/// crate enforces them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub read: bool,
    pub write: bool,
    pub delete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKey {
    Read,
    Write,
    Delete,
}

impl PermissionKey {
    pub const ALL: [PermissionKey; 3] = [PermissionKey::Read, PermissionKey::Write, PermissionKey::Delete];
}

impl std::fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionKey::Read => write!(f, "read"),
            PermissionKey::Write => write!(f, "write"),
            PermissionKey::Delete => write!(f, "delete"),
        }
    }
}

impl std::str::FromStr for PermissionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "read" => Ok(PermissionKey::Read),
            "write" => Ok(PermissionKey::Write),
            "delete" => Ok(PermissionKey::Delete),
            _ => Err(format!("Invalid permission key: {}", s)),
        }
    }
}

impl Permissions {
    pub fn new(read: bool, write: bool, delete: bool) -> Self {
        Self { read, write, delete }
    }

    pub fn get(&self, key: PermissionKey) -> bool {
        match key {
            PermissionKey::Read => self.read,
            PermissionKey::Write => self.write,
            PermissionKey::Delete => self.delete,
        }
    }

    pub fn set(&mut self, key: PermissionKey, value: bool) {
        match key {
            PermissionKey::Read => self.read = value,
            PermissionKey::Write => self.write = value,
            PermissionKey::Delete => self.delete = value,
        }
    }

    /// Enabled keys in `read, write, delete` order, as rendered in the grid.
    pub fn granted(&self) -> Vec<PermissionKey> {
        PermissionKey::ALL
            .into_iter()
            .filter(|key| self.get(*key))
            .collect()
    }
}
