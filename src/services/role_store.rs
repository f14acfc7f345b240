use std::collections::HashSet;

use crate::domain::entities::{Role, RoleDraft};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::sequence::IdSequence;

/// Owns the role collection behind the role management screen.
///
/// Roles are kept in insertion order. Saves replace whole records, so a
/// reader never observes a half-edited role.
#[derive(Debug, Clone, Default)]
pub struct RoleStore {
    roles: Vec<Role>,
    ids: IdSequence,
}

impl RoleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed data. Fails if two seeded roles share an id.
    pub fn with_roles(roles: Vec<Role>) -> DomainResult<Self> {
        ensure_unique_ids(roles.iter().map(|r| r.id))?;
        let ids = IdSequence::starting_after(roles.iter().map(|r| r.id));
        Ok(Self { roles, ids })
    }

    pub fn list_roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn get_role(&self, id: u64) -> DomainResult<&Role> {
        self.roles
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Role with id {} not found", id)))
    }

    pub fn begin_create(&self) -> RoleDraft {
        RoleDraft::default()
    }

    pub fn begin_edit(&self, id: u64) -> DomainResult<RoleDraft> {
        let role = self.get_role(id)?;
        tracing::debug!("Loaded role {} into draft", id);
        Ok(RoleDraft::from(role))
    }

    /// Commits a draft. `editing_id` selects update of an existing role,
    /// `None` creates a new one with a fresh id.
    pub fn save(&mut self, draft: RoleDraft, editing_id: Option<u64>) -> DomainResult<Role> {
        if let Err(e) = draft.validate() {
            tracing::warn!("Rejected role save: {}", e);
            return Err(e);
        }

        let role = match editing_id {
            Some(id) => {
                let slot = self
                    .roles
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or_else(|| DomainError::NotFound(format!("Role with id {} not found", id)))?;
                *slot = draft.into_role(id);
                tracing::info!("Updated role {} ({})", id, slot.name);
                slot.clone()
            }
            None => {
                let role = draft.into_role(self.ids.allocate()?);
                tracing::info!("Created role {} ({})", role.id, role.name);
                self.roles.push(role.clone());
                role
            }
        };

        metrics::counter!("adminpanel.roles.saved_total").increment(1);
        Ok(role)
    }

    /// Removes the role with `id`. Returns `false` when nothing matched.
    pub fn delete_role(&mut self, id: u64) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| r.id != id);

        if self.roles.len() == before {
            tracing::debug!("Delete of role {} was a no-op", id);
            return false;
        }

        tracing::info!("Role with ID {} has been deleted", id);
        metrics::counter!("adminpanel.roles.deleted_total").increment(1);
        true
    }
}

pub(crate) fn ensure_unique_ids<I>(ids: I) -> DomainResult<()>
where
    I: IntoIterator<Item = u64>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DomainError::ValidationError(format!(
                "Duplicate id {} in seed data",
                id
            )));
        }
    }
    Ok(())
}
