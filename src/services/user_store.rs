use crate::domain::entities::{User, UserDraft};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::sequence::IdSequence;
use crate::services::role_store::ensure_unique_ids;

/// Owns the team member collection behind the user management screen.
///
/// Unlike roles, saves perform no field validation, and an edit only writes
/// back `name` and `email`.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
    ids: IdSequence,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> DomainResult<Self> {
        ensure_unique_ids(users.iter().map(|u| u.id))?;
        let ids = IdSequence::starting_after(users.iter().map(|u| u.id));
        Ok(Self { users, ids })
    }

    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get_user(&self, id: u64) -> DomainResult<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("User with id {} not found", id)))
    }

    pub fn begin_create(&self) -> UserDraft {
        UserDraft::default()
    }

    pub fn begin_edit(&self, id: u64) -> DomainResult<UserDraft> {
        let user = self.get_user(id)?;
        tracing::debug!("Loaded user {} into draft", id);
        Ok(UserDraft::from(user))
    }

    pub fn save(&mut self, draft: UserDraft, editing_id: Option<u64>) -> DomainResult<User> {
        let user = match editing_id {
            Some(id) => {
                let slot = self
                    .users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or_else(|| DomainError::NotFound(format!("User with id {} not found", id)))?;
                *slot = draft.apply_to(slot);
                tracing::info!("User updated with ID: {}", id);
                slot.clone()
            }
            None => {
                let user = draft.into_user(self.ids.allocate()?);
                tracing::info!("Adding new user {} ({})", user.id, user.email);
                self.users.push(user.clone());
                user
            }
        };

        metrics::counter!("adminpanel.users.saved_total").increment(1);
        Ok(user)
    }

    pub fn delete_user(&mut self, id: u64) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);

        if self.users.len() == before {
            tracing::debug!("Delete of user {} was a no-op", id);
            return false;
        }

        tracing::info!("User with ID {} has been deleted", id);
        metrics::counter!("adminpanel.users.deleted_total").increment(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AccessLevel, Permissions, UserStatus};

    fn seeded() -> UserStore {
        let mut jon = User::new(1, "Jon Snow", "jonsnow@gmail.com");
        jon.age = Some(35);
        jon.phone = Some("(665)121-5454".to_string());
        jon.access = Some(AccessLevel::Admin);
        jon.status = Some(UserStatus::Active);
        jon.roles = vec!["Admin".to_string()];
        jon.permissions = Permissions::new(true, true, true);

        let cersei = User::new(2, "Cersei Lannister", "cerseilannister@gmail.com");
        UserStore::with_users(vec![jon, cersei]).unwrap()
    }

    #[test]
    fn test_create_user_without_access_or_status() {
        let mut store = seeded();
        let mut draft = store.begin_create();
        draft.update_name("Arya Stark");
        draft.update_email("arya@winterfell.org");

        let user = store.save(draft, None).unwrap();

        assert_eq!(user.id, 3);
        assert!(user.access.is_none());
        assert!(user.status.is_none());
        assert!(user.roles.is_empty());
        assert_eq!(user.permissions, Permissions::default());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_save_accepts_empty_fields() {
        let mut store = UserStore::new();
        let user = store.save(store.begin_create(), None).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_edit_only_writes_name_and_email() {
        let mut store = seeded();
        let mut draft = store.begin_edit(1).unwrap();
        assert_eq!(draft.roles(), ["Admin".to_string()]);

        draft.update_name("Aegon Targaryen");
        let user = store.save(draft, Some(1)).unwrap();

        assert_eq!(user.name, "Aegon Targaryen");
        assert_eq!(user.email, "jonsnow@gmail.com");
        assert_eq!(user.age, Some(35));
        assert_eq!(user.access, Some(AccessLevel::Admin));
        assert_eq!(user.status, Some(UserStatus::Active));
        assert_eq!(user.permissions, Permissions::new(true, true, true));
        assert_eq!(store.get_user(1).unwrap(), &user);
    }

    #[test]
    fn test_edit_missing_user() {
        let mut store = seeded();
        assert!(matches!(store.begin_edit(9), Err(DomainError::NotFound(_))));
        assert!(matches!(
            store.save(UserDraft::default(), Some(9)),
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = seeded();
        assert!(!store.delete_user(999));
        assert_eq!(store.len(), 2);

        assert!(store.delete_user(2));
        assert!(!store.delete_user(2));
        assert_eq!(store.len(), 1);
    }
}
