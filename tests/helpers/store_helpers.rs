use adminpanel::{Permissions, Role, RoleStore, User, UserStore};

/// Seed roles matching the dashboard's default role grid
pub fn seeded_role_store() -> RoleStore {
    RoleStore::with_roles(adminpanel::bootstrap::demo_roles()).expect("demo roles have unique ids")
}

pub fn seeded_user_store() -> UserStore {
    UserStore::with_users(adminpanel::bootstrap::demo_users()).expect("demo users have unique ids")
}

pub fn admin_role() -> Role {
    Role::new(
        1,
        "Admin",
        Permissions::new(true, true, true),
        vec!["Full Access".to_string()],
    )
}

/// Create a role through the draft flow and return its id
pub fn create_role(store: &mut RoleStore, name: &str) -> u64 {
    let mut draft = store.begin_create();
    draft.update_name(name);
    store.save(draft, None).expect("Failed to create role").id
}

pub fn create_user(store: &mut UserStore, name: &str, email: &str) -> u64 {
    let mut draft = store.begin_create();
    draft.update_name(name);
    draft.update_email(email);
    store.save(draft, None).expect("Failed to create user").id
}

pub fn assert_unique_ids<I: IntoIterator<Item = u64>>(ids: I) {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        assert!(seen.insert(id), "duplicate id {}", id);
    }
}

pub fn user_ids(store: &UserStore) -> Vec<u64> {
    store.list_users().iter().map(|u: &User| u.id).collect()
}

pub fn role_ids(store: &RoleStore) -> Vec<u64> {
    store.list_roles().iter().map(|r| r.id).collect()
}
