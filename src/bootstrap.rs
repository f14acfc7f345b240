use crate::api::AppState;
use crate::config::Config;
use crate::domain::entities::*;
use crate::domain::errors::DomainResult;
use crate::services::{RoleStore, UserStore};

pub fn build_app_state(config: &Config) -> DomainResult<AppState> {
    let (roles, users) = if config.seed_demo_data {
        let roles = RoleStore::with_roles(demo_roles())?;
        let users = UserStore::with_users(demo_users())?;
        tracing::info!(
            "Seeded {} demo roles and {} demo users",
            roles.len(),
            users.len()
        );
        (roles, users)
    } else {
        tracing::info!("Starting with empty role and user stores");
        (RoleStore::new(), UserStore::new())
    };

    Ok(AppState::new(roles, users))
}

pub fn demo_roles() -> Vec<Role> {
    vec![
        Role::new(
            1,
            "Admin",
            Permissions::new(true, true, true),
            vec!["Full Access".to_string()],
        ),
        Role::new(
            2,
            "User",
            Permissions::new(true, false, false),
            vec!["Limited Access".to_string()],
        ),
        Role::new(
            3,
            "Manager",
            Permissions::new(true, true, false),
            vec!["Manage Users".to_string()],
        ),
    ]
}

pub fn demo_users() -> Vec<User> {
    [
        (1, "Jon Snow", "jonsnow@gmail.com", 35, "(665)121-5454", AccessLevel::Admin, UserStatus::Active),
        (2, "Cersei Lannister", "cerseilannister@gmail.com", 42, "(421)314-2288", AccessLevel::Manager, UserStatus::Active),
        (3, "Jaime Lannister", "jaimelannister@gmail.com", 45, "(422)982-6739", AccessLevel::User, UserStatus::Inactive),
        (4, "Anya Stark", "anyastark@gmail.com", 16, "(921)425-6742", AccessLevel::Admin, UserStatus::Active),
        (5, "Daenerys Targaryen", "daenerystargaryen@gmail.com", 31, "(421)445-1189", AccessLevel::User, UserStatus::Active),
        (6, "Ever Melisandre", "evermelisandre@gmail.com", 150, "(232)545-6483", AccessLevel::Manager, UserStatus::Inactive),
        (7, "Ferrara Clifford", "ferraraclifford@gmail.com", 44, "(543)124-0123", AccessLevel::User, UserStatus::Active),
        (8, "Rossini Frances", "rossinifrances@gmail.com", 36, "(222)444-5555", AccessLevel::User, UserStatus::Inactive),
        (9, "Harvey Roxie", "harveyroxie@gmail.com", 65, "(444)555-6239", AccessLevel::Admin, UserStatus::Active),
    ]
    .into_iter()
    .map(|(id, name, email, age, phone, access, status)| {
        let (role, permissions) = match access {
            AccessLevel::Admin => ("Admin", Permissions::new(true, true, true)),
            AccessLevel::Manager => ("Manager", Permissions::new(true, true, false)),
            AccessLevel::User => ("User", Permissions::new(true, false, false)),
        };

        User {
            age: Some(age),
            phone: Some(phone.to_string()),
            access: Some(access),
            status: Some(status),
            roles: vec![role.to_string()],
            permissions,
            ..User::new(id, name, email)
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_seed_is_consistent() {
        let roles = demo_roles();
        let role_names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();

        for user in demo_users() {
            for role in &user.roles {
                assert!(role_names.contains(&role.as_str()), "unknown role {}", role);
            }
        }
    }

    #[tokio::test]
    async fn test_build_app_state_respects_seed_flag() {
        let seeded = build_app_state(&Config::default()).unwrap();
        assert_eq!(seeded.roles.read().await.len(), 3);
        assert_eq!(seeded.users.read().await.len(), 9);

        let empty = build_app_state(&Config {
            seed_demo_data: false,
            ..Config::default()
        })
        .unwrap();
        assert!(empty.roles.read().await.is_empty());
        assert!(empty.users.read().await.is_empty());
    }
}
