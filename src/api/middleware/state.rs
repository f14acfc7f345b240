use std::sync::Arc;
use tokio::sync::RwLock;

use crate::services::{RoleStore, UserStore};

/// Shared handler state. Each store sits behind its own lock: reads share it,
/// saves and deletes take it exclusively.
#[derive(Clone, Default)]
pub struct AppState {
    pub roles: Arc<RwLock<RoleStore>>,
    pub users: Arc<RwLock<UserStore>>,
}

impl AppState {
    pub fn new(roles: RoleStore, users: UserStore) -> Self {
        Self {
            roles: Arc::new(RwLock::new(roles)),
            users: Arc::new(RwLock::new(users)),
        }
    }
}
