pub mod middleware;
pub mod pagination;
pub mod roles;
pub mod users;

pub use middleware::*;
