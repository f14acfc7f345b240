pub mod permission;
pub mod role;
pub mod user;

pub use permission::*;
pub use role::*;
pub use user::*;
