pub mod entities;
pub mod errors;
pub mod sequence;

pub use errors::{DomainError, DomainResult};
