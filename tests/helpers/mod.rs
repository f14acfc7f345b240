#![allow(dead_code)]
#![allow(unused_imports)]
pub mod http_helpers;
pub mod store_helpers;

pub use http_helpers::*;
pub use store_helpers::*;
