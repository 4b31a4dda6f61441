pub mod api;
pub mod errors;
pub mod main;

pub use errors::{ServiceError, ServiceResult};
