//! Domain entities exposed by the stay catalog.

pub mod stay;
pub mod types;
