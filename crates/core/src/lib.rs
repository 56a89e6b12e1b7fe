//! Domain building blocks shared by the store adapters and the HTTP layer.

pub mod error;
pub mod types;
