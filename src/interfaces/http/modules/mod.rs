//! Per-resource HTTP modules

pub mod orders;
pub mod users;
