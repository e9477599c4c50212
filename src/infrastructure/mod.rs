//! Infrastructure layer: database and storage implementations

pub mod database;
pub mod storage;
