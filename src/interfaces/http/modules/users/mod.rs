//! Users HTTP module (placeholder endpoints only)

pub mod dto;
pub mod handlers;
