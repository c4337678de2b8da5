//! Data models.

pub mod config;
pub mod credential;
pub mod draft;
pub mod record;
