//! External service clients and collaborator contracts.

pub mod backend;
pub mod catalog_api;
