//! Movie Catalog Library
//!
//! Normalizes, classifies and merges movie records from a local catalog and
//! an external metadata search service.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod preflight;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
