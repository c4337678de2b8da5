//! Utility functions.

pub mod youtube;
