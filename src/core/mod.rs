//! Core catalog logic: classification, normalization, merging and query orchestration.

pub mod classifier;
pub mod detail;
pub mod editor;
pub mod merger;
pub mod normalizer;
pub mod orchestrator;
