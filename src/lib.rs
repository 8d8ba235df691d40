//! Migration safety checker for versioned entity models
//!
//! Compares every adjacent pair of model version snapshots, reports the
//! removals and attribute changes that would break a migration, and matches
//! them against the fingerprints a maintainer has already reviewed.

pub mod areas;
pub mod artifacts;
pub mod commands;
