//! Model data structures and algorithms
//!
//! This module contains the core types and passes of the checker:
//!
//! - `model`: versioned entity model snapshots (version, entity, field)
//! - `diff`: pairwise comparison of adjacent versions into problem reports
//! - `fingerprint`: deterministic identity keys for problems
//! - `suppression`: the persisted set of accepted fingerprints

pub mod diff;
pub mod fingerprint;
pub mod model;
pub mod suppression;
