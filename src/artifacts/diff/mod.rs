//! Version-chain diffing
//!
//! The core algorithm of the tool:
//!
//! - `model_diff`: pairwise comparison of adjacent versions
//! - `problem`: the typed discrepancies a comparison can produce
//! - `report`: the per-pair problem set

pub mod model_diff;
pub mod problem;
pub mod report;
