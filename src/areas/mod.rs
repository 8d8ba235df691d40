//! Core checker components
//!
//! This module contains the collaborators around the diff core:
//!
//! - `loader`: parsing model source files into `Version` snapshots
//! - `project`: run configuration and high-level command coordination
//! - `workspace`: discovery of numbered version directories on disk

pub mod loader;
pub mod project;
pub mod workspace;
