//! In-memory model snapshot types
//!
//! One `Version` is an immutable snapshot of the entity model at a given
//! revision number:
//!
//! - `version`: a numbered snapshot owning its entities
//! - `entity`: a named record type owning an ordered list of fields
//! - `field`: a named slot on an entity, described by a key/value attribute bag

pub mod entity;
pub mod field;
pub mod version;

/// Attribute key under which every field mirrors its own name.
pub const NAME_ATTRIBUTE: &str = "name";
