use crate::artifacts::model::NAME_ATTRIBUTE;
use std::collections::BTreeMap;

/// A named slot on an entity, described entirely by its attribute bag.
///
/// The field name doubles as an attribute: constructing a field mirrors it
/// into the bag under [`NAME_ATTRIBUTE`], so the bag alone is a complete
/// description of the field. Attribute iteration is in key order, which keeps
/// diff output deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    attributes: BTreeMap<String, String>,
}

impl Field {
    pub fn new(name: impl Into<String>, mut attributes: BTreeMap<String, String>) -> Self {
        let name = name.into();
        attributes.insert(NAME_ATTRIBUTE.to_string(), name.clone());

        Field { name, attributes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&String, &String)> {
        self.attributes.iter()
    }

    /// Looks up an attribute value; `None` is distinct from an empty value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
