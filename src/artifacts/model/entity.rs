use crate::artifacts::model::field::Field;
use derive_new::new;

/// A named record type within one model version.
///
/// The name is the identity key when matching entities across versions.
/// Uniqueness of names within a version is assumed, not enforced; lookups
/// return the first match in stored order.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Entity {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Entity {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }
}
