use crate::artifacts::model::entity::Entity;
use derive_new::new;

/// One immutable snapshot of the entity model.
///
/// Versions are numbered contiguously starting at 1 and only ever compared
/// against their direct predecessor.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Version {
    pub number: u32,
    pub entities: Vec<Entity>,
}

impl Version {
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name == name)
    }
}
