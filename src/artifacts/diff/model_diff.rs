use crate::artifacts::diff::problem::{Problem, ProblemKind};
use crate::artifacts::diff::report::Report;
use crate::artifacts::model::entity::Entity;
use crate::artifacts::model::field::Field;
use crate::artifacts::model::version::Version;
use std::collections::HashMap;

/// Pairwise diff engine over an ordered version chain.
///
/// Each version is compared only against its direct predecessor. Matching is
/// by exact name equality; the new side is indexed by name up front while the
/// old side is walked in stored order, so report order follows the old
/// version and duplicate names on the new side resolve to the first
/// occurrence.
///
/// Comparison is one-directional: entities, fields, and attribute keys that
/// exist only in the newer version are never reported. Additive evolution is
/// always considered safe.
#[derive(Debug)]
pub struct ModelDiff<'v> {
    versions: &'v [Version],
}

impl<'v> ModelDiff<'v> {
    pub fn new(versions: &'v [Version]) -> Self {
        ModelDiff { versions }
    }

    /// One report per adjacent pair, in ascending version order.
    pub fn reports(&self) -> Vec<Report> {
        self.versions
            .windows(2)
            .map(|pair| self.compare_pair(&pair[0], &pair[1]))
            .collect()
    }

    fn compare_pair(&self, old: &Version, new: &Version) -> Report {
        let mut problems = Vec::new();
        let new_entities = index_by_name(&new.entities, |entity| entity.name.as_str());

        for entity in &old.entities {
            match new_entities.get(entity.name.as_str()) {
                None => problems.push(Problem::new(ProblemKind::MissingEntity {
                    entity: entity.name.clone(),
                })),
                Some(counterpart) => self.compare_fields(entity, counterpart, &mut problems),
            }
        }

        Report::new(old.number, new.number, problems)
    }

    fn compare_fields(&self, old: &Entity, new: &Entity, problems: &mut Vec<Problem>) {
        let new_fields = index_by_name(&new.fields, |field| field.name());

        for field in &old.fields {
            match new_fields.get(field.name()) {
                None => problems.push(Problem::new(ProblemKind::MissingField {
                    entity: old.name.clone(),
                    field: field.name().to_string(),
                })),
                Some(counterpart) => {
                    self.compare_attributes(&old.name, field, counterpart, problems)
                }
            }
        }
    }

    fn compare_attributes(
        &self,
        entity: &str,
        old: &Field,
        new: &Field,
        problems: &mut Vec<Problem>,
    ) {
        // Only keys present on the old field are checked; keys introduced by
        // the new field are invisible here.
        for (key, old_value) in old.attributes() {
            let new_value = new.attribute(key);

            if new_value != Some(old_value.as_str()) {
                problems.push(Problem::new(ProblemKind::ChangedAttribute {
                    entity: entity.to_string(),
                    field: old.name().to_string(),
                    attribute: key.clone(),
                    old_value: old_value.clone(),
                    new_value: new_value.map(str::to_string),
                }));
            }
        }
    }
}

/// First occurrence wins, so duplicate names keep first-match semantics.
fn index_by_name<'i, T>(items: &'i [T], name_of: impl Fn(&T) -> &str) -> HashMap<&'i str, &'i T> {
    let mut index = HashMap::with_capacity(items.len());

    for item in items {
        index.entry(name_of(item)).or_insert(item);
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn field(name: &str, attributes: &[(&str, &str)]) -> Field {
        Field::new(
            name,
            attributes
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    fn user_version(number: u32) -> Version {
        Version::new(
            number,
            vec![Entity::new(
                "User".to_string(),
                vec![
                    field("name", &[("type", "string")]),
                    field("age", &[("type", "integer"), ("optional", "true")]),
                ],
            )],
        )
    }

    // ========== No-op and additive cases ==========

    #[test]
    fn identical_versions_produce_an_empty_report() {
        let versions = [user_version(1), user_version(2)];

        let reports = ModelDiff::new(&versions).reports();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].from_version, 1);
        assert_eq!(reports[0].to_version, 2);
        assert_eq!(reports[0].problems, vec![]);
    }

    #[test]
    fn added_entities_fields_and_attributes_are_silent() {
        let old = user_version(1);
        let mut new = user_version(2);
        new.entities.push(Entity::new(
            "Account".to_string(),
            vec![field("iban", &[("type", "string")])],
        ));
        new.entities[0]
            .fields
            .push(field("email", &[("type", "string")]));
        new.entities[0].fields[0] = field("name", &[("type", "string"), ("indexed", "true")]);

        let versions = [old, new];
        let reports = ModelDiff::new(&versions).reports();

        assert_eq!(reports[0].problems, vec![]);
    }

    // ========== Removal detection ==========

    #[test]
    fn removed_entity_is_reported_without_field_level_noise() {
        let old = user_version(1);
        let new = Version::new(2, vec![]);

        let versions = [old, new];
        let reports = ModelDiff::new(&versions).reports();

        assert_eq!(
            reports[0].problems,
            vec![Problem::new(ProblemKind::MissingEntity {
                entity: "User".to_string(),
            })]
        );
    }

    #[test]
    fn removed_field_is_reported_once() {
        let old = user_version(2);
        let mut new = user_version(3);
        new.entities[0].fields.retain(|f| f.name() != "age");

        let versions = [old, new];
        let reports = ModelDiff::new(&versions).reports();

        assert_eq!(
            reports[0].problems,
            vec![Problem::new(ProblemKind::MissingField {
                entity: "User".to_string(),
                field: "age".to_string(),
            })]
        );
    }

    #[test]
    fn changed_attribute_carries_both_values() {
        let old = user_version(2);
        let mut new = user_version(3);
        new.entities[0].fields[0] = field("name", &[("type", "text")]);

        let versions = [old, new];
        let reports = ModelDiff::new(&versions).reports();

        assert_eq!(
            reports[0].problems,
            vec![Problem::new(ProblemKind::ChangedAttribute {
                entity: "User".to_string(),
                field: "name".to_string(),
                attribute: "type".to_string(),
                old_value: "string".to_string(),
                new_value: Some("text".to_string()),
            })]
        );
    }

    #[test]
    fn removed_attribute_key_reports_a_missing_new_value() {
        let old = user_version(2);
        let mut new = user_version(3);
        new.entities[0].fields[1] = field("age", &[("type", "integer")]);

        let versions = [old, new];
        let reports = ModelDiff::new(&versions).reports();

        assert_eq!(
            reports[0].problems,
            vec![Problem::new(ProblemKind::ChangedAttribute {
                entity: "User".to_string(),
                field: "age".to_string(),
                attribute: "optional".to_string(),
                old_value: "true".to_string(),
                new_value: None,
            })]
        );
    }

    #[test]
    fn one_field_can_contribute_several_attribute_problems() {
        let old = user_version(1);
        let mut new = user_version(2);
        new.entities[0].fields[1] = field("age", &[("type", "string"), ("optional", "false")]);

        let versions = [old, new];
        let reports = ModelDiff::new(&versions).reports();

        let kinds: Vec<&str> = reports[0]
            .problems
            .iter()
            .map(|problem| match &problem.kind {
                ProblemKind::ChangedAttribute { attribute, .. } => attribute.as_str(),
                other => panic!("unexpected problem {:?}", other),
            })
            .collect();

        // BTreeMap key order on the old field.
        assert_eq!(kinds, vec!["optional", "type"]);
    }

    // ========== Chain shape ==========

    #[test]
    fn three_versions_yield_exactly_the_two_adjacent_reports() {
        let versions = [user_version(1), user_version(2), user_version(3)];

        let reports = ModelDiff::new(&versions).reports();

        let pairs: Vec<(u32, u32)> = reports
            .iter()
            .map(|report| (report.from_version, report.to_version))
            .collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn entity_removed_in_the_middle_only_shows_up_in_one_report() {
        let mut middle = user_version(2);
        middle.entities.clear();

        let versions = [user_version(1), middle, user_version(3)];
        let reports = ModelDiff::new(&versions).reports();

        assert_eq!(reports[0].problems.len(), 1);
        // The entity re-appearing in version 3 is an addition, so silent.
        assert_eq!(reports[1].problems, vec![]);
    }

    #[test]
    fn fewer_than_two_versions_produce_no_reports() {
        assert_eq!(ModelDiff::new(&[]).reports(), vec![]);
        assert_eq!(ModelDiff::new(&[user_version(1)]).reports(), vec![]);
    }

    #[test]
    fn duplicate_entity_names_resolve_to_the_first_occurrence() {
        let old = Version::new(
            1,
            vec![Entity::new(
                "User".to_string(),
                vec![field("name", &[("type", "string")])],
            )],
        );
        let new = Version::new(
            2,
            vec![
                Entity::new(
                    "User".to_string(),
                    vec![field("name", &[("type", "string")])],
                ),
                Entity::new("User".to_string(), vec![]),
            ],
        );

        let versions = [old, new];
        let reports = ModelDiff::new(&versions).reports();

        assert_eq!(reports[0].problems, vec![]);
    }
}
