use colored::Colorize;

/// One detected regression between two adjacent model versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemKind {
    /// The entity exists in the old version but not in the new one.
    MissingEntity { entity: String },
    /// The entity exists in both versions, but the field only in the old one.
    MissingField { entity: String, field: String },
    /// The field exists in both versions with a diverging attribute value.
    /// `new_value` is `None` when the key vanished on the new side.
    ChangedAttribute {
        entity: String,
        field: String,
        attribute: String,
        old_value: String,
        new_value: Option<String>,
    },
}

impl std::fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemKind::MissingEntity { entity } => {
                write!(f, "entity {} is missing", entity)
            }
            ProblemKind::MissingField { entity, field } => {
                write!(f, "field {}.{} is missing", entity, field)
            }
            ProblemKind::ChangedAttribute {
                entity,
                field,
                attribute,
                old_value,
                new_value: Some(new_value),
            } => write!(
                f,
                "attribute {} of {}.{} changed from '{}' to '{}'",
                attribute, entity, field, old_value, new_value
            ),
            ProblemKind::ChangedAttribute {
                entity,
                field,
                attribute,
                old_value,
                new_value: None,
            } => write!(
                f,
                "attribute {} of {}.{} (was '{}') is missing",
                attribute, entity, field, old_value
            ),
        }
    }
}

/// A `ProblemKind` enriched with its durable identity and review state.
///
/// Created by the diff engine, then written exactly once each by the
/// fingerprint pass and the suppression pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub kind: ProblemKind,
    pub fingerprint: String,
    pub resolved: bool,
}

impl Problem {
    pub fn new(kind: ProblemKind) -> Self {
        Problem {
            kind,
            fingerprint: String::new(),
            resolved: false,
        }
    }

    /// One console line: status glyph, message, fingerprint key.
    pub fn render(&self) -> String {
        let glyph = if self.resolved {
            "ok".green()
        } else {
            "!!".red()
        };

        format!("  {} {} ({})", glyph, self.kind, self.fingerprint.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_entity_message() {
        let kind = ProblemKind::MissingEntity {
            entity: "User".to_string(),
        };

        assert_eq!(kind.to_string(), "entity User is missing");
    }

    #[test]
    fn changed_attribute_message_mentions_both_values() {
        let kind = ProblemKind::ChangedAttribute {
            entity: "User".to_string(),
            field: "name".to_string(),
            attribute: "type".to_string(),
            old_value: "string".to_string(),
            new_value: Some("text".to_string()),
        };

        assert_eq!(
            kind.to_string(),
            "attribute type of User.name changed from 'string' to 'text'"
        );
    }

    #[test]
    fn removed_attribute_message_keeps_the_old_value() {
        let kind = ProblemKind::ChangedAttribute {
            entity: "User".to_string(),
            field: "name".to_string(),
            attribute: "indexed".to_string(),
            old_value: "true".to_string(),
            new_value: None,
        };

        assert_eq!(
            kind.to_string(),
            "attribute indexed of User.name (was 'true') is missing"
        );
    }
}
