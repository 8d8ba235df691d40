use crate::areas::workspace::VersionSource;
use crate::artifacts::model::entity::Entity;
use crate::artifacts::model::field::Field;
use crate::artifacts::model::version::Version;
use anyhow::Context;
use regex::Regex;
use std::collections::BTreeMap;

/// `entity <Name>` at column zero opens an entity.
pub const ENTITY_LINE_REGEX: &str = r"^entity\s+([A-Za-z_][A-Za-z0-9_]*)\s*$";
/// An indented line declares a field: its name, then `key=value` pairs.
pub const FIELD_LINE_REGEX: &str =
    r"^\s+([A-Za-z_][A-Za-z0-9_]*)((?:\s+[A-Za-z_][A-Za-z0-9_]*=\S*)*)\s*$";

/// Parses model source files into in-memory `Version` snapshots.
///
/// The format is line oriented:
///
/// ```text
/// # people model, second revision
/// entity User
///   name type=string optional=false
///   age type=integer
/// ```
///
/// Blank lines and `#` comments are skipped. Duplicate entity or field names
/// are not rejected here; downstream lookups resolve them first-match.
#[derive(Debug)]
pub struct ModelLoader {
    entity_line: Regex,
    field_line: Regex,
}

impl ModelLoader {
    pub fn new() -> anyhow::Result<Self> {
        Ok(ModelLoader {
            entity_line: Regex::new(ENTITY_LINE_REGEX)?,
            field_line: Regex::new(FIELD_LINE_REGEX)?,
        })
    }

    pub fn load(&self, source: &VersionSource) -> anyhow::Result<Version> {
        let contents = std::fs::read_to_string(&source.path)
            .with_context(|| format!("Failed to read model file {}", source.path.display()))?;

        self.parse(source.number, &contents)
            .with_context(|| format!("Failed to parse model file {}", source.path.display()))
    }

    /// Loads the whole chain in ascending version order.
    pub fn load_chain(&self, sources: &[VersionSource]) -> anyhow::Result<Vec<Version>> {
        sources.iter().map(|source| self.load(source)).collect()
    }

    fn parse(&self, number: u32, contents: &str) -> anyhow::Result<Version> {
        let mut entities: Vec<Entity> = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some(captures) = self.entity_line.captures(line) {
                entities.push(Entity::new(captures[1].to_string(), Vec::new()));
            } else if let Some(captures) = self.field_line.captures(line) {
                let field = parse_field(&captures[1], &captures[2]);

                match entities.last_mut() {
                    Some(entity) => entity.fields.push(field),
                    None => anyhow::bail!(
                        "line {}: field '{}' declared before any entity",
                        line_number,
                        &captures[1]
                    ),
                }
            } else {
                anyhow::bail!("line {}: unrecognized model syntax: '{}'", line_number, line);
            }
        }

        Ok(Version::new(number, entities))
    }
}

fn parse_field(name: &str, attribute_tail: &str) -> Field {
    let attributes = attribute_tail
        .split_whitespace()
        .filter_map(|token| token.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<BTreeMap<_, _>>();

    Field::new(name, attributes)
}
