//! Serializable form of an [`EnumDefinition`].
//!
//! Documents mirror the builder inputs rather than the validated tables, so
//! an imported document goes through the same checks as a hand-written
//! table. Constants are kept as a list, not a map, so duplicate names in a
//! file surface as [`DefinitionError::DuplicateName`] instead of being
//! silently merged by the deserializer.

use serde::{Deserialize, Serialize};

use crate::base::AbiVersion;
use crate::registry::{DefinitionError, EnumDefinition, EnumDefinitionBuilder, EnumKind, RangeLabel};

/// A `(name, value)` entry of a constant or composite table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub value: u32,
}

/// An `alias -> target` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasDoc {
    pub alias: String,
    pub target: String,
}

/// A classification range with its boundary markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDoc {
    pub label: String,
    pub first_marker: String,
    pub first: u32,
    pub last_marker: String,
    pub last: u32,
}

/// One enum table as stored in a JSON or YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionDoc {
    pub name: String,
    pub kind: EnumKind,
    pub abi: AbiVersion,
    pub constants: Vec<NamedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<AliasDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub composites: Vec<NamedValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<RangeDoc>,
}

impl DefinitionDoc {
    /// Validate the document and build the definition it describes.
    pub fn into_definition(self) -> Result<EnumDefinition, DefinitionError> {
        let builder = EnumDefinitionBuilder::new(&self.name, self.kind, self.abi);
        let builder = self
            .constants
            .iter()
            .fold(builder, |b, entry| b.constant(&entry.name, entry.value));
        let builder = self
            .aliases
            .iter()
            .fold(builder, |b, entry| b.alias(&entry.alias, &entry.target));
        let builder = self
            .composites
            .iter()
            .fold(builder, |b, entry| b.composite(&entry.name, entry.value));
        self.ranges
            .into_iter()
            .fold(builder, |b, range| {
                b.range(RangeLabel::new(
                    range.label,
                    range.first_marker,
                    range.first,
                    range.last_marker,
                    range.last,
                ))
            })
            .build()
    }
}

impl From<&EnumDefinition> for DefinitionDoc {
    fn from(def: &EnumDefinition) -> Self {
        let named = |(name, value): (&crate::base::Symbol, u32)| NamedValue {
            name: name.to_string(),
            value,
        };
        Self {
            name: def.name().to_string(),
            kind: def.kind(),
            abi: def.abi(),
            constants: def.constants().map(named).collect(),
            aliases: def
                .aliases()
                .map(|(alias, target)| AliasDoc {
                    alias: alias.to_string(),
                    target: target.to_string(),
                })
                .collect(),
            composites: def.composites().map(named).collect(),
            ranges: def
                .ranges()
                .iter()
                .map(|range| RangeDoc {
                    label: range.label().to_string(),
                    first_marker: range.first_marker().to_string(),
                    first: range.first(),
                    last_marker: range.last_marker().to_string(),
                    last: range.last(),
                })
                .collect(),
        }
    }
}
