//! Foreign enum definitions.
//!
//! An [`EnumDefinition`] is the validated, read-only table for one native enum:
//! - an ordered list of `(name, value)` constants
//! - an alias table (extra names for declared constants)
//! - for bitmask enums, named composites (ORs of declared flags)
//! - for plain enums, an ordered range-boundary table used for classification
//!
//! Definitions are built once through [`EnumDefinitionBuilder`], which checks
//! every table invariant, and never change afterwards.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

use super::error::DefinitionError;
use crate::base::{AbiVersion, Symbol};

/// Whether an enum holds single values or combinable flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum EnumKind {
    /// One constant per value.
    Plain,
    /// Values are ORs of single-bit flags.
    Bitmask,
}

impl EnumKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bitmask => "bitmask",
        }
    }
}

/// A contiguous, inclusive sub-range of a plain enum bounded by two markers.
///
/// Markers such as `FirstExpr`/`LastExpr` are not constants: they only bound
/// the range and never come back from resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeLabel {
    label: Symbol,
    first_marker: Symbol,
    first: u32,
    last_marker: Symbol,
    last: u32,
}

impl RangeLabel {
    pub fn new(
        label: impl AsRef<str>,
        first_marker: impl AsRef<str>,
        first: u32,
        last_marker: impl AsRef<str>,
        last: u32,
    ) -> Self {
        Self {
            label: Symbol::new(label),
            first_marker: Symbol::new(first_marker),
            first,
            last_marker: Symbol::new(last_marker),
            last,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn first_marker(&self) -> &str {
        &self.first_marker
    }

    pub fn last_marker(&self) -> &str {
        &self.last_marker
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }

    /// Check if `value` lies within the inclusive bounds.
    pub fn contains(&self, value: u32) -> bool {
        (self.first..=self.last).contains(&value)
    }
}

/// The validated table of one foreign enum.
#[derive(Debug, Clone)]
pub struct EnumDefinition {
    name: Symbol,
    kind: EnumKind,
    abi: AbiVersion,
    /// Declared constants in declaration order
    constants: IndexMap<Symbol, u32>,
    /// Alias name -> canonical constant name
    aliases: IndexMap<Symbol, Symbol>,
    composites: IndexMap<Symbol, u32>,
    /// Sorted by `first`, non-overlapping
    ranges: Vec<RangeLabel>,
    /// Value -> canonical constant name
    by_value: FxHashMap<u32, Symbol>,
    mask: u32,
}

impl EnumDefinition {
    /// Start a plain enum definition.
    pub fn plain(name: impl AsRef<str>, abi: AbiVersion) -> EnumDefinitionBuilder {
        EnumDefinitionBuilder::new(name, EnumKind::Plain, abi)
    }

    /// Start a bitmask enum definition.
    pub fn bitmask(name: impl AsRef<str>, abi: AbiVersion) -> EnumDefinitionBuilder {
        EnumDefinitionBuilder::new(name, EnumKind::Bitmask, abi)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn symbol(&self) -> &Symbol {
        &self.name
    }

    pub fn kind(&self) -> EnumKind {
        self.kind
    }

    pub fn is_bitmask(&self) -> bool {
        self.kind == EnumKind::Bitmask
    }

    /// The native ABI version this table was transcribed from.
    pub fn abi(&self) -> AbiVersion {
        self.abi
    }

    /// Number of declared constants (aliases, composites and markers excluded).
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Declared constants in declaration order.
    pub fn constants(&self) -> impl Iterator<Item = (&Symbol, u32)> + '_ {
        self.constants.iter().map(|(name, value)| (name, *value))
    }

    /// Declared aliases as `(alias, canonical)` pairs.
    pub fn aliases(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> + '_ {
        self.aliases.iter()
    }

    pub fn composites(&self) -> impl Iterator<Item = (&Symbol, u32)> + '_ {
        self.composites.iter().map(|(name, value)| (name, *value))
    }

    /// Declared ranges, ordered by their first boundary.
    pub fn ranges(&self) -> &[RangeLabel] {
        &self.ranges
    }

    /// Non-zero flags of a bitmask enum in declaration order.
    pub fn flags(&self) -> impl Iterator<Item = (&Symbol, u32)> + '_ {
        self.constants().filter(|(_, value)| *value != 0)
    }

    /// OR of every declared value. For bitmask enums this is the set of
    /// bits a raw value may carry.
    pub fn allowed_mask(&self) -> u32 {
        self.mask
    }

    /// Look up the value of a constant, alias or composite.
    pub fn value_of(&self, name: &str) -> Option<u32> {
        if let Some(value) = self.constants.get(name) {
            return Some(*value);
        }
        if let Some(target) = self.aliases.get(name) {
            return self.constants.get(target).copied();
        }
        self.composites.get(name).copied()
    }

    /// Canonical constant name for a raw value.
    pub fn name_of(&self, value: u32) -> Option<&Symbol> {
        self.by_value.get(&value)
    }

    /// Normalise a constant, alias or composite name to its canonical symbol.
    pub fn canonical(&self, name: &str) -> Option<&Symbol> {
        if let Some((symbol, _)) = self.constants.get_key_value(name) {
            return Some(symbol);
        }
        if let Some(target) = self.aliases.get(name) {
            return Some(target);
        }
        self.composites.get_key_value(name).map(|(symbol, _)| symbol)
    }

    /// Check whether `name` is declared as an alias.
    pub fn is_alias(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    /// Value of a first/last range marker (e.g. `FirstExpr`).
    pub fn range_marker(&self, marker: &str) -> Option<u32> {
        self.ranges.iter().find_map(|range| {
            if range.first_marker == marker {
                Some(range.first)
            } else if range.last_marker == marker {
                Some(range.last)
            } else {
                None
            }
        })
    }

    /// The range containing `value`, if any.
    pub fn range_for(&self, value: u32) -> Option<&RangeLabel> {
        let idx = self.ranges.partition_point(|range| range.last < value);
        self.ranges.get(idx).filter(|range| range.contains(value))
    }

    /// Name of the zero constant (`None` in most native flag enums).
    pub fn zero_name(&self) -> Option<&Symbol> {
        self.by_value.get(&0)
    }
}

/// Builder for [`EnumDefinition`].
///
/// Entries are collected as declared; all invariants are checked in
/// [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct EnumDefinitionBuilder {
    name: Symbol,
    kind: EnumKind,
    abi: AbiVersion,
    constants: Vec<(Symbol, u32)>,
    aliases: Vec<(Symbol, Symbol)>,
    composites: Vec<(Symbol, u32)>,
    ranges: Vec<RangeLabel>,
}

impl EnumDefinitionBuilder {
    pub fn new(name: impl AsRef<str>, kind: EnumKind, abi: AbiVersion) -> Self {
        Self {
            name: Symbol::new(name),
            kind,
            abi,
            constants: Vec::new(),
            aliases: Vec::new(),
            composites: Vec::new(),
            ranges: Vec::new(),
        }
    }

    /// Declare a constant (or a flag, for bitmask enums).
    pub fn constant(mut self, name: impl AsRef<str>, value: u32) -> Self {
        self.constants.push((Symbol::new(name), value));
        self
    }

    /// Declare constants from a `(name, value)` table.
    pub fn constants<'a, N>(mut self, table: impl IntoIterator<Item = &'a (N, u32)>) -> Self
    where
        N: AsRef<str> + 'a,
    {
        self.constants
            .extend(table.into_iter().map(|(name, value)| (Symbol::new(name), *value)));
        self
    }

    /// Declare `alias` as another name for the constant `target`.
    pub fn alias(mut self, alias: impl AsRef<str>, target: impl AsRef<str>) -> Self {
        self.aliases.push((Symbol::new(alias), Symbol::new(target)));
        self
    }

    /// Declare a named combination of flags.
    pub fn composite(mut self, name: impl AsRef<str>, value: u32) -> Self {
        self.composites.push((Symbol::new(name), value));
        self
    }

    /// Declare a classification range.
    pub fn range(mut self, range: RangeLabel) -> Self {
        self.ranges.push(range);
        self
    }

    /// Validate the collected entries and produce the definition.
    pub fn build(self) -> Result<EnumDefinition, DefinitionError> {
        let enum_name = self.name;
        let bitmask = self.kind == EnumKind::Bitmask;
        let mut names: FxHashSet<Symbol> = FxHashSet::default();
        let mut claim = |name: &Symbol| {
            if names.insert(name.clone()) {
                Ok(())
            } else {
                Err(DefinitionError::DuplicateName {
                    enum_name: enum_name.clone(),
                    name: name.clone(),
                })
            }
        };

        let mut constants = IndexMap::with_capacity(self.constants.len());
        let mut by_value = FxHashMap::default();
        let mut mask = 0u32;
        for (name, value) in self.constants {
            claim(&name)?;
            if bitmask && value != 0 && !value.is_power_of_two() {
                return Err(DefinitionError::NotPowerOfTwo {
                    enum_name: enum_name.clone(),
                    name,
                    value,
                });
            }
            if let Some(existing) = by_value.get(&value) {
                return Err(DefinitionError::DuplicateValue {
                    enum_name: enum_name.clone(),
                    name,
                    existing: Symbol::clone(existing),
                    value,
                });
            }
            by_value.insert(value, name.clone());
            constants.insert(name, value);
            mask |= value;
        }

        let mut aliases = IndexMap::with_capacity(self.aliases.len());
        for (alias, target) in self.aliases {
            claim(&alias)?;
            if !constants.contains_key(&target) {
                return Err(DefinitionError::UnknownAliasTarget {
                    enum_name: enum_name.clone(),
                    alias,
                    target,
                });
            }
            aliases.insert(alias, target);
        }

        let mut composites = IndexMap::with_capacity(self.composites.len());
        for (name, value) in self.composites {
            if !bitmask {
                return Err(DefinitionError::CompositeOnPlainEnum {
                    enum_name: enum_name.clone(),
                    name,
                });
            }
            claim(&name)?;
            let residual = value & !mask;
            if residual != 0 {
                return Err(DefinitionError::CompositeHasUndeclaredBits {
                    enum_name: enum_name.clone(),
                    name,
                    residual,
                });
            }
            composites.insert(name, value);
        }

        let mut labels: FxHashSet<Symbol> = FxHashSet::default();
        let mut ranges = self.ranges;
        for range in &ranges {
            if bitmask {
                return Err(DefinitionError::RangeOnBitmask {
                    enum_name: enum_name.clone(),
                    label: range.label.clone(),
                });
            }
            if !labels.insert(range.label.clone()) {
                return Err(DefinitionError::DuplicateName {
                    enum_name: enum_name.clone(),
                    name: range.label.clone(),
                });
            }
            claim(&range.first_marker)?;
            claim(&range.last_marker)?;
            if range.first > range.last {
                return Err(DefinitionError::InvertedRange {
                    enum_name: enum_name.clone(),
                    label: range.label.clone(),
                    first: range.first,
                    last: range.last,
                });
            }
        }
        ranges.sort_by_key(|range| range.first);
        for pair in ranges.windows(2) {
            if pair[1].first <= pair[0].last {
                return Err(DefinitionError::OverlappingRange {
                    enum_name: enum_name.clone(),
                    label: pair[1].label.clone(),
                    other: pair[0].label.clone(),
                });
            }
        }

        tracing::trace!(
            "Built {} enum {} ({} constants, {} aliases, {} ranges)",
            self.kind.as_str(),
            enum_name,
            constants.len(),
            aliases.len(),
            ranges.len()
        );

        Ok(EnumDefinition {
            name: enum_name,
            kind: self.kind,
            abi: self.abi,
            constants,
            aliases,
            composites,
            ranges,
            by_value,
            mask,
        })
    }
}
