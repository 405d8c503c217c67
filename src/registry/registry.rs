//! The foreign enum registry.
//!
//! A [`Registry`] owns a set of [`EnumDefinition`]s keyed by enum name and
//! answers three questions about raw native values:
//!
//! 1. **resolve** - which symbolic value does a raw integer denote?
//! 2. **encode** - which raw integer does a symbolic value denote?
//! 3. **classify** - which declared sub-range does a raw integer fall in?
//!
//! The registry is immutable after [`RegistryBuilder::build`], so shared
//! references can be used from any number of threads without locking.
//!
//! # Aliases
//!
//! Resolution always yields the canonical (first declared) name for a value.
//! `encode(resolve(x)) == x` holds for every valid `x`, but
//! `resolve(encode(alias))` returns the canonical name, not the alias.

use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use super::definition::{EnumDefinition, RangeLabel};
use super::error::{DefinitionError, RegistryError, Result};
use super::flags::FlagSet;
use super::options::RegistryOptions;
use super::value::SymbolicValue;
use crate::base::Symbol;

/// Read-only lookup tables for a set of foreign enums.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: IndexMap<Symbol, EnumDefinition>,
    options: RegistryOptions,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Number of registered enum types.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Registered enum names in registration order.
    pub fn enum_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.definitions.keys().map(|name| name.as_str())
    }

    pub fn definitions(&self) -> impl Iterator<Item = &EnumDefinition> + '_ {
        self.definitions.values()
    }

    /// Look up the definition of an enum type.
    pub fn definition(&self, enum_name: &str) -> Result<&EnumDefinition> {
        self.definitions
            .get(enum_name)
            .ok_or_else(|| RegistryError::UnknownEnum(Symbol::new(enum_name)))
    }

    /// Translate a raw native value into its symbolic form.
    ///
    /// Plain enums yield [`SymbolicValue::Constant`] with the canonical name;
    /// an undeclared value fails with [`RegistryError::UnrecognizedValue`].
    ///
    /// Bitmask enums yield [`SymbolicValue::Flags`] listing every declared
    /// flag set in `raw`; bits no flag covers fail with
    /// [`RegistryError::UnknownFlagBits`]. Zero yields an empty list.
    pub fn resolve(&self, enum_name: &str, raw: u32) -> Result<SymbolicValue> {
        let def = self.definition(enum_name)?;
        trace!("resolve {}({:#x})", enum_name, raw);

        if def.is_bitmask() {
            return self.decompose(def, raw);
        }

        match def.name_of(raw) {
            Some(name) => Ok(SymbolicValue::Constant(name.clone())),
            None => Err(self.drift(RegistryError::unrecognized_value(def.symbol(), raw))),
        }
    }

    fn decompose(&self, def: &EnumDefinition, raw: u32) -> Result<SymbolicValue> {
        let set = FlagSet::new(raw);
        let residual = set.difference(FlagSet::new(def.allowed_mask()));
        if !residual.is_empty() {
            return Err(self.drift(RegistryError::unknown_flag_bits(
                def.symbol(),
                raw,
                residual.bits(),
            )));
        }

        // Declared flags are distinct single bits, so this is the only
        // decomposition and therefore the minimal one.
        let members = def
            .flags()
            .filter(|(_, bits)| set.contains(FlagSet::new(*bits)))
            .map(|(name, _)| name.clone())
            .collect();
        Ok(SymbolicValue::Flags(members))
    }

    /// Translate a symbolic value into the raw native value.
    ///
    /// Constants, aliases and (for bitmask enums) composites are accepted as
    /// [`SymbolicValue::Constant`]. [`SymbolicValue::Flags`] is OR-combined
    /// and only valid for bitmask enums.
    pub fn encode(&self, enum_name: &str, value: &SymbolicValue) -> Result<u32> {
        let def = self.definition(enum_name)?;
        trace!("encode {}({})", enum_name, value);

        match value {
            SymbolicValue::Constant(name) => Self::lookup(def, name),
            SymbolicValue::Flags(names) => {
                if !def.is_bitmask() {
                    return Err(RegistryError::NotBitmask(def.symbol().clone()));
                }
                names
                    .iter()
                    .map(|name| Self::lookup(def, name))
                    .collect::<Result<FlagSet>>()
                    .map(FlagSet::bits)
            }
        }
    }

    fn lookup(def: &EnumDefinition, name: &str) -> Result<u32> {
        def.value_of(name)
            .ok_or_else(|| RegistryError::unknown_symbol(def.symbol(), name))
    }

    /// Encode a single constant, alias or composite name.
    pub fn encode_symbol(&self, enum_name: &str, name: &str) -> Result<u32> {
        self.encode(enum_name, &SymbolicValue::constant(name))
    }

    /// OR-combine a set of flag names of a bitmask enum.
    pub fn encode_flags<I, S>(&self, enum_name: &str, names: I) -> Result<u32>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.encode(enum_name, &SymbolicValue::flags(names))
    }

    /// Find the declared sub-range a raw value falls in.
    ///
    /// Values below the first range, above the last, or in a gap between two
    /// ranges fail with [`RegistryError::OutOfRange`]; a gap is never
    /// attributed to a neighbouring range.
    pub fn classify(&self, enum_name: &str, raw: u32) -> Result<&RangeLabel> {
        let def = self.definition(enum_name)?;
        if def.ranges().is_empty() {
            return Err(RegistryError::NoRanges(def.symbol().clone()));
        }
        trace!("classify {}({})", enum_name, raw);

        def.range_for(raw)
            .ok_or_else(|| RegistryError::out_of_range(def.symbol(), raw))
    }

    /// Normalise a constant, alias or composite name to its canonical symbol.
    pub fn canonical(&self, enum_name: &str, name: &str) -> Result<Symbol> {
        let def = self.definition(enum_name)?;
        def.canonical(name)
            .cloned()
            .ok_or_else(|| RegistryError::unknown_symbol(def.symbol(), name))
    }

    /// The bits a raw value of a bitmask enum may carry.
    pub fn allowed_mask(&self, enum_name: &str) -> Result<u32> {
        let def = self.definition(enum_name)?;
        if !def.is_bitmask() {
            return Err(RegistryError::NotBitmask(def.symbol().clone()));
        }
        Ok(def.allowed_mask())
    }

    /// Render a raw value for logs and messages.
    ///
    /// An empty flag set renders as the zero constant's name when the enum
    /// declares one, otherwise as `0`.
    pub fn describe(&self, enum_name: &str, raw: u32) -> Result<String> {
        let value = self.resolve(enum_name, raw)?;
        match &value {
            SymbolicValue::Flags(names) if names.is_empty() => {
                let def = self.definition(enum_name)?;
                Ok(def
                    .zero_name()
                    .map_or_else(|| "0".to_string(), |name| name.to_string()))
            }
            _ => Ok(value.to_string()),
        }
    }

    fn drift(&self, err: RegistryError) -> RegistryError {
        if self.options.warn_on_drift {
            warn!("{}; native library may be newer than its table", err);
        }
        err
    }
}

/// One-time construction of a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    definitions: IndexMap<Symbol, EnumDefinition>,
    options: RegistryOptions,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: RegistryOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a definition. Each enum name may be registered once.
    pub fn register(mut self, definition: EnumDefinition) -> Result<Self, DefinitionError> {
        let name = definition.symbol().clone();
        if self.definitions.contains_key(&name) {
            return Err(DefinitionError::DuplicateEnum(name));
        }
        debug!(
            "Registered {} enum {} (ABI {}, {} constants)",
            definition.kind().as_str(),
            name,
            definition.abi(),
            definition.len()
        );
        self.definitions.insert(name, definition);
        Ok(self)
    }

    pub fn build(self) -> Registry {
        debug!("Built enum registry with {} enum types", self.definitions.len());
        Registry {
            definitions: self.definitions,
            options: self.options,
        }
    }
}
