//! Foreign enum registry
//!
//! This module translates raw integers crossing the native boundary into
//! validated symbolic values and back:
//! - [`EnumDefinition`] - Ordered constant table with aliases, composites and ranges
//! - [`FlagSet`] - Raw bit set for bitmask enums
//! - [`SymbolicValue`] - In-process form of a raw value
//! - [`Registry`] - `resolve` / `encode` / `classify` over registered definitions
//! - [`RegistryError`], [`DefinitionError`] - Lookup and construction errors

mod definition;
mod error;
mod flags;
mod options;
#[allow(clippy::module_inception)]
mod registry;
mod value;

pub use definition::{EnumDefinition, EnumDefinitionBuilder, EnumKind, RangeLabel};
pub use error::{DefinitionError, RegistryError, Result};
pub use flags::{FlagBits, FlagSet};
pub use options::RegistryOptions;
pub use registry::{Registry, RegistryBuilder};
pub use value::SymbolicValue;
