//! # dxc-abi
//!
//! Typed, versioned marshalling of DirectX Shader Compiler enum constants
//! across the native boundary.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON / YAML export and import of definitions (feature)
//!   ↓
//! typed       → Rust enums and flag types for each DXC enum
//!   ↓
//! tables      → Builtin DXC tables, process-wide registry
//!   ↓
//! registry    → EnumDefinition, FlagSet, resolve / encode / classify
//!   ↓
//! base        → Primitives (Symbol, AbiVersion)
//! ```
//!
//! ## Example
//!
//! ```
//! use dxc_abi::{SymbolicValue, tables};
//!
//! let registry = tables::builtin();
//! let severity = registry.resolve(tables::DIAGNOSTIC_SEVERITY, 3).unwrap();
//! assert_eq!(severity, SymbolicValue::constant("Error"));
//!
//! let bits = registry
//!     .encode_flags(tables::DIAGNOSTIC_DISPLAY_OPTIONS, ["DisplaySourceLocation", "DisplayColumn"])
//!     .unwrap();
//! assert_eq!(bits, 0x03);
//! ```

// ============================================================================
// MODULES (dependency order: base → registry → tables → typed → interchange)
// ============================================================================

/// Foundation types: Symbol, AbiVersion
pub mod base;

/// Foreign enum registry: definitions, flag sets, lookups
pub mod registry;

/// Builtin DXC constant tables
pub mod tables;

/// Strongly typed DXC enums
pub mod typed;

/// Definition interchange formats: JSON, YAML
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use base::{AbiVersion, Symbol};
pub use registry::{
    DefinitionError, EnumDefinition, EnumKind, FlagSet, RangeLabel, Registry, RegistryError,
    RegistryOptions, SymbolicValue,
};
pub use typed::{
    CursorCategory, CursorKind, CursorKindFlags, DiagnosticDisplayOptions, DiagnosticSeverity,
    GlobalOptions, TokenKind, TranslationUnitFlags,
};
