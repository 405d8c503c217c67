//! Error types for registry lookups and definition construction.

use thiserror::Error;

use crate::base::Symbol;

/// Result alias for registry lookups.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Errors returned by registry lookups.
///
/// None of these are fatal to the registry itself. An unrecognized native
/// value usually means the native library is newer than the table; callers
/// decide whether that is an error for them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A plain enum received a raw value with no declared constant.
    #[error("unrecognized value {value} ({value:#x}) for {enum_name}")]
    UnrecognizedValue { enum_name: Symbol, value: u32 },

    /// A bitmask enum received bits that no declared flag covers.
    #[error("unknown flag bits {residual:#x} in {value:#x} for {enum_name}")]
    UnknownFlagBits {
        enum_name: Symbol,
        value: u32,
        residual: u32,
    },

    /// A symbolic name is not registered for the enum.
    #[error("unknown symbol `{symbol}` for {enum_name}")]
    UnknownSymbol { enum_name: Symbol, symbol: Symbol },

    /// A raw value falls outside every declared sub-range.
    #[error("value {value} is outside every declared range of {enum_name}")]
    OutOfRange { enum_name: Symbol, value: u32 },

    /// The enum type itself is not registered.
    #[error("unknown enum type `{0}`")]
    UnknownEnum(Symbol),

    /// A flag operation was requested on a plain enum.
    #[error("{0} is not a bitmask enum")]
    NotBitmask(Symbol),

    /// A classification was requested on an enum without range markers.
    #[error("{0} declares no range markers")]
    NoRanges(Symbol),
}

impl RegistryError {
    pub fn unrecognized_value(enum_name: impl AsRef<str>, value: u32) -> Self {
        Self::UnrecognizedValue {
            enum_name: Symbol::new(enum_name),
            value,
        }
    }

    pub fn unknown_flag_bits(enum_name: impl AsRef<str>, value: u32, residual: u32) -> Self {
        Self::UnknownFlagBits {
            enum_name: Symbol::new(enum_name),
            value,
            residual,
        }
    }

    pub fn unknown_symbol(enum_name: impl AsRef<str>, symbol: impl AsRef<str>) -> Self {
        Self::UnknownSymbol {
            enum_name: Symbol::new(enum_name),
            symbol: Symbol::new(symbol),
        }
    }

    pub fn out_of_range(enum_name: impl AsRef<str>, value: u32) -> Self {
        Self::OutOfRange {
            enum_name: Symbol::new(enum_name),
            value,
        }
    }

    /// Check if this error was caused by a raw value coming from the native side.
    ///
    /// These are the errors that signal protocol drift between the table and
    /// the native library. [`OutOfRange`](Self::OutOfRange) is not one of
    /// them: declared constants may legitimately sit between ranges.
    pub fn is_drift(&self) -> bool {
        matches!(self, Self::UnrecognizedValue { .. } | Self::UnknownFlagBits { .. })
    }
}

/// Errors raised while building an [`EnumDefinition`](super::EnumDefinition)
/// or a [`Registry`](super::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The same name was declared twice in one enum.
    #[error("{enum_name}: `{name}` is declared more than once")]
    DuplicateName { enum_name: Symbol, name: Symbol },

    /// Two constants share a value without an alias declaration.
    #[error("{enum_name}: `{name}` reuses value {value:#x} of `{existing}`; declare it as an alias")]
    DuplicateValue {
        enum_name: Symbol,
        name: Symbol,
        existing: Symbol,
        value: u32,
    },

    /// An alias points at a name that is not a declared constant.
    #[error("{enum_name}: alias `{alias}` targets undeclared constant `{target}`")]
    UnknownAliasTarget {
        enum_name: Symbol,
        alias: Symbol,
        target: Symbol,
    },

    /// A bitmask flag is neither zero nor a single bit.
    #[error("{enum_name}: flag `{name}` has value {value:#x}, which is not a power of two")]
    NotPowerOfTwo {
        enum_name: Symbol,
        name: Symbol,
        value: u32,
    },

    /// A composite uses bits that no declared flag covers.
    #[error("{enum_name}: composite `{name}` uses undeclared bits {residual:#x}")]
    CompositeHasUndeclaredBits {
        enum_name: Symbol,
        name: Symbol,
        residual: u32,
    },

    /// Composites only make sense on bitmask enums.
    #[error("{enum_name}: composite `{name}` declared on a plain enum")]
    CompositeOnPlainEnum { enum_name: Symbol, name: Symbol },

    /// Range markers only make sense on plain enums.
    #[error("{enum_name}: range `{label}` declared on a bitmask enum")]
    RangeOnBitmask { enum_name: Symbol, label: Symbol },

    /// A range's first boundary lies after its last.
    #[error("{enum_name}: range `{label}` has first {first} after last {last}")]
    InvertedRange {
        enum_name: Symbol,
        label: Symbol,
        first: u32,
        last: u32,
    },

    /// Two ranges of one enum share values.
    #[error("{enum_name}: range `{label}` overlaps range `{other}`")]
    OverlappingRange {
        enum_name: Symbol,
        label: Symbol,
        other: Symbol,
    },

    /// The same enum type was registered twice.
    #[error("enum type `{0}` is registered more than once")]
    DuplicateEnum(Symbol),
}

impl DefinitionError {
    /// The enum the error was raised for.
    pub fn enum_name(&self) -> &str {
        match self {
            Self::DuplicateName { enum_name, .. }
            | Self::DuplicateValue { enum_name, .. }
            | Self::UnknownAliasTarget { enum_name, .. }
            | Self::NotPowerOfTwo { enum_name, .. }
            | Self::CompositeHasUndeclaredBits { enum_name, .. }
            | Self::CompositeOnPlainEnum { enum_name, .. }
            | Self::RangeOnBitmask { enum_name, .. }
            | Self::InvertedRange { enum_name, .. }
            | Self::OverlappingRange { enum_name, .. } => enum_name,
            Self::DuplicateEnum(enum_name) => enum_name,
        }
    }
}
