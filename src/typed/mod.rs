//! Strongly typed views of the DXC enums.
//!
//! Every type here is generated from one declaration that also yields the
//! `(name, value)` table the builtin registry is built from, so the Rust
//! types and the registry can never disagree on a value.
//!
//! - Plain enums are `#[repr(u32)]` Rust enums with `TryFrom<u32>`.
//! - Bitmask enums are [`bitflags`] types; `TryFrom<u32>` rejects undeclared
//!   bits with the same error the registry reports.

// ============================================================================
// Helper macros
// ============================================================================

/// Declare a plain foreign enum.
///
/// Usage:
/// ```ignore
/// foreign_enum! {
///     pub enum TokenKind => tables::TOKEN_KIND {
///         Punctuation = 0,
///         Keyword = 1,
///     }
/// }
/// ```
macro_rules! foreign_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident => $enum_name:path {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u32)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )*
        }

        impl $name {
            /// Name of the native enum this type mirrors.
            pub const ENUM_NAME: &'static str = $enum_name;

            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// `(name, value)` table the registry definition is built from.
            pub const TABLE: &'static [(&'static str, u32)] = &[$((stringify!($variant), $value)),*];

            /// The raw native value.
            pub const fn raw(self) -> u32 {
                self as u32
            }

            /// The canonical symbolic name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            /// Look up a variant by canonical or alias name.
            pub fn from_name(name: &str) -> Option<Self> {
                let canonical = $crate::tables::builtin()
                    .canonical(Self::ENUM_NAME, name)
                    .ok()?;
                Self::ALL.iter().copied().find(|variant| canonical == variant.name())
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::registry::RegistryError;

            fn try_from(raw: u32) -> Result<Self, $crate::registry::RegistryError> {
                match raw {
                    $($value => Ok(Self::$variant),)*
                    _ => Err($crate::registry::RegistryError::unrecognized_value(Self::ENUM_NAME, raw)),
                }
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.raw()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Declare a bitmask foreign enum.
///
/// Expands to a [`bitflags`] type plus a table pairing each flag constant
/// with its native name, which the registry definition is built from.
///
/// Usage:
/// ```ignore
/// foreign_flags! {
///     pub struct CursorKindFlags => tables::CURSOR_KIND_FLAGS {
///         const NONE = "None" => 0x0;
///         const DECLARATION = "Declaration" => 0x1;
///     }
/// }
/// ```
macro_rules! foreign_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $enum_name:path {
            $(
                $(#[$($fmeta:tt)*])*
                const $konst:ident = $sym:literal => $value:literal;
            )*
        }
    ) => {
        bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name: u32 {
                $(
                    $(#[$($fmeta)*])*
                    const $konst = $value;
                )*
            }
        }

        impl $name {
            /// Name of the native enum this type mirrors.
            pub const ENUM_NAME: &'static str = $enum_name;

            /// `(name, value)` table the registry definition is built from,
            /// in the order of the flag constants.
            pub const TABLE: &'static [(&'static str, u32)] = &[$(($sym, Self::$konst.bits())),*];

            /// Validate raw bits from the native side.
            pub fn from_raw(bits: u32) -> Result<Self, $crate::registry::RegistryError> {
                Self::from_bits(bits).ok_or_else(|| {
                    $crate::registry::RegistryError::unknown_flag_bits(
                        Self::ENUM_NAME,
                        bits,
                        bits & !Self::all().bits(),
                    )
                })
            }

            /// Native names of the flags set in `self`, in declaration order.
            pub fn names(self) -> impl Iterator<Item = &'static str> {
                Self::TABLE
                    .iter()
                    .filter(move |(_, bits)| *bits != 0 && self.contains(Self::from_bits_retain(*bits)))
                    .map(|(name, _)| *name)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::empty()
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::registry::RegistryError;

            fn try_from(bits: u32) -> Result<Self, $crate::registry::RegistryError> {
                Self::from_raw(bits)
            }
        }

        impl From<$name> for u32 {
            fn from(flags: $name) -> u32 {
                flags.bits()
            }
        }
    };
}

mod cursor;
mod diagnostics;
mod token;
mod translation_unit;

pub use cursor::{CursorCategory, CursorKind, CursorKindFlags};
pub use diagnostics::{DiagnosticDisplayOptions, DiagnosticSeverity};
pub use token::TokenKind;
pub use translation_unit::{GlobalOptions, TranslationUnitFlags};
