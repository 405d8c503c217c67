//! Symbolic values produced by resolution.

use std::fmt;

use crate::base::Symbol;

/// The in-process form of a raw native value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolicValue {
    /// A single constant of a plain enum (always the canonical name).
    Constant(Symbol),
    /// The declared flags of a bitmask enum, in declaration order.
    ///
    /// An empty list is the zero value.
    Flags(Vec<Symbol>),
}

impl SymbolicValue {
    pub fn constant(name: impl AsRef<str>) -> Self {
        Self::Constant(Symbol::new(name))
    }

    pub fn flags<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Flags(names.into_iter().map(Symbol::new).collect())
    }

    /// Get the constant name, if this is a plain value.
    pub fn as_constant(&self) -> Option<&str> {
        match self {
            Self::Constant(name) => Some(name),
            Self::Flags(_) => None,
        }
    }

    /// Get the flag names, if this is a bitmask value.
    pub fn as_flags(&self) -> Option<&[Symbol]> {
        match self {
            Self::Constant(_) => None,
            Self::Flags(names) => Some(names),
        }
    }

    /// Check whether a bitmask value names `flag`.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.as_flags()
            .is_some_and(|names| names.iter().any(|name| name == flag))
    }
}

impl fmt::Display for SymbolicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(name) => f.write_str(name),
            Self::Flags(names) if names.is_empty() => f.write_str("(empty)"),
            Self::Flags(names) => {
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    f.write_str(name)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for SymbolicValue {
    fn from(name: &str) -> Self {
        Self::constant(name)
    }
}

impl From<Symbol> for SymbolicValue {
    fn from(name: Symbol) -> Self {
        Self::Constant(name)
    }
}
