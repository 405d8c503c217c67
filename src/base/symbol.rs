//! Symbolic names for foreign enum constants.
//!
//! Names are stored as `SmolStr`: the constant names of the native headers are
//! short enough to live inline, so cloning a symbol never allocates.

use smol_str::SmolStr;

/// A symbolic constant name - cheap to clone, `Send + Sync`.
pub type Symbol = SmolStr;

/// Create a symbol from any string-like value.
pub fn symbol(name: impl AsRef<str>) -> Symbol {
    SmolStr::new(name.as_ref())
}
