//! Native ABI versions.

use std::fmt;

/// The release of the native library a constant table was transcribed from.
///
/// Tables only ever grow between releases, so a value that fails to resolve
/// usually means the native side is newer than the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct AbiVersion {
    pub major: u16,
    pub minor: u16,
}

impl AbiVersion {
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Check whether a table built for `self` covers the constants of `other`.
    pub fn covers(self, other: AbiVersion) -> bool {
        self >= other
    }
}

impl fmt::Display for AbiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
