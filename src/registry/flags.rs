//! Bit sets for bitmask enums.
//!
//! A [`FlagSet`] is the raw integer that crosses the native boundary. It knows
//! nothing about which bits are declared; validation against a declared flag
//! table happens in the registry and in the typed flag wrappers.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

/// A set of flag bits.
///
/// Combination is bitwise OR, membership is bitwise AND.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct FlagSet(u32);

impl FlagSet {
    pub const EMPTY: Self = Self(0);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check that every bit of `other` is set in `self`.
    ///
    /// The empty set is contained in every set.
    pub const fn contains(self, other: FlagSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check that at least one bit of `other` is set in `self`.
    pub const fn intersects(self, other: FlagSet) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn union(self, other: FlagSet) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: FlagSet) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn difference(self, other: FlagSet) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn insert(&mut self, other: FlagSet) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: FlagSet) {
        self.0 &= !other.0;
    }

    /// Number of set bits.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the single-bit values set in `self`, lowest bit first.
    pub fn iter(self) -> FlagBits {
        FlagBits { remaining: self.0 }
    }
}

/// Iterator over the single-bit values of a [`FlagSet`].
#[derive(Debug, Clone)]
pub struct FlagBits {
    remaining: u32,
}

impl Iterator for FlagBits {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.remaining & self.remaining.wrapping_neg();
        self.remaining &= !bit;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FlagBits {}

impl IntoIterator for FlagSet {
    type Item = u32;
    type IntoIter = FlagBits;

    fn into_iter(self) -> FlagBits {
        self.iter()
    }
}

impl FromIterator<u32> for FlagSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |acc, bits| acc | bits))
    }
}

impl From<u32> for FlagSet {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<FlagSet> for u32 {
    fn from(set: FlagSet) -> Self {
        set.0
    }
}

impl BitOr for FlagSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for FlagSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl BitAnd for FlagSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for FlagSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Sub for FlagSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for FlagSet {
    fn sub_assign(&mut self, rhs: Self) {
        self.remove(rhs);
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlagSet({:#x})", self.0)
    }
}

impl fmt::LowerHex for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
