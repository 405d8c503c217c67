//! Foundation types for the DXC ABI layer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Symbol`] - Cheap-to-clone symbolic constant names
//! - [`AbiVersion`] - The native library release a constant table tracks
//!
//! This module has NO dependencies on other dxc-abi modules.

mod symbol;
mod version;

pub use symbol::{Symbol, symbol};
pub use version::AbiVersion;
