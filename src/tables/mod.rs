//! The DXC constant tables.
//!
//! Every table is transcribed from the DirectX Shader Compiler IntelliSense
//! headers at [`DXC_ABI`] and assembled from the typed declarations in
//! [`crate::typed`]. The process-wide [`builtin`] registry is built from them
//! on first use and is read-only afterwards.

mod definitions;

use once_cell::sync::Lazy;

use crate::base::AbiVersion;
use crate::registry::{DefinitionError, EnumDefinition, Registry, RegistryOptions};

pub use definitions::{
    cursor_kind, cursor_kind_flags, diagnostic_display_options, diagnostic_severity,
    global_options, token_kind, translation_unit_flags,
};

/// Native library release the tables track.
pub const DXC_ABI: AbiVersion = AbiVersion::new(1, 7);

// Native enum names
pub const GLOBAL_OPTIONS: &str = "DxcGlobalOptions";
pub const DIAGNOSTIC_DISPLAY_OPTIONS: &str = "DxcDiagnosticDisplayOptions";
pub const DIAGNOSTIC_SEVERITY: &str = "DxcDiagnosticSeverity";
pub const TRANSLATION_UNIT_FLAGS: &str = "DxcTranslationUnitFlags";
pub const CURSOR_KIND_FLAGS: &str = "DxcCursorKindFlags";
pub const CURSOR_KIND: &str = "DxcCursorKind";
pub const TOKEN_KIND: &str = "DxcTokenKind";

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    registry_with(RegistryOptions::default())
        .unwrap_or_else(|err| panic!("builtin DXC enum tables are inconsistent: {err}"))
});

/// The process-wide registry of every DXC enum.
///
/// # Panics
///
/// On first use, if the builtin tables violate a definition invariant. The
/// tables are fixed at compile time, so this is a bug in the tables, covered
/// by the crate's tests.
pub fn builtin() -> &'static Registry {
    &BUILTIN
}

/// Every builtin definition, in native header order.
pub fn definitions() -> Result<Vec<EnumDefinition>, DefinitionError> {
    Ok(vec![
        global_options()?,
        diagnostic_display_options()?,
        diagnostic_severity()?,
        translation_unit_flags()?,
        cursor_kind_flags()?,
        cursor_kind()?,
        token_kind()?,
    ])
}

/// Build a fresh registry of the builtin tables with custom options.
pub fn registry_with(options: RegistryOptions) -> Result<Registry, DefinitionError> {
    definitions()?
        .into_iter()
        .try_fold(Registry::builder().with_options(options), |builder, def| {
            builder.register(def)
        })
        .map(|builder| builder.build())
}
