#![allow(clippy::unwrap_used)]

use dxc_abi::registry::RegistryError;
use dxc_abi::tables::{self, builtin};
use dxc_abi::{RegistryOptions, SymbolicValue, TranslationUnitFlags};
use rstest::rstest;

use crate::helpers::value_assertions::*;

// ============================================================================
// Severity and display options
// ============================================================================

#[rstest]
#[case(0, "Ignored")]
#[case(1, "Note")]
#[case(2, "Warning")]
#[case(3, "Error")]
#[case(4, "Fatal")]
fn test_severity_resolves(#[case] raw: u32, #[case] expected: &str) {
    assert_resolves_to(builtin(), tables::DIAGNOSTIC_SEVERITY, raw, expected);
}

#[test]
fn test_severity_unrecognized_value() {
    let err = assert_drift(builtin().resolve(tables::DIAGNOSTIC_SEVERITY, 9));
    assert_eq!(err, RegistryError::unrecognized_value(tables::DIAGNOSTIC_SEVERITY, 9));
}

#[test]
fn test_display_options_resolve_to_flags() {
    assert_resolves_to_flags(
        builtin(),
        tables::DIAGNOSTIC_DISPLAY_OPTIONS,
        0x03,
        &["DisplaySourceLocation", "DisplayColumn"],
    );
    assert_resolves_to_flags(builtin(), tables::DIAGNOSTIC_DISPLAY_OPTIONS, 0, &[]);
}

#[test]
fn test_display_options_unknown_bits() {
    let err = assert_drift(builtin().resolve(tables::DIAGNOSTIC_DISPLAY_OPTIONS, 0x45));
    assert_eq!(
        err,
        RegistryError::unknown_flag_bits(tables::DIAGNOSTIC_DISPLAY_OPTIONS, 0x45, 0x40)
    );
}

// ============================================================================
// Round trips over the builtin tables
// ============================================================================

#[rstest]
#[case(tables::DIAGNOSTIC_SEVERITY)]
#[case(tables::CURSOR_KIND)]
#[case(tables::TOKEN_KIND)]
fn test_plain_constants_round_trip(#[case] enum_name: &str) {
    let registry = builtin();
    let def = registry.definition(enum_name).unwrap();
    for (name, value) in def.constants() {
        let raw = registry.encode_symbol(enum_name, name).unwrap();
        assert_eq!(raw, value);
        assert_eq!(registry.resolve(enum_name, raw).unwrap(), SymbolicValue::constant(name));
    }
}

#[rstest]
#[case(tables::GLOBAL_OPTIONS)]
#[case(tables::DIAGNOSTIC_DISPLAY_OPTIONS)]
#[case(tables::TRANSLATION_UNIT_FLAGS)]
#[case(tables::CURSOR_KIND_FLAGS)]
fn test_every_flag_combination_round_trips(#[case] enum_name: &str) {
    let registry = builtin();
    let def = registry.definition(enum_name).unwrap();
    for raw in flag_subsets(def) {
        let value = registry.resolve(enum_name, raw).unwrap();
        assert_eq!(registry.encode(enum_name, &value).unwrap(), raw, "{enum_name}({raw:#x})");
    }
}

#[test]
fn test_translation_unit_flags_mask() {
    let mask = builtin().allowed_mask(tables::TRANSLATION_UNIT_FLAGS).unwrap();
    assert_eq!(mask, 0x8ff);
    assert_eq!(mask, TranslationUnitFlags::all().bits());
    assert_drift(builtin().resolve(tables::TRANSLATION_UNIT_FLAGS, 0x100));
}

// ============================================================================
// Undeclared values
// ============================================================================

#[rstest]
#[case(tables::DIAGNOSTIC_SEVERITY)]
#[case(tables::CURSOR_KIND)]
#[case(tables::TOKEN_KIND)]
fn test_plain_sweep_rejects_every_undeclared_value(#[case] enum_name: &str) {
    let registry = tables::registry_with(RegistryOptions::quiet()).unwrap();
    let def = registry.definition(enum_name).unwrap();
    for raw in 0..=2000u32 {
        match registry.resolve(enum_name, raw) {
            Ok(value) => {
                let name = def.name_of(raw).unwrap_or_else(|| panic!("{enum_name}({raw}) resolved to {value}"));
                assert_eq!(value, SymbolicValue::constant(name));
            }
            Err(err) => {
                assert!(def.name_of(raw).is_none(), "{enum_name}({raw}) failed: {err}");
                assert_eq!(err, RegistryError::unrecognized_value(enum_name, raw));
            }
        }
    }
}

#[rstest]
#[case(tables::GLOBAL_OPTIONS)]
#[case(tables::DIAGNOSTIC_DISPLAY_OPTIONS)]
#[case(tables::TRANSLATION_UNIT_FLAGS)]
#[case(tables::CURSOR_KIND_FLAGS)]
fn test_bitmask_sweep_rejects_every_undeclared_bit(#[case] enum_name: &str) {
    let registry = tables::registry_with(RegistryOptions::quiet()).unwrap();
    let mask = registry.allowed_mask(enum_name).unwrap();
    for shift in 0..u32::BITS {
        let bit = 1u32 << shift;
        let raw = mask | bit;
        let result = registry.resolve(enum_name, raw);
        if mask & bit != 0 {
            assert!(result.is_ok(), "{enum_name}({raw:#x}) failed: {result:?}");
        } else {
            assert_eq!(
                result.unwrap_err(),
                RegistryError::unknown_flag_bits(enum_name, raw, bit)
            );
        }
    }
}

// ============================================================================
// Aliases and composites
// ============================================================================

#[rstest]
#[case("MacroInstantiation", "MacroExpansion", 502)]
#[case("AsmStmt", "GCCAsmStmt", 215)]
fn test_cursor_alias_resolves_to_canonical(
    #[case] alias: &str,
    #[case] canonical: &str,
    #[case] raw: u32,
) {
    let registry = builtin();
    assert_eq!(registry.encode_symbol(tables::CURSOR_KIND, alias).unwrap(), raw);
    assert_eq!(
        registry.encode_symbol(tables::CURSOR_KIND, canonical).unwrap(),
        raw
    );
    assert_resolves_to(registry, tables::CURSOR_KIND, raw, canonical);
    assert_eq!(registry.canonical(tables::CURSOR_KIND, alias).unwrap(), canonical);
}

#[test]
fn test_global_options_composite_encodes_but_resolves_to_flags() {
    let registry = builtin();
    let raw = registry
        .encode_symbol(tables::GLOBAL_OPTIONS, "ThreadBackgroundPriorityForAll")
        .unwrap();
    assert_eq!(raw, 0x3);
    assert_resolves_to_flags(
        registry,
        tables::GLOBAL_OPTIONS,
        raw,
        &["ThreadBackgroundPriorityForIndexing", "ThreadBackgroundPriorityForEditing"],
    );
}

#[test]
fn test_unknown_symbol_and_enum() {
    let registry = builtin();
    assert_eq!(
        registry.encode_symbol(tables::DIAGNOSTIC_SEVERITY, "Remark").unwrap_err(),
        RegistryError::unknown_symbol(tables::DIAGNOSTIC_SEVERITY, "Remark")
    );
    assert!(matches!(
        registry.resolve("DxcShaderModel", 0),
        Err(RegistryError::UnknownEnum(_))
    ));
    assert!(matches!(
        registry.encode_flags(tables::DIAGNOSTIC_SEVERITY, ["Error"]),
        Err(RegistryError::NotBitmask(_))
    ));
}

// ============================================================================
// Introspection
// ============================================================================

#[test]
fn test_builtin_enum_names() {
    let names: Vec<&str> = builtin().enum_names().collect();
    assert_eq!(
        names,
        [
            tables::GLOBAL_OPTIONS,
            tables::DIAGNOSTIC_DISPLAY_OPTIONS,
            tables::DIAGNOSTIC_SEVERITY,
            tables::TRANSLATION_UNIT_FLAGS,
            tables::CURSOR_KIND_FLAGS,
            tables::CURSOR_KIND,
            tables::TOKEN_KIND,
        ]
    );
    assert!(builtin().definitions().all(|def| def.abi() == tables::DXC_ABI));
}

#[test]
fn test_describe_builtin_values() {
    let registry = builtin();
    assert_eq!(registry.describe(tables::DIAGNOSTIC_SEVERITY, 2).unwrap(), "Warning");
    assert_eq!(
        registry.describe(tables::TRANSLATION_UNIT_FLAGS, 0x41).unwrap(),
        "DetailedPreprocessingRecord | SkipFunctionBodies"
    );
    assert_eq!(registry.describe(tables::TRANSLATION_UNIT_FLAGS, 0).unwrap(), "None");
}
