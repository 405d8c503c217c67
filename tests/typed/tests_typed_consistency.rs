#![allow(clippy::unwrap_used)]

use dxc_abi::tables::{self, builtin};
use dxc_abi::{
    CursorKind, CursorKindFlags, DiagnosticDisplayOptions, DiagnosticSeverity, GlobalOptions,
    RegistryError, SymbolicValue, TokenKind, TranslationUnitFlags,
};
use rstest::rstest;

/// Assert a typed plain enum and the registry agree on every variant.
macro_rules! assert_plain_agrees {
    ($ty:ty) => {{
        let registry = builtin();
        let def = registry.definition(<$ty>::ENUM_NAME).unwrap();
        assert_eq!(def.len(), <$ty>::ALL.len());
        for variant in <$ty>::ALL {
            let raw = u32::from(*variant);
            assert_eq!(
                registry.resolve(<$ty>::ENUM_NAME, raw).unwrap(),
                SymbolicValue::constant(variant.name())
            );
            assert_eq!(<$ty>::try_from(raw).unwrap(), *variant);
            assert_eq!(<$ty>::from_name(variant.name()), Some(*variant));
        }
    }};
}

/// Assert a typed flag set and the registry agree on every flag.
macro_rules! assert_flags_agree {
    ($ty:ty) => {{
        let registry = builtin();
        let def = registry.definition(<$ty>::ENUM_NAME).unwrap();
        assert_eq!(def.allowed_mask(), <$ty>::all().bits());
        let flags = <$ty as bitflags::Flags>::FLAGS;
        assert_eq!(flags.len(), <$ty>::TABLE.len());
        for ((name, bits), flag) in <$ty>::TABLE.iter().zip(flags) {
            assert_eq!(def.value_of(name), Some(*bits));
            assert_eq!(flag.value().bits(), *bits);
        }
    }};
}

#[test]
fn test_plain_types_agree_with_registry() {
    assert_plain_agrees!(DiagnosticSeverity);
    assert_plain_agrees!(CursorKind);
    assert_plain_agrees!(TokenKind);
}

#[test]
fn test_flag_types_agree_with_registry() {
    assert_flags_agree!(GlobalOptions);
    assert_flags_agree!(DiagnosticDisplayOptions);
    assert_flags_agree!(TranslationUnitFlags);
    assert_flags_agree!(CursorKindFlags);
}

#[test]
fn test_typed_names_match_resolved_flags() {
    let flags = TranslationUnitFlags::INCOMPLETE | TranslationUnitFlags::USE_CALLER_THREAD;
    let resolved = builtin()
        .resolve(tables::TRANSLATION_UNIT_FLAGS, flags.bits())
        .unwrap();
    let names: Vec<&str> = flags.names().collect();
    assert_eq!(resolved, SymbolicValue::flags(names));
}

#[test]
fn test_cursor_alias_from_name() {
    assert_eq!(CursorKind::from_name("MacroInstantiation"), Some(CursorKind::MacroExpansion));
    assert_eq!(CursorKind::from_name("AsmStmt"), Some(CursorKind::GCCAsmStmt));
    assert_eq!(CursorKind::MACRO_INSTANTIATION.name(), "MacroExpansion");
}

#[rstest]
#[case(CursorKind::StructDecl, CursorKindFlags::DECLARATION)]
#[case(CursorKind::UnexposedExpr, CursorKindFlags::EXPRESSION | CursorKindFlags::UNEXPOSED)]
#[case(CursorKind::TranslationUnit, CursorKindFlags::TRANSLATION_UNIT)]
#[case(CursorKind::MacroExpansion, CursorKindFlags::PREPROCESSING)]
#[case(CursorKind::ModuleImportDecl, CursorKindFlags::DECLARATION)]
fn test_cursor_kind_flags(#[case] kind: CursorKind, #[case] expected: CursorKindFlags) {
    assert_eq!(kind.flags(), expected);
}

#[test]
fn test_typed_conversion_reports_drift() {
    let err = CursorKind::try_from(60).unwrap_err();
    assert_eq!(err, RegistryError::unrecognized_value(tables::CURSOR_KIND, 60));
    assert!(err.is_drift());
    let err = GlobalOptions::try_from(0x4).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownFlagBits { residual: 0x4, .. }));
    assert_eq!(GlobalOptions::from_bits(0x4), None);
}
