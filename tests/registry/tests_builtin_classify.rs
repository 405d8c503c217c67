#![allow(clippy::unwrap_used)]

use dxc_abi::registry::RegistryError;
use dxc_abi::tables::{self, builtin};
use dxc_abi::{CursorCategory, CursorKind};
use rstest::rstest;

#[rstest]
#[case(1, "Decl")]
#[case(39, "Decl")]
#[case(40, "Ref")]
#[case(50, "Ref")]
#[case(70, "Invalid")]
#[case(73, "Invalid")]
#[case(100, "Expr")]
#[case(146, "Expr")]
#[case(200, "Stmt")]
#[case(232, "Stmt")]
#[case(400, "Attr")]
#[case(408, "Attr")]
#[case(500, "Preprocessing")]
#[case(503, "Preprocessing")]
#[case(600, "ExtraDecl")]
fn test_classify_boundaries(#[case] raw: u32, #[case] label: &str) {
    let range = builtin().classify(tables::CURSOR_KIND, raw).unwrap();
    assert_eq!(range.label(), label);
    assert!(range.contains(raw));
}

#[rstest]
#[case(0)]
#[case(60)]
#[case(147)]
#[case(300)]
#[case(601)]
#[case(u32::MAX)]
fn test_classify_out_of_range(#[case] raw: u32) {
    let err = builtin().classify(tables::CURSOR_KIND, raw).unwrap_err();
    assert_eq!(err, RegistryError::out_of_range(tables::CURSOR_KIND, raw));
    assert!(!err.is_drift());
}

#[test]
fn test_translation_unit_is_declared_but_unclassified() {
    let registry = builtin();
    assert_eq!(registry.encode_symbol(tables::CURSOR_KIND, "TranslationUnit").unwrap(), 300);
    assert!(registry.classify(tables::CURSOR_KIND, 300).is_err());
    assert_eq!(CursorKind::TranslationUnit.category(), None);
}

#[test]
fn test_markers_are_not_constants() {
    let registry = builtin();
    let def = registry.definition(tables::CURSOR_KIND).unwrap();
    assert_eq!(def.range_marker("FirstExpr"), Some(100));
    assert_eq!(def.range_marker("LastStmt"), Some(232));
    assert!(matches!(
        registry.encode_symbol(tables::CURSOR_KIND, "FirstExpr"),
        Err(RegistryError::UnknownSymbol { .. })
    ));
}

#[test]
fn test_ranges_match_categories() {
    let def = builtin().definition(tables::CURSOR_KIND).unwrap();
    assert_eq!(def.ranges().len(), CursorCategory::ALL.len());
    for category in CursorCategory::ALL {
        let range = def
            .ranges()
            .iter()
            .find(|range| range.label() == category.label())
            .unwrap();
        let (first, last) = category.bounds();
        let (first_marker, last_marker) = category.markers();
        assert_eq!((range.first(), range.last()), (first.raw(), last.raw()));
        assert_eq!((range.first_marker(), range.last_marker()), (first_marker, last_marker));
    }
}

#[test]
fn test_classify_requires_ranges() {
    assert!(matches!(
        builtin().classify(tables::DIAGNOSTIC_SEVERITY, 1),
        Err(RegistryError::NoRanges(_))
    ));
}
