//! Resolution assertion helpers.

use dxc_abi::{EnumDefinition, Registry, RegistryError, SymbolicValue};

/// Assert a raw plain value resolves to the expected constant.
pub fn assert_resolves_to(registry: &Registry, enum_name: &str, raw: u32, expected: &str) {
    match registry.resolve(enum_name, raw) {
        Ok(SymbolicValue::Constant(name)) => assert_eq!(
            name, expected,
            "Expected {}({}) to resolve to {}, got {}",
            enum_name, raw, expected, name
        ),
        other => panic!("Expected {}({}) to resolve to {}, got {:?}", enum_name, raw, expected, other),
    }
}

/// Assert a raw bitmask value resolves to exactly the expected flags, in order.
pub fn assert_resolves_to_flags(registry: &Registry, enum_name: &str, raw: u32, expected: &[&str]) {
    let value = registry
        .resolve(enum_name, raw)
        .unwrap_or_else(|err| panic!("Expected {}({:#x}) to resolve: {}", enum_name, raw, err));
    let flags = value
        .as_flags()
        .unwrap_or_else(|| panic!("Expected flags for {}({:#x}), got {}", enum_name, raw, value));
    let names: Vec<&str> = flags.iter().map(|flag| flag.as_str()).collect();
    assert_eq!(names, expected, "Unexpected flags for {}({:#x})", enum_name, raw);
}

/// Assert a lookup failed because the native side sent something the table lacks.
pub fn assert_drift<T: std::fmt::Debug>(result: Result<T, RegistryError>) -> RegistryError {
    let err = result.expect_err("Expected a drift error");
    assert!(err.is_drift(), "Expected a drift error, got {:?}", err);
    err
}

/// Every combination of the non-zero flags of a bitmask definition.
pub fn flag_subsets(def: &EnumDefinition) -> Vec<u32> {
    let bits: Vec<u32> = def.flags().map(|(_, bit)| bit).collect();
    (0u32..(1 << bits.len()))
        .map(|selector| {
            bits.iter()
                .enumerate()
                .filter(|(i, _)| selector & (1 << i) != 0)
                .fold(0u32, |acc, (_, bit)| acc | *bit)
        })
        .collect()
}
