#![allow(clippy::unwrap_used)]

use dxc_abi::tables::{self, builtin};
use rayon::prelude::*;

#[test]
fn test_concurrent_resolution_is_consistent() {
    let sequential: Vec<_> = (0..2_000u32)
        .map(|raw| builtin().resolve(tables::CURSOR_KIND, raw % 700).ok())
        .collect();
    let parallel: Vec<_> = (0..2_000u32)
        .into_par_iter()
        .map(|raw| builtin().resolve(tables::CURSOR_KIND, raw % 700).ok())
        .collect();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_concurrent_first_use() {
    // Many threads racing the lazy initialisation all see one registry.
    let addresses: Vec<usize> = (0..64)
        .into_par_iter()
        .map(|_| builtin() as *const _ as usize)
        .collect();
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_concurrent_encode_and_classify() {
    let results: Vec<_> = ["DisplaySourceLocation", "DisplayColumn", "DisplayOption"]
        .par_iter()
        .map(|name| {
            builtin()
                .encode_symbol(tables::DIAGNOSTIC_DISPLAY_OPTIONS, name)
                .unwrap()
        })
        .collect();
    assert_eq!(results, [0x01, 0x02, 0x08]);

    let labels: Vec<&str> = [1u32, 45, 120, 210, 401]
        .par_iter()
        .map(|raw| builtin().classify(tables::CURSOR_KIND, *raw).unwrap().label())
        .collect();
    assert_eq!(labels, ["Decl", "Ref", "Expr", "Stmt", "Attr"]);
}
