//! Definitions of the builtin DXC enums.

use super::DXC_ABI;
use crate::registry::{DefinitionError, EnumDefinition, RangeLabel};
use crate::typed::{
    CursorCategory, CursorKind, CursorKindFlags, DiagnosticDisplayOptions, DiagnosticSeverity,
    GlobalOptions, TokenKind, TranslationUnitFlags,
};

pub fn global_options() -> Result<EnumDefinition, DefinitionError> {
    GlobalOptions::COMPOSITES
        .iter()
        .fold(
            EnumDefinition::bitmask(GlobalOptions::ENUM_NAME, DXC_ABI).constants(GlobalOptions::TABLE),
            |builder, (name, value)| builder.composite(name, *value),
        )
        .build()
}

pub fn diagnostic_display_options() -> Result<EnumDefinition, DefinitionError> {
    EnumDefinition::bitmask(DiagnosticDisplayOptions::ENUM_NAME, DXC_ABI)
        .constants(DiagnosticDisplayOptions::TABLE)
        .build()
}

pub fn diagnostic_severity() -> Result<EnumDefinition, DefinitionError> {
    EnumDefinition::plain(DiagnosticSeverity::ENUM_NAME, DXC_ABI)
        .constants(DiagnosticSeverity::TABLE)
        .build()
}

pub fn translation_unit_flags() -> Result<EnumDefinition, DefinitionError> {
    EnumDefinition::bitmask(TranslationUnitFlags::ENUM_NAME, DXC_ABI)
        .constants(TranslationUnitFlags::TABLE)
        .build()
}

pub fn cursor_kind_flags() -> Result<EnumDefinition, DefinitionError> {
    EnumDefinition::bitmask(CursorKindFlags::ENUM_NAME, DXC_ABI)
        .constants(CursorKindFlags::TABLE)
        .build()
}

/// Cursor kinds with their aliases and one range per [`CursorCategory`].
pub fn cursor_kind() -> Result<EnumDefinition, DefinitionError> {
    let builder = CursorKind::ALIASES.iter().fold(
        EnumDefinition::plain(CursorKind::ENUM_NAME, DXC_ABI).constants(CursorKind::TABLE),
        |builder, (alias, target)| builder.alias(alias, target),
    );
    CursorCategory::ALL
        .iter()
        .fold(builder, |builder, category| {
            let (first, last) = category.bounds();
            let (first_marker, last_marker) = category.markers();
            builder.range(RangeLabel::new(
                category.label(),
                first_marker,
                first.raw(),
                last_marker,
                last.raw(),
            ))
        })
        .build()
}

pub fn token_kind() -> Result<EnumDefinition, DefinitionError> {
    EnumDefinition::plain(TokenKind::ENUM_NAME, DXC_ABI)
        .constants(TokenKind::TABLE)
        .build()
}
