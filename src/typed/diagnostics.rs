//! Diagnostic severities and display options.

use crate::tables;

foreign_enum! {
    /// Severity of a diagnostic reported by the compiler front end.
    pub enum DiagnosticSeverity => tables::DIAGNOSTIC_SEVERITY {
        /// Suppressed, e.g. by a command-line option.
        Ignored = 0,
        /// Attached to the previous non-note diagnostic.
        Note = 1,
        /// Suspicious code that may not be wrong.
        Warning = 2,
        /// Ill-formed code.
        Error = 3,
        /// Ill-formed code after which further results are unlikely to be useful.
        Fatal = 4,
    }
}

impl DiagnosticSeverity {
    /// Check if this severity fails a compilation.
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error | Self::Fatal)
    }
}

foreign_flags! {
    /// Options controlling how a diagnostic is rendered to text.
    pub struct DiagnosticDisplayOptions => tables::DIAGNOSTIC_DISPLAY_OPTIONS {
        /// Source location where the diagnostic was located.
        const DISPLAY_SOURCE_LOCATION = "DisplaySourceLocation" => 0x01;
        /// Column number, when the source location is displayed.
        const DISPLAY_COLUMN = "DisplayColumn" => 0x02;
        /// Machine-parsable source ranges, when the source location is displayed.
        const DISPLAY_SOURCE_RANGES = "DisplaySourceRanges" => 0x04;
        /// Option name associated with the diagnostic.
        const DISPLAY_OPTION = "DisplayOption" => 0x08;
        /// Category number associated with the diagnostic.
        const DISPLAY_CATEGORY_ID = "DisplayCategoryId" => 0x10;
        /// Category name associated with the diagnostic.
        const DISPLAY_CATEGORY_NAME = "DisplayCategoryName" => 0x20;
    }
}
