//! Translation-unit flags and global index options.

use crate::tables;

foreign_flags! {
    /// Options for parsing a translation unit.
    pub struct TranslationUnitFlags => tables::TRANSLATION_UNIT_FLAGS {
        /// No special translation-unit options.
        const NONE = "None" => 0x0;
        /// Build a detailed preprocessing record with every macro definition
        /// and instantiation.
        const DETAILED_PREPROCESSING_RECORD = "DetailedPreprocessingRecord" => 0x01;
        /// The translation unit is incomplete.
        const INCOMPLETE = "Incomplete" => 0x02;
        /// Build an implicit precompiled header for the preamble.
        const PRECOMPILED_PREAMBLE = "PrecompiledPreamble" => 0x04;
        /// Cache code-completion results with each reparse.
        const CACHE_COMPLETION_RESULTS = "CacheCompletionResults" => 0x08;
        /// The translation unit will be serialized.
        const FOR_SERIALIZATION = "ForSerialization" => 0x10;
        /// Deprecated; still accepted on the wire.
        const CXX_CHAINED_PCH = "CXXChainedPCH" => 0x20;
        /// Skip function and method bodies while parsing.
        const SKIP_FUNCTION_BODIES = "SkipFunctionBodies" => 0x40;
        /// Include brief documentation comments in code completions.
        const INCLUDE_BRIEF_COMMENTS_IN_CODE_COMPLETION = "IncludeBriefCommentsInCodeCompletion" => 0x80;
        /// Compile on the caller's thread.
        const USE_CALLER_THREAD = "UseCallerThread" => 0x800;
    }
}

foreign_flags! {
    /// Thread priority options of a native index.
    pub struct GlobalOptions => tables::GLOBAL_OPTIONS {
        const NONE = "None" => 0x0;
        const THREAD_BACKGROUND_PRIORITY_FOR_INDEXING = "ThreadBackgroundPriorityForIndexing" => 0x1;
        const THREAD_BACKGROUND_PRIORITY_FOR_EDITING = "ThreadBackgroundPriorityForEditing" => 0x2;
    }
}

impl GlobalOptions {
    /// Background priority for every thread the index creates.
    pub const THREAD_BACKGROUND_PRIORITY_FOR_ALL: Self = Self::THREAD_BACKGROUND_PRIORITY_FOR_INDEXING
        .union(Self::THREAD_BACKGROUND_PRIORITY_FOR_EDITING);

    /// Named combinations registered alongside the flag table.
    pub const COMPOSITES: &'static [(&'static str, u32)] = &[(
        "ThreadBackgroundPriorityForAll",
        Self::THREAD_BACKGROUND_PRIORITY_FOR_ALL.bits(),
    )];
}
