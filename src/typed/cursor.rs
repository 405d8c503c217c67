//! Cursor kinds, cursor kind flags and cursor categories.
//!
//! Cursor kinds are grouped into contiguous ranges bounded by first/last
//! markers (`FirstDecl`..`LastDecl`, `FirstExpr`..`LastExpr`, ...). Not every
//! kind belongs to a range: `TranslationUnit` sits in the gap between
//! statements and attributes and has no category.

use crate::tables;

foreign_enum! {
    /// The kind of language construct a cursor refers to.
    pub enum CursorKind => tables::CURSOR_KIND {
        // =====================================================================
        // Declarations
        // =====================================================================
        /// A declaration whose specific kind is not exposed.
        UnexposedDecl = 1,
        StructDecl = 2,
        UnionDecl = 3,
        ClassDecl = 4,
        EnumDecl = 5,
        /// A field or non-static data member.
        FieldDecl = 6,
        EnumConstantDecl = 7,
        FunctionDecl = 8,
        VarDecl = 9,
        /// A function or method parameter.
        ParmDecl = 10,
        ObjCInterfaceDecl = 11,
        ObjCCategoryDecl = 12,
        ObjCProtocolDecl = 13,
        ObjCPropertyDecl = 14,
        ObjCIvarDecl = 15,
        ObjCInstanceMethodDecl = 16,
        ObjCClassMethodDecl = 17,
        ObjCImplementationDecl = 18,
        ObjCCategoryImplDecl = 19,
        TypedefDecl = 20,
        CXXMethod = 21,
        Namespace = 22,
        LinkageSpec = 23,
        Constructor = 24,
        Destructor = 25,
        ConversionFunction = 26,
        TemplateTypeParameter = 27,
        NonTypeTemplateParameter = 28,
        TemplateTemplateParameter = 29,
        FunctionTemplate = 30,
        ClassTemplate = 31,
        ClassTemplatePartialSpecialization = 32,
        NamespaceAlias = 33,
        UsingDirective = 34,
        UsingDeclaration = 35,
        TypeAliasDecl = 36,
        ObjCSynthesizeDecl = 37,
        ObjCDynamicDecl = 38,
        CXXAccessSpecifier = 39,

        // =====================================================================
        // References
        // =====================================================================
        ObjCSuperClassRef = 40,
        ObjCProtocolRef = 41,
        ObjCClassRef = 42,
        TypeRef = 43,
        CXXBaseSpecifier = 44,
        TemplateRef = 45,
        NamespaceRef = 46,
        MemberRef = 47,
        LabelRef = 48,
        /// A reference to a set of overloaded functions or templates.
        OverloadedDeclRef = 49,
        VariableRef = 50,

        // =====================================================================
        // Error conditions
        // =====================================================================
        InvalidFile = 70,
        NoDeclFound = 71,
        NotImplemented = 72,
        InvalidCode = 73,

        // =====================================================================
        // Expressions
        // =====================================================================
        /// An expression whose specific kind is not exposed.
        UnexposedExpr = 100,
        DeclRefExpr = 101,
        MemberRefExpr = 102,
        CallExpr = 103,
        ObjCMessageExpr = 104,
        BlockExpr = 105,
        IntegerLiteral = 106,
        FloatingLiteral = 107,
        ImaginaryLiteral = 108,
        StringLiteral = 109,
        CharacterLiteral = 110,
        ParenExpr = 111,
        UnaryOperator = 112,
        ArraySubscriptExpr = 113,
        BinaryOperator = 114,
        CompoundAssignOperator = 115,
        ConditionalOperator = 116,
        CStyleCastExpr = 117,
        CompoundLiteralExpr = 118,
        InitListExpr = 119,
        AddrLabelExpr = 120,
        StmtExpr = 121,
        GenericSelectionExpr = 122,
        GNUNullExpr = 123,
        CXXStaticCastExpr = 124,
        CXXDynamicCastExpr = 125,
        CXXReinterpretCastExpr = 126,
        CXXConstCastExpr = 127,
        CXXFunctionalCastExpr = 128,
        CXXTypeidExpr = 129,
        CXXBoolLiteralExpr = 130,
        CXXNullPtrLiteralExpr = 131,
        CXXThisExpr = 132,
        CXXThrowExpr = 133,
        CXXNewExpr = 134,
        CXXDeleteExpr = 135,
        UnaryExpr = 136,
        ObjCStringLiteral = 137,
        ObjCEncodeExpr = 138,
        ObjCSelectorExpr = 139,
        ObjCProtocolExpr = 140,
        ObjCBridgedCastExpr = 141,
        PackExpansionExpr = 142,
        SizeOfPackExpr = 143,
        LambdaExpr = 144,
        ObjCBoolLiteralExpr = 145,
        ObjCSelfExpr = 146,

        // =====================================================================
        // Statements
        // =====================================================================
        /// A statement whose specific kind is not exposed.
        UnexposedStmt = 200,
        LabelStmt = 201,
        CompoundStmt = 202,
        CaseStmt = 203,
        DefaultStmt = 204,
        IfStmt = 205,
        SwitchStmt = 206,
        WhileStmt = 207,
        DoStmt = 208,
        ForStmt = 209,
        GotoStmt = 210,
        IndirectGotoStmt = 211,
        ContinueStmt = 212,
        BreakStmt = 213,
        ReturnStmt = 214,
        GCCAsmStmt = 215,
        ObjCAtTryStmt = 216,
        ObjCAtCatchStmt = 217,
        ObjCAtFinallyStmt = 218,
        ObjCAtThrowStmt = 219,
        ObjCAtSynchronizedStmt = 220,
        ObjCAutoreleasePoolStmt = 221,
        ObjCForCollectionStmt = 222,
        CXXCatchStmt = 223,
        CXXTryStmt = 224,
        CXXForRangeStmt = 225,
        SEHTryStmt = 226,
        SEHExceptStmt = 227,
        SEHFinallyStmt = 228,
        MSAsmStmt = 229,
        /// The null statement `;`.
        NullStmt = 230,
        /// An adaptor wrapping a declaration in a statement.
        DeclStmt = 231,
        OMPParallelDirective = 232,

        /// The translation unit itself.
        TranslationUnit = 300,

        // =====================================================================
        // Attributes
        // =====================================================================
        /// An attribute whose specific kind is not exposed.
        UnexposedAttr = 400,
        IBActionAttr = 401,
        IBOutletAttr = 402,
        IBOutletCollectionAttr = 403,
        CXXFinalAttr = 404,
        CXXOverrideAttr = 405,
        AnnotateAttr = 406,
        AsmLabelAttr = 407,
        PackedAttr = 408,

        // =====================================================================
        // Preprocessing
        // =====================================================================
        PreprocessingDirective = 500,
        MacroDefinition = 501,
        MacroExpansion = 502,
        InclusionDirective = 503,

        // =====================================================================
        // Extra declarations
        // =====================================================================
        /// A module import declaration.
        ModuleImportDecl = 600,
    }
}

impl CursorKind {
    // Aliases
    pub const MACRO_INSTANTIATION: Self = Self::MacroExpansion;
    pub const ASM_STMT: Self = Self::GCCAsmStmt;

    /// Alias names registered alongside the table, as `(alias, target)`.
    pub const ALIASES: &'static [(&'static str, &'static str)] = &[
        ("MacroInstantiation", Self::MACRO_INSTANTIATION.name()),
        ("AsmStmt", Self::ASM_STMT.name()),
    ];

    // Range markers
    pub const FIRST_DECL: Self = Self::UnexposedDecl;
    pub const LAST_DECL: Self = Self::CXXAccessSpecifier;
    pub const FIRST_REF: Self = Self::ObjCSuperClassRef;
    pub const LAST_REF: Self = Self::VariableRef;
    pub const FIRST_INVALID: Self = Self::InvalidFile;
    pub const LAST_INVALID: Self = Self::InvalidCode;
    pub const FIRST_EXPR: Self = Self::UnexposedExpr;
    pub const LAST_EXPR: Self = Self::ObjCSelfExpr;
    pub const FIRST_STMT: Self = Self::UnexposedStmt;
    pub const LAST_STMT: Self = Self::OMPParallelDirective;
    pub const FIRST_ATTR: Self = Self::UnexposedAttr;
    pub const LAST_ATTR: Self = Self::PackedAttr;
    pub const FIRST_PREPROCESSING: Self = Self::PreprocessingDirective;
    pub const LAST_PREPROCESSING: Self = Self::InclusionDirective;
    pub const FIRST_EXTRA_DECL: Self = Self::ModuleImportDecl;
    pub const LAST_EXTRA_DECL: Self = Self::ModuleImportDecl;

    /// The range this kind falls in, or `None` for kinds between ranges.
    pub fn category(self) -> Option<CursorCategory> {
        let def = tables::builtin().definition(Self::ENUM_NAME).ok()?;
        def.range_for(self.raw())
            .and_then(|range| CursorCategory::from_label(range.label()))
    }

    pub fn is_declaration(self) -> bool {
        matches!(
            self.category(),
            Some(CursorCategory::Declaration | CursorCategory::ExtraDeclaration)
        )
    }

    pub fn is_reference(self) -> bool {
        self.category() == Some(CursorCategory::Reference)
    }

    pub fn is_expression(self) -> bool {
        self.category() == Some(CursorCategory::Expression)
    }

    pub fn is_statement(self) -> bool {
        self.category() == Some(CursorCategory::Statement)
    }

    pub fn is_attribute(self) -> bool {
        self.category() == Some(CursorCategory::Attribute)
    }

    pub fn is_invalid(self) -> bool {
        self.category() == Some(CursorCategory::Invalid)
    }

    pub fn is_preprocessing(self) -> bool {
        self.category() == Some(CursorCategory::Preprocessing)
    }

    pub fn is_translation_unit(self) -> bool {
        self == Self::TranslationUnit
    }

    /// Check if this is one of the `Unexposed*` kinds.
    pub fn is_unexposed(self) -> bool {
        matches!(
            self,
            Self::UnexposedDecl | Self::UnexposedExpr | Self::UnexposedStmt | Self::UnexposedAttr
        )
    }

    /// Kind flags describing this cursor kind.
    pub fn flags(self) -> CursorKindFlags {
        let mut flags = self.category().map_or(CursorKindFlags::empty(), CursorKindFlags::from);
        if self.is_translation_unit() {
            flags |= CursorKindFlags::TRANSLATION_UNIT;
        }
        if self.is_unexposed() {
            flags |= CursorKindFlags::UNEXPOSED;
        }
        flags
    }
}

foreign_flags! {
    /// Coarse classification flags for cursor kinds.
    pub struct CursorKindFlags => tables::CURSOR_KIND_FLAGS {
        const NONE = "None" => 0x0;
        const DECLARATION = "Declaration" => 0x1;
        const REFERENCE = "Reference" => 0x2;
        const EXPRESSION = "Expression" => 0x4;
        const STATEMENT = "Statement" => 0x8;
        const ATTRIBUTE = "Attribute" => 0x10;
        const INVALID = "Invalid" => 0x20;
        const TRANSLATION_UNIT = "TranslationUnit" => 0x40;
        const PREPROCESSING = "Preprocessing" => 0x80;
        const UNEXPOSED = "Unexposed" => 0x100;
    }
}

/// The declared cursor kind ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorCategory {
    Declaration,
    Reference,
    Invalid,
    Expression,
    Statement,
    Attribute,
    Preprocessing,
    ExtraDeclaration,
}

impl CursorCategory {
    pub const ALL: &'static [Self] = &[
        Self::Declaration,
        Self::Reference,
        Self::Invalid,
        Self::Expression,
        Self::Statement,
        Self::Attribute,
        Self::Preprocessing,
        Self::ExtraDeclaration,
    ];

    /// Label of the registry range for this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::Declaration => "Decl",
            Self::Reference => "Ref",
            Self::Invalid => "Invalid",
            Self::Expression => "Expr",
            Self::Statement => "Stmt",
            Self::Attribute => "Attr",
            Self::Preprocessing => "Preprocessing",
            Self::ExtraDeclaration => "ExtraDecl",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.label() == label)
    }

    /// First and last kind of the range, inclusive.
    pub fn bounds(self) -> (CursorKind, CursorKind) {
        match self {
            Self::Declaration => (CursorKind::FIRST_DECL, CursorKind::LAST_DECL),
            Self::Reference => (CursorKind::FIRST_REF, CursorKind::LAST_REF),
            Self::Invalid => (CursorKind::FIRST_INVALID, CursorKind::LAST_INVALID),
            Self::Expression => (CursorKind::FIRST_EXPR, CursorKind::LAST_EXPR),
            Self::Statement => (CursorKind::FIRST_STMT, CursorKind::LAST_STMT),
            Self::Attribute => (CursorKind::FIRST_ATTR, CursorKind::LAST_ATTR),
            Self::Preprocessing => (CursorKind::FIRST_PREPROCESSING, CursorKind::LAST_PREPROCESSING),
            Self::ExtraDeclaration => (CursorKind::FIRST_EXTRA_DECL, CursorKind::LAST_EXTRA_DECL),
        }
    }

    /// Names of the first/last markers bounding the range.
    pub fn markers(self) -> (&'static str, &'static str) {
        match self {
            Self::Declaration => ("FirstDecl", "LastDecl"),
            Self::Reference => ("FirstRef", "LastRef"),
            Self::Invalid => ("FirstInvalid", "LastInvalid"),
            Self::Expression => ("FirstExpr", "LastExpr"),
            Self::Statement => ("FirstStmt", "LastStmt"),
            Self::Attribute => ("FirstAttr", "LastAttr"),
            Self::Preprocessing => ("FirstPreprocessing", "LastPreprocessing"),
            Self::ExtraDeclaration => ("FirstExtraDecl", "LastExtraDecl"),
        }
    }
}

impl From<CursorCategory> for CursorKindFlags {
    fn from(category: CursorCategory) -> Self {
        match category {
            CursorCategory::Declaration | CursorCategory::ExtraDeclaration => Self::DECLARATION,
            CursorCategory::Reference => Self::REFERENCE,
            CursorCategory::Invalid => Self::INVALID,
            CursorCategory::Expression => Self::EXPRESSION,
            CursorCategory::Statement => Self::STATEMENT,
            CursorCategory::Attribute => Self::ATTRIBUTE,
            CursorCategory::Preprocessing => Self::PREPROCESSING,
        }
    }
}
