//! Token kinds.

use crate::tables;

foreign_enum! {
    /// Kind of a token produced by the native tokenizer.
    pub enum TokenKind => tables::TOKEN_KIND {
        Punctuation = 0,
        Keyword = 1,
        Identifier = 2,
        Literal = 3,
        Comment = 4,
        Unknown = 5,
        BuiltInType = 6,
    }
}

impl TokenKind {
    /// Check if this is a comment token
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Comment)
    }
}
