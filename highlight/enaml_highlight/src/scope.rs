//! Token labels and their stable presentation names.

use std::fmt;

/// Label attached to every Enaml token.
///
/// [`name`](Self::name) returns the dotted presentation string consumers key
/// styles from; the strings are a stable contract, the enum variants are
/// not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Reserved words, plus the declarative `enamldef`/`attr` forms.
    Keyword,
    /// `True`, `False`, `None` and friends.
    BuiltinConstant,
    /// Names reserved for future language revisions.
    Illegal,
    /// Builtin callables such as `len` or `isinstance`.
    BuiltinFunction,
    /// The deprecated `debugger` name.
    Deprecated,
    Identifier,
    /// Any string literal form, including merged multi-line literals.
    String,
    /// Integer, long, float, and imaginary literals.
    Numeric,
    Comment,
    Operator,
    ParenOpen,
    ParenClose,
    /// Whitespace and other inert text.
    Text,
    /// Fallback for input no rule covers.
    Error,
}

impl Scope {
    /// The stable presentation name of this scope.
    pub fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::BuiltinConstant => "constant.language",
            Self::Illegal => "invalid.illegal",
            Self::BuiltinFunction => "support.function",
            Self::Deprecated => "invalid.deprecated",
            Self::Identifier => "identifier",
            Self::String => "string",
            Self::Numeric => "constant.numeric",
            Self::Comment => "comment",
            Self::Operator => "keyword.operator",
            Self::ParenOpen => "paren.lparen",
            Self::ParenClose => "paren.rparen",
            Self::Text => "text",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
