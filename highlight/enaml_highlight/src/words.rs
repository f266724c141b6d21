//! Closed word sets and the identifier classifier.
//!
//! Membership is checked against constant string sets; the classifier walks
//! them in a fixed priority order and returns the most specific scope. Note
//! the deliberate overlap: `print` is both a reserved word and a builtin
//! callable, and the reserved-word check runs first, so it always labels as
//! a keyword.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use crate::scope::Scope;

/// Reserved words of the language.
pub(crate) const KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "exec", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "not", "or",
    "pass", "print", "raise", "return", "try", "while", "with", "yield",
];

/// Builtin singletons and sentinels.
pub(crate) const BUILTIN_CONSTANTS: &[&str] =
    &["True", "False", "None", "NotImplemented", "Ellipsis", "__debug__"];

/// Builtin callables.
pub(crate) const BUILTIN_FUNCTIONS: &[&str] = &[
    "abs", "divmod", "input", "open", "staticmethod", "all", "enumerate", "int", "ord", "str",
    "any", "eval", "isinstance", "pow", "sum", "basestring", "execfile", "issubclass", "print",
    "super", "binfile", "iter", "property", "tuple", "bool", "filter", "len", "range", "type",
    "bytearray", "float", "list", "raw_input", "unichr", "callable", "format", "locals", "reduce",
    "unicode", "chr", "frozenset", "long", "reload", "vars", "classmethod", "getattr", "map",
    "repr", "xrange", "cmp", "globals", "max", "reversed", "zip", "compile", "hasattr",
    "memoryview", "round", "__import__", "complex", "hash", "min", "set", "apply", "delattr",
    "help", "next", "setattr", "buffer", "dict", "hex", "object", "slice", "coerce", "dir", "id",
    "oct", "sorted", "intern",
];

/// Names reserved for future language revisions. Currently none, but the
/// classifier keeps the priority slot so additions stay a one-line change.
pub(crate) const FUTURE_RESERVED: &[&str] = &[];

/// Deprecated name flagged specially by the classifier.
pub(crate) const DEPRECATED: &str = "debugger";

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static BUILTIN_CONSTANT_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| BUILTIN_CONSTANTS.iter().copied().collect());

static BUILTIN_FUNCTION_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| BUILTIN_FUNCTIONS.iter().copied().collect());

static FUTURE_RESERVED_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| FUTURE_RESERVED.iter().copied().collect());

/// Classify identifier-like text into its most specific scope.
///
/// Priority: keyword > builtin constant > future-reserved > builtin
/// function > deprecated `debugger` > plain identifier.
pub fn classify(text: &str) -> Scope {
    if KEYWORD_SET.contains(text) {
        Scope::Keyword
    } else if BUILTIN_CONSTANT_SET.contains(text) {
        Scope::BuiltinConstant
    } else if FUTURE_RESERVED_SET.contains(text) {
        Scope::Illegal
    } else if BUILTIN_FUNCTION_SET.contains(text) {
        Scope::BuiltinFunction
    } else if text == DEPRECATED {
        Scope::Deprecated
    } else {
        Scope::Identifier
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
