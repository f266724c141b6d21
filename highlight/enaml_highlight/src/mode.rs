//! The Enaml rule table.
//!
//! Three states: `start`, and one continuation state per triple-quote
//! flavor (`qqstring` for `"""`, `qstring` for `'''`). A triple-quoted
//! literal that does not close on its own line parks as a merge-pending
//! token and the continuation state stitches the following lines onto it
//! until the closing delimiter hands control back to `start`.
//!
//! Rule order is part of the language's observable behavior and is
//! preserved as-is, tie-breaks included: `attr` matches as a bare prefix
//! (so `attrx` lexes as `attr` + `x`), and the operator alternation lists
//! `*` before `**` and `<` before `<=`, so those longer operators lex as
//! two tokens. Resist the urge to "fix" the order — downstream style
//! sheets and tests are written against it.

use enaml_highlight_core::{RuleError, RuleSet, RuleSpec, StateSpec};

use crate::patterns::{float_number, integer, STRING_PREFIX};
use crate::scope::Scope;
use crate::words::classify;

/// Build the compiled Enaml rule table.
///
/// The table is validated data, not code; compiling it cannot fail unless
/// the table itself is edited, so callers typically build it once at
/// startup and propagate the error.
pub fn mode() -> Result<RuleSet<Scope>, RuleError> {
    let pre = STRING_PREFIX;
    let float = float_number();
    let int = integer();

    let start = StateSpec::new(
        "start",
        vec![
            RuleSpec::emit("enamldef", Scope::Keyword),
            RuleSpec::emit("attr", Scope::Keyword),
            RuleSpec::emit("#.*$", Scope::Comment),
            // """ string closed on the same line
            RuleSpec::emit(
                format!(r#"{pre}"{{3}}(?:[^\\]|\\.)*?"{{3}}"#),
                Scope::String,
            ),
            // multi-line """ string start
            RuleSpec::emit(format!(r#"{pre}"{{3}}.*$"#), Scope::String)
                .merge()
                .continue_in("qqstring"),
            // " string
            RuleSpec::emit(format!(r#"{pre}"(?:[^\\]|\\.)*?""#), Scope::String),
            // ''' string closed on the same line
            RuleSpec::emit(format!(r"{pre}'{{3}}(?:[^\\]|\\.)*?'{{3}}"), Scope::String),
            // multi-line ''' string start
            RuleSpec::emit(format!(r"{pre}'{{3}}.*$"), Scope::String)
                .merge()
                .continue_in("qstring"),
            // ' string
            RuleSpec::emit(format!(r"{pre}'(?:[^\\]|\\.)*?'"), Scope::String),
            // imaginary
            RuleSpec::emit(format!(r"(?:{float}|\d+)[jJ]\b"), Scope::Numeric),
            // float (no trailing boundary: `1.5x` lexes as `1.5` + `x`)
            RuleSpec::emit(float, Scope::Numeric),
            // long integer
            RuleSpec::emit(format!(r"{int}[lL]\b"), Scope::Numeric),
            // integer
            RuleSpec::emit(format!(r"{int}\b"), Scope::Numeric),
            RuleSpec::classify(r"[a-zA-Z_$][a-zA-Z0-9_$]*\b", classify),
            RuleSpec::emit(
                r"\+|\-|\*|\*\*|/|//|%|<<|>>|&|\||\^|~|<|>|<=|=>|==|!=|<>|=",
                Scope::Operator,
            ),
            RuleSpec::emit(r"[\[\(\{]", Scope::ParenOpen),
            RuleSpec::emit(r"[\]\)\}]", Scope::ParenClose),
            RuleSpec::emit(r"\s+", Scope::Text),
        ],
    );

    let qqstring = StateSpec::new(
        "qqstring",
        vec![
            // multi-line """ string end
            RuleSpec::emit(r#"(?:[^\\]|\\.)*?"{3}"#, Scope::String).continue_in("start"),
            RuleSpec::emit(".+", Scope::String).merge(),
        ],
    );

    let qstring = StateSpec::new(
        "qstring",
        vec![
            // multi-line ''' string end
            RuleSpec::emit(r"(?:[^\\]|\\.)*?'{3}", Scope::String).continue_in("start"),
            RuleSpec::emit(".+", Scope::String).merge(),
        ],
    );

    RuleSet::compile(vec![start, qqstring, qstring], Scope::Error)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
