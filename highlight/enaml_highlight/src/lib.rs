//! Syntax-highlighting mode for the Enaml declarative UI language.
//!
//! Enaml is a Python-superset markup language for describing GUI component
//! trees: Python expressions and statements, plus declarative constructs
//! such as `enamldef` blocks and `attr` declarations. This crate packages
//! the language's token rules as a [`RuleSet`] over the generic
//! `enaml_highlight_core` engine:
//!
//! - [`Scope`] — the label attached to every token, with a stable
//!   presentation name per variant for style lookup downstream;
//! - [`classify`] — the identifier classifier (keywords, builtin constants
//!   and functions, the deprecated `debugger` name);
//! - [`mode`] — the compiled rule table, including the `qqstring`/`qstring`
//!   states that stitch triple-quoted string literals back together across
//!   line boundaries.
//!
//! Rule order is load-bearing and is kept exactly as the language's editor
//! mode defines it, including its tie-breaks (see `mode`'s docs).

mod mode;
mod patterns;
mod scope;
mod words;

pub use enaml_highlight_core::{RuleError, RuleSet, ScanState, Token, Tokens};
pub use mode::mode;
pub use scope::Scope;
pub use words::classify;
