//! Rule-table scanner for editor syntax highlighting.
//!
//! A mode is described as an ordered list of named [`StateSpec`]s, each
//! holding pattern-to-label [`RuleSpec`]s. [`RuleSet::compile`] validates the
//! table once; scanning is then total: every input produces a complete token
//! sequence, with unmatched bytes degrading to an error-labeled token rather
//! than a failure.
//!
//! # Scanning model
//!
//! At each position the active state's rules are tried top-to-bottom and the
//! first pattern that matches (anchored at the position) wins. This is
//! first-match-wins, not longest-match: rule order is part of the mode's
//! contract. A rule may switch the active state and may mark its output for
//! merging, which is how multi-line literals coalesce into one token across
//! chunk boundaries.
//!
//! # Incremental use
//!
//! Editors feed one line at a time. The caller holds a [`ScanState`] handle
//! carrying the active state and any partially-merged token, threads it
//! through [`RuleSet::scan_chunk`] calls, and flushes it with
//! [`ScanState::finish`] at end of input. [`RuleSet::scan`] wraps the same
//! machinery into a lazy whole-buffer iterator.

mod document;
mod rules;
mod scanner;
mod token;

pub use document::Tokens;
pub use rules::{Action, RuleError, RuleSet, RuleSpec, StateSpec};
pub use scanner::ScanState;
pub use token::Token;
