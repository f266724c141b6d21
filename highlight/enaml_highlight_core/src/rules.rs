//! Rule tables: specification types and their compiled form.
//!
//! A mode is declared as data — `StateSpec`s holding ordered `RuleSpec`s —
//! and compiled into a [`RuleSet`] exactly once. Compilation is the only
//! fallible step in the crate: every pattern is validated and every state
//! reference resolved to an index, so scanning itself never has to deal with
//! a malformed table.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// What a rule does with its matched text.
#[derive(Clone, Copy, Debug)]
pub enum Action<L> {
    /// Attach this label to the matched text.
    Emit(L),
    /// Derive the label from the matched text. Used for identifier-like
    /// tokens whose label depends on closed membership sets (keywords,
    /// builtins). A plain `fn` pointer — classifiers need no captured state.
    Classify(fn(&str) -> L),
}

impl<L: Copy> Action<L> {
    pub(crate) fn apply(self, text: &str) -> L {
        match self {
            Self::Emit(label) => label,
            Self::Classify(classifier) => classifier(text),
        }
    }
}

/// One pattern-to-label entry, before compilation.
///
/// Order matters: rules are tried in declaration order and the first match
/// wins, so a `RuleSpec` only means something relative to its position in a
/// [`StateSpec`].
#[derive(Clone, Debug)]
pub struct RuleSpec<L> {
    pattern: String,
    action: Action<L>,
    next: Option<String>,
    merge: bool,
}

impl<L> RuleSpec<L> {
    /// Rule with a fixed label.
    pub fn emit(pattern: impl Into<String>, label: L) -> Self {
        Self {
            pattern: pattern.into(),
            action: Action::Emit(label),
            next: None,
            merge: false,
        }
    }

    /// Rule whose label is computed from the matched text.
    pub fn classify(pattern: impl Into<String>, classifier: fn(&str) -> L) -> Self {
        Self {
            pattern: pattern.into(),
            action: Action::Classify(classifier),
            next: None,
            merge: false,
        }
    }

    /// Continue scanning in `state` after this rule matches.
    pub fn continue_in(mut self, state: impl Into<String>) -> Self {
        self.next = Some(state.into());
        self
    }

    /// Mark the output for merging: instead of being emitted, the matched
    /// text is appended to the pending token of the same label (opening one
    /// if none is pending). Used by multi-line literal rules.
    pub fn merge(mut self) -> Self {
        self.merge = true;
        self
    }
}

/// A named, ordered collection of rules.
#[derive(Clone, Debug)]
pub struct StateSpec<L> {
    name: String,
    rules: Vec<RuleSpec<L>>,
}

impl<L> StateSpec<L> {
    pub fn new(name: impl Into<String>, rules: Vec<RuleSpec<L>>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}

/// Why a rule table failed to compile.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule table has no states")]
    Empty,

    #[error("duplicate state `{name}`")]
    DuplicateState { name: String },

    #[error("invalid pattern in state `{state}`, rule {index}: {source}")]
    InvalidPattern {
        state: String,
        index: usize,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("rule {index} in state `{state}` continues in unknown state `{target}`")]
    UnknownState {
        state: String,
        index: usize,
        target: String,
    },
}

/// Compiled rule. Patterns are anchored (`\A`) so matching at a position is
/// a match test, never a search.
#[derive(Debug)]
pub(crate) struct Rule<L> {
    pub(crate) regex: Regex,
    pub(crate) action: Action<L>,
    pub(crate) next: Option<usize>,
    pub(crate) merge: bool,
}

#[derive(Debug)]
pub(crate) struct State<L> {
    pub(crate) name: String,
    pub(crate) rules: Vec<Rule<L>>,
}

/// A compiled, immutable rule table.
///
/// A `RuleSet` holds no scan position or other mutable state; it can be
/// shared between any number of concurrent scans, each driven by its own
/// [`ScanState`](crate::ScanState) handle. The first state listed at
/// compile time is the initial one.
#[derive(Debug)]
pub struct RuleSet<L> {
    pub(crate) states: Vec<State<L>>,
    pub(crate) error_label: L,
}

impl<L: Copy> RuleSet<L> {
    /// Validate and compile a rule table.
    ///
    /// `error_label` is attached to the one-character fallback tokens the
    /// scanner emits where no rule matches.
    pub fn compile(spec: Vec<StateSpec<L>>, error_label: L) -> Result<Self, RuleError> {
        if spec.is_empty() {
            return Err(RuleError::Empty);
        }

        let mut names: Vec<&str> = Vec::with_capacity(spec.len());
        for state in &spec {
            if names.contains(&state.name.as_str()) {
                return Err(RuleError::DuplicateState {
                    name: state.name.clone(),
                });
            }
            names.push(&state.name);
        }

        let resolve = |target: &str| names.iter().position(|name| *name == target);

        let mut states = Vec::with_capacity(spec.len());
        for state in &spec {
            let mut rules = Vec::with_capacity(state.rules.len());
            for (index, rule) in state.rules.iter().enumerate() {
                let next = match &rule.next {
                    None => None,
                    Some(target) => Some(resolve(target).ok_or_else(|| {
                        RuleError::UnknownState {
                            state: state.name.clone(),
                            index,
                            target: target.clone(),
                        }
                    })?),
                };
                // Multi-line semantics so `$` asserts before a terminator:
                // chunks carry their line endings through the scanner.
                let regex = RegexBuilder::new(&format!(r"\A(?:{})", rule.pattern))
                    .multi_line(true)
                    .build()
                    .map_err(|source| RuleError::InvalidPattern {
                        state: state.name.clone(),
                        index,
                        source: Box::new(source),
                    })?;
                rules.push(Rule {
                    regex,
                    action: rule.action,
                    next,
                    merge: rule.merge,
                });
            }
            states.push(State {
                name: state.name.clone(),
                rules,
            });
        }

        Ok(Self {
            states,
            error_label,
        })
    }

    /// Name of the state a scan is currently in.
    pub fn state_name(&self, scan: &crate::ScanState<L>) -> &str {
        &self.states[scan.state].name
    }

    /// First rule of the active state matching at the start of `rest`.
    ///
    /// Zero-length matches are skipped so every accepted match consumes
    /// input; this is what bounds the scan at O(input length) attempts.
    pub(crate) fn first_match(&self, state: usize, rest: &str) -> Option<(&Rule<L>, usize)> {
        self.states[state].rules.iter().find_map(|rule| {
            let found = rule.regex.find(rest)?;
            (found.end() > 0).then_some((rule, found.end()))
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
