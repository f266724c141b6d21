//! The chunk scanner and the caller-held scan state.
//!
//! Scanning is total by construction. Each step either matches a rule
//! (consuming the match) or falls back to a single character, so progress is
//! strictly forward and any input yields a complete token sequence — the
//! robustness an editor needs while the user is mid-keystroke. There is no
//! error `Result` anywhere on this path.

use tracing::{debug, trace};

use crate::rules::RuleSet;
use crate::token::Token;

/// Scan state carried by the caller between chunk scans.
///
/// Holds the active state and the pending partially-merged token (an open
/// multi-line literal). Create one with [`RuleSet::start`], thread it
/// through [`RuleSet::scan_chunk`] calls, then [`finish`](Self::finish) it.
/// Handles are cheap to clone, e.g. to checkpoint per-line states for
/// re-scanning edited lines.
#[derive(Clone, Debug)]
pub struct ScanState<L> {
    pub(crate) state: usize,
    pub(crate) pending: Option<Token<L>>,
}

impl<L> ScanState<L> {
    /// `true` while a merge-flagged token is still accumulating, i.e. a
    /// multi-line literal was opened and its closer has not been seen yet.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Flush the pending token at end of input.
    ///
    /// Returns the accumulated token when the input ended inside an open
    /// multi-line literal, `None` otherwise.
    pub fn finish(&mut self) -> Option<Token<L>> {
        self.pending.take()
    }
}

impl<L: Copy + PartialEq> RuleSet<L> {
    /// Fresh scan state positioned in the initial state.
    pub fn start(&self) -> ScanState<L> {
        ScanState {
            state: 0,
            pending: None,
        }
    }

    /// Scan one chunk (typically a single line, terminator included),
    /// returning the tokens it produced in order.
    ///
    /// Tokens held back for merging stay inside `scan` and surface once a
    /// non-merge rule of the same label completes them, or at
    /// [`ScanState::finish`]. Where no rule matches, a single character is
    /// consumed: it joins the pending token when one is open (an open
    /// literal absorbs bytes its state's rules do not cover — line
    /// terminators in particular), and otherwise becomes a one-character
    /// token with the table's error label.
    pub fn scan_chunk(&self, scan: &mut ScanState<L>, chunk: &str) -> Vec<Token<L>> {
        let mut out = Vec::new();
        let mut pos = 0;

        while pos < chunk.len() {
            let rest = &chunk[pos..];
            if let Some((rule, len)) = self.first_match(scan.state, rest) {
                let text = &rest[..len];
                let label = rule.action.apply(text);
                if let Some(next) = rule.next {
                    if next != scan.state {
                        trace!(
                            from = self.states[scan.state].name.as_str(),
                            to = self.states[next].name.as_str(),
                            "state transition"
                        );
                    }
                    scan.state = next;
                }
                deliver(scan, &mut out, label, text, rule.merge);
                pos += len;
            } else {
                let width = rest.chars().next().map_or(1, char::len_utf8);
                let text = &rest[..width];
                if let Some(pending) = scan.pending.as_mut() {
                    pending.text.push_str(text);
                } else {
                    debug!(offset = pos, text, "no rule matched, emitting error token");
                    out.push(Token::new(self.error_label, text));
                }
                pos += width;
            }
        }

        out
    }
}

/// Route one produced token through the pending slot.
///
/// Coalescing is by label: a token that matches the pending token's label
/// extends it, anything else flushes the pending token first. Merge-flagged
/// output parks in the slot; everything else is emitted immediately.
fn deliver<L: PartialEq>(
    scan: &mut ScanState<L>,
    out: &mut Vec<Token<L>>,
    label: L,
    text: &str,
    merge: bool,
) {
    match scan.pending.take() {
        Some(mut pending) if pending.label == label => {
            pending.text.push_str(text);
            if merge {
                scan.pending = Some(pending);
            } else {
                out.push(pending);
            }
        }
        other => {
            if let Some(open) = other {
                out.push(open);
            }
            let token = Token::new(label, text);
            if merge {
                scan.pending = Some(token);
            } else {
                out.push(token);
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
