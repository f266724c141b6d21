//! Whole-buffer scanning as a lazy token iterator.

use crate::rules::RuleSet;
use crate::scanner::ScanState;
use crate::token::Token;

impl<L: Copy + PartialEq> RuleSet<L> {
    /// Scan a whole buffer lazily.
    ///
    /// The buffer is split into terminator-inclusive lines which are fed
    /// through one internal [`ScanState`], so multi-line literals merge
    /// exactly as they would under incremental line-at-a-time scanning. The
    /// concatenated text of the yielded tokens reproduces `text` byte for
    /// byte. The iterator is one-shot; call `scan` again for a fresh pass
    /// (the result is identical, scanning has no hidden state).
    pub fn scan<'r, 's>(&'r self, text: &'s str) -> Tokens<'r, 's, L> {
        Tokens {
            rules: self,
            text,
            pos: 0,
            scan: self.start(),
            line: Vec::new().into_iter(),
            flushed: false,
        }
    }
}

/// Lazy token sequence over a whole buffer. Created by [`RuleSet::scan`].
///
/// Lines are scanned on demand, one at a time, and their tokens handed out
/// individually; the pending token of an unterminated multi-line literal is
/// flushed as the final item.
#[derive(Debug)]
pub struct Tokens<'r, 's, L> {
    rules: &'r RuleSet<L>,
    text: &'s str,
    /// Byte offset of the next unscanned line.
    pos: usize,
    scan: ScanState<L>,
    line: std::vec::IntoIter<Token<L>>,
    flushed: bool,
}

impl<L: Copy + PartialEq> Iterator for Tokens<'_, '_, L> {
    type Item = Token<L>;

    fn next(&mut self) -> Option<Token<L>> {
        loop {
            if let Some(token) = self.line.next() {
                return Some(token);
            }
            if self.pos < self.text.len() {
                let rest = &self.text.as_bytes()[self.pos..];
                // `\n` is ASCII, so the split point is always a char boundary.
                let end = memchr::memchr(b'\n', rest)
                    .map_or(self.text.len(), |at| self.pos + at + 1);
                let chunk = &self.text[self.pos..end];
                self.pos = end;
                self.line = self.rules.scan_chunk(&mut self.scan, chunk).into_iter();
                continue;
            }
            if !self.flushed {
                self.flushed = true;
                if let Some(tail) = self.scan.finish() {
                    return Some(tail);
                }
            }
            return None;
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
