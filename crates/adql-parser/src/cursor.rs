// Input cursor for the recursive descent grammar.
//
// A byte-position cursor over the source text. Ordered-choice alternation
// works by saving the position, trying a rule, and rewinding on failure, so
// no partial consumption leaks between alternatives.
//
// Invariant: the position always sits on a UTF-8 boundary. Single-byte
// advances only happen on ASCII structural characters; quoted content moves
// in whole chunks delimited by ASCII quote bytes.

use crate::error::ParseError;

pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Current byte offset; doubles as a checkpoint for [`Self::rewind`].
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Roll back to a previously saved position.
    pub(crate) fn rewind(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// The unconsumed remainder of the input.
    pub(crate) fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// The whole source text.
    pub(crate) fn source(&self) -> &'a str {
        self.text
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Advance one byte. Callers only bump over ASCII.
    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    /// Advance `n` bytes (a chunk already known to end on a boundary).
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consume `byte` if it is next.
    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the exact literal `prefix` if the input starts with it.
    pub(crate) fn eat_str(&mut self, prefix: &str) -> bool {
        if self.rest().as_bytes().starts_with(prefix.as_bytes()) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    /// Consume the longest (possibly empty) run of bytes matching `pred`.
    pub(crate) fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if pred(byte) {
                self.pos += 1;
            } else {
                break;
            }
        }
        &self.text[start..self.pos]
    }

    /// Skip any run of ASCII whitespace.
    pub(crate) fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(byte) if byte.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Build a [`ParseError`] for `rule` at the current position.
    pub(crate) fn error(&self, rule: &'static str, message: impl Into<String>) -> ParseError {
        ParseError::new(rule, message, self.text, self.pos)
    }
}
