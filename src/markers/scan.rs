//! Quote-aware scanning shared by the tokenizer and the argument extractor.
//!
//! Marker values may be single- or double-quoted, may contain the expression
//! separator (`,`) inside quotes, and may escape the active quote character
//! with a backslash. Both the identifier/argument boundary scan and the
//! argument split walk the text through this state machine so they agree on
//! what is quoted.

/// Current quote context while scanning left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuoteState {
    None,
    Single,
    Double,
}

impl QuoteState {
    fn quote_byte(self) -> Option<u8> {
        match self {
            QuoteState::None => None,
            QuoteState::Single => Some(b'\''),
            QuoteState::Double => Some(b'"'),
        }
    }
}

/// Tracks quote/escape state over a byte scan.
///
/// All structural characters (quotes, backslash, separators) are ASCII, so
/// scanning bytes keeps offsets exact; multi-byte characters pass through
/// without ever matching a structural byte.
#[derive(Debug)]
pub(crate) struct QuoteTracker {
    state: QuoteState,
}

impl QuoteTracker {
    pub(crate) fn new() -> Self {
        Self {
            state: QuoteState::None,
        }
    }

    pub(crate) fn in_quote(&self) -> bool {
        self.state != QuoteState::None
    }

    /// Advance over the byte at `index`, returning how many bytes were
    /// consumed (2 when an escaped quote is skipped, 1 otherwise).
    ///
    /// A `\` escapes only the active quote character, and only inside a
    /// quote; outside quotes it has no special meaning. A quote that was
    /// opened is closed by the next unescaped occurrence of the same quote
    /// character and is never re-opened by its own closer.
    pub(crate) fn step(&mut self, bytes: &[u8], index: usize) -> usize {
        let b = bytes[index];
        match self.state.quote_byte() {
            None => {
                match b {
                    b'\'' => self.state = QuoteState::Single,
                    b'"' => self.state = QuoteState::Double,
                    _ => {}
                }
                1
            }
            Some(quote) => {
                if b == b'\\' && index + 1 < bytes.len() && bytes[index + 1] == quote {
                    2
                } else {
                    if b == quote {
                        self.state = QuoteState::None;
                    }
                    1
                }
            }
        }
    }
}
