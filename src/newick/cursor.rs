//! Byte-level cursor over a Newick string.
//!
//! All Newick delimiters are single ASCII bytes, so scanning byte by byte
//! is safe on UTF-8 input: multi-byte label characters never collide with a
//! delimiter and are carried through untouched.

/// Cursor over the bytes of a borrowed Newick string.
pub(crate) struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Cursor {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    /// Returns the byte at the cursor without advancing, or `None` at the
    /// end of input.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Advances the cursor by one byte.
    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    /// Returns the current byte offset, for error reporting.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// Skips ASCII whitespace (spaces, tabs, newlines between tokens).
    pub(crate) fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.bump();
        }
    }

    /// Consumes and returns the longest run of bytes not in `delims`.
    ///
    /// The returned slice may be empty. Stops at the end of input. Since
    /// delimiters are ASCII and the cursor started on a char boundary, the
    /// result is always valid UTF-8.
    pub(crate) fn take_until(&mut self, delims: &[u8]) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if delims.contains(&b) {
                break;
            }
            self.bump();
        }
        &self.text[start..self.pos]
    }

    /// Returns up to `width` characters of input around the current
    /// position, for error context.
    pub(crate) fn context(&self, width: usize) -> String {
        let from = self.pos.saturating_sub(width);
        let to = (self.pos + width).min(self.text.len());

        // Snap to char boundaries so slicing cannot split a code point.
        let mut from = from;
        while !self.text.is_char_boundary(from) {
            from -= 1;
        }
        let mut to = to;
        while !self.text.is_char_boundary(to) {
            to += 1;
        }
        self.text[from..to].to_string()
    }
}
