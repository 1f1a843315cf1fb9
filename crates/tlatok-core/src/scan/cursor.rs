// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Codepoint cursor over a source buffer.
//!
//! The cursor is the scanner's only view of the source text: peek one
//! codepoint, consume it (as token content or as whitespace), and commit
//! candidate token boundaries with [`Cursor::mark_end`]. EOF is a normal
//! terminal value (`None`), never an error.
//!
//! # Lookahead and `mark_end`
//!
//! The scanner routinely consumes codepoints beyond the token it finally
//! accepts — longest-match lookahead requires it. The consumed-but-not-
//! accepted tail is plain lookahead: the token's extent is whatever was
//! committed by the *last* `mark_end` call, and the host resumes its next
//! scan from that committed end, not from the cursor position.

use std::iter::Peekable;
use std::str::Chars;

use super::Span;

/// Returns `true` if the codepoint is TLA+ whitespace.
pub(crate) const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// A cursor over source text, tracking position, column, and the
/// candidate token boundaries.
pub struct Cursor<'src> {
    /// Remaining codepoints.
    chars: Peekable<Chars<'src>>,
    /// Current byte position in the full source buffer.
    pos: usize,
    /// 0-based codepoint column on the current line. Tab-independent: a
    /// tab advances the column by exactly one.
    column: u32,
    /// Byte position where the candidate token starts.
    token_start: usize,
    /// Byte position committed as the candidate token end.
    marked_end: usize,
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("column", &self.column)
            .field("token_start", &self.token_start)
            .field("marked_end", &self.marked_end)
            .finish()
    }
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::resume(source, 0)
    }

    /// Creates a cursor at the given byte offset into the source text.
    ///
    /// The column is recomputed from the content of the line containing
    /// `offset`, so a scanner reconstructed from serialized state plus a
    /// resumed cursor behaves identically to the original run.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not a character boundary of `source`.
    #[must_use]
    pub fn resume(source: &'src str, offset: usize) -> Self {
        let line_start = source[..offset].rfind('\n').map_or(0, |nl| nl + 1);
        let column = source[line_start..offset].chars().count();
        Self {
            chars: source[offset..].chars().peekable(),
            pos: offset,
            column: u32::try_from(column).unwrap_or(u32::MAX),
            token_start: offset,
            marked_end: offset,
        }
    }

    /// Peeks at the next codepoint without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    /// Returns `true` if there are no codepoints left.
    pub fn is_eof(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Consumes the next codepoint and returns it.
    ///
    /// With `mark_as_whitespace` the codepoint is excluded from the
    /// candidate token: the token start (and the committed end) move past
    /// it. The scanner uses this for leading whitespace only.
    pub fn advance(&mut self, mark_as_whitespace: bool) -> Option<char> {
        let c = self.chars.next()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.column = 0;
        } else {
            self.column += 1;
        }
        if mark_as_whitespace {
            self.token_start = self.pos;
            self.marked_end = self.pos;
        }
        Some(c)
    }

    /// Consumes codepoints while the predicate holds, returning how many
    /// were consumed.
    pub fn advance_while(
        &mut self,
        mark_as_whitespace: bool,
        predicate: impl Fn(char) -> bool,
    ) -> usize {
        let mut consumed = 0;
        while self.peek().is_some_and(&predicate) {
            self.advance(mark_as_whitespace);
            consumed += 1;
        }
        consumed
    }

    /// Commits the current position as the candidate token's end.
    ///
    /// May be called repeatedly; only the last call before the scanner
    /// accepts a token counts.
    pub fn mark_end(&mut self) {
        self.marked_end = self.pos;
    }

    /// Returns the current byte position (including lookahead).
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Returns the 0-based codepoint column of the current position.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the candidate token span: from the token start to the last
    /// committed end.
    #[must_use]
    pub fn token_span(&self) -> Span {
        Span::from(self.token_start..self.marked_end)
    }
}
