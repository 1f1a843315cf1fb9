// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The stateful scanner: junction-list tracking, scan-mode dispatch, and
//! the persistent-state codec.

use tracing::trace;

use super::cursor::Cursor;
use super::error::StateCodecError;
use super::free_text;
use super::jlist::{ColumnIndex, JunctKind, JunctList};
use super::span::Span;
use super::token::{SymbolSet, Token, TokenKind};

/// Maximum supported nesting depth of junction lists.
///
/// The serialized form records the depth in a single byte.
pub const MAX_STACK_DEPTH: usize = u8::MAX as usize;

/// A scanner for the context-sensitive parts of TLA+: junction lists,
/// free text, and the operator tokens that interact with them.
///
/// The stack of open junction lists is the scanner's entire state. The
/// host parser owns the cursor; the scanner only ever sees one scan call
/// at a time and communicates position through the returned token spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanner {
    /// Open junction lists, outermost first.
    jlists: Vec<JunctList>,
}

impl Scanner {
    /// Creates a scanner with no open junction lists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open junction lists.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.jlists.len()
    }

    /// Returns `true` if at least one junction list is open.
    #[must_use]
    pub fn is_in_jlist(&self) -> bool {
        !self.jlists.is_empty()
    }

    /// Scans for the next token the host would accept.
    ///
    /// The scan mode is chosen from `valid`: the error-recovery pattern
    /// unwinds one junction list per call, the free-text symbols select
    /// their dedicated scanners, and anything else runs the operator
    /// state machine. Returns `None` when the input belongs to the
    /// host's own lexer.
    ///
    /// # Panics
    ///
    /// Panics if the host demands a junction-list transition while
    /// rejecting the structural token that transition must produce; that
    /// is a host-contract violation, not a malformed-input condition.
    pub fn scan(&mut self, cursor: &mut Cursor<'_>, valid: SymbolSet) -> Option<Token> {
        if valid.is_error_recovery() {
            // The host marks every symbol valid during syntax-error
            // recovery. Unwind open lists one per call so the tree does
            // not keep dangling list nodes past the error.
            trace!(depth = self.depth(), "scan mode: error recovery");
            return self.is_in_jlist().then(|| {
                self.jlists.pop();
                let pos = cursor.pos();
                Token::new(TokenKind::Dedent, Span::from(pos..pos))
            });
        }

        if valid.contains(SymbolSet::EXTRAMODULAR_TEXT) {
            trace!("scan mode: extramodular text");
            free_text::scan_extramodular_text(cursor)
        } else if valid.contains(SymbolSet::BLOCK_COMMENT_TEXT) {
            trace!("scan mode: block comment text");
            free_text::scan_block_comment_text(cursor)
        } else {
            trace!(depth = self.depth(), "scan mode: lex");
            self.lex(cursor, valid)
        }
    }

    /// Reacts to a junction operator of the given kind at the given
    /// column.
    ///
    /// A junction further right than the innermost open list starts a
    /// nested list when the host expects one and is an ordinary infix
    /// operator otherwise. A junction aligned with the innermost list
    /// continues it when the kinds agree and ends it when they differ. A
    /// junction further left ends the innermost list.
    pub(crate) fn handle_junct(
        &mut self,
        valid: SymbolSet,
        kind: JunctKind,
        column: u32,
    ) -> Option<TokenKind> {
        match self.jlists.last().copied() {
            Some(current) if column <= u32::from(current.alignment_column) => {
                if column == u32::from(current.alignment_column) && current.kind == kind {
                    assert!(
                        valid.accepts(TokenKind::Newline),
                        "host rejects the list separator an aligned junction requires"
                    );
                    trace!(?kind, column, "junction continues the current list");
                    Some(TokenKind::Newline)
                } else {
                    assert!(
                        valid.accepts(TokenKind::Dedent),
                        "host rejects the list end a junction requires"
                    );
                    trace!(?kind, column, "junction ends the current list");
                    self.jlists.pop();
                    Some(TokenKind::Dedent)
                }
            }
            _ => {
                // The depth cap keeps the serialized form's one-byte
                // depth field honest; lists past it lex as infix.
                if valid.accepts(TokenKind::Indent) && self.jlists.len() < MAX_STACK_DEPTH {
                    trace!(?kind, column, depth = self.depth() + 1, "new junction list");
                    self.jlists.push(JunctList::new(
                        kind,
                        ColumnIndex::try_from(column).unwrap_or(ColumnIndex::MAX),
                    ));
                    Some(TokenKind::Indent)
                } else {
                    // An infix junction joining two expressions; the host
                    // only looks for a new list at expression starts.
                    None
                }
            }
        }
    }

    /// Reacts to a right delimiter: `)`, `]`, `}`, `>>`, or a keyword
    /// pair like `THEN`/`ELSE`.
    ///
    /// A right delimiter matching a left delimiter from before the
    /// innermost list began ends that list. The host never asks this
    /// scanner about delimiters opened *inside* the list, so no
    /// delimiter pairing stack is needed; the dedent is simply gated on
    /// whether the host would accept one.
    pub(crate) fn handle_right_delimiter(&mut self, valid: SymbolSet) -> Option<TokenKind> {
        (self.is_in_jlist() && valid.accepts(TokenKind::Dedent)).then(|| {
            trace!("right delimiter ends the current list");
            self.jlists.pop();
            TokenKind::Dedent
        })
    }

    /// Reacts to a token that unconditionally ends junction lists
    /// regardless of column: a new unit definition, the module-end
    /// token, or end of input.
    pub(crate) fn handle_terminator(&mut self, valid: SymbolSet) -> Option<TokenKind> {
        self.is_in_jlist().then(|| {
            assert!(
                valid.accepts(TokenKind::Dedent),
                "host rejects the list end a terminator requires"
            );
            trace!("terminator ends the current list");
            self.jlists.pop();
            TokenKind::Dedent
        })
    }

    /// Reacts to any other token at the given column.
    ///
    /// A token at or left of the innermost list's alignment column ends
    /// the list; a token further right is part of the current item's
    /// expression.
    pub(crate) fn handle_other(&mut self, valid: SymbolSet, column: u32) -> Option<TokenKind> {
        let current = self.jlists.last().copied()?;
        if column <= u32::from(current.alignment_column) {
            assert!(
                valid.accepts(TokenKind::Dedent),
                "host rejects the list end an out-dented token requires"
            );
            trace!(column, "out-dented token ends the current list");
            self.jlists.pop();
            Some(TokenKind::Dedent)
        } else {
            None
        }
    }

    /// Appends the serialized scanner state to the buffer, returning the
    /// number of bytes written.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_STACK_DEPTH`] junction lists are open.
    pub fn serialize_into(&self, buffer: &mut Vec<u8>) -> usize {
        let depth = self.jlists.len();
        assert!(
            depth <= MAX_STACK_DEPTH,
            "junction lists nested deeper than {MAX_STACK_DEPTH}"
        );
        #[expect(
            clippy::cast_possible_truncation,
            reason = "depth is asserted to fit in one byte"
        )]
        buffer.push(depth as u8);
        let mut written = 1;
        for entry in &self.jlists {
            written += entry.encode_into(buffer);
        }
        written
    }

    /// Returns the serialized scanner state as a fresh buffer.
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(1 + self.jlists.len() * JunctList::ENCODED_LEN);
        self.serialize_into(&mut buffer);
        buffer
    }

    /// Reconstructs a scanner from a buffer produced by
    /// [`Scanner::serialize`].
    ///
    /// An empty buffer is a scanner with no open lists. Errors are fatal
    /// to the host: state that cannot be reconstructed exactly must not
    /// be guessed at.
    pub fn deserialize(buffer: &[u8]) -> Result<Self, StateCodecError> {
        if buffer.is_empty() {
            return Ok(Self::new());
        }
        let depth = buffer[0];
        let expected = 1 + usize::from(depth) * JunctList::ENCODED_LEN;
        if buffer.len() != expected {
            return Err(StateCodecError::LengthMismatch {
                depth,
                expected,
                actual: buffer.len(),
            });
        }
        let mut jlists = Vec::with_capacity(usize::from(depth));
        for entry in buffer[1..].chunks_exact(JunctList::ENCODED_LEN) {
            jlists.push(JunctList::decode(entry)?);
        }
        Ok(Self { jlists })
    }

    /// Creates a scanner with the given open lists, outermost first.
    #[cfg(test)]
    pub(crate) fn with_stack(jlists: Vec<JunctList>) -> Self {
        Self { jlists }
    }
}
