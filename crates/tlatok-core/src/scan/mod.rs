// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Scanning infrastructure for TLA+ source text.
//!
//! This module contains the stateful [`Scanner`] plus the pieces it is
//! built from: the codepoint [`Cursor`], the longest-match token
//! [`matcher`], the operator state machine, the junction-list tracker, and
//! the free-text scanners.
//!
//! # Scanning model
//!
//! The host parser drives scanning one lexical decision at a time. At each
//! position it builds a [`SymbolSet`] describing which token kinds it
//! would currently accept, then calls [`Scanner::scan`]. The scanner picks
//! a scan mode from the valid symbols (extramodular text, block comment
//! text, or general token lexing) and returns at most one [`Token`].
//!
//! ```
//! use tlatok_core::scan::{Cursor, Scanner, SymbolSet, TokenKind};
//!
//! let mut scanner = Scanner::new();
//! let mut cursor = Cursor::new("==== extra");
//! let valid = SymbolSet::DOUBLE_LINE;
//! let token = scanner.scan(&mut cursor, valid).expect("a token");
//! assert_eq!(token.kind(), TokenKind::DoubleLine);
//! ```
//!
//! # State
//!
//! The stack of open junction lists is the scanner's *entire* persistent
//! state. [`Scanner::serialize`] and [`Scanner::deserialize`] convert it
//! to and from a flat byte buffer so a host can discard the scanner
//! between edits and reconstruct an equivalent one later; see
//! [`StateCodecError`] for the failure modes.

mod cursor;
mod error;
mod free_text;
mod lexer;
mod scanner;
mod span;
mod token;

pub mod jlist;
pub mod matcher;


pub use cursor::Cursor;
pub use error::StateCodecError;
pub use jlist::{ColumnIndex, JunctKind, JunctList};
pub use scanner::{Scanner, MAX_STACK_DEPTH};
pub use span::Span;
pub use token::{SymbolSet, Token, TokenKind};
