// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! TLA+ tokenizer core.
//!
//! This crate contains the stateful scanner an incremental parser needs to
//! tokenize the parts of TLA+ that context-free lexical rules cannot
//! express:
//! - Longest-match operator disambiguation (tokenization)
//! - Column-aligned junction list tracking (structural tokens)
//! - Free-text scanning (extramodular text, block comment bodies)
//! - Scanner state serialization for incremental reparses
//!
//! The scanner is designed as a library for a host parsing runtime: the
//! host declares which token kinds it accepts at each position, and the
//! scanner either produces a single token or declines.

#![doc = include_str!("../../../README.md")]

pub mod scan;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::scan::{Cursor, Scanner, Span, SymbolSet, Token, TokenKind};
}
