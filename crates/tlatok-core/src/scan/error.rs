// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the scanner's persisted state.
//!
//! Scanning itself never fails — "no match" is an ordinary outcome, and
//! host-contract violations are assertions, not errors. The only
//! fallible surface is deserializing a junction-list stack from bytes,
//! which is fatal to the host when it fails: state from an incremental
//! reparse that cannot be reconstructed exactly must not be guessed at.
//!
//! Errors integrate with [`miette`] for diagnostic reporting in the
//! surrounding tooling.

use miette::Diagnostic;
use thiserror::Error;

/// A malformed serialized junction-list stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum StateCodecError {
    /// The buffer length does not fit the declared stack depth.
    #[error(
        "serialized stack declares depth {depth} ({expected} bytes) but buffer holds {actual} bytes"
    )]
    LengthMismatch {
        /// Stack depth declared by the buffer's first byte.
        depth: u8,
        /// Byte length implied by the declared depth.
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// An entry's kind byte is neither conjunction nor disjunction.
    #[error("unknown junction kind byte {byte:#04x} in serialized stack")]
    UnknownJunctKind {
        /// The offending byte.
        byte: u8,
    },
}
