// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Junction list bookkeeping.
//!
//! A junction list is a vertically-aligned sequence of conjuncts (`/\`)
//! or disjuncts (`\/`). Each open list is identified by the column of its
//! first junction operator together with its kind; the column never
//! changes after creation. The scanner keeps a stack of these,
//! outermost first, and that stack is its entire persistent state.
//!
//! Each entry serializes to three bytes: kind, then alignment column as a
//! little-endian `u16`.

use super::error::StateCodecError;

/// Source column of a junction operator, 0-based and tab-independent.
pub type ColumnIndex = u16;

/// Whether a junction list joins its items with conjunction or
/// disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JunctKind {
    /// An AND-list: `/\` or `∧`.
    Conjunction,
    /// An OR-list: `\/` or `∨`.
    Disjunction,
}

impl JunctKind {
    const fn as_byte(self) -> u8 {
        match self {
            Self::Conjunction => 0,
            Self::Disjunction => 1,
        }
    }

    const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Conjunction),
            1 => Some(Self::Disjunction),
            _ => None,
        }
    }
}

/// One open junction list: its kind and the column that identifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctList {
    /// Conjunction or disjunction.
    pub kind: JunctKind,
    /// Column of the list's first junction operator.
    pub alignment_column: ColumnIndex,
}

impl JunctList {
    /// Serialized size of one entry in bytes.
    pub const ENCODED_LEN: usize = 3;

    /// Creates a new entry.
    #[must_use]
    pub const fn new(kind: JunctKind, alignment_column: ColumnIndex) -> Self {
        Self {
            kind,
            alignment_column,
        }
    }

    /// Appends this entry's encoding to the buffer, returning the number
    /// of bytes written.
    pub fn encode_into(self, buffer: &mut Vec<u8>) -> usize {
        buffer.push(self.kind.as_byte());
        buffer.extend_from_slice(&self.alignment_column.to_le_bytes());
        Self::ENCODED_LEN
    }

    /// Decodes one entry from exactly [`Self::ENCODED_LEN`] bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self, StateCodecError> {
        debug_assert_eq!(bytes.len(), Self::ENCODED_LEN);
        let kind = JunctKind::from_byte(bytes[0])
            .ok_or(StateCodecError::UnknownJunctKind { byte: bytes[0] })?;
        let alignment_column = ColumnIndex::from_le_bytes([bytes[1], bytes[2]]);
        Ok(Self {
            kind,
            alignment_column,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_round_trips() {
        let entry = JunctList::new(JunctKind::Disjunction, 0x1234);
        let mut buffer = Vec::new();
        assert_eq!(entry.encode_into(&mut buffer), JunctList::ENCODED_LEN);
        assert_eq!(buffer, [1, 0x34, 0x12]);
        assert_eq!(JunctList::decode(&buffer).unwrap(), entry);
    }

    #[test]
    fn column_encoding_is_little_endian() {
        let entry = JunctList::new(JunctKind::Conjunction, 258);
        let mut buffer = Vec::new();
        entry.encode_into(&mut buffer);
        assert_eq!(buffer, [0, 2, 1]);
    }

    #[test]
    fn unknown_kind_byte_is_rejected() {
        let err = JunctList::decode(&[7, 0, 0]).unwrap_err();
        assert_eq!(err, StateCodecError::UnknownJunctKind { byte: 7 });
    }
}
