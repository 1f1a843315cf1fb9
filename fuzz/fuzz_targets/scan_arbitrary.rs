// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for scanner crash safety testing.
//!
//! This target drives the scanner over arbitrary byte sequences the way a
//! host parser would: repeatedly, resuming after each committed token end
//! and stepping one codepoint past zero-width or declined positions. The
//! valid-symbol set excludes the free-text modes so the junction handlers
//! see every input and their structural tokens are always accepted.
//!
//! # Success Criteria
//!
//! The scanner passes fuzzing if:
//! - It never panics on any input (including invalid UTF-8, which is
//!   filtered before the scanner sees it)
//! - The driving loop always terminates
//! - Scanner state round-trips through the codec after every token

#![no_main]

use libfuzzer_sys::fuzz_target;
use tlatok_core::scan::{Cursor, Scanner, SymbolSet};

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 (the scanner expects strings)
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    let valid = SymbolSet::all()
        .difference(SymbolSet::EXTRAMODULAR_TEXT)
        .difference(SymbolSet::BLOCK_COMMENT_TEXT);

    let mut scanner = Scanner::new();
    let mut offset = 0;
    loop {
        let mut cursor = Cursor::resume(source, offset);
        let token = scanner.scan(&mut cursor, valid);

        let restored = Scanner::deserialize(&scanner.serialize()).expect("own output");
        assert_eq!(restored, scanner);

        match token.map(|t| t.span().as_range().end) {
            Some(end) if end > offset => offset = end,
            _ => match source[offset..].chars().next() {
                Some(c) => offset += c.len_utf8(),
                None => break,
            },
        }
    }
});
