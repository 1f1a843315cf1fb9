// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Prints the tokens this scanner contributes for a TLA+ source file.
//!
//! Usage: `cargo run --example tokenize -- path/to/Spec.tla`
//!
//! A real host parser computes a fresh valid-symbol set from its grammar
//! tables before every scan call. This example stands in for one with a
//! fixed set that accepts everything outside the free-text modes, and
//! steps one codepoint whenever the scanner declines or produces a
//! zero-width structural token.

use miette::{IntoDiagnostic, Result};
use tlatok_core::scan::{Cursor, Scanner, SymbolSet, Token};

fn main() -> Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: tokenize <file.tla>");
        std::process::exit(2);
    };
    let source = std::fs::read_to_string(&path).into_diagnostic()?;

    let valid = SymbolSet::all()
        .difference(SymbolSet::EXTRAMODULAR_TEXT)
        .difference(SymbolSet::BLOCK_COMMENT_TEXT);

    let mut scanner = Scanner::new();
    let mut offset = 0;
    let mut last_printed: Option<Token> = None;
    loop {
        let mut cursor = Cursor::resume(&source, offset);
        let token = scanner.scan(&mut cursor, valid);
        if let Some(token) = token {
            // Re-scanning at a zero-width token's position repeats it;
            // a real host consumes the operator before calling again.
            if last_printed != Some(token) {
                let range = token.span().as_range();
                println!(
                    "{:>5}..{:<5} {:<24} {:?}",
                    range.start,
                    range.end,
                    token.kind().to_string(),
                    &source[range.clone()],
                );
                last_printed = Some(token);
            }
        }

        match token.map(|t| t.span().as_range().end) {
            Some(end) if end > offset => offset = end,
            _ => match source[offset..].chars().next() {
                Some(c) => offset += c.len_utf8(),
                None => break,
            },
        }
    }

    if scanner.is_in_jlist() {
        eprintln!("warning: {} junction list(s) still open at EOF", scanner.depth());
    }
    Ok(())
}
