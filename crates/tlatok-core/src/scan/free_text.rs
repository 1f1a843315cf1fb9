// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Free-text scanners: extramodular text and block comment bodies.
//!
//! Both scanners consume text one codepoint at a time and must stop
//! *before* their terminating pattern without consuming it — the
//! terminator belongs to the next token. They recognize terminators by
//! speculative lookahead: `mark_end` commits the text extent before the
//! lookahead begins, so a successful match leaves the delimiter outside
//! the returned span, and a failed match simply folds the consumed
//! codepoints back into the text.
//!
//! Both must also refuse to report success for zero consumed codepoints;
//! an empty success would starve the host's matching loop.

use super::cursor::{is_whitespace, Cursor};
use super::matcher;
use super::token::{Token, TokenKind};

/// Scans the freeform text that can be present outside TLA+ modules.
///
/// Skips leading whitespace (so newlines at the start or end of a file
/// do not become spurious text tokens), then consumes text until
/// lookahead captures a module header — `----[-]*[ ]*MODULE` — or EOF.
/// Dashes that fail the full header pattern count as ordinary text.
pub(crate) fn scan_extramodular_text(cursor: &mut Cursor<'_>) -> Option<Token> {
    cursor.advance_while(true, is_whitespace);
    let mut has_consumed_any = false;
    while let Some(c) = cursor.peek() {
        if c == '-' {
            cursor.mark_end();
            if matcher::is_next_token(cursor, matcher::SINGLE_LINE_TOKEN) {
                cursor.advance_while(false, |c| c == '-');
                cursor.advance_while(false, |c| c == ' ');
                if matcher::is_next_token(cursor, matcher::MODULE_TOKEN) {
                    return emit(cursor, has_consumed_any);
                }
                has_consumed_any = true;
            } else {
                has_consumed_any = true;
            }
        } else {
            cursor.advance(false);
            has_consumed_any = true;
        }
    }

    cursor.mark_end();
    emit(cursor, has_consumed_any)
}

/// Scans block comment body text: anything except the `(*` and `*)`
/// delimiters.
///
/// Consumes up to (but not including) either delimiter or EOF. Nesting
/// is not tracked here; the host re-enters this scanner one level at a
/// time after tokenizing a nested start delimiter itself.
pub(crate) fn scan_block_comment_text(cursor: &mut Cursor<'_>) -> Option<Token> {
    let mut has_consumed_any = false;
    while let Some(c) = cursor.peek() {
        match c {
            '*' => {
                cursor.mark_end();
                if matcher::is_next_token(cursor, matcher::BLOCK_COMMENT_END_TOKEN) {
                    return emit_comment(cursor, has_consumed_any);
                }
                has_consumed_any = true;
            }
            '(' => {
                cursor.mark_end();
                if matcher::is_next_token(cursor, matcher::BLOCK_COMMENT_START_TOKEN) {
                    return emit_comment(cursor, has_consumed_any);
                }
                has_consumed_any = true;
            }
            _ => {
                cursor.advance(false);
                has_consumed_any = true;
            }
        }
    }

    cursor.mark_end();
    emit_comment(cursor, has_consumed_any)
}

fn emit(cursor: &Cursor<'_>, has_consumed_any: bool) -> Option<Token> {
    has_consumed_any.then(|| Token::new(TokenKind::ExtramodularText, cursor.token_span()))
}

fn emit_comment(cursor: &Cursor<'_>, has_consumed_any: bool) -> Option<Token> {
    has_consumed_any.then(|| Token::new(TokenKind::BlockCommentText, cursor.token_span()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Span;

    fn extramodular(source: &str) -> Option<Token> {
        let mut cursor = Cursor::new(source);
        scan_extramodular_text(&mut cursor)
    }

    fn block_comment(source: &str) -> Option<Token> {
        let mut cursor = Cursor::new(source);
        scan_block_comment_text(&mut cursor)
    }

    #[test]
    fn extramodular_stops_before_module_header() {
        let source = "preamble text\n---- MODULE Foo";
        let token = extramodular(source).expect("text token");
        assert_eq!(token.kind(), TokenKind::ExtramodularText);
        assert_eq!(&source[token.span().as_range()], "preamble text\n");
    }

    #[test]
    fn extramodular_header_with_long_dash_run_and_spaces() {
        let source = "x\n-------   MODULE Foo";
        let token = extramodular(source).expect("text token");
        assert_eq!(&source[token.span().as_range()], "x\n");
    }

    #[test]
    fn extramodular_consumes_dashes_that_are_not_headers() {
        let source = "a -- b";
        let token = extramodular(source).expect("text token");
        assert_eq!(&source[token.span().as_range()], "a -- b");
    }

    #[test]
    fn extramodular_dash_run_without_module_is_text() {
        let source = "---- NOTMODULE\nrest";
        let token = extramodular(source).expect("text token");
        assert_eq!(&source[token.span().as_range()], source);
    }

    #[test]
    fn extramodular_skips_leading_whitespace() {
        let source = "\n\n  hello";
        let token = extramodular(source).expect("text token");
        assert_eq!(token.span(), Span::new(4, 9));
    }

    #[test]
    fn extramodular_declines_with_nothing_consumed() {
        assert!(extramodular("").is_none());
        assert!(extramodular("\n  \t\n").is_none());
        assert!(extramodular("---- MODULE Foo").is_none());
    }

    #[test]
    fn block_comment_stops_at_end_delimiter() {
        let source = " a (- b *) c";
        let token = block_comment(source).expect("text token");
        assert_eq!(token.kind(), TokenKind::BlockCommentText);
        assert_eq!(&source[token.span().as_range()], " a (- b ");
    }

    #[test]
    fn block_comment_stops_at_nested_start_delimiter() {
        let source = " a (* b";
        let token = block_comment(source).expect("text token");
        assert_eq!(&source[token.span().as_range()], " a ");
    }

    #[test]
    fn inner_scan_stops_exactly_at_first_close() {
        // Scanning the body of "(* a (* b *) c *)" after the host has
        // tokenized both start delimiters: the inner body ends at the
        // first "*)", leaving " c *)" for a subsequent scan.
        let source = " b *) c *)";
        let token = block_comment(source).expect("text token");
        assert_eq!(&source[token.span().as_range()], " b ");

        let rest = &source[token.span().end() as usize..];
        assert_eq!(rest, "*) c *)");
    }

    #[test]
    fn block_comment_lone_stars_and_parens_are_text() {
        let source = "a * b ( c";
        let token = block_comment(source).expect("text token");
        assert_eq!(&source[token.span().as_range()], source);
    }

    #[test]
    fn block_comment_declines_with_nothing_consumed() {
        assert!(block_comment("").is_none());
        assert!(block_comment("*) tail").is_none());
        assert!(block_comment("(* tail").is_none());
    }

    #[test]
    fn block_comment_consumes_to_eof_when_unterminated() {
        let source = "never closed";
        let token = block_comment(source).expect("text token");
        assert_eq!(&source[token.span().as_range()], source);
    }
}
