// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The operator state machine.
//!
//! [`Scanner::lex`] recognizes the fixed operator tokens (`=`-family,
//! `-`-family, `>`-family, and the right delimiters) one codepoint at a
//! time, threading the junction-list handlers through the states that can
//! affect or be affected by open junction lists. Handlers run *before* a
//! state extends or accepts: a junction operator, terminator, or
//! out-dented token first gets its chance to close a list with a
//! zero-width structural token, and only if no list reacts does the
//! operator itself get lexed.
//!
//! Accepting is incremental: a state may commit a token with `mark_end`
//! and then keep consuming to see whether a longer token completes (`>`
//! then `>=`, `====` then `=====`). Dead ends like `===` and `---` leave
//! no committed token and the scanner declines.

use super::cursor::{is_whitespace, Cursor};
use super::jlist::JunctKind;
use super::matcher::{self, TokenCategory};
use super::scanner::Scanner;
use super::span::Span;
use super::token::{SymbolSet, Token, TokenKind};

/// Lexing states, named for the codepoints consumed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    ForwardSlash,
    BackwardSlash,
    Land,
    Lor,
    RightDelimiter,
    RightAngleBracket,
    RightAngleBracketSub,
    Gt,
    Geq,
    EqOne,
    EqTwo,
    EqThree,
    EqGeqFour,
    Leq,
    Implies,
    Ldtt,
    DashOne,
    DashTwo,
    DashThree,
    DashGeqFour,
    RightArrow,
    Lstt,
    PlusArrowPrefix2,
    PlusArrowPrefix3,
    PlusArrow,
}

/// Builds a lexed (non-structural) token over the committed span.
fn emit(cursor: &Cursor<'_>, kind: TokenKind, valid: SymbolSet) -> Token {
    debug_assert!(
        valid.accepts(kind),
        "lexed {kind} where the host does not accept it"
    );
    Token::new(kind, cursor.token_span())
}

/// Builds a zero-width structural token at the scan start position.
fn structural(cursor: &Cursor<'_>, kind: TokenKind) -> Token {
    let start = cursor.token_span().start();
    Token::new(kind, Span::new(start, start))
}

impl Scanner {
    /// Lexes the next operator or keyword-adjacent token.
    ///
    /// Returns a structural token if an open junction list reacts to what
    /// lies ahead, the lexed operator token otherwise, or `None` when the
    /// input belongs to the host's own lexer.
    pub(crate) fn lex(&mut self, cursor: &mut Cursor<'_>, valid: SymbolSet) -> Option<Token> {
        cursor.advance_while(true, is_whitespace);
        if cursor.is_eof() {
            // Missing module-end token; close any open lists so the
            // host can still report a sensible error.
            return self
                .handle_terminator(valid)
                .map(|kind| structural(cursor, kind));
        }

        let col = cursor.column();
        cursor.mark_end();
        let mut state = match cursor.peek()? {
            '/' => LexState::ForwardSlash,
            '\\' => LexState::BackwardSlash,
            '∧' => LexState::Land,
            '∨' => LexState::Lor,
            ')' | ']' | '}' => LexState::RightDelimiter,
            '〉' => LexState::RightAngleBracket,
            '>' => LexState::Gt,
            '=' => LexState::EqOne,
            '-' => LexState::DashOne,
            _ => return self.lex_word(cursor, valid, col),
        };
        cursor.advance(false);

        let mut accepted: Option<TokenKind> = None;
        loop {
            state = match state {
                LexState::ForwardSlash => {
                    if cursor.peek() == Some('\\') {
                        cursor.advance(false);
                        LexState::Land
                    } else {
                        if let Some(kind) = self.handle_other(valid, col) {
                            return Some(structural(cursor, kind));
                        }
                        break;
                    }
                }
                LexState::BackwardSlash => match cursor.peek() {
                    Some('/') => {
                        cursor.advance(false);
                        LexState::Lor
                    }
                    // "\*" opens a line comment; comments never affect
                    // junction lists.
                    Some('*') => break,
                    _ => {
                        if let Some(kind) = self.handle_other(valid, col) {
                            return Some(structural(cursor, kind));
                        }
                        break;
                    }
                },
                LexState::Land => {
                    if let Some(kind) = self.handle_junct(valid, JunctKind::Conjunction, col) {
                        return Some(structural(cursor, kind));
                    }
                    break;
                }
                LexState::Lor => {
                    if let Some(kind) = self.handle_junct(valid, JunctKind::Disjunction, col) {
                        return Some(structural(cursor, kind));
                    }
                    break;
                }
                LexState::RightDelimiter => {
                    if let Some(kind) = self.handle_right_delimiter(valid) {
                        return Some(structural(cursor, kind));
                    }
                    break;
                }
                LexState::RightAngleBracket => {
                    if let Some(kind) = self.handle_right_delimiter(valid) {
                        return Some(structural(cursor, kind));
                    }
                    accepted = Some(TokenKind::RAngleBracket);
                    cursor.mark_end();
                    if cursor.peek() == Some('_') {
                        cursor.advance(false);
                        LexState::RightAngleBracketSub
                    } else {
                        break;
                    }
                }
                LexState::RightAngleBracketSub => {
                    accepted = Some(TokenKind::RAngleBracketSub);
                    cursor.mark_end();
                    break;
                }
                LexState::Gt => {
                    if cursor.peek() == Some('>') {
                        cursor.advance(false);
                        LexState::RightAngleBracket
                    } else {
                        accepted = Some(TokenKind::GtOp);
                        cursor.mark_end();
                        if cursor.peek() == Some('=') {
                            cursor.advance(false);
                            LexState::Geq
                        } else {
                            break;
                        }
                    }
                }
                LexState::Geq => {
                    accepted = Some(TokenKind::GeqOp);
                    cursor.mark_end();
                    break;
                }
                LexState::EqOne => {
                    if let Some(kind) = self.handle_other(valid, col) {
                        return Some(structural(cursor, kind));
                    }
                    match cursor.peek() {
                        Some('=') => {
                            cursor.advance(false);
                            LexState::EqTwo
                        }
                        Some('<') => {
                            cursor.advance(false);
                            LexState::Leq
                        }
                        Some('>') => {
                            cursor.advance(false);
                            LexState::Implies
                        }
                        Some('|') => {
                            cursor.advance(false);
                            LexState::Ldtt
                        }
                        _ => {
                            accepted = Some(TokenKind::EqOp);
                            cursor.mark_end();
                            break;
                        }
                    }
                }
                LexState::EqTwo => {
                    if cursor.peek() == Some('=') {
                        cursor.advance(false);
                        LexState::EqThree
                    } else {
                        accepted = Some(TokenKind::DefEq);
                        cursor.mark_end();
                        break;
                    }
                }
                LexState::EqThree => {
                    // "===" is not a token; only a fourth '=' rescues it.
                    if cursor.peek() == Some('=') {
                        cursor.advance(false);
                        LexState::EqGeqFour
                    } else {
                        break;
                    }
                }
                LexState::EqGeqFour => {
                    if let Some(kind) = self.handle_terminator(valid) {
                        return Some(structural(cursor, kind));
                    }
                    accepted = Some(TokenKind::DoubleLine);
                    cursor.mark_end();
                    if cursor.peek() == Some('=') {
                        cursor.advance(false);
                        LexState::EqGeqFour
                    } else {
                        break;
                    }
                }
                LexState::Leq => {
                    accepted = Some(TokenKind::EqltOp);
                    cursor.mark_end();
                    break;
                }
                LexState::Implies => {
                    accepted = Some(TokenKind::ImpliesOp);
                    cursor.mark_end();
                    break;
                }
                LexState::Ldtt => {
                    accepted = Some(TokenKind::LdttOp);
                    cursor.mark_end();
                    break;
                }
                LexState::DashOne => {
                    if let Some(kind) = self.handle_other(valid, col) {
                        return Some(structural(cursor, kind));
                    }
                    match cursor.peek() {
                        Some('-') => {
                            cursor.advance(false);
                            LexState::DashTwo
                        }
                        Some('>') => {
                            cursor.advance(false);
                            LexState::RightArrow
                        }
                        Some('|') => {
                            cursor.advance(false);
                            LexState::Lstt
                        }
                        Some('+') => {
                            cursor.advance(false);
                            LexState::PlusArrowPrefix2
                        }
                        _ => {
                            accepted = Some(TokenKind::Dash);
                            cursor.mark_end();
                            break;
                        }
                    }
                }
                LexState::DashTwo => {
                    if cursor.peek() == Some('-') {
                        cursor.advance(false);
                        LexState::DashThree
                    } else {
                        accepted = Some(TokenKind::MinusMinusOp);
                        cursor.mark_end();
                        break;
                    }
                }
                LexState::DashThree => {
                    // "---" is not a token, same as "===".
                    if cursor.peek() == Some('-') {
                        cursor.advance(false);
                        LexState::DashGeqFour
                    } else {
                        break;
                    }
                }
                LexState::DashGeqFour => {
                    if let Some(kind) = self.handle_terminator(valid) {
                        return Some(structural(cursor, kind));
                    }
                    accepted = Some(TokenKind::SingleLine);
                    cursor.mark_end();
                    if cursor.peek() == Some('-') {
                        cursor.advance(false);
                        LexState::DashGeqFour
                    } else {
                        break;
                    }
                }
                LexState::RightArrow => {
                    accepted = Some(TokenKind::RArrow);
                    cursor.mark_end();
                    break;
                }
                LexState::Lstt => {
                    accepted = Some(TokenKind::LsttOp);
                    cursor.mark_end();
                    break;
                }
                LexState::PlusArrowPrefix2 => {
                    if cursor.peek() == Some('-') {
                        cursor.advance(false);
                        LexState::PlusArrowPrefix3
                    } else {
                        break;
                    }
                }
                LexState::PlusArrowPrefix3 => {
                    if cursor.peek() == Some('>') {
                        cursor.advance(false);
                        LexState::PlusArrow
                    } else {
                        break;
                    }
                }
                LexState::PlusArrow => {
                    accepted = Some(TokenKind::PlusArrowOp);
                    cursor.mark_end();
                    break;
                }
            };
        }

        accepted.map(|kind| emit(cursor, kind, valid))
    }

    /// Handles input whose first codepoint starts no operator: keywords
    /// that close or separate junction lists, plus anything else.
    fn lex_word(&mut self, cursor: &mut Cursor<'_>, valid: SymbolSet, col: u32) -> Option<Token> {
        let (matched, _) = matcher::lookahead(cursor, matcher::CANDIDATES);
        let category = matched.map_or(TokenCategory::Other, |m| m.category);
        let kind = match category {
            TokenCategory::Land => self.handle_junct(valid, JunctKind::Conjunction, col),
            TokenCategory::Lor => self.handle_junct(valid, JunctKind::Disjunction, col),
            TokenCategory::RightDelimiter => self.handle_right_delimiter(valid),
            TokenCategory::Comment => None,
            TokenCategory::Unit | TokenCategory::ModuleEnd => self.handle_terminator(valid),
            TokenCategory::Other => self.handle_other(valid, col),
        };
        kind.map(|kind| structural(cursor, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Everything except the free-text modes, which dispatch before the
    /// operator machine and would otherwise shadow it.
    const LEX_VALID: SymbolSet = SymbolSet::all()
        .difference(SymbolSet::EXTRAMODULAR_TEXT)
        .difference(SymbolSet::BLOCK_COMMENT_TEXT);

    fn lex_one(source: &str) -> Option<Token> {
        let mut scanner = Scanner::new();
        let mut cursor = Cursor::new(source);
        scanner.lex(&mut cursor, LEX_VALID)
    }

    fn assert_lexes(source: &str, kind: TokenKind, text: &str) {
        let token = lex_one(source).unwrap_or_else(|| panic!("no token for {source:?}"));
        assert_eq!(token.kind(), kind, "for {source:?}");
        assert_eq!(&source[token.span().as_range()], text, "for {source:?}");
    }

    #[test]
    fn eq_family() {
        assert_lexes("= x", TokenKind::EqOp, "=");
        assert_lexes("== x", TokenKind::DefEq, "==");
        assert_lexes("=< x", TokenKind::EqltOp, "=<");
        assert_lexes("=> x", TokenKind::ImpliesOp, "=>");
        assert_lexes("=| x", TokenKind::LdttOp, "=|");
        assert_lexes("====", TokenKind::DoubleLine, "====");
        assert_lexes("=======", TokenKind::DoubleLine, "=======");
    }

    #[test]
    fn triple_eq_is_no_token() {
        assert!(lex_one("=== x").is_none());
    }

    #[test]
    fn dash_family() {
        assert_lexes("- x", TokenKind::Dash, "-");
        assert_lexes("-- x", TokenKind::MinusMinusOp, "--");
        assert_lexes("-> x", TokenKind::RArrow, "->");
        assert_lexes("-| x", TokenKind::LsttOp, "-|");
        assert_lexes("-+-> x", TokenKind::PlusArrowOp, "-+->");
        assert_lexes("----", TokenKind::SingleLine, "----");
        assert_lexes("------", TokenKind::SingleLine, "------");
    }

    #[test]
    fn triple_dash_is_no_token() {
        assert!(lex_one("--- x").is_none());
        assert!(lex_one("-+> x").is_none());
        assert!(lex_one("-+- x").is_none());
    }

    #[test]
    fn gt_family() {
        assert_lexes("> x", TokenKind::GtOp, ">");
        assert_lexes(">= x", TokenKind::GeqOp, ">=");
        assert_lexes(">> x", TokenKind::RAngleBracket, ">>");
        assert_lexes(">>_v", TokenKind::RAngleBracketSub, ">>_");
        assert_lexes("〉 x", TokenKind::RAngleBracket, "〉");
        assert_lexes("〉_v", TokenKind::RAngleBracketSub, "〉_");
    }

    #[test]
    fn leading_whitespace_is_excluded_from_spans() {
        let source = "  \t== x";
        let token = lex_one(source).expect("a token");
        assert_eq!(token.kind(), TokenKind::DefEq);
        assert_eq!(&source[token.span().as_range()], "==");
    }

    #[test]
    fn lookahead_past_accept_is_not_committed() {
        // '>' then '=' probes GEQ; 'x' stops it at the committed '>='.
        let source = ">=x";
        let token = lex_one(source).expect("a token");
        assert_eq!(token.span().len(), 2);
    }

    #[test]
    fn junction_operators_emit_indent_with_empty_stack() {
        for source in ["/\\ A", "\\/ A", "∧ A", "∨ A"] {
            let token = lex_one(source).unwrap_or_else(|| panic!("no token for {source:?}"));
            assert_eq!(token.kind(), TokenKind::Indent, "for {source:?}");
            assert!(token.span().is_empty(), "for {source:?}");
        }
    }

    #[test]
    fn bare_slashes_are_not_junctions() {
        assert!(lex_one("/ x").is_none());
        assert!(lex_one("\\in x").is_none());
        assert!(lex_one("\\* comment").is_none());
    }

    #[test]
    fn right_delimiters_decline_with_no_open_list() {
        for source in [") x", "] x", "} x", "THEN x", "ELSE x", "IN x", "⟶ x"] {
            assert!(lex_one(source).is_none(), "for {source:?}");
        }
    }

    #[test]
    fn words_decline_with_no_open_list() {
        assert!(lex_one("Foo == 1").is_none());
        assert!(lex_one("VARIABLE x").is_none());
        assert!(lex_one("").is_none());
        assert!(lex_one("   \n ").is_none());
    }

    #[test]
    fn indent_requires_the_indent_symbol() {
        let mut scanner = Scanner::new();
        let mut cursor = Cursor::new("/\\ A");
        let valid = SymbolSet::NEWLINE | SymbolSet::DEDENT;
        assert!(scanner.lex(&mut cursor, valid).is_none());
        assert_eq!(scanner.depth(), 0);
    }
}
