// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Longest-match lookahead over candidate token tables.
//!
//! Given an ordered set of fixed codepoint sequences, [`lookahead`]
//! advances the cursor one codepoint at a time and prunes candidates that
//! stop matching. A candidate that reaches its final codepoint is a
//! completed match; scanning stops once no candidate remains undecided or
//! input ends. The longest completed match wins, and the table's
//! enumeration order breaks length ties deterministically (first entry
//! wins).
//!
//! Works best with a small candidate table: complexity is the number of
//! candidates times the longest candidate length.

use super::cursor::Cursor;

/// Behavioral category of a candidate token.
///
/// Categories drive the junction-list tracker's four-way handler
/// dispatch; they are deliberately coarser than [`TokenKind`]
/// (super::TokenKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// A conjunction junction operator (`/\` or `∧`).
    Land,
    /// A disjunction junction operator (`\/` or `∨`).
    Lor,
    /// A closing bracket or keyword pair (`)`, `]`, `THEN`, `ELSE`, ...).
    RightDelimiter,
    /// A comment delimiter; inert for junction tracking.
    Comment,
    /// A token starting a new top-level unit definition.
    Unit,
    /// The module-end marker.
    ModuleEnd,
    /// Tokens not requiring special handling logic.
    Other,
}

/// A candidate token: a fixed codepoint sequence tagged with its
/// category.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    /// The candidate's spelling.
    pub token: &'static str,
    /// The candidate's behavioral category.
    pub category: TokenCategory,
}

impl Candidate {
    const fn new(token: &'static str, category: TokenCategory) -> Self {
        Self { token, category }
    }

    fn len(&self) -> usize {
        self.token.chars().count()
    }
}

/// The `----[-]*` line prefix recognized inside extramodular text.
pub const SINGLE_LINE_TOKEN: &str = "----";

/// The module header keyword following a single-line prefix.
pub const MODULE_TOKEN: &str = "MODULE";

/// The block comment opening delimiter.
pub const BLOCK_COMMENT_START_TOKEN: &str = "(*";

/// The block comment closing delimiter.
pub const BLOCK_COMMENT_END_TOKEN: &str = "*)";

/// Word-shaped tokens the scanner reacts to when the next codepoint does
/// not start an operator: junction-closing keywords, unit-definition
/// keywords, and the delimiters the operator state machine cannot reach.
///
/// Table order defines the tie-break priority for equal-length matches.
pub const CANDIDATES: &[Candidate] = &[
    Candidate::new("⟶", TokenCategory::RightDelimiter),
    Candidate::new("(*", TokenCategory::Comment),
    Candidate::new("ASSUME", TokenCategory::Unit),
    Candidate::new("ASSUMPTION", TokenCategory::Unit),
    Candidate::new("AXIOM", TokenCategory::Unit),
    Candidate::new("CONSTANT", TokenCategory::Unit),
    Candidate::new("CONSTANTS", TokenCategory::Unit),
    Candidate::new("COROLLARY", TokenCategory::Unit),
    Candidate::new("ELSE", TokenCategory::RightDelimiter),
    Candidate::new("IN", TokenCategory::RightDelimiter),
    Candidate::new("INSTANCE", TokenCategory::Unit),
    Candidate::new("LEMMA", TokenCategory::Unit),
    Candidate::new("LOCAL", TokenCategory::Unit),
    Candidate::new("PROPOSITION", TokenCategory::Unit),
    Candidate::new("RECURSIVE", TokenCategory::Unit),
    Candidate::new("THEN", TokenCategory::RightDelimiter),
    Candidate::new("THEOREM", TokenCategory::Unit),
    Candidate::new("VARIABLE", TokenCategory::Unit),
    Candidate::new("VARIABLES", TokenCategory::Unit),
];

/// Looks ahead at a table of candidate tokens to see whether any match.
///
/// Returns the winning candidate (longest completed match, table order
/// breaking ties) or `None`, along with the number of codepoints
/// consumed. The cursor has already advanced past the consumed
/// codepoints either way; callers rely on `mark_end` discipline to keep
/// the lookahead out of the accepted token.
pub fn lookahead<'a>(
    cursor: &mut Cursor<'_>,
    candidates: &'a [Candidate],
) -> (Option<&'a Candidate>, usize) {
    let mut decided = vec![false; candidates.len()];
    let mut completed: Vec<usize> = Vec::new();
    let mut consumed = 0;
    let mut any_undecided = true;

    while any_undecided && !cursor.is_eof() {
        any_undecided = false;
        let next = cursor.peek();
        for (i, candidate) in candidates.iter().enumerate() {
            if decided[i] {
                continue;
            }
            if candidate.token.chars().nth(consumed) == next {
                if consumed + 1 == candidate.len() {
                    decided[i] = true;
                    completed.push(i);
                } else {
                    any_undecided = true;
                }
            } else {
                decided[i] = true;
            }
        }
        cursor.advance(false);
        consumed += 1;
    }

    let mut best: Option<&Candidate> = None;
    let mut best_len = 0;
    for &i in &completed {
        let len = candidates[i].len();
        if len > best_len {
            best_len = len;
            best = Some(&candidates[i]);
        }
    }

    (best, consumed)
}

/// Checks whether the next codepoints are exactly the given token,
/// consuming them if so.
///
/// On failure the cursor has consumed the matching prefix; callers treat
/// that prefix as ordinary consumed text.
pub fn is_next_token(cursor: &mut Cursor<'_>, token: &str) -> bool {
    for expected in token.chars() {
        if cursor.peek() != Some(expected) {
            return false;
        }
        cursor.advance(false);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    const EQ_RUNS: &[Candidate] = &[
        Candidate::new("=", TokenCategory::Other),
        Candidate::new("==", TokenCategory::Other),
        Candidate::new("====", TokenCategory::ModuleEnd),
    ];

    #[test]
    fn longest_match_wins() {
        let mut cursor = Cursor::new("====");
        let (matched, _) = lookahead(&mut cursor, EQ_RUNS);
        let matched = matched.expect("a match");
        assert_eq!(matched.token, "====");
        assert_eq!(matched.category, TokenCategory::ModuleEnd);
    }

    #[test]
    fn shorter_candidate_matches_when_longer_fails() {
        let mut cursor = Cursor::new("==x");
        let (matched, _) = lookahead(&mut cursor, EQ_RUNS);
        assert_eq!(matched.expect("a match").token, "==");
    }

    #[test]
    fn table_order_breaks_length_ties() {
        let table = &[
            Candidate::new("THEN", TokenCategory::RightDelimiter),
            Candidate::new("THEM", TokenCategory::Other),
        ];
        let mut cursor = Cursor::new("THEN");
        let (matched, _) = lookahead(&mut cursor, table);
        assert_eq!(matched.expect("a match").category, TokenCategory::RightDelimiter);

        // Same lengths, reversed priority.
        let reversed = &[
            Candidate::new("THEM", TokenCategory::Other),
            Candidate::new("THEN", TokenCategory::RightDelimiter),
        ];
        let mut cursor = Cursor::new("THEN");
        let (matched, _) = lookahead(&mut cursor, reversed);
        assert_eq!(matched.expect("a match").category, TokenCategory::RightDelimiter);
    }

    #[test]
    fn no_match_reports_consumed_lookahead() {
        let mut cursor = Cursor::new("xyz");
        let (matched, consumed) = lookahead(&mut cursor, EQ_RUNS);
        assert!(matched.is_none());
        assert_eq!(consumed, 1);
    }

    #[test]
    fn keyword_plural_beats_singular() {
        let mut cursor = Cursor::new("CONSTANTS x");
        let (matched, _) = lookahead(&mut cursor, CANDIDATES);
        assert_eq!(matched.expect("a match").token, "CONSTANTS");

        let mut cursor = Cursor::new("CONSTANT x");
        let (matched, _) = lookahead(&mut cursor, CANDIDATES);
        assert_eq!(matched.expect("a match").token, "CONSTANT");
    }

    #[test]
    fn unicode_case_arrow_matches() {
        let mut cursor = Cursor::new("⟶ x");
        let (matched, consumed) = lookahead(&mut cursor, CANDIDATES);
        assert_eq!(matched.expect("a match").category, TokenCategory::RightDelimiter);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn is_next_token_consumes_on_match() {
        let mut cursor = Cursor::new("MODULE Foo");
        assert!(is_next_token(&mut cursor, MODULE_TOKEN));
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn is_next_token_leaves_partial_prefix_consumed() {
        let mut cursor = Cursor::new("--x");
        assert!(!is_next_token(&mut cursor, SINGLE_LINE_TOKEN));
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn eof_cuts_lookahead_short() {
        let mut cursor = Cursor::new("===");
        let (matched, _) = lookahead(&mut cursor, EQ_RUNS);
        // "====" cannot complete; "==" already did.
        assert_eq!(matched.expect("a match").token, "==");
    }
}
