// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types produced by the scanner.
//!
//! # Token structure
//!
//! Each token is a ([`TokenKind`], [`Span`]) pair. The scanner never
//! carries token text; the host slices the source buffer with the span
//! when it needs the spelling.
//!
//! # Valid symbol sets
//!
//! The host parser communicates which token kinds it would accept at the
//! current position through a [`SymbolSet`]. The scanner must only ever
//! return a token whose kind is marked valid; emitting anything else is a
//! host-contract violation and fails an assertion rather than corrupting
//! the token stream silently.

use bitflags::bitflags;

use super::Span;

/// The kind of token, not including source location.
///
/// Kinds fall into seven behavioral categories: free-text spans, plain
/// operators, terminators (unit separators, module end), right
/// delimiters, junction operators, comment delimiters, and the three
/// synthetic structural tokens that expose junction list shape to the
/// grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Freeform text between modules.
    ExtramodularText,

    /// Text inside a block comment body.
    BlockCommentText,

    /// The `>` infix operator.
    GtOp,

    /// The `>=` infix operator.
    GeqOp,

    /// The `>>` or `〉` sequence delimiter.
    RAngleBracket,

    /// The `>>_` or `〉_` delimiter (subscripted fairness form).
    RAngleBracketSub,

    /// The `=` infix operator.
    EqOp,

    /// The `==` definition-equals token.
    DefEq,

    /// The `=>` implies operator.
    ImpliesOp,

    /// The `=<` equal-to-or-less-than operator.
    EqltOp,

    /// The `=|` left-double-turnstile operator.
    LdttOp,

    /// The `====[=]*` token ending a module.
    DoubleLine,

    /// The `-` infix or prefix operator.
    Dash,

    /// The `--` infix operator.
    MinusMinusOp,

    /// The `-+->` infix operator.
    PlusArrowOp,

    /// The `-|` left-single-turnstile operator.
    LsttOp,

    /// The `->` function arrow.
    RArrow,

    /// The `----[-]*` line separator starting a unit definition.
    SingleLine,

    /// Synthetic marker for the start of a junction list.
    Indent,

    /// Synthetic separator between junction list items.
    Newline,

    /// Synthetic marker for the end of a junction list.
    Dedent,
}

impl TokenKind {
    /// Returns `true` if this is one of the synthetic junction list
    /// structure markers.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Indent | Self::Newline | Self::Dedent)
    }

    /// Returns `true` if this token covers a free-text span.
    #[must_use]
    pub const fn is_free_text(self) -> bool {
        matches!(self, Self::ExtramodularText | Self::BlockCommentText)
    }

    /// Returns the [`SymbolSet`] flag corresponding to this kind.
    #[must_use]
    pub const fn symbol(self) -> SymbolSet {
        match self {
            Self::ExtramodularText => SymbolSet::EXTRAMODULAR_TEXT,
            Self::BlockCommentText => SymbolSet::BLOCK_COMMENT_TEXT,
            Self::GtOp => SymbolSet::GT_OP,
            Self::GeqOp => SymbolSet::GEQ_OP,
            Self::RAngleBracket => SymbolSet::R_ANGLE_BRACKET,
            Self::RAngleBracketSub => SymbolSet::R_ANGLE_BRACKET_SUB,
            Self::EqOp => SymbolSet::EQ_OP,
            Self::DefEq => SymbolSet::DEF_EQ,
            Self::ImpliesOp => SymbolSet::IMPLIES_OP,
            Self::EqltOp => SymbolSet::EQLT_OP,
            Self::LdttOp => SymbolSet::LDTT_OP,
            Self::DoubleLine => SymbolSet::DOUBLE_LINE,
            Self::Dash => SymbolSet::DASH,
            Self::MinusMinusOp => SymbolSet::MINUS_MINUS_OP,
            Self::PlusArrowOp => SymbolSet::PLUS_ARROW_OP,
            Self::LsttOp => SymbolSet::LSTT_OP,
            Self::RArrow => SymbolSet::R_ARROW,
            Self::SingleLine => SymbolSet::SINGLE_LINE,
            Self::Indent => SymbolSet::INDENT,
            Self::Newline => SymbolSet::NEWLINE,
            Self::Dedent => SymbolSet::DEDENT,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExtramodularText => write!(f, "<extramodular text>"),
            Self::BlockCommentText => write!(f, "<block comment text>"),
            Self::GtOp => write!(f, ">"),
            Self::GeqOp => write!(f, ">="),
            Self::RAngleBracket => write!(f, ">>"),
            Self::RAngleBracketSub => write!(f, ">>_"),
            Self::EqOp => write!(f, "="),
            Self::DefEq => write!(f, "=="),
            Self::ImpliesOp => write!(f, "=>"),
            Self::EqltOp => write!(f, "=<"),
            Self::LdttOp => write!(f, "=|"),
            Self::DoubleLine => write!(f, "===="),
            Self::Dash => write!(f, "-"),
            Self::MinusMinusOp => write!(f, "--"),
            Self::PlusArrowOp => write!(f, "-+->"),
            Self::LsttOp => write!(f, "-|"),
            Self::RArrow => write!(f, "->"),
            Self::SingleLine => write!(f, "----"),
            Self::Indent => write!(f, "<indent>"),
            Self::Newline => write!(f, "<newline>"),
            Self::Dedent => write!(f, "<dedent>"),
        }
    }
}

bitflags! {
    /// The set of token kinds the host parser currently accepts.
    ///
    /// One flag per [`TokenKind`]. An incremental parser marks every
    /// symbol valid when it enters syntax-error recovery; the scanner
    /// detects that state through a representative probe of flags that
    /// are never all valid together during an ordinary parse.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolSet: u32 {
        const EXTRAMODULAR_TEXT = 1 << 0;
        const BLOCK_COMMENT_TEXT = 1 << 1;
        const GT_OP = 1 << 2;
        const GEQ_OP = 1 << 3;
        const R_ANGLE_BRACKET = 1 << 4;
        const R_ANGLE_BRACKET_SUB = 1 << 5;
        const EQ_OP = 1 << 6;
        const DEF_EQ = 1 << 7;
        const IMPLIES_OP = 1 << 8;
        const EQLT_OP = 1 << 9;
        const LDTT_OP = 1 << 10;
        const DOUBLE_LINE = 1 << 11;
        const DASH = 1 << 12;
        const MINUS_MINUS_OP = 1 << 13;
        const PLUS_ARROW_OP = 1 << 14;
        const LSTT_OP = 1 << 15;
        const R_ARROW = 1 << 16;
        const SINGLE_LINE = 1 << 17;
        const INDENT = 1 << 18;
        const NEWLINE = 1 << 19;
        const DEDENT = 1 << 20;

        /// Flags that are only simultaneously valid during error
        /// recovery, when the host marks every symbol acceptable.
        const ERROR_RECOVERY_PROBE = Self::EXTRAMODULAR_TEXT.bits()
            | Self::BLOCK_COMMENT_TEXT.bits()
            | Self::EQ_OP.bits()
            | Self::DEF_EQ.bits()
            | Self::DOUBLE_LINE.bits()
            | Self::INDENT.bits()
            | Self::NEWLINE.bits()
            | Self::DEDENT.bits();
    }
}

impl SymbolSet {
    /// Returns `true` if the host accepts the given token kind here.
    #[must_use]
    pub const fn accepts(self, kind: TokenKind) -> bool {
        self.contains(kind.symbol())
    }

    /// Returns `true` if the valid-symbol pattern signals that the host
    /// is in syntax-error recovery.
    #[must_use]
    pub const fn is_error_recovery(self) -> bool {
        self.contains(Self::ERROR_RECOVERY_PROBE)
    }
}

/// A token with its source location.
///
/// ```
/// use tlatok_core::scan::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::DefEq, Span::new(3, 5));
/// assert_eq!(token.kind(), TokenKind::DefEq);
/// assert_eq!(token.span().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub const fn span(self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_kind_display() {
        assert_eq!(TokenKind::GtOp.to_string(), ">");
        assert_eq!(TokenKind::GeqOp.to_string(), ">=");
        assert_eq!(TokenKind::DefEq.to_string(), "==");
        assert_eq!(TokenKind::DoubleLine.to_string(), "====");
        assert_eq!(TokenKind::PlusArrowOp.to_string(), "-+->");
        assert_eq!(TokenKind::Indent.to_string(), "<indent>");
        assert_eq!(TokenKind::ExtramodularText.to_string(), "<extramodular text>");
    }

    #[test]
    fn token_kind_predicates() {
        assert!(TokenKind::Indent.is_structural());
        assert!(TokenKind::Newline.is_structural());
        assert!(TokenKind::Dedent.is_structural());
        assert!(!TokenKind::EqOp.is_structural());

        assert!(TokenKind::ExtramodularText.is_free_text());
        assert!(TokenKind::BlockCommentText.is_free_text());
        assert!(!TokenKind::Dedent.is_free_text());
    }

    #[test]
    fn symbol_set_accepts_matches_kind_flags() {
        let valid = SymbolSet::INDENT | SymbolSet::DEDENT;
        assert!(valid.accepts(TokenKind::Indent));
        assert!(valid.accepts(TokenKind::Dedent));
        assert!(!valid.accepts(TokenKind::Newline));
        assert!(!valid.accepts(TokenKind::EqOp));
    }

    #[test]
    fn error_recovery_requires_the_full_probe() {
        assert!(SymbolSet::all().is_error_recovery());
        assert!(SymbolSet::ERROR_RECOVERY_PROBE.is_error_recovery());

        // Missing any probe flag means an ordinary parse position.
        let almost = SymbolSet::ERROR_RECOVERY_PROBE - SymbolSet::EXTRAMODULAR_TEXT;
        assert!(!almost.is_error_recovery());
        assert!(!(SymbolSet::INDENT | SymbolSet::NEWLINE | SymbolSet::DEDENT).is_error_recovery());
    }

    #[test]
    fn token_creation_and_accessors() {
        let token = Token::new(TokenKind::SingleLine, Span::new(0, 4));
        assert_eq!(token.kind(), TokenKind::SingleLine);
        assert_eq!(token.span().start(), 0);
        assert_eq!(token.span().end(), 4);
    }
}
