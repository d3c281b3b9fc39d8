//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing the variable declaration section
//! - `statements`: Parsing statements (write, init, calculate, if, while)
//! - `expressions`: Parsing addition expressions and values
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! # Parse session state
//!
//! All per-parse mutable state (token cursor, symbol table, trace sink) lives
//! inside one `Parser` value, created per invocation and dropped when parsing
//! finishes. Nothing is shared between parses, so separate programs can be
//! parsed concurrently with separate parsers.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use crate::parser::symbols::{DuplicateDeclaration, SymbolTable};
use std::fmt;

/// Parser error type
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

impl From<DuplicateDeclaration> for ParseError {
    fn from(err: DuplicateDeclaration) -> Self {
        ParseError {
            message: format!("Variable already declared: {}", err.name),
            location: err.location,
        }
    }
}

/// Callback invoked once per successfully matched token.
///
/// Lets a caller observe the match-by-match progress of a parse (the driver
/// prints one line per match) without any printing inside the parser itself.
pub type TraceSink = Box<dyn FnMut(&Token)>;

/// Recursive descent parser for minilang (LL(1), one token of lookahead)
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) symbols: SymbolTable,
    trace: Option<TraceSink>,
}

impl std::fmt::Debug for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("tokens", &self.tokens)
            .field("position", &self.position)
            .field("symbols", &self.symbols)
            .field("trace", &self.trace.as_ref().map(|_| "<TraceSink>"))
            .finish()
    }
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            symbols: SymbolTable::new(),
            trace: None,
        })
    }

    /// Install a trace sink that is called for every matched token.
    pub fn with_trace(mut self, sink: TraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Parse the entire program: declarations, then statements, then end of
    /// input. The first failure aborts the whole parse; no partial AST is
    /// returned.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let vars = self.parse_vars()?;
        let stmts = self.parse_stmts()?;

        self.expect_token(
            &Token::Eof(self.current_location()),
            "Expected end of input after statements",
        )?;

        Ok(Program { vars, stmts })
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
        {
            self.trace_match();
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.peek_token())
            == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek_token(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    /// Report the current token to the trace sink, if one is installed.
    ///
    /// Called exactly once per match, before the cursor advances past the
    /// token, so the sink sees tokens in source order including `Eof`.
    fn trace_match(&mut self) {
        if let Some(sink) = self.trace.as_mut() {
            sink(&self.tokens[self.position]);
        }
    }

    /// Match the expected token kind against the lookahead.
    ///
    /// On a match the token is reported to the trace sink and consumed.
    /// Otherwise the parse fails with the expected kind, the actual kind, and
    /// the actual lexeme in the message.
    pub(crate) fn expect_token(
        &mut self,
        token: &Token,
        message: &str,
    ) -> Result<(), ParseError> {
        if self.check(token) {
            self.trace_match();
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }

    /// Match an identifier and return it as an [`Id`] node.
    pub(crate) fn expect_identifier(&mut self) -> Result<Id, ParseError> {
        if let Token::Ident(name, location) = self.peek_token() {
            self.trace_match();
            self.advance();
            Ok(Id { name, location })
        } else {
            Err(ParseError {
                message: format!("Expected identifier, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }

    /// Match an integer literal and return it as an [`IntLiteral`] node.
    ///
    /// The lexer guarantees the lexeme is a pure digit run, so conversion can
    /// only fail on an out-of-range value; that surfaces as a parse error at
    /// the literal's location.
    pub(crate) fn expect_int_literal(
        &mut self,
    ) -> Result<IntLiteral, ParseError> {
        if let Token::IntLiteral(lexeme, location) = self.peek_token() {
            let value = lexeme.parse::<i64>().map_err(|_| ParseError {
                message: format!("Integer literal out of range: {}", lexeme),
                location,
            })?;
            self.trace_match();
            self.advance();
            Ok(IntLiteral { value, location })
        } else {
            Err(ParseError {
                message: format!(
                    "Expected int literal, found {}",
                    self.peek()
                ),
                location: self.current_location(),
            })
        }
    }
}
