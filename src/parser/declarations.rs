//! Declaration parsing implementation
//!
//! This module handles the variable declaration section that opens every
//! program. Each declaration is recorded in the symbol table, which rejects
//! a second declaration of the same name anywhere in the program.
//!
//! # Grammar
//!
//! ```text
//! vars     ::= var_decl*
//! var_decl ::= "var" identifier
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse the declaration section: zero or more `var` declarations.
    ///
    /// Loops exactly while the lookahead is `var`; any other token ends the
    /// section without being consumed.
    pub(crate) fn parse_vars(&mut self) -> Result<Vec<Id>, ParseError> {
        let mut vars = Vec::new();

        while self.check(&Token::Var(self.current_location())) {
            vars.push(self.parse_var_decl()?);
        }

        Ok(vars)
    }

    /// Parse a single declaration: `var <identifier>`.
    ///
    /// Declares the name in the symbol table; a duplicate aborts the parse
    /// with the offending name in the error.
    pub(crate) fn parse_var_decl(&mut self) -> Result<Id, ParseError> {
        self.expect_token(
            &Token::Var(self.current_location()),
            "Expected 'var'",
        )?;

        let id = self.expect_identifier()?;
        self.symbols.declare(&id.name, id.location)?;

        Ok(id)
    }
}
