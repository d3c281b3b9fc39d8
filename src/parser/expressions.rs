//! Expression parsing implementation
//!
//! The expression language is a single precedence level: one value, followed
//! by any number of `+ value` continuations, folded into left-associated
//! [`Expr::Plus`] nodes. `a + b + c` parses as `Plus(Plus(a, b), c)`.
//!
//! # Grammar
//!
//! ```text
//! expr  ::= value ("+" value)*
//! value ::= identifier | int_literal
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_value()?;

        loop {
            let location = self.current_location();
            if !self.match_token(&Token::Plus(location)) {
                break;
            }
            let right = self.parse_value()?;
            left = Expr::Plus {
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }

        Ok(left)
    }

    /// Parse a value: an identifier or an integer literal.
    fn parse_value(&mut self) -> Result<Expr, ParseError> {
        match self.peek_token() {
            Token::Ident(_, _) => Ok(Expr::Id(self.expect_identifier()?)),
            Token::IntLiteral(_, _) => {
                Ok(Expr::IntLiteral(self.expect_int_literal()?))
            }
            other => Err(ParseError {
                message: format!(
                    "Expected identifier or int literal, found {}",
                    other
                ),
                location: other.location(),
            }),
        }
    }
}
