//! Statement parsing implementation
//!
//! This module handles parsing of all five statement forms:
//!
//! - Output: `write a`
//! - Initialization: `init a = 5`
//! - Arithmetic: `calculate a = a + 1`
//! - Conditional: `if a = b then ... endif`
//! - Loop: `while a != b do ... endwhile`
//!
//! # Grammar
//!
//! ```text
//! stmts ::= stmt*
//! stmt  ::= "write" identifier
//!         | "init" identifier "=" int_literal
//!         | "calculate" identifier "=" expr
//!         | "if" identifier "=" identifier "then" stmts "endif"
//!         | "while" identifier "!=" identifier "do" stmts "endwhile"
//! ```
//!
//! Each form is fully determined by its leading keyword, so dispatch needs
//! only the single lookahead token.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a statement sequence.
    ///
    /// Loops exactly while the lookahead is a statement-opening keyword; any
    /// other token (`endif`, `endwhile`, end of input) ends the sequence
    /// without being consumed.
    pub(crate) fn parse_stmts(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();

        while self.starts_statement() {
            stmts.push(self.parse_statement()?);
        }

        Ok(stmts)
    }

    fn starts_statement(&self) -> bool {
        matches!(
            self.peek_token(),
            Token::Write(_)
                | Token::Init(_)
                | Token::Calculate(_)
                | Token::If(_)
                | Token::While(_)
        )
    }

    /// Parse a single statement, dispatching on the leading keyword.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_token() {
            Token::Write(_) => self.parse_write_statement(),
            Token::Init(_) => self.parse_init_statement(),
            Token::Calculate(_) => self.parse_calculate_statement(),
            Token::If(_) => self.parse_if_statement(),
            Token::While(_) => self.parse_while_statement(),
            // Unreachable through parse_stmts, which guards on the FIRST set
            other => Err(ParseError {
                message: format!("Expected statement, found {}", other),
                location: other.location(),
            }),
        }
    }

    /// Parse write statement: `write <id>`
    fn parse_write_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect_token(
            &Token::Write(self.current_location()),
            "Expected 'write'",
        )?;
        let target = self.expect_identifier()?;

        Ok(Stmt::Write { target })
    }

    /// Parse init statement: `init <id> = <int literal>`
    fn parse_init_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect_token(
            &Token::Init(self.current_location()),
            "Expected 'init'",
        )?;
        let target = self.expect_identifier()?;
        self.expect_token(
            &Token::Equals(self.current_location()),
            "Expected '=' after init target",
        )?;
        let value = self.expect_int_literal()?;

        Ok(Stmt::Init { target, value })
    }

    /// Parse calculate statement: `calculate <id> = <expr>`
    fn parse_calculate_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect_token(
            &Token::Calculate(self.current_location()),
            "Expected 'calculate'",
        )?;
        let target = self.expect_identifier()?;
        self.expect_token(
            &Token::Equals(self.current_location()),
            "Expected '=' after calculate target",
        )?;
        let expr = self.parse_expression()?;

        Ok(Stmt::Calculate { target, expr })
    }

    /// Parse if statement: `if <id> = <id> then <stmts> endif`
    ///
    /// The condition is equality of two identifiers; what "current value"
    /// means is an interpreter concern, the front end only records the two
    /// operands.
    fn parse_if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect_token(
            &Token::If(self.current_location()),
            "Expected 'if'",
        )?;
        let left = self.expect_identifier()?;
        self.expect_token(
            &Token::Equals(self.current_location()),
            "Expected '=' in if condition",
        )?;
        let right = self.expect_identifier()?;
        self.expect_token(
            &Token::Then(self.current_location()),
            "Expected 'then' after if condition",
        )?;
        let body = self.parse_stmts()?;
        self.expect_token(
            &Token::EndIf(self.current_location()),
            "Expected 'endif' after if body",
        )?;

        Ok(Stmt::If { left, right, body })
    }

    /// Parse while statement: `while <id> != <id> do <stmts> endwhile`
    fn parse_while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect_token(
            &Token::While(self.current_location()),
            "Expected 'while'",
        )?;
        let left = self.expect_identifier()?;
        self.expect_token(
            &Token::NotEquals(self.current_location()),
            "Expected '!=' in while condition",
        )?;
        let right = self.expect_identifier()?;
        self.expect_token(
            &Token::Do(self.current_location()),
            "Expected 'do' after while condition",
        )?;
        let body = self.parse_stmts()?;
        self.expect_token(
            &Token::EndWhile(self.current_location()),
            "Expected 'endwhile' after while body",
        )?;

        Ok(Stmt::While { left, right, body })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;

    fn parse(source: &str) -> Program {
        Parser::new(source).unwrap().parse_program().unwrap()
    }

    #[test]
    fn test_write_statement() {
        let program = parse("write a");

        assert_eq!(program.stmts.len(), 1);
        match &program.stmts[0] {
            Stmt::Write { target } => assert_eq!(target.name, "a"),
            other => panic!("Expected write statement, got {:?}", other),
        }
    }

    #[test]
    fn test_init_statement() {
        let program = parse("init a = 5");

        match &program.stmts[0] {
            Stmt::Init { target, value } => {
                assert_eq!(target.name, "a");
                assert_eq!(value.value, 5);
            }
            other => panic!("Expected init statement, got {:?}", other),
        }
    }

    #[test]
    fn test_init_requires_literal_not_identifier() {
        let mut parser = Parser::new("init a = b").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("Expected int literal"));
        assert!(err.message.contains('b'));
    }

    #[test]
    fn test_if_statement_records_both_operands() {
        let program = parse("if a = b then write a endif");

        match &program.stmts[0] {
            Stmt::If { left, right, body } => {
                assert_eq!(left.name, "a");
                assert_eq!(right.name, "b");
                assert_eq!(body.len(), 1);
            }
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_if_missing_then() {
        let mut parser = Parser::new("if a = b endif").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("Expected 'then'"));
        assert!(err.message.contains("'endif'"));
    }

    #[test]
    fn test_if_with_empty_body() {
        let program = parse("if a = b then endif");

        match &program.stmts[0] {
            Stmt::If { body, .. } => assert!(body.is_empty()),
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_while_statement() {
        let program = parse("while a != b do calculate a = a + 1 endwhile");

        match &program.stmts[0] {
            Stmt::While { left, right, body } => {
                assert_eq!(left.name, "a");
                assert_eq!(right.name, "b");
                assert_eq!(body.len(), 1);
                assert!(matches!(body[0], Stmt::Calculate { .. }));
            }
            other => panic!("Expected while statement, got {:?}", other),
        }
    }

    #[test]
    fn test_while_requires_notequals() {
        let mut parser = Parser::new("while a = b do endwhile").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("Expected '!='"));
        assert!(err.message.contains("'='"));
    }

    #[test]
    fn test_nested_if_inside_while() {
        let program = parse(
            "while a != b do \
                if a = c then write a endif \
             endwhile",
        );

        match &program.stmts[0] {
            Stmt::While { body, .. } => {
                assert!(matches!(&body[0], Stmt::If { body, .. } if body.len() == 1));
            }
            other => panic!("Expected while statement, got {:?}", other),
        }
    }

    #[test]
    fn test_statements_keep_source_order() {
        let program = parse("write a write b write c");

        let names: Vec<&str> = program
            .stmts
            .iter()
            .map(|stmt| match stmt {
                Stmt::Write { target } => target.name.as_str(),
                other => panic!("Expected write statement, got {:?}", other),
            })
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_undeclared_identifier_is_accepted() {
        // The symbol table only guards declarations; identifier uses are
        // never checked against it, so this parses cleanly.
        let program = parse("calculate a = a + 1");

        assert!(program.vars.is_empty());
        assert_eq!(program.stmts.len(), 1);
    }
}
