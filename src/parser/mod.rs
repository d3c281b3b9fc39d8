//! minilang source code parser
//!
//! This module transforms minilang source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//! - [`symbols`]: Declaration-tracking symbol table
//!
//! # The Language
//!
//! A program is a run of `var` declarations followed by a run of statements:
//! - Declarations: `var a` (every variable is an integer)
//! - Statements: `write a`, `init a = 5`, `calculate a = a + 1`,
//!   `if a = b then ... endif`, `while a != b do ... endwhile`
//! - Expressions: identifiers and integer literals joined by `+`
//!
//! # Parser Implementation
//!
//! Hand-written LL(1) recursive descent parser, one token of lookahead, no
//! backtracking. No external parser generator dependencies. The first error
//! (lexical, syntactic, or a duplicate declaration) aborts the parse; there
//! is no recovery and no partial AST.

pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;
pub mod symbols;
