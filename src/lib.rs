//! # Introduction
//!
//! minilang is the front end for a minimal imperative language: integer
//! variables, sequential statements, an equality conditional, an inequality
//! loop, and `+` as the only arithmetic operator. Source text is validated
//! and turned into an owned abstract syntax tree; anything malformed is
//! rejected at the earliest point with a positioned error.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser (+ SymbolTable) → AST
//! ```
//!
//! 1. [`parser::lexer`] — maximal-munch tokenizer producing the full token
//!    stream up front.
//! 2. [`parser::parse`] — LL(1) recursive descent over the token stream,
//!    recording declarations in a [`parser::symbols::SymbolTable`] and
//!    rejecting duplicates.
//! 3. [`parser::ast`] — the owned tree; its `Display` impl is a depth-first
//!    dump with fixed per-node labels.
//!
//! ## Example
//!
//! ```
//! use minilang::parser::parse::Parser;
//!
//! let source = "var a init a = 5 write a";
//! let program = Parser::new(source)
//!     .and_then(|mut p| p.parse_program())
//!     .expect("parse failed");
//!
//! assert_eq!(program.vars.len(), 1);
//! assert_eq!(program.stmts.len(), 2);
//! print!("{}", program);
//! ```

pub mod parser;
