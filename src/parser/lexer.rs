//! Lexer (tokenizer) for minilang source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Tokenization is maximal munch: identifiers, keywords, and integer
//! literals always consume the longest run of characters that fits.

use super::ast::SourceLocation;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
/// `Ident` and `IntLiteral` additionally keep the exact lexeme text; keyword
/// and operator lexemes are fixed spellings recoverable from the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    IntLiteral(String, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    Var(SourceLocation),
    Write(SourceLocation),
    Init(SourceLocation),
    If(SourceLocation),
    Then(SourceLocation),
    EndIf(SourceLocation),
    While(SourceLocation),
    Do(SourceLocation),
    EndWhile(SourceLocation),
    Calculate(SourceLocation),

    // Operators
    Plus(SourceLocation),      // +
    Equals(SourceLocation),    // =
    NotEquals(SourceLocation), // !=

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::IntLiteral(_, loc)
            | Token::Ident(_, loc)
            | Token::Var(loc)
            | Token::Write(loc)
            | Token::Init(loc)
            | Token::If(loc)
            | Token::Then(loc)
            | Token::EndIf(loc)
            | Token::While(loc)
            | Token::Do(loc)
            | Token::EndWhile(loc)
            | Token::Calculate(loc)
            | Token::Plus(loc)
            | Token::Equals(loc)
            | Token::NotEquals(loc)
            | Token::Eof(loc) => *loc,
        }
    }

    /// Returns the lexeme text this token was recognized from.
    ///
    /// For keywords and operators this is the fixed spelling; for `Eof` it is
    /// the empty string.
    pub fn lexeme(&self) -> &str {
        match self {
            Token::IntLiteral(s, _) | Token::Ident(s, _) => s,
            Token::Var(_) => "var",
            Token::Write(_) => "write",
            Token::Init(_) => "init",
            Token::If(_) => "if",
            Token::Then(_) => "then",
            Token::EndIf(_) => "endif",
            Token::While(_) => "while",
            Token::Do(_) => "do",
            Token::EndWhile(_) => "endwhile",
            Token::Calculate(_) => "calculate",
            Token::Plus(_) => "+",
            Token::Equals(_) => "=",
            Token::NotEquals(_) => "!=",
            Token::Eof(_) => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(s, _) => write!(f, "int literal {}", s),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Var(_) => write!(f, "'var'"),
            Token::Write(_) => write!(f, "'write'"),
            Token::Init(_) => write!(f, "'init'"),
            Token::If(_) => write!(f, "'if'"),
            Token::Then(_) => write!(f, "'then'"),
            Token::EndIf(_) => write!(f, "'endif'"),
            Token::While(_) => write!(f, "'while'"),
            Token::Do(_) => write!(f, "'do'"),
            Token::EndWhile(_) => write!(f, "'endwhile'"),
            Token::Calculate(_) => write!(f, "'calculate'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Equals(_) => write!(f, "'='"),
            Token::NotEquals(_) => write!(f, "'!='"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for minilang source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.scan()?;
            let done = matches!(token, Token::Eof(_));
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan and return the next token from the input.
    ///
    /// Skips any run of whitespace first. At end of input returns
    /// [`Token::Eof`]; calling again after that keeps returning `Eof`.
    pub fn scan(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        if self.is_at_end() {
            return Ok(Token::Eof(self.current_location()));
        }

        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of input".to_string(),
            location: loc,
        })?;

        match ch {
            // Integer literals
            '0'..='9' => Ok(self.number_literal(ch, loc)),

            // Identifiers and keywords
            ch if ch.is_alphabetic() => Ok(self.identifier_or_keyword(ch, loc)),

            // Operators
            '+' => Ok(Token::Plus(loc)),
            '=' => Ok(Token::Equals(loc)),
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::NotEquals(loc))
                } else {
                    Err(LexError {
                        message: "Unexpected character: '!' (expected '!=')"
                            .to_string(),
                        location: loc,
                    })
                }
            }

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Scan integer literal (maximal run of digits)
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Kept as text here; the parser converts when it builds the node
        Token::IntLiteral(num_str, loc)
    }

    /// Scan identifier or keyword (maximal run of letters and digits)
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        // Check if it's a reserved word
        match ident.as_str() {
            "var" => Token::Var(loc),
            "write" => Token::Write(loc),
            "init" => Token::Init(loc),
            "if" => Token::If(loc),
            "then" => Token::Then(loc),
            "endif" => Token::EndIf(loc),
            "while" => Token::While(loc),
            "do" => Token::Do(loc),
            "endwhile" => Token::EndWhile(loc),
            "calculate" => Token::Calculate(loc),
            _ => Token::Ident(ident, loc),
        }
    }

    /// Skip whitespace
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        if self.position < self.input.len() {
            Some(self.input[self.position])
        } else {
            None
        }
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
