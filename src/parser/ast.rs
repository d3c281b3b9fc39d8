// AST (Abstract Syntax Tree) definitions for the minilang front end

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A variable reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Id {
    pub name: String,
    pub location: SourceLocation,
}

/// An integer constant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntLiteral {
    pub value: i64,
    pub location: SourceLocation,
}

/// Expression nodes
///
/// The node set is closed, so expressions are a tagged enum with exhaustive
/// matching rather than a trait object hierarchy.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Id(Id),
    IntLiteral(IntLiteral),
    Plus {
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    /// Get the source location of this node
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Id(id) => id.location,
            Expr::IntLiteral(lit) => lit.location,
            Expr::Plus { location, .. } => *location,
        }
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `write <id>`
    Write { target: Id },
    /// `init <id> = <int literal>`
    Init { target: Id, value: IntLiteral },
    /// `calculate <id> = <expr>`
    Calculate { target: Id, expr: Expr },
    /// `if <id> = <id> then <stmts> endif`
    If { left: Id, right: Id, body: Vec<Stmt> },
    /// `while <id> != <id> do <stmts> endwhile`
    While { left: Id, right: Id, body: Vec<Stmt> },
}

/// Top-level program structure: declared variables followed by statements.
///
/// Both sequences are append-only during parsing and wholly own their
/// children; the tree has no sharing and no cycles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub vars: Vec<Id>,
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }
}

// Depth-first textual dump with fixed per-node labels. The format matches the
// historical `show()` traversal line for line, so downstream tooling that
// scrapes the dump keeps working.

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AST id {}", self.name)
    }
}

impl fmt::Display for IntLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AST int literal {}", self.value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Id(id) => write!(f, "{}", id),
            Expr::IntLiteral(lit) => write!(f, "{}", lit),
            Expr::Plus { left, right, .. } => {
                writeln!(f, "AST plus")?;
                write!(f, "LHS: {}", left)?;
                write!(f, "RHS: {}", right)
            }
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Write { target } => {
                writeln!(f, "AST write")?;
                write!(f, "{}", target)
            }
            Stmt::Init { target, value } => {
                writeln!(f, "AST init")?;
                write!(f, "{}", target)?;
                write!(f, "{}", value)
            }
            Stmt::Calculate { target, expr } => {
                writeln!(f, "AST calculate")?;
                write!(f, "{}", target)?;
                write!(f, "{}", expr)
            }
            Stmt::If { left, right, body } => {
                writeln!(f, "AST if")?;
                write!(f, "LHS: {}", left)?;
                write!(f, "RHS: {}", right)?;
                writeln!(f, "if body")?;
                for stmt in body {
                    write!(f, "{}", stmt)?;
                }
                writeln!(f, "AST endif")
            }
            Stmt::While { left, right, body } => {
                writeln!(f, "AST while")?;
                write!(f, "LHS: {}", left)?;
                write!(f, "RHS: {}", right)?;
                writeln!(f, "while body")?;
                for stmt in body {
                    write!(f, "{}", stmt)?;
                }
                writeln!(f, "AST endwhile")?;
                writeln!(f)
            }
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AST Variables")?;
        for id in &self.vars {
            write!(f, "{}", id)?;
        }
        writeln!(f, "AST Statements")?;
        for stmt in &self.stmts {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
