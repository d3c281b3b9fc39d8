//! Declaration-tracking symbol table
//!
//! Records each declared variable name with its data type and rejects
//! redeclaration. The table lives only for the duration of one parse; it is
//! never consulted when identifiers are *used* inside statements, so
//! use-before-declare is accepted by design of the language front end.

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use std::fmt;

/// Data types a variable can be declared with. The language has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Int,
}

/// Symbol table entry: a declared variable's name and type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    pub name: String,
    pub data_type: DataType,
}

/// Error returned when a variable name is declared a second time.
#[derive(Debug)]
pub struct DuplicateDeclaration {
    pub name: String,
    pub location: SourceLocation,
}

impl fmt::Display for DuplicateDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Variable already declared: {} (at line {}, column {})",
            self.name, self.location.line, self.location.column
        )
    }
}

impl std::error::Error for DuplicateDeclaration {}

/// Mapping from declared variable name to its entry, unique by construction.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, SymbolInfo>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Record a declaration.
    ///
    /// `location` is the position of the declaring identifier, reported back
    /// if the name is already taken.
    pub fn declare(
        &mut self,
        name: &str,
        location: SourceLocation,
    ) -> Result<(), DuplicateDeclaration> {
        if self.entries.contains_key(name) {
            return Err(DuplicateDeclaration {
                name: name.to_string(),
                location,
            });
        }

        self.entries.insert(
            name.to_string(),
            SymbolInfo {
                name: name.to_string(),
                data_type: DataType::Int,
            },
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
