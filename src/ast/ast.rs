use std::{fmt::Display, slice::Iter};

use crate::Span;

use super::statements::LetStmt;

/// Statement Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum StmtType {
    LetStmt,
}

/// Statement
///
/// Closed family of statement nodes. New statement forms add a variant here
/// and a handler in the parser's statement lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
}

impl Stmt {
    /// Returns the type of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Let(_) => StmtType::LetStmt,
        }
    }

    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => &stmt.span,
        }
    }

    /// Literal of the token the statement starts with.
    pub fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => stmt.token_literal(),
        }
    }

    pub fn as_let(&self) -> Option<&LetStmt> {
        match self {
            Stmt::Let(stmt) => Some(stmt),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Root of the tree. Statements are kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
