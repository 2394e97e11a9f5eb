use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

/// `let <name> = <value>;`
///
/// The value tokens are skipped by the parser, so only the binding is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    /// The `let` keyword
    pub token: Token,
    pub name: Identifier,
    pub span: Span,
}

impl LetStmt {
    pub fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ;", self.token_literal(), self.name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        Identifier {
            value: token.value.clone(),
            token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
