use std::collections::HashMap;

use crate::{
    ast::ast::Stmt,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{parser::Parser, stmt::*};

/// Parses one statement starting at the current token. `None` means the
/// statement was dropped; any reason has already been recorded.
pub type StmtHandler<S> = fn(&mut Parser<S>) -> Option<Stmt>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<S> = HashMap<TokenKind, StmtHandler<S>>;
