use crate::{
    ast::{
        ast::Stmt,
        statements::{Identifier, LetStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{source::TokenSource, tokens::TokenKind},
    Span,
};

use super::parser::Parser;

/// Parses the statement starting at the current token.
///
/// Tokens with no registered handler produce no statement. Under a strict
/// config they also produce an `UnrecognisedStatement` diagnostic, unless
/// they are leftovers of a statement that was already reported.
pub fn parse_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let kind = parser.current_token_kind();

    let handler = parser.get_stmt_lookup().get(&kind).copied();

    if let Some(handler) = handler {
        let errors_before = parser.diagnostics().len();
        let stmt = handler(parser);

        if stmt.is_none() && parser.diagnostics().len() > errors_before {
            parser.start_recovery();
        }
        return stmt;
    }

    if parser.config().report_unknown_statements && !parser.is_recovering() {
        let error = Error::new(
            ErrorImpl::UnrecognisedStatement { token: kind },
            parser.get_position(),
        );
        parser.push_error(error);
    }

    None
}

/// `let <identifier> = <value tokens> ;`
///
/// The value is not parsed: everything up to the semicolon is skipped. On
/// return the semicolon is the current token.
pub fn parse_let_stmt<S: TokenSource>(parser: &mut Parser<S>) -> Option<Stmt> {
    let start_token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }

    if !parser.skip_until(TokenKind::Semicolon) {
        let error = Error::new(
            ErrorImpl::UnterminatedStatement {
                statement: start_token.value.clone(),
            },
            parser.get_position(),
        );
        parser.push_error(error);
        return None;
    }

    Some(Stmt::Let(LetStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        name,
    }))
}
