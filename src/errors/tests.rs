//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::Number,
        },
        Position(4, Rc::new("test.lang".to_string())),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be Identifier, got Number instead"
    );
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.lang".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Semicolon,
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_unterminated_statement_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedStatement {
            statement: "let".to_string(),
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnterminatedStatement");
    assert_eq!(
        error.to_string(),
        "expected Semicolon before end of input in `let` statement"
    );
}

#[test]
fn test_unrecognised_statement_error() {
    let error = Error::new(
        ErrorImpl::UnrecognisedStatement {
            token: TokenKind::Number,
        },
        Position(0, Rc::new("test.lang".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedStatement");
    assert_eq!(error.to_string(), "no statement begins with Number");
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(format!("{}", tip), "Try this instead");

    let no_tip = ErrorTip::None;
    assert_eq!(format!("{}", no_tip), "");
}

#[test]
fn test_every_error_has_a_tip() {
    let errors = vec![
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::EOF,
        },
        ErrorImpl::UnterminatedStatement {
            statement: "let".to_string(),
        },
        ErrorImpl::UnrecognisedStatement {
            token: TokenKind::Illegal,
        },
    ];

    for error_impl in errors {
        let error = Error::new(error_impl, Position::null());
        assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
    }
}

#[test]
fn test_error_kind_access() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Number,
        },
        Position::null(),
    );

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Number,
        }
    ));
}
