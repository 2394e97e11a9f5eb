use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnterminatedStatement { .. } => "UnterminatedStatement",
            ErrorImpl::UnrecognisedStatement { .. } => "UnrecognisedStatement",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => {
                ErrorTip::Suggestion(self.internal_error.to_string())
            }
            ErrorImpl::UnterminatedStatement { statement } => ErrorTip::Suggestion(format!(
                "`{}` statement reached end of input, did you miss a semicolon?",
                statement
            )),
            ErrorImpl::UnrecognisedStatement { token } => ErrorTip::Suggestion(format!(
                "No statement starts with `{}`",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("expected Semicolon before end of input in `{statement}` statement")]
    UnterminatedStatement { statement: String },
    #[error("no statement begins with {token}")]
    UnrecognisedStatement { token: TokenKind },
}
