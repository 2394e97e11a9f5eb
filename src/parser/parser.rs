//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from a `TokenSource` on demand and keeps a
//! two-token window (`current` and `peek`) over them, so every grammar
//! decision can look one token ahead.
//!
//! Malformed statements never stop the parse. Each violation is recorded as
//! a diagnostic, the offending statement is dropped, and parsing resumes at
//! the next token.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    config::ParserConfig,
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// A parser owns its token source for its whole lifetime. Diagnostics are
/// scoped to the parser and kept in the order they were detected.
pub struct Parser<S: TokenSource> {
    /// Where tokens are pulled from
    source: S,
    /// The token being decided on
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<S>,
    config: ParserConfig,
    /// Set after a statement was dropped, until its `Semicolon` is reached
    recovering: bool,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser with the default config.
    pub fn new(source: S) -> Self {
        Parser::with_config(source, ParserConfig::default())
    }

    /// Creates a parser and primes the lookahead window by pulling the
    /// first two tokens.
    pub fn with_config(mut source: S, config: ParserConfig) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        let mut parser = Parser {
            source,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            config,
            recovering: false,
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the window one token forward.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        trace!(kind = %next.kind, value = %next.value, "pulled token");

        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Consumes the lookahead token if it has the expected kind.
    ///
    /// On success the window advances, making the expected token current.
    /// Otherwise an `UnexpectedToken` diagnostic is recorded at the lookahead
    /// token and the window is left untouched.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> bool {
        if self.peek_token_is(expected_kind) {
            self.advance();
            true
        } else {
            self.peek_error(expected_kind);
            false
        }
    }

    fn peek_error(&mut self, expected_kind: TokenKind) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: self.peek.kind,
            },
            self.peek.span.start.clone(),
        );
        self.push_error(error);
    }

    /// Advances until the current token has the given kind.
    ///
    /// Returns false if `EOF` is reached first, leaving `EOF` current.
    pub fn skip_until(&mut self, kind: TokenKind) -> bool {
        while !self.current_token_is(kind) {
            if self.current_token_is(TokenKind::EOF) {
                return false;
            }
            self.advance();
        }

        true
    }

    /// Records a diagnostic.
    pub fn push_error(&mut self, error: Error) {
        debug!(
            error = error.get_error_name(),
            position = error.get_position().0,
            "{}",
            error
        );
        self.errors.push(error);
    }

    /// Diagnostic messages, in the order they were detected.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Structured diagnostics, in the order they were detected.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Marks the tokens up to the next `Semicolon` as leftovers of a
    /// statement that has already been reported.
    pub fn start_recovery(&mut self) {
        self.recovering = true;
    }

    pub fn is_recovering(&self) -> bool {
        self.recovering
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<S> {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind the statement starts with
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<S>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses statements until `EOF`.
    ///
    /// Statements that fail to parse are left out of the program; their
    /// diagnostics are available from `errors` afterwards. The window is left
    /// at `EOF`, so calling this again yields an empty program.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            let start = self.get_position();

            match parse_stmt(self) {
                Some(stmt) => {
                    debug!(kind = ?stmt.get_stmt_type(), position = start.0, "parsed statement");
                    program.statements.push(stmt);
                }
                None => trace!(position = start.0, "no statement"),
            }

            if self.current_token_is(TokenKind::Semicolon) {
                self.recovering = false;
            }
            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "finished parsing"
        );

        program
    }
}

/// Parses an already lexed token stream.
///
/// This is the main entry point for parsing a token vector. It returns the
/// parser (for its diagnostics) alongside the program.
pub fn parse(tokens: Vec<Token>) -> (Parser<TokenStream>, Program) {
    let mut parser = Parser::new(TokenStream::new(tokens));
    let program = parser.parse_program();

    (parser, program)
}
