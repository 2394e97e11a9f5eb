use std::vec::IntoIter;

use crate::{Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Anything the parser can pull tokens from.
///
/// Tokens come back in source order, and the sequence is terminated by an
/// `EOF` token. Once `EOF` has been returned, every later call returns `EOF`
/// again.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A token source over an already lexed vector of tokens.
pub struct TokenStream {
    tokens: IntoIter<Token>,
    eof: Option<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            eof: None,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        if let Some(eof) = &self.eof {
            return eof.clone();
        }

        // A vector without a trailing EOF still terminates.
        let token = self.tokens.next().unwrap_or_else(|| {
            MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span::null())
        });

        if token.is(TokenKind::EOF) {
            self.eof = Some(token.clone());
        }

        token
    }
}
