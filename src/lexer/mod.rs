//! Lexical analysis module.
//!
//! This module contains the lexer that turns source text into tokens for
//! the parser. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - The `TokenSource` boundary the parser pulls tokens through

pub mod lexer;
pub mod source;
pub mod tokens;
