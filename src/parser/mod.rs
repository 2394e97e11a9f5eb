//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a `Program`. It handles:
//!
//! - Two-token lookahead over a pull-based token source
//! - Statement dispatch through a lookup table keyed by token kind
//! - `let` statement parsing
//! - Non-fatal error reporting: diagnostics are collected, bad statements
//!   are dropped, and parsing continues

pub mod config;
pub mod lookups;
pub mod parser;
pub mod stmt;
