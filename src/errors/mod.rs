//! Error types and error handling for the parser.
//!
//! Parse errors are never fatal: the parser records them as diagnostics
//! and carries on. This module defines:
//!
//! - Error structures with source position information
//! - The diagnostic kinds the parser can record
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
