#![allow(clippy::module_inception)]

use std::{fmt::Write, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text, and the offset of
/// `position` within that line. An offset at the very end of the source
/// maps onto the last line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), pos - start));
        start = end;
        line_number += 1;
    }

    if pos == content.len() {
        return last.or(Some((1, String::new(), 0)));
    }

    None
}


/// Renders an error against the source it was found in.
///
/// ```text
/// Error: UnexpectedToken (expected next token to be Assignment, got Number instead)
/// -> main.lang
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    // Writing into a String cannot fail
    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let column = line_text
        .get(..line_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(0);
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

    out
}

// Indentation is ASCII, so the char count is also a byte offset
fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
