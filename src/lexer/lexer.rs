use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    source::TokenSource,
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

/// Handles a pattern that matched at the lexer's position. Returns `None`
/// when the matched text produces no token (whitespace, comments).
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Every pattern is anchored so it only matches at the current position.
// Longer operators come before their prefixes.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^//.*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// Pull-based lexer: each call to `next_token` scans exactly one token.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    fn illegal_token(&mut self, ch: char) -> Token {
        let start = self.position();
        self.advance_n(ch.len_utf8());

        MK_TOKEN!(TokenKind::Illegal, ch.to_string(), Span { start, end: self.position() })
    }

    fn eof_token(&self) -> Token {
        MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span { start: self.position(), end: self.position() })
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            let Some(ch) = self.at() else {
                return self.eof_token();
            };

            let pattern = PATTERNS
                .iter()
                .find(|pattern| pattern.regex.is_match(self.remainder()));

            match pattern {
                Some(pattern) => {
                    if let Some(token) = (pattern.handler)(self, &pattern.regex) {
                        return token;
                    }
                }
                None => return self.illegal_token(ch),
            }
        }
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.as_str().to_string();
    let start = lexer.position();
    lexer.advance_n(matched.len());

    Some(MK_TOKEN!(TokenKind::Number, matched, Span { start, end: lexer.position() }))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.end();
    lexer.advance_n(matched);
    None
}

fn string_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let matched = regex.find(lexer.remainder())?.as_str().to_string();
    let start = lexer.position();
    lexer.advance_n(matched.len());

    let string_literal = unescape(&matched[1..matched.len() - 1]);

    Some(MK_TOKEN!(TokenKind::String, string_literal, Span { start, end: lexer.position() }))
}

fn unescape(raw: &str) -> String {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('0') => result.push('\0'),
            // Unknown escape or lone backslash: keep the backslash
            _ => {
                result.push(ch);
                continue;
            }
        }
        chars.next();
    }

    result
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Option<Token> {
    let value = regex.find(lexer.remainder())?.as_str().to_string();
    let kind = RESERVED_LOOKUP
        .get(value.as_str())
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let start = lexer.position();
    lexer.advance_n(value.len());

    Some(MK_TOKEN!(kind, value, Span { start, end: lexer.position() }))
}

/// Lexes the whole source eagerly. The returned vector always ends with
/// exactly one `EOF` token.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
