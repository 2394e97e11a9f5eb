//! Integration tests for the lexer to parser pipeline.
//!
//! These tests drive the public API the way a consumer would: lex source
//! text, parse it, then inspect the program and the diagnostics.

use letparse::{
    ast::ast::{Program, Stmt},
    errors::errors::ErrorImpl,
    lexer::{
        lexer::{tokenize, Lexer},
        source::TokenStream,
        tokens::TokenKind,
    },
    parser::{
        config::ParserConfig,
        parser::{parse, Parser},
    },
    render_error,
};

fn let_names(program: &Program) -> Vec<&str> {
    program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Let(stmt) => stmt.name.value.as_str(),
        })
        .collect()
}

#[test]
fn test_parse_program_from_lexer() {
    let source = "let x = 5;\nlet y = 10;\nlet foobar = 838383;\n";
    let mut parser = Parser::new(Lexer::new(source.to_string(), Some("main.lang".to_string())));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty());
    assert_eq!(let_names(&program), vec!["x", "y", "foobar"]);
}

#[test]
fn test_lexer_and_token_stream_agree() {
    let source = "let a = 1; let 2; let b = a + 1; let c d;";

    let (stream_parser, from_stream) = parse(tokenize(source.to_string(), None));

    let mut lexer_parser = Parser::new(Lexer::new(source.to_string(), None));
    let from_lexer = lexer_parser.parse_program();

    assert_eq!(from_stream, from_lexer);
    assert_eq!(stream_parser.errors(), lexer_parser.errors());
    assert_eq!(let_names(&from_lexer), vec!["a", "b"]);
}

#[test]
fn test_malformed_program_reports_every_statement() {
    let source = "let 5;\nlet x 5;\nlet y = 10;\nlet z = 1";
    let (parser, program) = parse(tokenize(source.to_string(), Some("main.lang".to_string())));

    assert_eq!(let_names(&program), vec!["y"]);

    let names: Vec<&str> = parser
        .diagnostics()
        .iter()
        .map(|error| error.get_error_name())
        .collect();
    assert_eq!(
        names,
        vec!["UnexpectedToken", "UnexpectedToken", "UnterminatedStatement"]
    );

    assert_eq!(
        &parser.errors()[..2],
        &[
            "expected next token to be Identifier, got Number instead".to_string(),
            "expected next token to be Assignment, got Number instead".to_string(),
        ]
    );
}

#[test]
fn test_rendered_diagnostic() {
    let source = "let a = 1;\n  let b 2;\n";
    let (parser, _) = parse(tokenize(source.to_string(), Some("main.lang".to_string())));

    assert_eq!(parser.diagnostics().len(), 1);

    let rendered = render_error(&parser.diagnostics()[0], source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[1], "-> main.lang");
    assert_eq!(lines[3], "2 | let b 2;");
    assert_eq!(lines[4], "  | ------^");
}

#[test]
fn test_strict_mode_reports_stray_tokens() {
    let source = "if; let a = 1;";
    let mut parser = Parser::with_config(Lexer::new(source.to_string(), None), ParserConfig::strict());
    let program = parser.parse_program();

    assert_eq!(let_names(&program), vec!["a"]);
    assert!(matches!(
        parser.diagnostics()[0].get_kind(),
        ErrorImpl::UnrecognisedStatement { token: TokenKind::If }
    ));
    assert_eq!(parser.diagnostics().len(), 2);
}

#[test]
fn test_strict_mode_reports_malformed_let_once() {
    let source = "let x 5 6 7; let y = 1;";
    let mut parser = Parser::with_config(Lexer::new(source.to_string(), None), ParserConfig::strict());
    let program = parser.parse_program();

    assert_eq!(let_names(&program), vec!["y"]);
    assert_eq!(parser.diagnostics().len(), 1);
    assert_eq!(parser.diagnostics()[0].get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parsing_terminates_on_trailing_let() {
    for source in ["let", "let x", "let x =", "let x = 1 2 3"] {
        let (parser, program) = parse(tokenize(source.to_string(), None));

        assert!(program.is_empty(), "{}", source);
        assert_eq!(parser.errors().len(), 1, "{}", source);
    }
}

#[test]
fn test_parse_empty_token_stream() {
    let mut parser = Parser::new(TokenStream::new(vec![]));
    let program = parser.parse_program();

    assert!(program.is_empty());
    assert!(!parser.has_errors());
}
