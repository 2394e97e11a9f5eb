use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use letparse::{
    lexer::lexer::Lexer,
    parser::{config::ParserConfig, parser::Parser},
    render_error,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: letparse [--strict] <file>";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = ParserConfig::default();
    let mut file_path = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--strict" => config.report_unknown_statements = true,
            _ if file_path.is_none() && !arg.starts_with("--") => file_path = Some(arg),
            _ => {
                eprintln!("{}", USAGE);
                return ExitCode::from(2);
            }
        }
    }

    let Some(file_path) = file_path else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    let path = PathBuf::from(&file_path);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let file_contents = match read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) => {
            error!(path = %path.display(), "failed to read file: {}", err);
            eprintln!("Failed to read {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let lexer = Lexer::new(file_contents.clone(), Some(file_name));
    let mut parser = Parser::with_config(lexer, config);
    let program = parser.parse_program();

    info!(elapsed = ?start.elapsed(), statements = program.len(), "parsed");

    for stmt in &program {
        println!("{}", stmt);
    }

    if !parser.has_errors() {
        return ExitCode::SUCCESS;
    }

    for error in parser.diagnostics() {
        eprint!("{}", render_error(error, &file_contents));
    }
    eprintln!("{} error(s) found", parser.diagnostics().len());

    ExitCode::FAILURE
}
