/// Parse policy knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Record a diagnostic for every top-level token that does not start a
    /// known statement. Off by default: such tokens are skipped silently.
    pub report_unknown_statements: bool,
}

impl ParserConfig {
    pub fn strict() -> Self {
        ParserConfig {
            report_unknown_statements: true,
        }
    }
}
