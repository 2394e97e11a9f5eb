/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the statement family
/// - statements: Definitions for the individual statement nodes
pub mod ast;
pub mod statements;
