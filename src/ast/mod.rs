/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree the parser hands to an evaluator
///
/// Submodules:
/// - ast: The `Node` trait, the `Statement`/`Expression` sums and `Program`
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
pub mod ast;
pub mod expressions;
pub mod statements;
