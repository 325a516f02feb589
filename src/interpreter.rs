/// The lexer.
///
/// Tokenizes a source string up front into a stream with bounded lookahead.
pub mod lexer;
/// The parser.
pub mod parser;
/// The evaluator.
pub mod evaluator;
