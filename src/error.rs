/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression, plus the constant-conversion failure that can surface while an
/// evaluator is being constructed. One parse error aborts the whole parse;
/// there is no error recovery.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression against an input vector. An evaluation error aborts only the
/// current call; the evaluator remains usable afterwards.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
