//! # matheval
//!
//! matheval is a memoizing evaluator for infix arithmetic expressions. It
//! parses an expression once, binds its variables to input slots, and then
//! evaluates it repeatedly against input vectors, caching results per exact
//! input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

/// Defines the structure of parsed expressions.
///
/// This module declares the arena-backed expression tree the parser builds
/// and the evaluator walks: numeric and identifier leaves, unary
/// applications, and binary operations, all stored contiguously and linked by
/// index.
///
/// # Responsibilities
/// - Defines the node and operator types for every language construct.
/// - Keeps operator discriminants aligned with the evaluator's dispatch
///   tables.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an expression. Parse errors carry the source line they
/// occurred on; evaluation errors carry the name or operator that failed.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, the parser with its operator tables,
/// and the memoizing evaluator, and exposes the public API for turning source
/// text into results.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and evaluator.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        evaluator::core::Evaluator,
        parser::core::{ParsedExpr, parse},
    },
};

/// Parses and evaluates an expression in one shot, without caching.
///
/// This is the convenience path for callers who evaluate an expression
/// exactly once; anything evaluated repeatedly should construct an
/// [`Evaluator`] and reuse it.
///
/// # Errors
/// Returns an error if the source does not parse or the evaluation fails.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use matheval::evaluate_once;
///
/// let result = evaluate_once("2 + 3 * 4", HashMap::new(), &[]).unwrap();
/// assert_eq!(result, 14.0);
///
/// // An unknown variable is an error, not a crash.
/// let result = evaluate_once("x + 1", HashMap::new(), &[]);
/// assert!(result.is_err());
/// ```
pub fn evaluate_once<const S: usize>(source: &str,
                                     slots: HashMap<String, usize>,
                                     inputs: &[f32; S])
                                     -> Result<f32, Box<dyn std::error::Error>> {
    let mut evaluator = Evaluator::<S>::new(source, slots)?;
    Ok(evaluator.evaluate(inputs, false)?)
}
