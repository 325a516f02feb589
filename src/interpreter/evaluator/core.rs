use std::collections::HashMap;

use log::debug;
use ordered_float::OrderedFloat;

use crate::{
    ast::{Ast, Node, NodeId},
    error::{EvalError, ParseError},
    interpreter::{evaluator::dispatch, parser::core::parse},
};

/// A reusable, memoizing evaluator for one parsed expression.
///
/// `S` is the expression's input arity: every evaluation reads its variable
/// values from an `[f32; S]`, with each variable resolved to a slot index
/// through the caller-supplied slot map. Binding the arity at the type level
/// lets the result cache key be a plain fixed-size array instead of an
/// allocated vector.
///
/// Construction parses the source and folds every numeric literal to a float
/// once; both steps fail atomically, so an `Evaluator` that exists is always
/// ready to evaluate.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use matheval::Evaluator;
///
/// let slots = HashMap::from([("a".to_string(), 0)]);
/// let mut evaluator = Evaluator::<1>::new("a * 2", slots).unwrap();
///
/// assert_eq!(evaluator.evaluate(&[3.0], true).unwrap(), 6.0);
/// ```
#[derive(Debug)]
pub struct Evaluator<const S: usize> {
    ast:        Ast,
    slots:      HashMap<String, usize>,
    constants:  HashMap<String, f32>,
    cache:      HashMap<[OrderedFloat<f32>; S], f32>,
    declared:   Vec<String>,
    tree_walks: u64,
}

impl<const S: usize> Evaluator<S> {
    /// Parses `source` and prepares it for evaluation against `slots`.
    ///
    /// `slots` maps each variable name the expression may reference to its
    /// index in the input array. Slot validity is checked at evaluation time,
    /// when the reference is actually reached.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when the source does not parse or a numeric
    /// literal cannot be represented as a float. No partially constructed
    /// evaluator survives a failure.
    pub fn new(source: &str, slots: HashMap<String, usize>) -> Result<Self, ParseError> {
        let parsed = parse(source)?;
        let constants = fold_constants(&parsed.ast)?;

        debug!("evaluator ready: {} nodes, {} folded constants, arity {S}",
               parsed.ast.len(),
               constants.len());

        Ok(Self { ast: parsed.ast,
                  slots,
                  constants,
                  cache: HashMap::new(),
                  declared: parsed.declared,
                  tree_walks: 0 })
    }

    /// Evaluates the expression for one input vector.
    ///
    /// Previously stored results are served from the cache without walking
    /// the tree. On a miss the tree is walked once; when `store` is true the
    /// result is then cached under exactly this input vector. Failed
    /// evaluations are never cached.
    ///
    /// Cache keys compare by total order over the raw float bits, so an input
    /// vector containing `NaN` still hits its own earlier entry.
    ///
    /// # Errors
    /// Returns an [`EvalError`] when the expression references a variable
    /// outside the slot map, a slot outside the input arity, or an operator
    /// without a registered implementation. The evaluator stays usable after
    /// a failed call.
    pub fn evaluate(&mut self, inputs: &[f32; S], store: bool) -> Result<f32, EvalError> {
        let key = inputs.map(OrderedFloat);

        if let Some(result) = self.cache.get(&key) {
            debug!("cache hit for {inputs:?}");
            return Ok(*result);
        }

        self.tree_walks += 1;
        let result = self.eval_node(self.ast.root(), inputs)?;

        if store {
            self.cache.insert(key, result);
        }

        Ok(result)
    }

    fn eval_node(&self, id: NodeId, inputs: &[f32; S]) -> Result<f32, EvalError> {
        match self.ast.node(id) {
            // Every numeric leaf was folded at construction time.
            Node::Num { lexeme } => Ok(self.constants[lexeme.as_str()]),

            Node::Id { name } => {
                let Some(&slot) = self.slots.get(name) else {
                    return Err(EvalError::UndefinedVariable { name: name.clone() });
                };
                if slot >= S {
                    return Err(EvalError::IndexOutOfRange { name: name.clone(),
                                                            slot,
                                                            arity: S });
                }
                Ok(inputs[slot])
            },

            Node::Unary { op, child } => {
                let func = dispatch::one_parameter(*op)
                    .ok_or(EvalError::UnimplementedOperator { op: *op })?;
                Ok(func(self.eval_node(*child, inputs)?))
            },

            Node::Binary { lhs, rhs, op } => {
                let left = self.eval_node(*lhs, inputs)?;
                let right = self.eval_node(*rhs, inputs)?;
                Ok(dispatch::two_parameter(*op)(left, right))
            },
        }
    }

    /// Names introduced by the source's declaration prefix, function name
    /// first. Empty for a bare expression.
    #[must_use]
    pub fn declared_names(&self) -> &[String] {
        &self.declared
    }

    /// Number of input vectors with a stored result.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Number of full tree traversals performed so far. Cache hits do not
    /// walk the tree and therefore do not count.
    #[must_use]
    pub const fn tree_walks(&self) -> u64 {
        self.tree_walks
    }
}

/// Converts every numeric leaf's lexeme to a float, once.
///
/// Identical lexemes share one entry, so `2 + 2` folds a single constant.
fn fold_constants(ast: &Ast) -> Result<HashMap<String, f32>, ParseError> {
    let mut constants = HashMap::new();

    for node in ast.nodes() {
        if let Node::Num { lexeme } = node
            && !constants.contains_key(lexeme)
        {
            let Ok(value) = lexeme.parse::<f32>() else {
                return Err(ParseError::InvalidNumericLiteral { lexeme: lexeme.clone() });
            };
            constants.insert(lexeme.clone(), value);
        }
    }

    Ok(constants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::UnaryOp;

    fn constant(source: &str) -> Evaluator<0> {
        Evaluator::new(source, HashMap::new()).unwrap()
    }

    #[test]
    fn precedence_and_grouping_shape_the_result() {
        assert_eq!(constant("2 + 3").evaluate(&[], false).unwrap(), 5.0);
        assert_eq!(constant("2 + 3 * 4").evaluate(&[], false).unwrap(), 14.0);
        assert_eq!(constant("(2 + 3) * 4").evaluate(&[], false).unwrap(), 20.0);
    }

    #[test]
    fn unary_functions_dispatch() {
        assert!(constant("sin(0)").evaluate(&[], false).unwrap().abs() < 1e-6);
        assert_eq!(constant("cos(0)").evaluate(&[], false).unwrap(), 1.0);
        assert_eq!(constant("exp(0)").evaluate(&[], false).unwrap(), 1.0);
    }

    #[test]
    fn division_by_zero_is_infinity_not_an_error() {
        assert_eq!(constant("4 / 0").evaluate(&[], false).unwrap(), f32::INFINITY);
    }

    #[test]
    fn variables_read_their_slot() {
        let slots = HashMap::from([("a".to_string(), 0)]);
        let mut evaluator = Evaluator::<1>::new("a * 2", slots).unwrap();

        assert_eq!(evaluator.evaluate(&[3.0], true).unwrap(), 6.0);
        assert_eq!(evaluator.evaluate(&[5.0], true).unwrap(), 10.0);
    }

    #[test]
    fn stored_results_skip_the_tree_walk() {
        let slots = HashMap::from([("a".to_string(), 0)]);
        let mut evaluator = Evaluator::<1>::new("a * 2", slots).unwrap();

        let first = evaluator.evaluate(&[3.0], true).unwrap();
        let second = evaluator.evaluate(&[3.0], true).unwrap();

        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(evaluator.tree_walks(), 1);
        assert_eq!(evaluator.cache_len(), 1);

        // A different input vector is a different key.
        evaluator.evaluate(&[4.0], true).unwrap();
        assert_eq!(evaluator.tree_walks(), 2);
        assert_eq!(evaluator.cache_len(), 2);
    }

    #[test]
    fn unstored_results_walk_the_tree_every_time() {
        let mut evaluator = constant("2 + 3");

        evaluator.evaluate(&[], false).unwrap();
        evaluator.evaluate(&[], false).unwrap();

        assert_eq!(evaluator.tree_walks(), 2);
        assert_eq!(evaluator.cache_len(), 0);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let slots = HashMap::from([("a".to_string(), 0)]);
        let mut evaluator = Evaluator::<1>::new("69 * a + 4.0 - 4 / 2 + sin(3.14)", slots).unwrap();

        let first = evaluator.evaluate(&[0.5], false).unwrap();
        for _ in 0..4 {
            assert_eq!(evaluator.evaluate(&[0.5], false).unwrap().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn nan_inputs_still_hit_their_own_cache_entry() {
        let slots = HashMap::from([("a".to_string(), 0)]);
        let mut evaluator = Evaluator::<1>::new("a + 1", slots).unwrap();

        evaluator.evaluate(&[f32::NAN], true).unwrap();
        evaluator.evaluate(&[f32::NAN], true).unwrap();

        assert_eq!(evaluator.tree_walks(), 1);
    }

    #[test]
    fn unknown_variable_is_an_error_not_a_crash() {
        let slots = HashMap::from([("a".to_string(), 0)]);
        let mut evaluator = Evaluator::<1>::new("a + b", slots).unwrap();

        let result = evaluator.evaluate(&[1.0], true);
        assert!(matches!(result, Err(EvalError::UndefinedVariable { ref name }) if name == "b"));

        // The failed call left the evaluator usable.
        let slots = HashMap::from([("a".to_string(), 0), ("b".to_string(), 0)]);
        let mut evaluator = Evaluator::<1>::new("a + b", slots).unwrap();
        assert_eq!(evaluator.evaluate(&[1.0], true).unwrap(), 2.0);
    }

    #[test]
    fn slot_outside_the_arity_is_an_error() {
        let slots = HashMap::from([("a".to_string(), 5)]);
        let mut evaluator = Evaluator::<1>::new("a + 1", slots).unwrap();

        let result = evaluator.evaluate(&[1.0], true);
        assert!(matches!(result,
                         Err(EvalError::IndexOutOfRange { slot: 5, arity: 1, .. })));
    }

    #[test]
    fn reserved_operator_is_an_error_and_is_not_cached() {
        let mut evaluator = constant("tan(1)");

        let result = evaluator.evaluate(&[], true);
        assert!(matches!(result,
                         Err(EvalError::UnimplementedOperator { op: UnaryOp::Tan })));
        assert_eq!(evaluator.cache_len(), 0);
    }

    #[test]
    fn construction_fails_atomically_on_parse_errors() {
        assert!(matches!(Evaluator::<0>::new("(2 + 3", HashMap::new()),
                         Err(ParseError::ExpectedClosingParen { .. })));
        assert!(matches!(Evaluator::<0>::new("2 +", HashMap::new()),
                         Err(ParseError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn declared_names_survive_into_the_evaluator() {
        let slots = HashMap::from([("x".to_string(), 0)]);
        let mut evaluator = Evaluator::<1>::new("f(x) = x * x", slots).unwrap();

        assert_eq!(evaluator.declared_names(), ["f", "x"]);
        assert_eq!(evaluator.evaluate(&[3.0], true).unwrap(), 9.0);
    }

    #[test]
    fn repeated_literals_fold_to_one_constant() {
        let evaluator = constant("2 + 2 + 2");
        assert_eq!(evaluator.constants.len(), 1);
    }
}
