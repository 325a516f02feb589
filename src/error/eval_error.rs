use crate::ast::UnaryOp;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The expression references a variable that is not present in the
    /// caller-supplied slot map.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The expression applies a unary operator whose dispatch slot has no
    /// registered function (e.g. `tan`).
    UnimplementedOperator {
        /// The operator without an implementation.
        op: UnaryOp,
    },
    /// The slot map assigns a variable an index outside the evaluator's input
    /// arity. This is a caller contract violation surfaced as an error rather
    /// than a panic.
    IndexOutOfRange {
        /// The name of the variable.
        name:  String,
        /// The out-of-range slot index.
        slot:  usize,
        /// The evaluator's input arity.
        arity: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Variable '{name}' is not present in the slot map.")
            },

            Self::UnimplementedOperator { op } => {
                write!(f, "Operator '{op}' has no registered implementation.")
            },

            Self::IndexOutOfRange { name, slot, arity } => {
                write!(f,
                       "Variable '{name}' maps to slot {slot}, outside the input arity {arity}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
