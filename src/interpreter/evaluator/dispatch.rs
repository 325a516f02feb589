use crate::ast::{BinOp, UnaryOp};

/// Implementation of a binary operator.
pub type TwoParameterFn = fn(f32, f32) -> f32;
/// Implementation of a unary operator.
pub type OneParameterFn = fn(f32) -> f32;

// Indexed by the `BinOp` discriminant; keep the order in sync with it.
static TWO_PARAMETER: [TwoParameterFn; 4] = [add, sub, mul, div];

// Indexed by the `UnaryOp` discriminant; keep the order in sync with it. A
// `None` slot is an operator the language reserves but does not implement
// yet, surfaced at evaluation time as an error.
static ONE_PARAMETER: [Option<OneParameterFn>; 8] =
    [Some(exp), Some(sin), Some(cos), None, None, None, None, None];

/// Looks up the implementation of a binary operator.
///
/// Every binary operator has one; division follows IEEE 754 semantics, so
/// `4 / 0` evaluates to positive infinity rather than failing.
#[must_use]
pub fn two_parameter(op: BinOp) -> TwoParameterFn {
    TWO_PARAMETER[op as usize]
}

/// Looks up the implementation of a unary operator, if it has one.
#[must_use]
pub fn one_parameter(op: UnaryOp) -> Option<OneParameterFn> {
    ONE_PARAMETER[op as usize]
}

fn add(lhs: f32, rhs: f32) -> f32 {
    lhs + rhs
}

fn sub(lhs: f32, rhs: f32) -> f32 {
    lhs - rhs
}

fn mul(lhs: f32, rhs: f32) -> f32 {
    lhs * rhs
}

fn div(lhs: f32, rhs: f32) -> f32 {
    lhs / rhs
}

fn exp(operand: f32) -> f32 {
    operand.exp()
}

fn sin(operand: f32) -> f32 {
    operand.sin()
}

fn cos(operand: f32) -> f32 {
    operand.cos()
}
