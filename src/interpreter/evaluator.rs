/// The tree-walking evaluator.
///
/// Owns a parsed expression together with its slot map, constant table and
/// result cache, and evaluates it against caller-supplied input vectors.
pub mod core;
/// Operator dispatch tables.
///
/// Fixed arrays of function pointers indexed by operator discriminant. Gaps
/// in the unary table are operators the language reserves but does not
/// implement.
pub mod dispatch;
