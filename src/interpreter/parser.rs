/// The expression parser.
///
/// Turns a token stream into an arena-backed expression tree by precedence
/// climbing, handling the optional function-declaration prefix along the way.
pub mod core;
/// Operator tables.
///
/// The precedence and token-to-operator mappings the parser climbs with. Kept
/// separate from the parsing logic so the language's operator set is visible
/// in one place.
pub mod precedence;
