use crate::{
    ast::{BinOp, UnaryOp},
    interpreter::lexer::Token,
};

/// Binding power of a token when it appears in infix position.
///
/// Binary operators climb in the order `+ -` (2) `< * /` (4) `< ^` (5);
/// opening parens and brackets sit above them as grouping markers. Any token
/// without an entry yields `-1`, which never exceeds a precedence floor and
/// therefore cleanly terminates the climbing loop; the EOF sentinel relies
/// on exactly this.
///
/// # Example
/// ```
/// use matheval::interpreter::{lexer::Token, parser::precedence::infix_precedence};
///
/// assert!(infix_precedence(&Token::Star) > infix_precedence(&Token::Plus));
/// assert_eq!(infix_precedence(&Token::Eof), -1);
/// ```
#[must_use]
pub const fn infix_precedence(token: &Token) -> i8 {
    match token {
        Token::Number(_)
        | Token::Identifier(_)
        | Token::RParen
        | Token::RBracket
        | Token::Exp
        | Token::Sin
        | Token::Cos
        | Token::Tan
        | Token::Arcsin
        | Token::Arccos
        | Token::Arctan => 0,
        Token::Plus | Token::Minus => 2,
        Token::Star | Token::Slash => 4,
        Token::Caret => 5,
        Token::LParen | Token::LBracket => 6,
        _ => -1,
    }
}

/// Binding power of a token when it appears in prefix position.
///
/// A non-negative value marks the token as a legal start of a prefix term.
/// Opening parens and brackets are bound to the multiplication level; the
/// grouped content itself is always parsed with the precedence floor reset to
/// zero. Tokens without an entry yield `-1` and are rejected by the parser.
#[must_use]
pub const fn prefix_precedence(token: &Token) -> i8 {
    match token {
        Token::Number(_)
        | Token::Identifier(_)
        | Token::RParen
        | Token::RBracket
        | Token::Exp
        | Token::Sin
        | Token::Cos
        | Token::Tan
        | Token::Arcsin
        | Token::Arccos
        | Token::Arctan => 0,
        Token::Plus | Token::Minus => 2,
        Token::Star | Token::Slash | Token::LParen | Token::LBracket => 4,
        Token::Caret => 5,
        _ => -1,
    }
}

/// Maps a token to its binary operator, if it has one.
///
/// Only `+ - * /` fold into [`BinOp`] values. Note that `^` carries infix
/// precedence but has no binary mapping; consuming it as a binary operator is
/// a syntax error surfaced by the parser, not undefined behavior.
///
/// # Example
/// ```
/// use matheval::{ast::BinOp, interpreter::{lexer::Token, parser::precedence::to_bin_op}};
///
/// assert_eq!(to_bin_op(&Token::Plus), Some(BinOp::Add));
/// assert_eq!(to_bin_op(&Token::Caret), None);
/// ```
#[must_use]
pub const fn to_bin_op(token: &Token) -> Option<BinOp> {
    match token {
        Token::Plus => Some(BinOp::Add),
        Token::Minus => Some(BinOp::Sub),
        Token::Star => Some(BinOp::Mul),
        Token::Slash => Some(BinOp::Div),
        _ => None,
    }
}

/// Maps a token to its unary operator, if it has one.
///
/// The seven named functions map to their operators and `-` maps to
/// [`UnaryOp::Negate`]. Everything else returns `None`.
#[must_use]
pub const fn to_unary_op(token: &Token) -> Option<UnaryOp> {
    match token {
        Token::Exp => Some(UnaryOp::Exp),
        Token::Sin => Some(UnaryOp::Sin),
        Token::Cos => Some(UnaryOp::Cos),
        Token::Tan => Some(UnaryOp::Tan),
        Token::Arcsin => Some(UnaryOp::Arcsin),
        Token::Arccos => Some(UnaryOp::Arccos),
        Token::Arctan => Some(UnaryOp::Arctan),
        Token::Minus => Some(UnaryOp::Negate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infix_table_orders_the_operator_levels() {
        assert_eq!(infix_precedence(&Token::Plus), 2);
        assert_eq!(infix_precedence(&Token::Minus), 2);
        assert_eq!(infix_precedence(&Token::Star), 4);
        assert_eq!(infix_precedence(&Token::Slash), 4);
        assert_eq!(infix_precedence(&Token::Caret), 5);
        assert_eq!(infix_precedence(&Token::LParen), 6);
        assert_eq!(infix_precedence(&Token::LBracket), 6);
    }

    #[test]
    fn terminating_tokens_never_trigger_a_reduction() {
        for token in [Token::Eof, Token::Comma, Token::Equal, Token::NotEqual, Token::Less,
                      Token::Greater]
        {
            assert_eq!(infix_precedence(&token), -1, "{token:?}");
            assert_eq!(prefix_precedence(&token), -1, "{token:?}");
        }
    }

    #[test]
    fn grouping_tokens_bind_to_the_multiplication_level_in_prefix_position() {
        assert_eq!(prefix_precedence(&Token::LParen), prefix_precedence(&Token::Star));
        assert_eq!(prefix_precedence(&Token::LBracket), prefix_precedence(&Token::Star));
    }

    #[test]
    fn operator_mappings_are_partial() {
        assert_eq!(to_bin_op(&Token::Minus), Some(BinOp::Sub));
        assert_eq!(to_bin_op(&Token::LParen), None);
        assert_eq!(to_unary_op(&Token::Minus), Some(UnaryOp::Negate));
        assert_eq!(to_unary_op(&Token::Plus), None);
        assert_eq!(to_unary_op(&Token::Identifier("sinister".to_string())), None);
    }
}
