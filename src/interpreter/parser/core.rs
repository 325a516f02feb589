use log::debug;

use crate::{
    ast::{Ast, Node, NodeId},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenStream},
        parser::precedence::{infix_precedence, prefix_precedence, to_bin_op, to_unary_op},
    },
};

/// The result of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExpr {
    /// The expression tree.
    pub ast:      Ast,
    /// Names introduced by the optional declaration prefix, function name
    /// first, parameters in declaration order. Empty when the source is a
    /// bare expression.
    pub declared: Vec<String>,
}

/// Parses `source` into an expression tree.
///
/// The source is either a bare expression, such as `2 + 3 * a`, or a function
/// declaration whose body is one, such as `f(x, y) = x * y`. The declaration
/// prefix only introduces names; the body is parsed exactly like a bare
/// expression.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem encountered. There
/// is no error recovery.
///
/// # Example
/// ```
/// use matheval::parse;
///
/// let parsed = parse("f(x) = x * x").unwrap();
/// assert_eq!(parsed.declared, vec!["f", "x"]);
/// ```
pub fn parse(source: &str) -> Result<ParsedExpr, ParseError> {
    Parser::new(source)?.run()
}

/// A precedence-climbing parser over a fully lexed token stream.
struct Parser {
    stream:   TokenStream,
    nodes:    Vec<Node>,
    declared: Vec<String>,
}

impl Parser {
    fn new(source: &str) -> Result<Self, ParseError> {
        let stream = TokenStream::new(source)?;
        // One token lexes to at most one node, so the token count bounds the
        // arena size and the parse never reallocates.
        let nodes = Vec::with_capacity(stream.token_count());

        Ok(Self { stream,
                  nodes,
                  declared: Vec::new() })
    }

    fn run(mut self) -> Result<ParsedExpr, ParseError> {
        if self.declaration_ahead() {
            self.parse_declaration()?;
        }

        let root = self.parse_expr(0)?;

        let trailing = self.stream.peek(1);
        if *trailing != Token::Eof {
            return Err(ParseError::UnexpectedTrailingTokens { token: format!("{trailing:?}"),
                                                              line:  self.stream.peek_line(), });
        }

        debug!("parsed {} nodes, root {:?}", self.nodes.len(), root);

        Ok(ParsedExpr { ast:      Ast::new(self.nodes, root),
                        declared: self.declared, })
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId::new(self.nodes.len() - 1)
    }

    /// Climbs the operator precedence ladder starting from `min_prec`.
    ///
    /// Binary operators are consumed while they bind tighter than the current
    /// floor; the right operand is parsed with the operator's own precedence
    /// as the new floor, which makes equal-precedence chains left
    /// associative.
    fn parse_expr(&mut self, min_prec: i8) -> Result<NodeId, ParseError> {
        let mut lhs = self.parse_prefix()?;

        while infix_precedence(self.stream.peek(1)) > min_prec {
            let (token, line) = self.stream.next();
            let prec = infix_precedence(&token);

            let Some(op) = to_bin_op(&token) else {
                // `^` and the implicit-multiplication parens carry a
                // precedence but no binary mapping.
                return Err(ParseError::UnexpectedToken { expected: "a binary operator".to_string(),
                                                         found:    format!("{token:?}"),
                                                         line });
            };

            debug!("infix {op} at precedence {prec}");

            let rhs = self.parse_expr(prec)?;
            lhs = self.push(Node::Binary { lhs, rhs, op });
        }

        Ok(lhs)
    }

    /// Parses one prefix term: a leaf, a grouped expression, or a unary
    /// application.
    fn parse_prefix(&mut self) -> Result<NodeId, ParseError> {
        let (token, line) = self.stream.next();

        match token {
            Token::Number(lexeme) => Ok(self.push(Node::Num { lexeme })),
            Token::Identifier(name) => Ok(self.push(Node::Id { name })),

            Token::LParen => {
                let inner = self.parse_expr(0)?;
                let (close, line) = self.stream.next();
                if close != Token::RParen {
                    return Err(ParseError::ExpectedClosingParen { line });
                }
                Ok(inner)
            },

            Token::LBracket => {
                let inner = self.parse_expr(0)?;
                let (close, line) = self.stream.next();
                if close != Token::RBracket {
                    return Err(ParseError::ExpectedClosingBracket { line });
                }
                Ok(inner)
            },

            Token::Eof => Err(ParseError::UnexpectedEndOfInput { line }),

            token => {
                if prefix_precedence(&token) >= 0
                    && let Some(op) = to_unary_op(&token)
                {
                    // A parenthesized argument binds to the function alone;
                    // anything else extends to the rest of the expression.
                    let child = if *self.stream.peek(1) == Token::LParen {
                        self.parse_prefix()?
                    } else {
                        self.parse_expr(0)?
                    };

                    Ok(self.push(Node::Unary { op, child }))
                } else {
                    Err(ParseError::UnexpectedToken { expected: "an expression".to_string(),
                                                      found:    format!("{token:?}"),
                                                      line })
                }
            },
        }
    }

    /// Whether the stream starts with a function-declaration prefix.
    ///
    /// The shape looked for is `name ( param` followed by either `,` (more
    /// parameters) or `) =` (a single parameter). Anything else, including
    /// `sin(x)`, is an ordinary expression.
    fn declaration_ahead(&self) -> bool {
        matches!(self.stream.peek(1), Token::Identifier(_))
            && *self.stream.peek(2) == Token::LParen
            && matches!(self.stream.peek(3), Token::Identifier(_))
            && (*self.stream.peek(4) == Token::Comma
                || (*self.stream.peek(4) == Token::RParen && *self.stream.peek(5) == Token::Equal))
    }

    /// Consumes `name(a, b, ...) =` and records the introduced names.
    ///
    /// Only called after [`declaration_ahead`](Self::declaration_ahead)
    /// matched, so the first two tokens are known; the parameter list and the
    /// trailing `=` are still validated token by token.
    fn parse_declaration(&mut self) -> Result<(), ParseError> {
        let (name, _) = self.stream.next();
        if let Token::Identifier(name) = name {
            self.declared.push(name);
        }
        self.stream.next(); // `(`

        loop {
            match self.stream.next() {
                (Token::Identifier(param), _) => self.declared.push(param),
                (_, line) => return Err(ParseError::InvalidFunctionDeclaration { line }),
            }

            match self.stream.next() {
                (Token::Comma, _) => {},
                (Token::RParen, _) => break,
                (_, line) => return Err(ParseError::InvalidFunctionDeclaration { line }),
            }
        }

        match self.stream.next() {
            (Token::Equal, _) => {},
            (_, line) => return Err(ParseError::InvalidFunctionDeclaration { line }),
        }

        debug!("declaration introduces {:?}", self.declared);
        Ok(())
    }
}
