/// Index of a node inside an [`Ast`] arena.
///
/// Node identifiers are plain indices into the arena's node storage. They are
/// only meaningful for the arena that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// An abstract syntax tree node.
///
/// `Node` covers the two shapes an arithmetic expression tree is built from:
/// binary operations and prefix operations. The prefix shape splits into three
/// variants so that the leaf/child structure is fixed by construction: numeric
/// and identifier leaves never carry a child, and unary applications always
/// do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A numeric literal leaf. The raw lexeme is kept as written; it is
    /// converted to a float exactly once, by the evaluator's constant-folding
    /// pass.
    Num {
        /// The literal text, e.g. `"4.0"`.
        lexeme: String,
    },
    /// A variable reference leaf, resolved through the caller's slot map at
    /// evaluation time.
    Id {
        /// Name of the variable.
        name: String,
    },
    /// A unary application, e.g. `sin(x)` or `-x`.
    Unary {
        /// The unary operator to apply.
        op:    UnaryOp,
        /// The operand expression.
        child: NodeId,
    },
    /// A binary operation, e.g. `a + b`.
    Binary {
        /// Left operand.
        lhs: NodeId,
        /// Right operand.
        rhs: NodeId,
        /// The operator.
        op:  BinOp,
    },
}

/// An expression tree stored as a node arena.
///
/// All nodes live in one contiguous `Vec` sized up front from the token count
/// (an upper bound on the node count), and refer to each other by [`NodeId`].
/// The arena is immutable once parsing completes; its lifetime is exactly the
/// lifetime of whatever owns it, usually an
/// [`Evaluator`](crate::interpreter::evaluator::core::Evaluator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    nodes: Vec<Node>,
    root:  NodeId,
}

impl Ast {
    pub(crate) const fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// The root node of the expression.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Iterates over every node in the arena, in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes. A parsed expression always has at
    /// least one node, so this is only true for hand-built arenas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A binary operator.
///
/// The discriminant doubles as the index into the evaluator's two-parameter
/// dispatch table, so the variant order here must match that table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum BinOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// A unary (prefix) operator.
///
/// The discriminant doubles as the index into the evaluator's one-parameter
/// dispatch table, so the variant order here must match that table. Several
/// slots are reserved and have no registered function; applying one of those
/// is an evaluation error, never undefined behavior.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum UnaryOp {
    /// Natural exponential (`exp`)
    Exp,
    /// Sine (`sin`)
    Sin,
    /// Cosine (`cos`)
    Cos,
    /// Tangent (`tan`)
    Tan,
    /// Inverse sine (`arcsin`)
    Arcsin,
    /// Inverse cosine (`arccos`)
    Arccos,
    /// Inverse tangent (`arctan`)
    Arctan,
    /// Arithmetic negation (`-x`)
    Negate,
}

impl std::fmt::Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Exp => "exp",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Arcsin => "arcsin",
            Self::Arccos => "arccos",
            Self::Arctan => "arctan",
            Self::Negate => "negate",
        };
        write!(f, "{operator}")
    }
}
