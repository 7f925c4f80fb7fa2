/// A reference to a named storage slot in the variable store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRef {
    /// Name of the variable.
    pub name:   String,
    /// Column of the name in the source line.
    pub column: usize,
}

/// An abstract syntax tree (AST) node.
///
/// `Node` covers everything one input line can parse into: arithmetic
/// expressions, variable references and assignment statements. Each subtree
/// is owned by exactly one parent. Expression variants record the 1-based
/// source column of their operator or literal so evaluation errors can point
/// back into the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Column of the operator.
        column: usize,
    },
    /// A prefix sign applied to an operand.
    UnaryOp {
        /// The unary operator to apply.
        op:     UnaryOperator,
        /// The operand expression.
        expr:   Box<Self>,
        /// Column of the operator.
        column: usize,
    },
    /// A non-negative integer literal.
    IntLiteral {
        /// The literal value.
        value:  i64,
        /// Column of the literal.
        column: usize,
    },
    /// Reference to a variable by name.
    Variable(VariableRef),
    /// One assignment statement, `target = value;`.
    Assignment {
        /// The variable being bound.
        target: VariableRef,
        /// The expression whose value is stored.
        value:  Box<Self>,
    },
    /// Several statements from the same line, executed in order.
    Compound {
        /// The statements, in source order.
        statements: Vec<Self>,
    },
    /// An empty statement.
    NoOp,
}

impl Node {
    /// Moves every child of `self` onto `pending`, leaving `self` shallow.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::BinaryOp { left, right, .. } => {
                pending.push(std::mem::replace(&mut **left, Self::NoOp));
                pending.push(std::mem::replace(&mut **right, Self::NoOp));
            },
            Self::UnaryOp { expr, .. } | Self::Assignment { value: expr, .. } => {
                pending.push(std::mem::replace(&mut **expr, Self::NoOp));
            },
            Self::Compound { statements } => pending.append(statements),
            Self::IntLiteral { .. } | Self::Variable(_) | Self::NoOp => {},
        }
    }
}

/// Tears the tree down with an explicit worklist.
///
/// A long operator chain such as `1 + 1 + ... + 1` nests one `Box` per
/// operator, and the compiler-generated drop would recurse that deep.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division. Has no surface syntax.
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
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

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
