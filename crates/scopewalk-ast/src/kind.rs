//! The closed set of node kinds understood by the walker.
//!
//! Kind names follow the SpiderMonkey Parser API / ESTree `type` strings.
//! Anything outside this set is rejected with
//! [`WalkError::UnsupportedNodeKind`](crate::WalkError::UnsupportedNodeKind).

use std::fmt;

macro_rules! node_kinds {
    ($($variant:ident),+ $(,)?) => {
        /// A supported raw node kind.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($variant,)+
        }

        impl NodeKind {
            /// Every supported kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)+];

            /// The `type` string a parser emits for this kind.
            #[must_use]
            pub const fn type_name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)+
                }
            }

            /// Map a raw `type` string onto the closed grammar.
            #[must_use]
            pub fn from_type_name(name: &str) -> Option<NodeKind> {
                match name {
                    $(stringify!($variant) => Some(NodeKind::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

node_kinds! {
    // Roots and functions
    Program,
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunctionExpression,

    // Statements
    BlockStatement,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    LabeledStatement,
    WithStatement,
    SwitchStatement,
    SwitchCase,
    ReturnStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    BreakStatement,
    ContinueStatement,
    DebuggerStatement,

    // Declarations
    VariableDeclaration,
    VariableDeclarator,

    // Expressions
    ThisExpression,
    ArrayExpression,
    ObjectExpression,
    Property,
    SequenceExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    YieldExpression,
    SpreadElement,

    // Leaves
    Identifier,
    Literal,
}

impl NodeKind {
    /// Returns `true` for kinds that open a new lexical scope: the program
    /// root and every function form.
    #[must_use]
    pub const fn is_scope_introducing(self) -> bool {
        matches!(
            self,
            NodeKind::Program
                | NodeKind::FunctionDeclaration
                | NodeKind::FunctionExpression
                | NodeKind::ArrowFunctionExpression
        )
    }

    /// Returns `true` for function forms (every scope-introducing kind except
    /// the program root).
    #[must_use]
    pub const fn is_function(self) -> bool {
        self.is_scope_introducing() && !matches!(self, NodeKind::Program)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
