//! Child extraction: the grammar table that turns a raw node into its ordered
//! raw children.
//!
//! Each [`NodeKind`] maps to a fixed list of [`Slot`]s, read left to right.
//! Optional slots that are absent contribute nothing; required slots that are
//! absent fail with [`WalkError::MissingChild`].

use serde_json::Value;
use smallvec::SmallVec;

use crate::digest::digest;
use crate::error::{WalkError, WalkResult};
use crate::kind::NodeKind;
use crate::raw::RawNode;

/// Child list returned by [`extract_children`]; most nodes have at most four.
pub type RawChildren<'a> = SmallVec<[RawNode<'a>; 4]>;

/// One child-bearing field of a node kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A node that must be present.
    Node(&'static str),
    /// A node that may be absent or `null`.
    Optional(&'static str),
    /// An array of nodes; every entry must be a node.
    List(&'static str),
    /// An array of nodes in which `null` entries are holes and are skipped.
    Sparse(&'static str),
}

impl Slot {
    /// The field this slot reads.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Slot::Node(name) | Slot::Optional(name) | Slot::List(name) | Slot::Sparse(name) => {
                name
            }
        }
    }
}

/// The child slots of `kind`, in child order.
#[must_use]
pub const fn grammar(kind: NodeKind) -> &'static [Slot] {
    use Slot::{List, Node, Optional, Sparse};

    match kind {
        NodeKind::Program | NodeKind::BlockStatement => &[List("body")],
        NodeKind::FunctionDeclaration
        | NodeKind::FunctionExpression
        | NodeKind::ArrowFunctionExpression => &[Node("body")],

        NodeKind::ExpressionStatement => &[Node("expression")],
        NodeKind::IfStatement => &[Node("test"), Node("consequent"), Optional("alternate")],
        NodeKind::LabeledStatement => &[Node("body")],
        NodeKind::WithStatement => &[Node("object"), Node("body")],
        NodeKind::SwitchStatement => &[Node("discriminant"), List("cases")],
        NodeKind::SwitchCase => &[Optional("test"), List("consequent")],
        NodeKind::ReturnStatement => &[Optional("argument")],
        NodeKind::ThrowStatement => &[Node("argument")],
        NodeKind::TryStatement => &[Node("block"), Optional("handler"), Optional("finalizer")],
        NodeKind::CatchClause => &[Optional("param"), Node("body")],
        NodeKind::WhileStatement => &[Node("test"), Node("body")],
        NodeKind::DoWhileStatement => &[Node("body"), Node("test")],
        NodeKind::ForStatement => &[
            Optional("init"),
            Optional("test"),
            Optional("update"),
            Node("body"),
        ],
        NodeKind::ForInStatement | NodeKind::ForOfStatement => {
            &[Node("left"), Node("right"), Node("body")]
        }

        NodeKind::VariableDeclaration => &[List("declarations")],
        NodeKind::VariableDeclarator => &[Optional("init")],

        NodeKind::ArrayExpression => &[Sparse("elements")],
        NodeKind::ObjectExpression => &[List("properties")],
        NodeKind::Property => &[Node("key"), Node("value")],
        NodeKind::SequenceExpression => &[List("expressions")],
        NodeKind::UnaryExpression | NodeKind::UpdateExpression | NodeKind::SpreadElement => {
            &[Node("argument")]
        }
        NodeKind::YieldExpression => &[Optional("argument")],
        NodeKind::BinaryExpression
        | NodeKind::LogicalExpression
        | NodeKind::AssignmentExpression => &[Node("left"), Node("right")],
        NodeKind::ConditionalExpression => {
            &[Node("test"), Node("consequent"), Node("alternate")]
        }
        NodeKind::CallExpression | NodeKind::NewExpression => {
            &[Node("callee"), List("arguments")]
        }
        NodeKind::MemberExpression => &[Node("object"), Node("property")],

        NodeKind::Identifier
        | NodeKind::Literal
        | NodeKind::EmptyStatement
        | NodeKind::BreakStatement
        | NodeKind::ContinueStatement
        | NodeKind::DebuggerStatement
        | NodeKind::ThisExpression => &[],
    }
}

/// Returns the ordered immediate children of `node`.
///
/// Fails with [`WalkError::UnsupportedNodeKind`] when the node's `type` is
/// outside the grammar and with [`WalkError::MissingChild`] when a required
/// slot is malformed.
pub fn extract_children<'a>(node: RawNode<'a>) -> WalkResult<RawChildren<'a>> {
    let kind = node.kind()?;
    let mut children = RawChildren::new();

    for &slot in grammar(kind) {
        match slot {
            Slot::Node(field) => children.push(required(node, field)?),
            Slot::Optional(field) => {
                if let Some(value) = node.field(field) {
                    children.push(as_node(node, field, value)?);
                }
            }
            Slot::List(field) | Slot::Sparse(field) => {
                let items = node
                    .field(field)
                    .and_then(Value::as_array)
                    .ok_or_else(|| missing(node, field))?;
                for item in items {
                    if item.is_null() && matches!(slot, Slot::Sparse(_)) {
                        continue;
                    }
                    children.push(as_node(node, field, item)?);
                }
            }
        }
    }

    Ok(children)
}

fn required<'a>(parent: RawNode<'a>, field: &'static str) -> WalkResult<RawNode<'a>> {
    let value = parent.field(field).ok_or_else(|| missing(parent, field))?;
    as_node(parent, field, value)
}

fn as_node<'a>(parent: RawNode<'a>, field: &'static str, value: &'a Value) -> WalkResult<RawNode<'a>> {
    if value.is_object() {
        Ok(RawNode::new(value))
    } else {
        Err(missing(parent, field))
    }
}

fn missing(parent: RawNode<'_>, field: &'static str) -> WalkError {
    WalkError::MissingChild {
        field,
        digest: digest(parent),
    }
}
