//! Property-based tests over randomly shaped trees.
//!
//! Generated programs mix expressions, blocks, branches, declarations and
//! nested function expressions, and check that:
//! 1. descendants are exactly the pre-order closure of the raw children
//! 2. repeated traversal is idempotent
//! 3. every declaration is attributed to exactly one scope

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use proptest::prelude::*;
use scopewalk_ast::{RawNode, extract_children};
use scopewalk_tree::WrappedTree;
use serde_json::{Value, json};

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,3}"
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        name_strategy().prop_map(|name| json!({ "type": "Identifier", "name": name })),
        any::<i32>().prop_map(|value| json!({ "type": "Literal", "value": value })),
        Just(json!({ "type": "ThisExpression" })),
        Just(json!({ "type": "EmptyStatement" })),
    ]
}

fn node_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(5, 96, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(left, right)| json!({
                "type": "BinaryExpression",
                "operator": "+",
                "left": left,
                "right": right
            })),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|body| json!({ "type": "BlockStatement", "body": body })),
            (inner.clone(), inner.clone(), prop::option::of(inner.clone())).prop_map(
                |(test, consequent, alternate)| json!({
                    "type": "IfStatement",
                    "test": test,
                    "consequent": consequent,
                    "alternate": alternate
                })
            ),
            (name_strategy(), prop::option::of(inner.clone())).prop_map(|(name, init)| json!({
                "type": "VariableDeclaration",
                "kind": "var",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": { "type": "Identifier", "name": name },
                    "init": init
                }]
            })),
            (
                prop::option::of(name_strategy()),
                prop::collection::vec(inner, 0..3)
            )
                .prop_map(|(name, body)| json!({
                    "type": "FunctionExpression",
                    "id": name.map(|name| json!({ "type": "Identifier", "name": name })),
                    "params": [],
                    "body": { "type": "BlockStatement", "body": body }
                })),
        ]
    })
}

fn program_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(node_strategy(), 0..5)
        .prop_map(|body| json!({ "type": "Program", "body": body }))
}

/// Pre-order raw children closure, computed without the wrapper.
fn raw_pre_order<'a>(node: RawNode<'a>, out: &mut Vec<&'a Value>) {
    for child in extract_children(node).unwrap() {
        out.push(child.value());
        raw_pre_order(child, out);
    }
}

/// Number of raw nodes that declare a name through their `id` field.
fn count_declarations(node: RawNode<'_>) -> usize {
    let own = usize::from(node.declared_name().is_some());
    own + extract_children(node)
        .unwrap()
        .into_iter()
        .map(count_declarations)
        .sum::<usize>()
}

proptest! {
    #[test]
    fn descendants_match_raw_pre_order(doc in program_strategy()) {
        let mut tree = WrappedTree::from_value(&doc);
        let root = tree.root();
        let descendants = tree.descendants(root).unwrap().to_vec();

        let mut expected = Vec::new();
        raw_pre_order(RawNode::new(&doc), &mut expected);

        prop_assert_eq!(descendants.len(), expected.len());
        for (node, raw) in descendants.iter().zip(expected) {
            prop_assert!(std::ptr::eq(tree.raw(*node).value(), raw));
        }
        prop_assert_eq!(tree.len(), descendants.len() + 1);
    }

    #[test]
    fn traversal_is_idempotent(doc in program_strategy()) {
        let mut tree = WrappedTree::from_value(&doc);
        let root = tree.root();
        let first = tree.descendants(root).unwrap().to_vec();
        for &node in &first {
            let children = tree.children(node).unwrap().to_vec();
            prop_assert_eq!(tree.children(node).unwrap(), children.as_slice());
        }
        prop_assert_eq!(tree.descendants(root).unwrap(), first.as_slice());
    }

    #[test]
    fn every_declaration_lands_in_one_scope(doc in program_strategy()) {
        let mut tree = WrappedTree::from_value(&doc);
        let scopes = tree.scopes().unwrap();
        let mut total = 0;
        for scope in scopes {
            total += tree.identifiers(scope).unwrap().len();
        }
        prop_assert_eq!(total, count_declarations(RawNode::new(&doc)));
    }
}
