//! Builders for SpiderMonkey-style JSON trees shared by the integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};

pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

pub fn num(value: i64) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

pub fn program(body: Vec<Value>) -> Value {
    json!({ "type": "Program", "body": body, "sourceType": "script" })
}

pub fn block(body: Vec<Value>) -> Value {
    json!({ "type": "BlockStatement", "body": body })
}

pub fn expr_stmt(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

pub fn declarator(name: &str, init: Option<Value>) -> Value {
    json!({ "type": "VariableDeclarator", "id": ident(name), "init": init })
}

pub fn var(name: &str, init: Option<Value>) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": "var",
        "declarations": [declarator(name, init)]
    })
}

pub fn function_decl(name: &str, params: &[&str], body: Vec<Value>) -> Value {
    let params: Vec<Value> = params.iter().map(|p| ident(p)).collect();
    json!({
        "type": "FunctionDeclaration",
        "id": ident(name),
        "params": params,
        "body": block(body),
        "generator": false,
        "expression": false
    })
}

pub fn function_expr(name: Option<&str>, body: Vec<Value>) -> Value {
    json!({
        "type": "FunctionExpression",
        "id": name.map(ident),
        "params": [],
        "body": block(body)
    })
}

pub fn binary(operator: &str, left: Value, right: Value) -> Value {
    json!({ "type": "BinaryExpression", "operator": operator, "left": left, "right": right })
}

pub fn call(callee: Value, arguments: Vec<Value>) -> Value {
    json!({ "type": "CallExpression", "callee": callee, "arguments": arguments })
}

pub fn ret(argument: Option<Value>) -> Value {
    json!({ "type": "ReturnStatement", "argument": argument })
}

/// ```js
/// var foo = { a: 1 };
/// for (var i = 0; i < 10; i++) { foo.a += i; }
/// function f(x) {
///     var inner = x;
///     function g() { var deep; }
///     return inner;
/// }
/// ```
pub fn sample_program() -> Value {
    let object = json!({
        "type": "ObjectExpression",
        "properties": [{
            "type": "Property",
            "key": ident("a"),
            "value": num(1),
            "kind": "init"
        }]
    });
    let member = json!({
        "type": "MemberExpression",
        "object": ident("foo"),
        "property": ident("a"),
        "computed": false
    });
    let for_loop = json!({
        "type": "ForStatement",
        "init": var("i", Some(num(0))),
        "test": binary("<", ident("i"), num(10)),
        "update": {
            "type": "UpdateExpression",
            "operator": "++",
            "prefix": false,
            "argument": ident("i")
        },
        "body": block(vec![expr_stmt(json!({
            "type": "AssignmentExpression",
            "operator": "+=",
            "left": member,
            "right": ident("i")
        }))])
    });
    let f = function_decl(
        "f",
        &["x"],
        vec![
            var("inner", Some(ident("x"))),
            function_decl("g", &[], vec![var("deep", None)]),
            ret(Some(ident("inner"))),
        ],
    );
    program(vec![var("foo", Some(object)), for_loop, f])
}
