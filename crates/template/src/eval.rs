//! Template evaluation.
//!
//! Evaluation is total: a missing argument or a value used in a position
//! it has no meaning in renders as nothing, with a trace log for the
//! curious. The output is markup source text; interpolated values are
//! not re-scanned for `{` so bound text can never inject a new argument.

use crate::component::Component;
use crate::value::{Arguments, Value};

/// Reserved name binding the current element inside a block.
const ELEMENT: &str = ".";
/// Reserved names binding the current map entry inside a block.
const ENTRY_KEY: &str = ".key";
const ENTRY_VALUE: &str = ".value";

pub(crate) fn evaluate(components: &[Component], args: &Arguments, out: &mut String) {
    for component in components {
        match component {
            Component::Plain(text) => out.push_str(text),
            Component::Arg(key) => match args.get(key) {
                Some(value) => write_value(value, args, out),
                None => log::trace!("no value bound for argument '{{{key}}}'"),
            },
            Component::Block {
                key,
                separator,
                children,
            } => evaluate_block(key, separator, children, args, out),
        }
    }
}

fn evaluate_block(
    key: &str,
    separator: &str,
    children: &[Component],
    args: &Arguments,
    out: &mut String,
) {
    // `{:template}` groups without binding anything.
    if key.is_empty() {
        evaluate(children, args, out);
        return;
    }
    let Some(value) = args.get(key) else {
        log::trace!("no value bound for block '{{{key}:..}}'");
        return;
    };
    match value {
        Value::Template(template) => evaluate(template.components(), args, out),
        Value::List(elements) => {
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                evaluate(children, &element_scope(args, element), out);
            }
        }
        Value::Map(entries) => {
            for (i, (entry_key, entry_value)) in entries.iter().enumerate() {
                if i > 0 {
                    out.push_str(separator);
                }
                let mut scope = args.clone();
                scope.insert(ENTRY_KEY, entry_key.clone());
                scope.insert(ENTRY_VALUE, entry_value.clone());
                evaluate(children, &scope, out);
            }
        }
        scalar => {
            let mut scope = args.clone();
            scope.insert(ELEMENT, scalar.clone());
            evaluate(children, &scope, out);
        }
    }
}

/// Scope for one list element: the element is bound to `.`, and a map
/// element additionally exposes its entries by name so `{field}` works
/// directly inside the block body.
fn element_scope(args: &Arguments, element: &Value) -> Arguments {
    let mut scope = args.clone();
    if let Value::Map(entries) = element {
        for (key, value) in entries {
            scope.insert(key.clone(), value.clone());
        }
    }
    scope.insert(ELEMENT, element.clone());
    scope
}

fn write_value(value: &Value, args: &Arguments, out: &mut String) {
    match value {
        Value::Text(text) => out.push_str(text),
        Value::Int(n) => {
            out.push_str(&n.to_string());
        }
        Value::Float(n) => {
            out.push_str(&n.to_string());
        }
        Value::Bool(b) => {
            out.push_str(if *b { "true" } else { "false" });
        }
        Value::Node(node) => out.push_str(&node.to_markup(true)),
        Value::Template(template) => evaluate(template.components(), args, out),
        Value::List(_) | Value::Map(_) => {
            log::trace!("collection value has no textual form outside a block");
        }
    }
}
