//! Values bound to template argument names.

use std::collections::HashMap;

use markup::Node;

use crate::component::Template;

/// A value a template argument can resolve to.
///
/// The set is closed: anything a caller wants to interpolate is converted
/// up front rather than dispatched on at render time. Scalars have an
/// obvious textual form; [`Value::List`] and [`Value::Map`] only make
/// sense inside a `{key:template}` block and render nothing when used as
/// a bare `{key}` argument.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Iterated by a block; one render per element.
    List(Vec<Value>),
    /// Iterated by a block via the reserved `.key`/`.value` names.
    /// Entries keep insertion order.
    Map(Vec<(String, Value)>),
    /// A nested template, evaluated against the current scope.
    Template(Template),
    /// A pre-built span tree, serialized back to markup on interpolation.
    Node(Node),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Template> for Value {
    fn from(value: Template) -> Self {
        Value::Template(value)
    }
}

impl From<Node> for Value {
    fn from(value: Node) -> Self {
        Value::Node(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

/// Named values for one evaluation.
///
/// # Examples
///
/// ```
/// use template::{Arguments, Template};
///
/// let args = Arguments::new()
///     .with("name", "steve")
///     .with("count", 3_i64);
/// let template = Template::compile("{name} ({count})");
/// assert_eq!(template.apply(&args), "steve (3)");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Arguments {
    values: HashMap<String, Value>,
}

impl Arguments {
    pub fn new() -> Arguments {
        Arguments::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Arguments {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_and_lookup() {
        let args = Arguments::new().with("a", "x").with("n", 7_i64);
        assert_eq!(args.get("a"), Some(&Value::Text("x".to_string())));
        assert_eq!(args.get("n"), Some(&Value::Int(7)));
        assert_eq!(args.get("missing"), None);
    }

    #[test]
    fn vec_conversion() {
        let value: Value = vec!["a", "b"].into();
        assert_eq!(
            value,
            Value::List(vec![
                Value::Text("a".to_string()),
                Value::Text("b".to_string())
            ])
        );
    }
}
