//! Compiled template representation.

use std::io::Read;

use markup::{Node, Permissions};

use crate::error::Error;
use crate::value::Arguments;

/// One compiled unit of the `{...}` interpolation language.
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    /// Literal text, emitted as-is.
    Plain(String),
    /// `{key}`: the textual form of a bound value.
    Arg(String),
    /// `{key:children}` or `{key:children:separator}`: children rendered
    /// once or per element of the bound value, separator between renders.
    /// An empty key renders the children unconditionally.
    Block {
        key: String,
        separator: String,
        children: Vec<Component>,
    },
}

/// A compiled template.
///
/// Evaluation produces markup source text, not a span tree; the result is
/// handed to the markup parser, and that second stage is where permission
/// filtering happens.
///
/// # Examples
///
/// ```
/// use template::{Arguments, Template};
///
/// let template = Template::compile("Hello {name}!");
/// let args = Arguments::new().with("name", "world");
/// assert_eq!(template.apply(&args), "Hello world!");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    components: Vec<Component>,
}

impl Template {
    /// Compile template source.
    ///
    /// Compilation is total; an unterminated `{...}` degrades to plain text.
    pub fn compile(source: &str) -> Template {
        Template {
            components: crate::compile::compile(source),
        }
    }

    /// Compile template source from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`] if the reader fails; this is the only
    /// failure the template engine surfaces.
    pub fn compile_from(mut reader: impl Read) -> Result<Template, Error> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Template::compile(&source))
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Evaluate against `args`, producing markup source text.
    pub fn apply(&self, args: &Arguments) -> String {
        let mut out = String::new();
        crate::eval::evaluate(&self.components, args, &mut out);
        out
    }

    /// Evaluate against `args` and parse the result into a span tree.
    pub fn render(&self, args: &Arguments, perms: &dyn Permissions) -> Node {
        markup::parse(&self.apply(args), perms)
    }
}

impl From<Vec<Component>> for Template {
    fn from(components: Vec<Component>) -> Self {
        Template { components }
    }
}
