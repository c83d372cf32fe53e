//! Bracket markup for styled, interactive text spans, with a template
//! sub-language for argument interpolation.
//!
//! The `markup` crate does the parsing and serialization, `template` the
//! interpolation; this crate re-exports both and adds [`Renderer`], a
//! permission policy bundled with the operations it gates.
//!
//! # Usage
//!
//! ```
//! use spanmark::{Color, Renderer};
//!
//! let renderer = Renderer::new();
//! let node = renderer.render("[Hello [world](green)](blue)");
//! assert_eq!(node.color(), Some(Color::Blue));
//! assert_eq!(node.to_plain(), "Hello world");
//! assert_eq!(renderer.write(&node), "[Hello [world](green)](blue)");
//! ```
//!
//! With a restricted policy, disallowed properties fall away while the
//! text survives:
//!
//! ```
//! use spanmark::{Property, Renderer};
//!
//! // Colors only; clicks, hovers and styles are dropped.
//! let renderer = Renderer::with_permissions(|p: &Property| matches!(p, Property::Color(_)));
//! let node = renderer.render("[pay up](/give diamonds,red)");
//! assert_eq!(node.to_plain(), "pay up");
//! assert!(node.click().is_none());
//! ```

pub use markup::{
    AllowAll, ClickAction, Color, DenyAll, HoverAction, Node, Permissions, Property, Style,
    StyleMatch, Writer, parse,
};
pub use template::{Arguments, Component, Template, Value};

/// A permission policy paired with the parse and render operations it
/// applies to.
///
/// Everything here is also reachable through the free functions in
/// [`markup`] and the methods on [`Template`]; the bundle exists so a
/// host can hand one value to untrusted-input call sites.
pub struct Renderer {
    permissions: Box<dyn Permissions + Send + Sync>,
}

impl Renderer {
    /// A renderer that permits every property.
    pub fn new() -> Renderer {
        Renderer::with_permissions(AllowAll)
    }

    /// A renderer gated by `permissions`.
    pub fn with_permissions(permissions: impl Permissions + Send + Sync + 'static) -> Renderer {
        Renderer {
            permissions: Box::new(permissions),
        }
    }

    /// Parse markup into a span tree, dropping disallowed properties.
    pub fn render(&self, input: &str) -> Node {
        markup::parse(input, self.permissions.as_ref())
    }

    /// Serialize a span tree back to markup source.
    pub fn write(&self, node: &Node) -> String {
        node.to_markup(false)
    }

    /// Serialize with leaf text escaped, for embedding the result inside
    /// other markup.
    pub fn write_escaped(&self, node: &Node) -> String {
        node.to_markup(true)
    }

    /// Compile template source.
    pub fn template(&self, source: &str) -> Template {
        Template::compile(source)
    }

    /// Interpolate a compiled template and parse the result, applying
    /// this renderer's permissions to the parse.
    pub fn render_template(&self, template: &Template, args: &Arguments) -> Node {
        template.render(args, self.permissions.as_ref())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}
